//! `gatelab component` — inspect and manage the component library.

use crate::sim::load_library;
use crate::ComponentCommand;

/// Runs a `gatelab component` subcommand.
pub fn run(command: &ComponentCommand, quiet: bool) -> Result<i32, Box<dyn std::error::Error>> {
    match command {
        ComponentCommand::List { dir } => {
            let (library, dir) = load_library(dir.as_deref(), quiet)?;
            if library.is_empty() {
                println!("no components in {}", dir.display());
                return Ok(0);
            }
            for component in library.list_all() {
                println!(
                    "{:<20} {} in, {} out  {}",
                    component.name,
                    component.inputs.len(),
                    component.outputs.len(),
                    component.description
                );
            }
            Ok(0)
        }
        ComponentCommand::Show { name, dir } => {
            let (library, _) = load_library(dir.as_deref(), quiet)?;
            match library.get(name) {
                Some(component) => {
                    println!("Name: {}", component.name);
                    println!("Description: {}", component.description);
                    if let Some(author) = &component.author {
                        println!("Author: {author}");
                    }
                    if let Some(created) = &component.created {
                        println!("Created: {created}");
                    }
                    println!("Inputs: {}", component.inputs.join(", "));
                    println!("Outputs: {}", component.outputs.join(", "));
                    println!();
                    print!("{}", component.source);
                    Ok(0)
                }
                None => {
                    eprintln!("no component named '{name}'");
                    Ok(1)
                }
            }
        }
        ComponentCommand::Delete { name, dir } => {
            let (mut library, dir) = load_library(dir.as_deref(), quiet)?;
            library.delete(name, &dir)?;
            if !quiet {
                println!("deleted '{name}' from {}", dir.display());
            }
            Ok(0)
        }
    }
}
