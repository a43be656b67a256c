//! `gatelab table` — print a circuit's full truth table.

use gatelab_hdl::parse;
use gatelab_net::{all_assignments, build_with_library};

use crate::sim::load_library;
use crate::TableArgs;

/// Runs the `gatelab table` command.
pub fn run(args: &TableArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(&args.file)?;

    let program = match parse(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}: {e}", args.file.display());
            return Ok(1);
        }
    };

    let (library, _) = load_library(args.components.as_deref(), true)?;
    let mut net = match build_with_library(&program, &library) {
        Ok(net) => net,
        Err(e) => {
            eprintln!("{}: {e}", args.file.display());
            return Ok(1);
        }
    };

    let header: Vec<&str> = program
        .inputs
        .iter()
        .chain(program.outputs.iter())
        .map(String::as_str)
        .collect();
    println!("{}", header.join(" "));

    for assignment in all_assignments(&program.inputs) {
        let outputs = net.simulate(&assignment);
        let row: Vec<String> = program
            .inputs
            .iter()
            .map(|name| assignment[name].to_string())
            .chain(
                program
                    .outputs
                    .iter()
                    .map(|name| outputs[name].to_string()),
            )
            .collect();
        println!("{}", row.join(" "));
    }
    Ok(0)
}
