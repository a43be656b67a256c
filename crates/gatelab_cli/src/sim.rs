//! `gatelab sim` — simulate one HDL file under one input assignment.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use gatelab_common::Bit;
use gatelab_hdl::parse;
use gatelab_library::ComponentLibrary;
use gatelab_net::build_with_library;

use crate::SimArgs;

/// Runs the `gatelab sim` command.
pub fn run(args: &SimArgs, quiet: bool) -> Result<i32, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(&args.file)?;

    let program = match parse(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}: {e}", args.file.display());
            return Ok(1);
        }
    };

    let (library, _) = load_library(args.components.as_deref(), quiet)?;
    let mut net = match build_with_library(&program, &library) {
        Ok(net) => net,
        Err(e) => {
            eprintln!("{}: {e}", args.file.display());
            return Ok(1);
        }
    };

    let mut assignment = BTreeMap::new();
    for entry in &args.assignments {
        let (name, value) = parse_assignment(entry)?;
        assignment.insert(name, value);
    }

    let outputs = net.simulate(&assignment);
    for (name, value) in &outputs {
        println!("{name} = {value}");
    }
    Ok(0)
}

/// Loads the component library from an explicit or discovered directory,
/// reporting which directory was used.
pub fn load_library(
    dir: Option<&Path>,
    quiet: bool,
) -> Result<(ComponentLibrary, PathBuf), Box<dyn std::error::Error>> {
    let dir: PathBuf = match dir {
        Some(dir) => dir.to_path_buf(),
        None => ComponentLibrary::default_dir(),
    };
    let mut library = ComponentLibrary::new();
    let report = library.load(&dir)?;
    if !quiet {
        for (path, reason) in &report.skipped {
            eprintln!("warning: skipped component {}: {reason}", path.display());
        }
    }
    Ok((library, dir))
}

/// Parses a `name=bit` assignment argument.
pub fn parse_assignment(entry: &str) -> Result<(String, Bit), String> {
    let (name, value) = entry
        .split_once('=')
        .ok_or_else(|| format!("assignment '{entry}' is not of the form name=bit"))?;
    let bit = match value.trim() {
        "0" => Bit::Zero,
        "1" => Bit::One,
        other => return Err(format!("assignment value '{other}' must be 0 or 1")),
    };
    Ok((name.trim().to_string(), bit))
}
