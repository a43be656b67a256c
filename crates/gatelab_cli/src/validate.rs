//! `gatelab validate` — grade a solution against a level.

use gatelab_check::{validate_detailed, ValidationFailure, ValidationReport};
use gatelab_level::{find_level, load_levels};

use crate::sim::load_library;
use crate::ValidateArgs;

/// Runs the `gatelab validate` command.
///
/// Returns exit code 0 when the solution passes the level, 1 when it
/// fails any check.
pub fn run(args: &ValidateArgs, quiet: bool) -> Result<i32, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(&args.file)?;
    let levels = load_levels(&args.levels_dir)?;
    let level = find_level(&levels, &args.level)?;

    let (library, _) = load_library(args.components.as_deref(), quiet)?;

    match validate_detailed(level, &source, Some(&library)) {
        ValidationReport::Passed => {
            if !quiet {
                println!("PASS: {} solves '{}'", args.file.display(), level.name);
            }
            Ok(0)
        }
        ValidationReport::Failed(failure) => {
            eprintln!("FAIL: {failure}");
            if let ValidationFailure::Rejected { diagnostic } = &failure {
                eprintln!(
                    "    {}:{}: {}",
                    args.file.display(),
                    diagnostic.line,
                    diagnostic.line_text
                );
            }
            Ok(1)
        }
    }
}
