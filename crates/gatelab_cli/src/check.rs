//! `gatelab check` — syntax-check one HDL file.

use gatelab_check::check;

use crate::{CheckArgs, ReportFormat};

/// Runs the `gatelab check` command.
///
/// Returns exit code 0 when the file parses, 1 when a diagnostic was
/// reported.
pub fn run(args: &CheckArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(&args.file)?;

    match check(&source) {
        None => {
            if args.format == ReportFormat::Text {
                println!("{}: OK", args.file.display());
            }
            Ok(0)
        }
        Some(diagnostic) => {
            match args.format {
                ReportFormat::Text => {
                    eprintln!(
                        "{}:{}: {}",
                        args.file.display(),
                        diagnostic.line,
                        diagnostic.message
                    );
                    if !diagnostic.line_text.is_empty() {
                        eprintln!("    {}", diagnostic.line_text);
                    }
                }
                ReportFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&diagnostic)?);
                }
            }
            Ok(1)
        }
    }
}
