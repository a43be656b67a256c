//! gatelab CLI — the command-line interface to the gatelab engine.
//!
//! Provides `gatelab check` for syntax checking, `gatelab sim` and
//! `gatelab table` for simulation, `gatelab validate` for grading a
//! solution against a level, and `gatelab level` / `gatelab component`
//! for browsing exercises and the component library.
//!
//! Exit codes: 0 on success or a passing validation, 1 when a diagnostic
//! or validation failure was reported, 2 on I/O or usage errors.

#![warn(missing_docs)]

mod check;
mod component;
mod level;
mod sim;
mod table;
mod validate;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// gatelab — build small circuits, simulate them, grade them.
#[derive(Parser, Debug)]
#[command(name = "gatelab", version, about = "gatelab digital logic workbench")]
pub struct Cli {
    /// Suppress informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check an HDL file for syntax errors.
    Check(CheckArgs),
    /// Simulate an HDL file under one input assignment.
    Sim(SimArgs),
    /// Print an HDL file's full truth table.
    Table(TableArgs),
    /// Grade an HDL file against a level.
    Validate(ValidateArgs),
    /// Level operations.
    #[command(subcommand)]
    Level(LevelCommand),
    /// Component library operations.
    #[command(subcommand)]
    Component(ComponentCommand),
}

/// Arguments for `gatelab check`.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the HDL file.
    pub file: PathBuf,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for `gatelab sim`.
#[derive(Parser, Debug)]
pub struct SimArgs {
    /// Path to the HDL file.
    pub file: PathBuf,

    /// Input assignments, e.g. `--set a=1 --set b=0`. Unassigned inputs
    /// are low.
    #[arg(long = "set", value_name = "NAME=BIT")]
    pub assignments: Vec<String>,

    /// Component library directory (default: discovered).
    #[arg(long)]
    pub components: Option<PathBuf>,
}

/// Arguments for `gatelab table`.
#[derive(Parser, Debug)]
pub struct TableArgs {
    /// Path to the HDL file.
    pub file: PathBuf,

    /// Component library directory (default: discovered).
    #[arg(long)]
    pub components: Option<PathBuf>,
}

/// Arguments for `gatelab validate`.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the HDL file.
    pub file: PathBuf,

    /// Level id to grade against.
    #[arg(short, long)]
    pub level: String,

    /// Directory of level JSON files.
    #[arg(long, default_value = "levels")]
    pub levels_dir: PathBuf,

    /// Component library directory (default: discovered).
    #[arg(long)]
    pub components: Option<PathBuf>,
}

/// Level subcommands.
#[derive(Subcommand, Debug)]
pub enum LevelCommand {
    /// List the loaded levels in play order.
    List {
        /// Directory of level JSON files.
        #[arg(long, default_value = "levels")]
        levels_dir: PathBuf,
    },
}

/// Component library subcommands.
#[derive(Subcommand, Debug)]
pub enum ComponentCommand {
    /// List components in the library.
    List {
        /// Component library directory (default: discovered).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Show one component's metadata and HDL.
    Show {
        /// The component name.
        name: String,
        /// Component library directory (default: discovered).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Delete a component from the library.
    Delete {
        /// The component name.
        name: String,
        /// Component library directory (default: discovered).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check(ref args) => check::run(args),
        Command::Sim(ref args) => sim::run(args, cli.quiet),
        Command::Table(ref args) => table::run(args),
        Command::Validate(ref args) => validate::run(args, cli.quiet),
        Command::Level(ref command) => level::run(command),
        Command::Component(ref command) => component::run(command, cli.quiet),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}
