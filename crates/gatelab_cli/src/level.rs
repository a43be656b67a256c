//! `gatelab level` — browse the loaded level set.

use gatelab_level::load_levels;

use crate::LevelCommand;

/// Runs a `gatelab level` subcommand.
pub fn run(command: &LevelCommand) -> Result<i32, Box<dyn std::error::Error>> {
    match command {
        LevelCommand::List { levels_dir } => {
            let levels = load_levels(levels_dir)?;
            if levels.is_empty() {
                println!("no levels found in {}", levels_dir.display());
                return Ok(0);
            }
            for level in &levels {
                println!(
                    "{:<20} difficulty {:<2} {} ({} vectors)",
                    level.id,
                    level.difficulty,
                    level.name,
                    level.expected.len()
                );
            }
            Ok(0)
        }
    }
}
