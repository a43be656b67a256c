//! Level-directory loading.

use std::path::Path;

use crate::error::LevelError;
use crate::types::Level;

/// Loads every `.json` level file from `dir`, sorted by `(difficulty, id)`.
///
/// Files that fail to deserialize, or that deserialize with an empty `id`
/// or `name`, are skipped; the rest of the set still loads. A missing or
/// unreadable directory is an error.
pub fn load_levels(dir: &Path) -> Result<Vec<Level>, LevelError> {
    let mut levels = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(_) => continue,
        };
        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        let Ok(text) = std::fs::read_to_string(&path) else {
            continue;
        };
        match serde_json::from_str::<Level>(&text) {
            Ok(level) if !level.id.is_empty() && !level.name.is_empty() => levels.push(level),
            _ => continue,
        }
    }

    levels.sort_by(|a, b| {
        a.difficulty
            .cmp(&b.difficulty)
            .then_with(|| a.id.cmp(&b.id))
    });
    Ok(levels)
}

/// Finds one level by id in a loaded set.
pub fn find_level<'a>(levels: &'a [Level], id: &str) -> Result<&'a Level, LevelError> {
    levels
        .iter()
        .find(|level| level.id == id)
        .ok_or_else(|| LevelError::UnknownLevel { id: id.to_string() })
}
