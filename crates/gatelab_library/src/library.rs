//! The [`ComponentLibrary`] service: catalog loading, validation,
//! persistence, and the closed-universe rule.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::component::Component;
use crate::error::LibraryError;

/// The single primitive gate custom components are allowed to instantiate.
pub const UNIVERSAL_GATE: &str = "nand";

/// What happened during a directory load: which components were accepted
/// and which files were skipped, with the reason.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Names of components accepted into the library, in acceptance order.
    pub loaded: Vec<String>,
    /// Files that were skipped, with a human-readable reason each.
    pub skipped: Vec<(PathBuf, String)>,
}

/// An in-memory catalog of validated components, keyed case-insensitively
/// by name, backed by a directory of `.hdl` files.
///
/// The library is an explicitly passed service: every filesystem operation
/// takes the directory as a parameter. Callers serialize save/delete/load;
/// the library is not designed for concurrent writers.
#[derive(Debug, Default)]
pub struct ComponentLibrary {
    /// Accepted components, keyed by lower-cased name.
    components: BTreeMap<String, Component>,
}

impl ComponentLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers the default components directory.
    ///
    /// Tries, in order: a `components` directory next to the executable's
    /// parent directory, a `components` directory under the current
    /// working directory, and `$HOME/.gatelab/components` (created if
    /// absent). Falls back to the relative path `components`.
    pub fn default_dir() -> PathBuf {
        if let Ok(exe) = std::env::current_exe() {
            if let Some(root) = exe.parent().and_then(Path::parent) {
                let candidate = root.join("components");
                if candidate.exists() {
                    return candidate;
                }
            }
        }

        let local = PathBuf::from("components");
        if local.exists() {
            return local;
        }

        if let Ok(home) = std::env::var("HOME") {
            let fallback = PathBuf::from(home).join(".gatelab").join("components");
            if !fallback.exists() {
                let _ = std::fs::create_dir_all(&fallback);
            }
            return fallback;
        }

        local
    }

    /// Loads all `.hdl` component files from `dir`, replacing the current
    /// catalog.
    ///
    /// Acceptance runs to a fixpoint: each round admits every candidate
    /// whose part kinds are all the universal gate or already-admitted
    /// component names, so legitimate dependency chains load regardless of
    /// directory iteration order. Files that never validate (malformed
    /// HDL, forbidden primitives, unknown or cyclic references) are
    /// skipped and reported; the rest of the catalog still loads. A
    /// missing directory is created and yields an empty catalog.
    pub fn load(&mut self, dir: &Path) -> Result<LoadReport, LibraryError> {
        self.components.clear();
        let mut report = LoadReport::default();

        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
            return Ok(report);
        }

        let mut candidates: Vec<(PathBuf, Component)> = Vec::new();
        let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "hdl"))
            .collect();
        entries.sort();

        for path in entries {
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    report.skipped.push((path, e.to_string()));
                    continue;
                }
            };
            match Component::from_file_text(&text, &path.to_string_lossy()) {
                Ok(component) => candidates.push((path, component)),
                Err(e) => report.skipped.push((path, e.to_string())),
            }
        }

        // Admit candidates until a round makes no progress. A component is
        // admitted only once everything it references is already in, which
        // keeps self- and mutual references out of the catalog.
        loop {
            let mut progressed = false;
            let mut deferred = Vec::new();
            for (path, component) in candidates {
                match self.validate(&component) {
                    Ok(()) => {
                        report.loaded.push(component.name.clone());
                        self.insert(component);
                        progressed = true;
                    }
                    Err(_) => deferred.push((path, component)),
                }
            }
            candidates = deferred;
            if !progressed {
                break;
            }
        }

        for (path, component) in candidates {
            let reason = match self.validate(&component) {
                Ok(()) => "not admitted".to_string(),
                Err(e) => e.to_string(),
            };
            report.skipped.push((path, reason));
        }

        Ok(report)
    }

    /// Validates and saves a component to `dir`, then reloads the catalog
    /// so later components can depend on it.
    ///
    /// Stamps the `# Created:` metadata line with the current local time
    /// when the component does not already carry one.
    pub fn save(&mut self, component: &Component, dir: &Path) -> Result<(), LibraryError> {
        self.validate(component)?;

        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }

        let mut stamped = component.clone();
        if stamped.created.is_none() {
            stamped.created = Some(
                chrono::Local::now()
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
            );
        }

        let path = dir.join(format!("{}.hdl", stamped.name));
        std::fs::write(path, stamped.to_file_text())?;

        self.load(dir)?;
        if !self.has(&stamped.name) {
            return Err(LibraryError::NotAdmitted { name: stamped.name });
        }
        Ok(())
    }

    /// Deletes a component's backing file and removes it from the catalog.
    ///
    /// Nets already built from the component stay valid; they hold no
    /// reference back into the library.
    pub fn delete(&mut self, name: &str, dir: &Path) -> Result<(), LibraryError> {
        let key = name.to_ascii_lowercase();
        let component = self
            .components
            .get(&key)
            .ok_or_else(|| LibraryError::UnknownComponent {
                name: name.to_string(),
            })?;

        let path = dir.join(format!("{}.hdl", component.name));
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        self.components.remove(&key);
        Ok(())
    }

    /// Looks up a component by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(&name.to_ascii_lowercase())
    }

    /// Returns whether a component with this name is in the catalog.
    pub fn has(&self, name: &str) -> bool {
        self.components.contains_key(&name.to_ascii_lowercase())
    }

    /// All components, sorted by (lower-cased) name.
    pub fn list_all(&self) -> Vec<&Component> {
        self.components.values().collect()
    }

    /// Number of components in the catalog.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Checks the closed-universe rule against the current catalog.
    ///
    /// Every part kind, lower-cased, must be the universal gate or an
    /// already-accepted component name. Other built-in primitives and
    /// unknown names are rejected, including the component's own name,
    /// which is never in the catalog while it is being validated.
    pub fn validate(&self, component: &Component) -> Result<(), LibraryError> {
        for part in &component.program.parts {
            let kind = part.kind.to_ascii_lowercase();
            if kind == UNIVERSAL_GATE || self.has(&kind) {
                continue;
            }
            return Err(LibraryError::ComponentRejected {
                name: component.name.clone(),
                kind,
            });
        }
        Ok(())
    }

    fn insert(&mut self, component: Component) {
        self.components
            .insert(component.name.to_ascii_lowercase(), component);
    }
}
