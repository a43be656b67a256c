//! Error types for component-library operations.

use gatelab_hdl::ParseError;
use std::io;

/// Errors produced while loading, validating, saving, or deleting
/// components.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// A filesystem operation failed.
    #[error("component I/O error: {0}")]
    Io(#[from] io::Error),

    /// A component's HDL body failed to parse.
    #[error("component '{name}' has invalid HDL: {source}")]
    InvalidHdl {
        /// The component name (or file stem when the header is absent).
        name: String,
        /// The underlying parse error.
        source: ParseError,
    },

    /// A component instantiates a part kind outside the closed universe.
    ///
    /// Permitted kinds are the universal NAND gate and components already
    /// accepted into the library.
    #[error("component '{name}' uses disallowed part kind '{kind}'")]
    ComponentRejected {
        /// The offending component name.
        name: String,
        /// The disallowed part kind, lower-cased.
        kind: String,
    },

    /// A component file is missing its `# Name:` metadata line.
    #[error("component file '{path}' has no '# Name:' metadata line")]
    MissingName {
        /// The file path, for the load report.
        path: String,
    },

    /// A saved component failed re-validation when the catalog reloaded.
    ///
    /// Happens when an overwrite introduces a reference that only resolved
    /// against the replaced version, e.g. a component naming itself.
    #[error("component '{name}' did not validate after reload; it references a name that is no longer resolvable")]
    NotAdmitted {
        /// The component that was written but not re-admitted.
        name: String,
    },

    /// An operation referenced a component not present in the library.
    #[error("no component named '{name}' in the library")]
    UnknownComponent {
        /// The requested component name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display() {
        let e = LibraryError::ComponentRejected {
            name: "bad_inv".into(),
            kind: "and".into(),
        };
        assert_eq!(
            e.to_string(),
            "component 'bad_inv' uses disallowed part kind 'and'"
        );
    }

    #[test]
    fn invalid_hdl_display() {
        let e = LibraryError::InvalidHdl {
            name: "inv".into(),
            source: ParseError::EmptySource,
        };
        assert!(e.to_string().contains("component 'inv' has invalid HDL"));
    }

    #[test]
    fn unknown_component_display() {
        let e = LibraryError::UnknownComponent { name: "inv".into() };
        assert_eq!(e.to_string(), "no component named 'inv' in the library");
    }

    #[test]
    fn io_error_converts() {
        let e: LibraryError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(e.to_string().contains("component I/O error"));
    }
}
