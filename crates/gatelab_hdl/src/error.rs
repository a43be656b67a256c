//! Parse error types for the HDL front end.
//!
//! Every variant carries the offending fragment text so the syntax checker
//! can locate the source line it came from.

/// Errors produced while parsing HDL source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A `Parts` entry is missing its `name:kind` separator.
    #[error("malformed part entry: {fragment}")]
    MalformedPart {
        /// The offending comma-separated fragment, trimmed.
        fragment: String,
    },

    /// A `Wires` entry is missing its `src->dst` separator.
    #[error("malformed wire entry: {fragment}")]
    MalformedWire {
        /// The offending comma-separated fragment, trimmed.
        fragment: String,
    },

    /// The source declares no inputs and no outputs (or is empty).
    #[error("empty HDL source: no inputs or outputs declared")]
    EmptySource,
}

impl ParseError {
    /// The offending fragment text, if this error carries one.
    pub fn fragment(&self) -> Option<&str> {
        match self {
            ParseError::MalformedPart { fragment } | ParseError::MalformedWire { fragment } => {
                Some(fragment)
            }
            ParseError::EmptySource => None,
        }
    }
}
