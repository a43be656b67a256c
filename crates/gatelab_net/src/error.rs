//! Error types for netlist construction.

/// Errors produced while building a [`Net`](crate::Net) from a program.
///
/// No partial net escapes on error: the builder either resolves every part
/// and wire or fails with one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A part's kind is neither a primitive gate nor a known component.
    #[error("unknown gate kind: {kind}")]
    UnknownGateKind {
        /// The kind as written in the program.
        kind: String,
    },

    /// A wire endpoint does not resolve to any allocated slot.
    #[error("unknown pin: {endpoint}")]
    UnknownPin {
        /// The endpoint text; instance-qualified when the failure is
        /// inside an expanded component.
        endpoint: String,
    },
}
