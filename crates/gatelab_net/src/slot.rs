//! Signal-slot keys for the flat net arena.
//!
//! Every signal in a net (primary input, primary output, or a part's pin)
//! is one slot in a single owned table, keyed by a [`SlotKey`]. Fan-out
//! edges are key-to-key-list pairs. This keeps the net free of cyclic
//! ownership: there are no references between slots, only keys.

use std::fmt;

/// A stable key identifying one signal slot in a [`Net`](crate::Net).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotKey {
    /// A primary input, rendered `input:<name>`.
    Input(String),
    /// A primary output, rendered `output:<name>`.
    Output(String),
    /// A part's pin, rendered `part:<part>.<pin>`. For expanded components
    /// the part name is instance-qualified, e.g. `half/g1`.
    Pin {
        /// The part instance name.
        part: String,
        /// The pin name.
        pin: String,
    },
}

impl SlotKey {
    /// Key for the primary input `name`.
    pub fn input(name: impl Into<String>) -> Self {
        SlotKey::Input(name.into())
    }

    /// Key for the primary output `name`.
    pub fn output(name: impl Into<String>) -> Self {
        SlotKey::Output(name.into())
    }

    /// Key for pin `pin` on part `part`.
    pub fn pin(part: impl Into<String>, pin: impl Into<String>) -> Self {
        SlotKey::Pin {
            part: part.into(),
            pin: pin.into(),
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKey::Input(name) => write!(f, "input:{name}"),
            SlotKey::Output(name) => write!(f, "output:{name}"),
            SlotKey::Pin { part, pin } => write!(f, "part:{part}.{pin}"),
        }
    }
}
