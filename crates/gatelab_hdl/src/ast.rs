//! AST node types for the gatelab HDL parser.
//!
//! A [`Program`] is the immutable result of parsing one HDL source. It
//! records declaration order; name resolution happens later in the netlist
//! builder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed HDL program: declared inputs/outputs, instantiated parts, and
/// directed wires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Declared primary input names, in declaration order, duplicates removed.
    pub inputs: Vec<String>,
    /// Declared primary output names, in declaration order, duplicates removed.
    pub outputs: Vec<String>,
    /// Instantiated parts, in declaration order.
    pub parts: Vec<Part>,
    /// Directed wires, in declaration order.
    pub wires: Vec<Wire>,
}

/// An instantiated part: a named instance of a gate kind or component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Instance name, unique within the program.
    pub name: String,
    /// Gate or component kind, matched case-insensitively.
    pub kind: String,
}

/// A directed wire from a source endpoint to a destination endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire {
    /// The driving endpoint.
    pub src: Endpoint,
    /// The driven endpoint.
    pub dst: Endpoint,
}

/// One end of a wire: either a bare primary-I/O name or a `part.pin`
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// A bare name referring to a primary input (as source) or primary
    /// output (as destination).
    Named(String),
    /// A `part.pin` reference, split on the first `.`.
    Pin {
        /// The part instance name.
        part: String,
        /// The pin name on that part.
        pin: String,
    },
}

impl Endpoint {
    /// Parses an endpoint from its source form, splitting on the first `.`.
    pub fn from_text(text: &str) -> Self {
        match text.split_once('.') {
            Some((part, pin)) => Endpoint::Pin {
                part: part.to_string(),
                pin: pin.to_string(),
            },
            None => Endpoint::Named(text.to_string()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Named(name) => write!(f, "{name}"),
            Endpoint::Pin { part, pin } => write!(f, "{part}.{pin}"),
        }
    }
}

impl Program {
    /// Re-serializes the program as HDL section text.
    ///
    /// The output parses back to an equal `Program` (formatting such as
    /// comments and line breaks is not preserved).
    pub fn section_text(&self) -> String {
        let parts: Vec<String> = self
            .parts
            .iter()
            .map(|p| format!("{}:{}", p.name, p.kind))
            .collect();
        let wires: Vec<String> = self
            .wires
            .iter()
            .map(|w| format!("{}->{}", w.src, w.dst))
            .collect();
        format!(
            "Inputs: {};\nOutputs: {};\nParts: {};\nWires: {};\n",
            self.inputs.join(", "),
            self.outputs.join(", "),
            parts.join(", "),
            wires.join(", "),
        )
    }
}
