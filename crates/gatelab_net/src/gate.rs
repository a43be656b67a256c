//! The primitive gate library: a closed table of built-in boolean gates.
//!
//! Process-wide, read-only, constructed once at compile time. Custom
//! components are not gates; they are expanded into these primitives by
//! the netlist builder.

use gatelab_common::Bit;

/// A built-in gate kind with a fixed pin signature and pure transfer
/// function.
///
/// NOT takes one input pin `in`; the two-input gates take `in1` and `in2`.
/// Every kind drives a single output pin `out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Inverter: `out = !in`.
    Not,
    /// Conjunction: `out = in1 & in2`.
    And,
    /// Disjunction: `out = in1 | in2`.
    Or,
    /// Exclusive or: `out = in1 ^ in2`.
    Xor,
    /// Negated conjunction: `out = !(in1 & in2)`.
    Nand,
    /// Negated disjunction: `out = !(in1 | in2)`.
    Nor,
}

impl GateKind {
    /// Every primitive kind, in table order.
    pub const ALL: [GateKind; 6] = [
        GateKind::Not,
        GateKind::And,
        GateKind::Or,
        GateKind::Xor,
        GateKind::Nand,
        GateKind::Nor,
    ];

    /// Looks up a gate kind by name, case-insensitively.
    pub fn lookup(name: &str) -> Option<GateKind> {
        match name.to_ascii_lowercase().as_str() {
            "not" => Some(GateKind::Not),
            "and" => Some(GateKind::And),
            "or" => Some(GateKind::Or),
            "xor" => Some(GateKind::Xor),
            "nand" => Some(GateKind::Nand),
            "nor" => Some(GateKind::Nor),
            _ => None,
        }
    }

    /// The canonical lower-case name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            GateKind::Not => "not",
            GateKind::And => "and",
            GateKind::Or => "or",
            GateKind::Xor => "xor",
            GateKind::Nand => "nand",
            GateKind::Nor => "nor",
        }
    }

    /// Ordered input pin names.
    pub fn input_pins(self) -> &'static [&'static str] {
        match self {
            GateKind::Not => &["in"],
            _ => &["in1", "in2"],
        }
    }

    /// Ordered output pin names.
    pub fn output_pins(self) -> &'static [&'static str] {
        &["out"]
    }

    /// Evaluates the gate against input values ordered as
    /// [`input_pins`](Self::input_pins). Missing trailing inputs read as
    /// zero.
    pub fn eval(self, inputs: &[Bit]) -> Bit {
        let a = inputs.first().copied().unwrap_or_default();
        let b = inputs.get(1).copied().unwrap_or_default();
        match self {
            GateKind::Not => !a,
            GateKind::And => a & b,
            GateKind::Or => a | b,
            GateKind::Xor => a ^ b,
            GateKind::Nand => !(a & b),
            GateKind::Nor => !(a | b),
        }
    }
}
