//! The evaluatable net and its bounded fixpoint simulation.

use std::collections::BTreeMap;

use gatelab_common::Bit;

use crate::gate::GateKind;
use crate::slot::SlotKey;

/// Upper bound on simulation passes.
///
/// Combinational circuits settle in passes proportional to their longest
/// gate path, so this caps only pathological feedback loops.
pub const MAX_PASSES: usize = 64;

/// An evaluatable circuit instance: one flat slot arena, the gate-bearing
/// parts, and fan-out edges.
///
/// A net is built fresh per simulation request and exclusively owned by
/// its caller; simulation mutates only the net's own slot values.
#[derive(Debug, Clone, Default)]
pub struct Net {
    /// Current value of every signal slot.
    pub(crate) values: BTreeMap<SlotKey, Bit>,
    /// Gate-bearing part name (instance-qualified for expanded components)
    /// to its primitive gate.
    pub(crate) gates: BTreeMap<String, GateKind>,
    /// Driving slot to the slots it feeds.
    pub(crate) fanout: BTreeMap<SlotKey, Vec<SlotKey>>,
    /// Declared primary output names, in declaration order.
    pub(crate) outputs: Vec<String>,
}

impl Net {
    /// Drives the net to a steady state under the given input assignment
    /// and returns the primary output values.
    ///
    /// The assignment may cover any subset of the declared inputs; slots
    /// not assigned keep their prior value, and names that are not
    /// declared inputs are ignored. Each pass evaluates every gate and
    /// then propagates every fan-out edge; the loop stops when a pass
    /// changes nothing or after [`MAX_PASSES`] passes. Hitting the bound
    /// returns the current (possibly non-settled) values; circuits with
    /// feedback do not hang, they read back whatever the final pass left.
    pub fn simulate(&mut self, assignment: &BTreeMap<String, Bit>) -> BTreeMap<String, Bit> {
        for (name, value) in assignment {
            if let Some(slot) = self.values.get_mut(&SlotKey::input(name.clone())) {
                *slot = *value;
            }
        }

        let mut passes = 0;
        let mut changed = true;
        while changed && passes < MAX_PASSES {
            changed = false;
            passes += 1;

            for (name, gate) in &self.gates {
                let inputs: Vec<Bit> = gate
                    .input_pins()
                    .iter()
                    .map(|pin| {
                        self.values
                            .get(&SlotKey::pin(name.clone(), *pin))
                            .copied()
                            .unwrap_or_default()
                    })
                    .collect();
                let result = gate.eval(&inputs);
                for pin in gate.output_pins() {
                    let key = SlotKey::pin(name.clone(), *pin);
                    if let Some(slot) = self.values.get_mut(&key) {
                        if *slot != result {
                            *slot = result;
                            changed = true;
                        }
                    }
                }
            }

            for (src, dsts) in &self.fanout {
                let value = self.values.get(src).copied().unwrap_or_default();
                for dst in dsts {
                    if let Some(slot) = self.values.get_mut(dst) {
                        if *slot != value {
                            *slot = value;
                            changed = true;
                        }
                    }
                }
            }
        }

        self.outputs
            .iter()
            .map(|name| {
                let value = self
                    .values
                    .get(&SlotKey::output(name.clone()))
                    .copied()
                    .unwrap_or_default();
                (name.clone(), value)
            })
            .collect()
    }

    /// Reads the current value of a slot, if it exists.
    pub fn value(&self, key: &SlotKey) -> Option<Bit> {
        self.values.get(key).copied()
    }

    /// The declared primary output names.
    pub fn output_names(&self) -> &[String] {
        &self.outputs
    }

    /// Number of signal slots in the arena.
    pub fn slot_count(&self) -> usize {
        self.values.len()
    }

    /// Number of gate-bearing parts (after component expansion).
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }
}
