//! Truth-table helpers: enumerate all input assignments.

use std::collections::BTreeMap;

use gatelab_common::Bit;

/// All 2^n assignments over the given input names, in counting order.
///
/// Bit `i` of the pass counter drives `names[i]`, so the first assignment
/// is all-zeros and the last is all-ones. Intended for small teaching
/// circuits; the result has `2^names.len()` entries.
pub fn all_assignments(names: &[String]) -> Vec<BTreeMap<String, Bit>> {
    let n = names.len();
    let mut assignments = Vec::with_capacity(1 << n);
    for mask in 0u64..(1u64 << n) {
        let assignment = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), Bit::from_u8(((mask >> i) & 1) as u8)))
            .collect();
        assignments.push(assignment);
    }
    assignments
}
