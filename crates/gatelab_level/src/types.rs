//! The level schema: required I/O, permitted gates, expected truth table.

use std::collections::BTreeMap;

use gatelab_common::Bit;
use serde::{Deserialize, Serialize};

/// One exercise: a circuit the student must implement under constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Stable identifier, unique across the level set.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Prose description of the exercise.
    #[serde(default)]
    pub description: String,
    /// Difficulty rank; levels are presented in ascending order.
    #[serde(default)]
    pub difficulty: u32,
    /// Gate kinds a solution may instantiate, lower-case.
    #[serde(default)]
    pub available_gates: Vec<String>,
    /// Input names a solution must declare (as an unordered set).
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Output names a solution must declare (as an unordered set).
    #[serde(default)]
    pub outputs: Vec<String>,
    /// The truth table the solution must reproduce, vector by vector.
    #[serde(default)]
    pub expected: Vec<TestVector>,
}

/// One row of a level's truth table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    /// Input assignment for this row.
    #[serde(rename = "in")]
    pub inputs: BTreeMap<String, Bit>,
    /// Expected output values for this row.
    #[serde(rename = "out")]
    pub outputs: BTreeMap<String, Bit>,
}
