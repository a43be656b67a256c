//! The level validator: grades candidate HDL against an exercise.

use std::collections::BTreeSet;

use gatelab_common::Bit;
use gatelab_hdl::parse;
use gatelab_level::Level;
use gatelab_library::ComponentLibrary;
use gatelab_net::{build, build_with_library, BuildError};

use crate::diagnostic::{section_hint_for, Diagnostic};

/// The outcome of validating one candidate source against a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReport {
    /// Every check passed: the solution is structurally conforming and
    /// reproduces the whole truth table.
    Passed,
    /// Validation failed; the first failure encountered.
    Failed(ValidationFailure),
}

impl ValidationReport {
    /// Whether the candidate passed.
    pub fn passed(&self) -> bool {
        matches!(self, ValidationReport::Passed)
    }
}

/// Why a candidate failed validation.
///
/// Each variant carries what an interactive caller needs to render a
/// useful diagnostic; the engine computes no partial credit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    /// The source failed to parse or build.
    #[error("{}", .diagnostic.message)]
    Rejected {
        /// The localized parse or build diagnostic.
        diagnostic: Diagnostic,
    },

    /// The declared input names differ from the level's requirement.
    #[error("inputs {found:?} do not match required {expected:?}")]
    InputsMismatch {
        /// The level's required input-name set.
        expected: BTreeSet<String>,
        /// The candidate's declared input-name set.
        found: BTreeSet<String>,
    },

    /// The declared output names differ from the level's requirement.
    #[error("outputs {found:?} do not match required {expected:?}")]
    OutputsMismatch {
        /// The level's required output-name set.
        expected: BTreeSet<String>,
        /// The candidate's declared output-name set.
        found: BTreeSet<String>,
    },

    /// The candidate instantiates a gate kind outside the level's
    /// permitted set.
    #[error("gate kind '{kind}' is not allowed in this level")]
    DisallowedGate {
        /// The offending kind, lower-cased.
        kind: String,
    },

    /// A simulated output disagreed with the expected truth table.
    #[error("test vector {vector}: output '{name}' expected {expected}, got {}",
            .actual.map(|b| b.to_string()).unwrap_or_else(|| "no such output".into()))]
    WrongOutput {
        /// Zero-based index of the failing test vector.
        vector: usize,
        /// The output name that mismatched.
        name: String,
        /// The expected value.
        expected: Bit,
        /// The simulated value, or `None` when the expected name is not a
        /// declared output.
        actual: Option<Bit>,
    },
}

/// Validates candidate HDL against a level, with full failure detail.
///
/// Checks run in order: parse, I/O name sets (unordered comparison),
/// permitted gate kinds, netlist build, then every test vector. Passing a
/// library allows solutions to instantiate custom components, which the
/// level must still permit by listing the component name in
/// `available_gates`.
pub fn validate_detailed(
    level: &Level,
    src: &str,
    library: Option<&ComponentLibrary>,
) -> ValidationReport {
    let program = match parse(src) {
        Ok(program) => program,
        Err(err) => {
            let hint = section_hint_for(&err);
            return ValidationReport::Failed(ValidationFailure::Rejected {
                diagnostic: Diagnostic::locate(src, err.to_string(), err.fragment(), hint),
            });
        }
    };

    let found_inputs: BTreeSet<String> = program.inputs.iter().cloned().collect();
    let expected_inputs: BTreeSet<String> = level.inputs.iter().cloned().collect();
    if found_inputs != expected_inputs {
        return ValidationReport::Failed(ValidationFailure::InputsMismatch {
            expected: expected_inputs,
            found: found_inputs,
        });
    }

    let found_outputs: BTreeSet<String> = program.outputs.iter().cloned().collect();
    let expected_outputs: BTreeSet<String> = level.outputs.iter().cloned().collect();
    if found_outputs != expected_outputs {
        return ValidationReport::Failed(ValidationFailure::OutputsMismatch {
            expected: expected_outputs,
            found: found_outputs,
        });
    }

    let permitted: BTreeSet<String> = level
        .available_gates
        .iter()
        .map(|kind| kind.to_ascii_lowercase())
        .collect();
    for part in &program.parts {
        let kind = part.kind.to_ascii_lowercase();
        if !permitted.contains(&kind) {
            return ValidationReport::Failed(ValidationFailure::DisallowedGate { kind });
        }
    }

    let built = match library {
        Some(library) => build_with_library(&program, library),
        None => build(&program),
    };
    let mut net = match built {
        Ok(net) => net,
        Err(err) => {
            let (fragment, hint) = match &err {
                BuildError::UnknownGateKind { kind } => (kind.clone(), "parts"),
                BuildError::UnknownPin { endpoint } => (endpoint.clone(), "wires"),
            };
            return ValidationReport::Failed(ValidationFailure::Rejected {
                diagnostic: Diagnostic::locate(src, err.to_string(), Some(&fragment), Some(hint)),
            });
        }
    };

    for (index, vector) in level.expected.iter().enumerate() {
        let outputs = net.simulate(&vector.inputs);
        for (name, expected) in &vector.outputs {
            let actual = outputs.get(name).copied();
            if actual != Some(*expected) {
                return ValidationReport::Failed(ValidationFailure::WrongOutput {
                    vector: index,
                    name: name.clone(),
                    expected: *expected,
                    actual,
                });
            }
        }
    }

    ValidationReport::Passed
}

/// Validates candidate HDL against a level, primitives only.
pub fn validate(level: &Level, src: &str) -> bool {
    validate_detailed(level, src, None).passed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatelab_level::Level;

    fn and_level() -> Level {
        serde_json::from_str(
            r#"{
            "id": "and-from-nand",
            "name": "AND from NAND",
            "difficulty": 2,
            "available_gates": ["nand"],
            "inputs": ["a", "b"],
            "outputs": ["out"],
            "expected": [
                {"in": {"a": 0, "b": 0}, "out": {"out": 0}},
                {"in": {"a": 0, "b": 1}, "out": {"out": 0}},
                {"in": {"a": 1, "b": 0}, "out": {"out": 0}},
                {"in": {"a": 1, "b": 1}, "out": {"out": 1}}
            ]
        }"#,
        )
        .unwrap()
    }

    const AND_FROM_NAND: &str = "Inputs: a, b;\nOutputs: out;\n\
        Parts: g1:nand, g2:nand;\n\
        Wires: a->g1.in1, b->g1.in2, g1.out->g2.in1, g1.out->g2.in2, g2.out->out;\n";

    #[test]
    fn correct_solution_passes() {
        assert!(validate(&and_level(), AND_FROM_NAND));
    }

    #[test]
    fn flipped_expectation_fails() {
        let mut level = and_level();
        let flipped = level.expected[3].outputs["out"];
        level.expected[3]
            .outputs
            .insert("out".into(), !flipped);
        let report = validate_detailed(&level, AND_FROM_NAND, None);
        match report {
            ValidationReport::Failed(ValidationFailure::WrongOutput { vector, .. }) => {
                assert_eq!(vector, 3)
            }
            other => panic!("expected WrongOutput, got {other:?}"),
        }
    }

    #[test]
    fn wrong_input_names_fail() {
        let src = "Inputs: x, y;\nOutputs: out;\nWires: x->out;\n";
        let report = validate_detailed(&and_level(), src, None);
        assert!(matches!(
            report,
            ValidationReport::Failed(ValidationFailure::InputsMismatch { .. })
        ));
    }

    #[test]
    fn wrong_output_names_fail() {
        let src = "Inputs: a, b;\nOutputs: result;\nWires: a->result;\n";
        let report = validate_detailed(&and_level(), src, None);
        assert!(matches!(
            report,
            ValidationReport::Failed(ValidationFailure::OutputsMismatch { .. })
        ));
    }

    #[test]
    fn disallowed_gate_fails_before_simulation() {
        // A perfectly correct AND, but the level only allows NAND.
        let src = "Inputs: a, b;\nOutputs: out;\nParts: g:and;\n\
                   Wires: a->g.in1, b->g.in2, g.out->out;\n";
        let report = validate_detailed(&and_level(), src, None);
        assert_eq!(
            report,
            ValidationReport::Failed(ValidationFailure::DisallowedGate { kind: "and".into() })
        );
    }

    #[test]
    fn gate_check_is_case_insensitive() {
        let src = "Inputs: a, b;\nOutputs: out;\n\
                   Parts: g1:NAND, g2:Nand;\n\
                   Wires: a->g1.in1, b->g1.in2, g1.out->g2.in1, g1.out->g2.in2, g2.out->out;\n";
        assert!(validate(&and_level(), src));
    }

    #[test]
    fn parse_error_reported_as_rejection() {
        let report = validate_detailed(&and_level(), "Inputs: a, b;", None);
        assert!(matches!(
            report,
            ValidationReport::Failed(ValidationFailure::Rejected { .. })
        ));
    }

    #[test]
    fn build_error_reported_with_location() {
        let src = "Inputs: a, b;\nOutputs: out;\nParts: g:nand;\n\
                   Wires: a->g.in1, b->g.in2, g.zap->out;\n";
        let report = validate_detailed(&and_level(), src, None);
        match report {
            ValidationReport::Failed(ValidationFailure::Rejected { diagnostic }) => {
                assert_eq!(diagnostic.line, 4);
                assert!(diagnostic.message.contains("g.zap"));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn expected_name_outside_outputs_fails_vector() {
        let mut level = and_level();
        level.expected[0]
            .outputs
            .insert("phantom".into(), gatelab_common::Bit::Zero);
        let report = validate_detailed(&level, AND_FROM_NAND, None);
        match report {
            ValidationReport::Failed(ValidationFailure::WrongOutput { name, actual, .. }) => {
                assert_eq!(name, "phantom");
                assert_eq!(actual, None);
            }
            other => panic!("expected WrongOutput, got {other:?}"),
        }
    }

    #[test]
    fn failure_messages_render() {
        let failure = ValidationFailure::DisallowedGate { kind: "or".into() };
        assert_eq!(failure.to_string(), "gate kind 'or' is not allowed in this level");

        let failure = ValidationFailure::WrongOutput {
            vector: 2,
            name: "out".into(),
            expected: gatelab_common::Bit::One,
            actual: Some(gatelab_common::Bit::Zero),
        };
        assert_eq!(
            failure.to_string(),
            "test vector 2: output 'out' expected 1, got 0"
        );
    }
}
