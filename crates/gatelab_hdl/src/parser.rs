//! HDL parser: section fragments to a [`Program`].
//!
//! Parsing is pure and total over the section text: it inspects no global
//! state and either returns a `Program` or a [`ParseError`] carrying the
//! offending fragment.

use crate::ast::{Endpoint, Part, Program, Wire};
use crate::error::ParseError;
use crate::section::sectioned;

/// Parses HDL source text into a [`Program`].
///
/// Comment stripping and section location happen first (see
/// [`sectioned`](crate::section::sectioned)); each section is then split on
/// commas. `Inputs`/`Outputs` entries are trimmed names with blanks and
/// duplicates dropped; `Parts` entries are `name:kind` pairs; `Wires`
/// entries are `src->dst` pairs. A source that declares no inputs or no
/// outputs is rejected with [`ParseError::EmptySource`].
pub fn parse(src: &str) -> Result<Program, ParseError> {
    let sections = sectioned(src);

    let inputs = name_list(&sections.inputs);
    let outputs = name_list(&sections.outputs);
    if inputs.is_empty() || outputs.is_empty() {
        return Err(ParseError::EmptySource);
    }

    let mut parts = Vec::new();
    for entry in split_list(&sections.parts) {
        let (name, kind) = entry
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedPart {
                fragment: entry.clone(),
            })?;
        parts.push(Part {
            name: name.trim().to_string(),
            kind: kind.trim().to_string(),
        });
    }

    let mut wires = Vec::new();
    for entry in split_list(&sections.wires) {
        let (src, dst) = entry
            .split_once("->")
            .ok_or_else(|| ParseError::MalformedWire {
                fragment: entry.clone(),
            })?;
        wires.push(Wire {
            src: Endpoint::from_text(src.trim()),
            dst: Endpoint::from_text(dst.trim()),
        });
    }

    Ok(Program {
        inputs,
        outputs,
        parts,
        wires,
    })
}

/// Splits a section fragment on commas, trimming entries and dropping blanks.
fn split_list(fragment: &str) -> Vec<String> {
    fragment
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// A comma-separated name list with duplicates dropped, first occurrence wins.
fn name_list(fragment: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in split_list(fragment) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_half_adder() {
        let src = "Inputs: a, b;\nOutputs: s, c;\nParts: g1:xor, g2:and;\n\
                   Wires: a->g1.in1, b->g1.in2, g1.out->s, a->g2.in1, b->g2.in2, g2.out->c;";
        let p = parse(src).unwrap();
        assert_eq!(p.inputs, vec!["a", "b"]);
        assert_eq!(p.outputs, vec!["s", "c"]);
        assert_eq!(p.parts.len(), 2);
        assert_eq!(p.parts[0].name, "g1");
        assert_eq!(p.parts[0].kind, "xor");
        assert_eq!(p.wires.len(), 6);
        assert_eq!(
            p.wires[2],
            Wire {
                src: Endpoint::Pin {
                    part: "g1".into(),
                    pin: "out".into()
                },
                dst: Endpoint::Named("s".into()),
            }
        );
    }

    #[test]
    fn pass_through_without_parts() {
        let p = parse("Inputs: a; Outputs: y; Wires: a->y;").unwrap();
        assert!(p.parts.is_empty());
        assert_eq!(p.wires.len(), 1);
    }

    #[test]
    fn duplicate_and_blank_names_dropped() {
        let p = parse("Inputs: a, , a, b; Outputs: y, y;").unwrap();
        assert_eq!(p.inputs, vec!["a", "b"]);
        assert_eq!(p.outputs, vec!["y"]);
    }

    #[test]
    fn malformed_part_carries_fragment() {
        let err = parse("Inputs: a; Outputs: y; Parts: g1 nand;").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedPart {
                fragment: "g1 nand".into()
            }
        );
    }

    #[test]
    fn malformed_wire_carries_fragment() {
        let err = parse("Inputs: a; Outputs: y; Wires: a y;").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedWire {
                fragment: "a y".into()
            }
        );
    }

    #[test]
    fn empty_source_rejected() {
        assert_eq!(parse("").unwrap_err(), ParseError::EmptySource);
        assert_eq!(parse("Inputs: a;").unwrap_err(), ParseError::EmptySource);
        assert_eq!(parse("Outputs: y;").unwrap_err(), ParseError::EmptySource);
    }

    #[test]
    fn comments_ignored() {
        let src = "// adder\nInputs: a; // one input\nOutputs: y;\nWires: a->y;";
        let p = parse(src).unwrap();
        assert_eq!(p.inputs, vec!["a"]);
    }

    #[test]
    fn whitespace_trimmed_everywhere() {
        let p = parse("Inputs:  a ,  b ; Outputs:  y ; Parts:  g1 : nand ; Wires:  a -> g1.in1 ;")
            .unwrap();
        assert_eq!(p.inputs, vec!["a", "b"]);
        assert_eq!(p.parts[0].name, "g1");
        assert_eq!(p.parts[0].kind, "nand");
        assert_eq!(p.wires[0].src, Endpoint::Named("a".into()));
    }

    #[test]
    fn round_trip_through_section_text() {
        let src = "Inputs: a,b; Outputs: s,c;\nParts: g1:nand, g2:nand;\n\
                   Wires: a->g1.in1, b->g1.in2, g1.out->g2.in1, g1.out->g2.in2, g2.out->s, g1.out->c;";
        let first = parse(src).unwrap();
        let second = parse(&first.section_text()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn parse_is_pure() {
        let src = "Inputs: a; Outputs: y; Wires: a->y;";
        assert_eq!(parse(src).unwrap(), parse(src).unwrap());
    }
}
