//! The [`Component`] type and its on-disk text format.
//!
//! A component file is a metadata header of `#`-prefixed lines followed by
//! a blank line and the HDL body:
//!
//! ```text
//! # Component Definition
//! # Name: inverter
//! # Description: NOT built from a single NAND
//! # Author: ada
//! # Created: 2026-08-06 12:00:00
//!
//! Inputs: a;
//! Outputs: y;
//! Parts: g:nand;
//! Wires: a->g.in1, a->g.in2, g.out->y;
//! ```

use crate::error::LibraryError;
use gatelab_hdl::{parse, Program};

/// A named, user-authored, persisted circuit usable as a part kind.
#[derive(Debug, Clone)]
pub struct Component {
    /// The component name, the library's unique key (case-insensitive).
    pub name: String,
    /// Human-readable description from the metadata header.
    pub description: String,
    /// Optional author metadata.
    pub author: Option<String>,
    /// Creation timestamp (`YYYY-MM-DD HH:MM:SS`), stamped on save.
    pub created: Option<String>,
    /// The raw HDL body, comment lines included.
    pub source: String,
    /// The parsed program derived from `source`.
    pub program: Program,
    /// Declared input pin names, from the program.
    pub inputs: Vec<String>,
    /// Declared output pin names, from the program.
    pub outputs: Vec<String>,
}

impl Component {
    /// Builds a component from a name, description, and HDL source,
    /// parsing the source to derive its program and pin lists.
    pub fn from_hdl(
        name: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, LibraryError> {
        let name = name.into();
        let source = source.into();
        let program = parse(&source).map_err(|e| LibraryError::InvalidHdl {
            name: name.clone(),
            source: e,
        })?;
        let inputs = program.inputs.clone();
        let outputs = program.outputs.clone();
        Ok(Self {
            name,
            description: description.into(),
            author: None,
            created: None,
            source,
            program,
            inputs,
            outputs,
        })
    }

    /// Parses a component file's text (metadata header plus HDL body).
    ///
    /// `path_hint` is used only in error messages. Blank lines are
    /// dropped; `#` lines feed the metadata fields; everything else is the
    /// HDL body.
    pub fn from_file_text(text: &str, path_hint: &str) -> Result<Self, LibraryError> {
        let mut name = None;
        let mut description = String::new();
        let mut author = None;
        let mut created = None;
        let mut body = String::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(meta) = line.strip_prefix('#') {
                let meta = meta.trim_start();
                if let Some(v) = meta.strip_prefix("Name:") {
                    name = Some(v.trim().to_string());
                } else if let Some(v) = meta.strip_prefix("Description:") {
                    description = v.trim().to_string();
                } else if let Some(v) = meta.strip_prefix("Author:") {
                    author = Some(v.trim().to_string());
                } else if let Some(v) = meta.strip_prefix("Created:") {
                    created = Some(v.trim().to_string());
                }
            } else {
                body.push_str(line);
                body.push('\n');
            }
        }

        let name = name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| LibraryError::MissingName {
                path: path_hint.to_string(),
            })?;

        let mut component = Component::from_hdl(name, description, body)?;
        component.author = author;
        component.created = created;
        Ok(component)
    }

    /// Renders the component back into its on-disk file text.
    pub fn to_file_text(&self) -> String {
        let mut out = String::new();
        out.push_str("# Component Definition\n");
        out.push_str(&format!("# Name: {}\n", self.name));
        out.push_str(&format!("# Description: {}\n", self.description));
        if let Some(author) = &self.author {
            if !author.is_empty() {
                out.push_str(&format!("# Author: {author}\n"));
            }
        }
        if let Some(created) = &self.created {
            out.push_str(&format!("# Created: {created}\n"));
        }
        out.push('\n');
        out.push_str(&self.source);
        if !self.source.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVERTER: &str = "Inputs: a;\nOutputs: y;\nParts: g:nand;\nWires: a->g.in1, a->g.in2, g.out->y;\n";

    #[test]
    fn from_hdl_derives_pins() {
        let c = Component::from_hdl("inverter", "NOT from NAND", INVERTER).unwrap();
        assert_eq!(c.inputs, vec!["a"]);
        assert_eq!(c.outputs, vec!["y"]);
        assert_eq!(c.program.parts.len(), 1);
    }

    #[test]
    fn from_hdl_rejects_bad_source() {
        let err = Component::from_hdl("broken", "", "Inputs: a;").unwrap_err();
        assert!(matches!(err, LibraryError::InvalidHdl { .. }));
    }

    #[test]
    fn file_text_round_trip() {
        let mut c = Component::from_hdl("inverter", "NOT from NAND", INVERTER).unwrap();
        c.author = Some("ada".into());
        c.created = Some("2026-08-06 12:00:00".into());
        let parsed = Component::from_file_text(&c.to_file_text(), "inverter.hdl").unwrap();
        assert_eq!(parsed.name, "inverter");
        assert_eq!(parsed.description, "NOT from NAND");
        assert_eq!(parsed.author.as_deref(), Some("ada"));
        assert_eq!(parsed.created.as_deref(), Some("2026-08-06 12:00:00"));
        assert_eq!(parsed.program, c.program);
    }

    #[test]
    fn header_fields_are_trimmed() {
        let text = "# Name:   spaced   \n# Description:  about  \n\nInputs: a;\nOutputs: y;\nWires: a->y;\n";
        let c = Component::from_file_text(text, "spaced.hdl").unwrap();
        assert_eq!(c.name, "spaced");
        assert_eq!(c.description, "about");
    }

    #[test]
    fn missing_name_is_an_error() {
        let text = "# Description: nameless\n\nInputs: a;\nOutputs: y;\nWires: a->y;\n";
        let err = Component::from_file_text(text, "x.hdl").unwrap_err();
        assert!(matches!(err, LibraryError::MissingName { .. }));
    }

    #[test]
    fn metadata_after_body_still_parses() {
        // Header lines may technically appear anywhere; only '#' prefixing matters.
        let text = "Inputs: a;\nOutputs: y;\nWires: a->y;\n# Name: tail\n";
        let c = Component::from_file_text(text, "tail.hdl").unwrap();
        assert_eq!(c.name, "tail");
    }
}
