//! Interactive-facing checks over the gatelab engine.
//!
//! The [syntax checker](diagnostic::check) wraps the parser and turns
//! parse errors into line-attributed [`Diagnostic`]s for display. The
//! [validator](validate::validate_detailed) grades a candidate HDL source
//! against a [`Level`](gatelab_level::Level): declared I/O sets, permitted
//! gate kinds, and the expected truth table, vector by vector. Every
//! engine error is converted into a diagnostic or report value here;
//! nothing propagates a fault to the caller.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod validate;

pub use diagnostic::{check, Diagnostic};
pub use validate::{validate, validate_detailed, ValidationFailure, ValidationReport};
