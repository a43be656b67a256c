//! Shared foundational types for the gatelab digital-logic teaching engine.
//!
//! This crate provides the two-state [`Bit`] logic value used throughout the
//! parser, netlist, simulator, and validator crates.

#![warn(missing_docs)]

pub mod bit;

pub use bit::Bit;
