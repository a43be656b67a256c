//! The component library: user-authored circuits as reusable parts.
//!
//! A [`Component`] is a named, persisted HDL circuit that other circuits
//! may instantiate as a part kind. The [`ComponentLibrary`] loads, saves,
//! and deletes components from a backing directory of `.hdl` files and
//! enforces the closed-universe rule: a component's parts may only be the
//! universal NAND gate or previously-accepted components, so every
//! component reduces, transitively, to NAND.

#![warn(missing_docs)]

pub mod component;
pub mod error;
pub mod library;

pub use component::Component;
pub use error::LibraryError;
pub use library::{ComponentLibrary, LoadReport, UNIVERSAL_GATE};
