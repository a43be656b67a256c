//! Exercise (level) definitions for the gatelab validator.
//!
//! A [`Level`] names the inputs and outputs a solution must declare, the
//! gate kinds it may use, and the truth table it must reproduce. Levels
//! are consumed read-only by the validator; this crate defines the JSON
//! schema and loads level files from a directory.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::LevelError;
pub use loader::{find_level, load_levels};
pub use types::{Level, TestVector};
