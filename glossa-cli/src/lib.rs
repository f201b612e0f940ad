//! Glossa CLI library
//!
//! This library provides the command-line interface for the glossa
//! text segmentation system.

pub mod commands;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;

pub use error::{CliError, CliResult};
