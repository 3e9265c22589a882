//! Clausal CLI library
//!
//! This library provides the command-line interface for annotating
//! POS-tagged sentences with attributive, noun and adverbial clauses.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
