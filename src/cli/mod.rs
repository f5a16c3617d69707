//! CLI layer: argument parsing and console output.

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
