//! Tooling & Integration Layer
//!
//! Command-line entry points over selection, summary, tree and grading.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, ConfigCommands};
