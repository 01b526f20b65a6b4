//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! fellini binary.

mod commands;
mod generate;

pub use commands::{Cli, Commands, GenerateArgs, OutputFormat};
pub use generate::handle_generate;
