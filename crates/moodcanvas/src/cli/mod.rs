//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the moodcanvas binary.

mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{Session, run_analyze, run_check_token, run_models, run_visualize};
