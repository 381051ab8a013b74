//! Command implementations for diffsum.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod init_config;
mod summarize;
mod templates;

use crate::cli::Command;
use crate::error::{DiffsumError, Result};
use std::path::PathBuf;

pub use init_config::cmd_init_config;
pub use summarize::cmd_summarize;
pub use templates::cmd_templates;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Summarize(args) => cmd_summarize(args),
        Command::InitConfig(args) => cmd_init_config(args),
        Command::Templates(args) => cmd_templates(args),
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        DiffsumError::UserError(format!("failed to determine current directory: {}", e))
    })
}
