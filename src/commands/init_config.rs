//! Implementation of the `diffsum init-config` command.

use crate::cli::InitConfigArgs;
use crate::config::SAMPLE_CONFIG;
use crate::error::{DiffsumError, Result};
use crate::fs::atomic_write_file;

/// Execute the `diffsum init-config` command.
///
/// Writes the commented sample config. An existing file is only replaced
/// with `--force`.
pub fn cmd_init_config(args: InitConfigArgs) -> Result<()> {
    if args.path.is_dir() {
        return Err(DiffsumError::UserError(format!(
            "'{}' is a directory",
            args.path.display()
        )));
    }

    if args.path.exists() && !args.force {
        return Err(DiffsumError::UserError(format!(
            "config file '{}' already exists\n\nFix: pass --force to overwrite it",
            args.path.display()
        )));
    }

    atomic_write_file(&args.path, SAMPLE_CONFIG)?;
    log::info!("wrote sample config to {}", args.path.display());
    println!("Created {}", args.path.display());

    Ok(())
}
