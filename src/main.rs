//! Diffsum: summarize unified diffs into human-readable change reports.
//!
//! This is the main entry point for the `diffsum` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod analyze;
mod classify;
mod cli;
mod commands;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod language;
pub mod render;
pub mod summary;

#[cfg(test)]
mod test_support;

use cli::Cli;
use log::LevelFilter;
use std::io::Write;
use std::process::ExitCode;

/// Log level for the given flags. `RUST_LOG` still overrides it.
fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose, quiet))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}: {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        })
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose, cli.quiet());
    log::debug!("diffsum {}", env!("CARGO_PKG_VERSION"));

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_flags() {
        assert_eq!(log_level(0, false), LevelFilter::Warn);
        assert_eq!(log_level(1, false), LevelFilter::Info);
        assert_eq!(log_level(2, false), LevelFilter::Debug);
        assert_eq!(log_level(5, false), LevelFilter::Trace);
        assert_eq!(log_level(3, true), LevelFilter::Error);
    }
}
