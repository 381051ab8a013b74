//! CLI argument parsing for diffsum.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::render::OutputFormat;

/// Diffsum: summarize unified diffs into human-readable change reports.
///
/// Reads `git diff` or `diff -u` output and reports what changed
/// structurally (functions, classes, imports, types) and the probable
/// purpose of each change.
#[derive(Parser, Debug)]
#[command(name = "diffsum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for diffsum.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize a diff.
    ///
    /// Reads the diff from --input, --diff or standard input and prints
    /// the summary (or writes it to --output).
    Summarize(SummarizeArgs),

    /// Write a commented sample configuration file.
    InitConfig(InitConfigArgs),

    /// List the named templates from the configuration.
    Templates(TemplatesArgs),
}

/// Arguments for the `summarize` command.
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Read the diff from this file instead of standard input.
    #[arg(short, long, conflicts_with = "diff")]
    pub input: Option<PathBuf>,

    /// Diff text given directly on the command line.
    #[arg(short, long)]
    pub diff: Option<String>,

    /// Output format (plain, markdown, json). Overrides the config.
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the summary to this file instead of standard output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Custom template string, e.g. "{overview}".
    #[arg(short, long, conflicts_with = "template_name")]
    pub template: Option<String>,

    /// Name of a template from the config file.
    #[arg(long)]
    pub template_name: Option<String>,

    /// Path to a config file (default: ./.diffsum.yaml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only print errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print recovered parse anomalies to stderr.
    #[arg(long)]
    pub show_warnings: bool,
}

/// Arguments for the `init-config` command.
#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config.
    #[arg(short, long, default_value = ".diffsum.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `templates` command.
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Path to a config file (default: ./.diffsum.yaml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Whether the invocation asked for errors only.
    pub fn quiet(&self) -> bool {
        matches!(&self.command, Command::Summarize(args) if args.quiet)
    }
}
