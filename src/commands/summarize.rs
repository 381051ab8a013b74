//! Implementation of the `diffsum summarize` command.
//!
//! Reads the diff, runs the summary engine and writes the rendered report
//! to standard output or an output file.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use super::current_dir;
use crate::cli::SummarizeArgs;
use crate::config::Config;
use crate::diff::ParseWarning;
use crate::engine::SummaryEngine;
use crate::error::{DiffsumError, Result};
use crate::fs::atomic_write_file;
use crate::render::{render, render_template};

/// Execute the `diffsum summarize` command.
pub fn cmd_summarize(args: SummarizeArgs) -> Result<()> {
    let cwd = current_dir()?;
    let config = Config::discover(args.config.as_deref(), &cwd)?;
    let quiet = args.quiet || config.quiet;

    let text = match (&args.input, &args.diff) {
        (Some(path), _) => read_file(path, config.max_input_bytes)?,
        (None, Some(diff)) => {
            check_input(diff.as_bytes().to_vec(), config.max_input_bytes, "--diff")?
        }
        (None, None) => {
            read_limited(&mut io::stdin().lock(), config.max_input_bytes, "standard input")?
        }
    };

    let outcome = summarize_text(&args, &config, &text)?;

    if !outcome.warnings.is_empty() {
        if args.show_warnings {
            for warning in &outcome.warnings {
                eprintln!("warning: {}", warning);
            }
        } else if !quiet {
            eprintln!(
                "note: {} parse warning(s); rerun with --show-warnings to see them",
                outcome.warnings.len()
            );
        }
    }

    match &args.output {
        Some(path) => {
            atomic_write_file(path, &outcome.rendered)?;
            if !quiet {
                eprintln!("Summary written to {}", path.display());
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(outcome.rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| {
                    DiffsumError::OutputError(format!("failed to write to standard output: {}", e))
                })?;
        }
    }

    Ok(())
}

/// Rendered output plus recovered parse anomalies.
#[derive(Debug)]
struct Summarized {
    rendered: String,
    warnings: Vec<ParseWarning>,
}

/// Run the engine on `text` and render with the selected template or format.
///
/// Template precedence: `--template`, then `--template-name`, then the
/// built-in format from `--format` or the config.
fn summarize_text(args: &SummarizeArgs, config: &Config, text: &str) -> Result<Summarized> {
    let engine = SummaryEngine::from_config(config)?;
    let report = engine.run(text);

    if report.summary.is_empty() {
        return Err(DiffsumError::InputError(
            "no file changes found in the input (is it a unified diff?)".to_string(),
        ));
    }

    let rendered = if let Some(template) = &args.template {
        render_template(&report, template)?
    } else if let Some(name) = &args.template_name {
        render_template(&report, config.template(name)?)?
    } else {
        render(&report, args.format.unwrap_or(config.output_format))?
    };

    Ok(Summarized {
        rendered,
        warnings: report.warnings,
    })
}

fn read_file(path: &Path, max_bytes: u64) -> Result<String> {
    let mut file = File::open(path).map_err(|e| {
        let reason = match e.kind() {
            io::ErrorKind::NotFound => "file not found".to_string(),
            _ => e.to_string(),
        };
        DiffsumError::InputError(format!(
            "cannot read input '{}': {}",
            path.display(),
            reason
        ))
    })?;

    read_limited(&mut file, max_bytes, &path.display().to_string())
}

/// Read at most `max_bytes` (one more to detect overflow) and validate.
fn read_limited<R: Read>(reader: &mut R, max_bytes: u64, source: &str) -> Result<String> {
    let mut buf = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| DiffsumError::InputError(format!("failed to read {}: {}", source, e)))?;

    check_input(buf, max_bytes, source)
}

/// Reject oversized, non-UTF-8 or blank input.
fn check_input(bytes: Vec<u8>, max_bytes: u64, source: &str) -> Result<String> {
    if bytes.len() as u64 > max_bytes {
        return Err(DiffsumError::InputError(format!(
            "{} exceeds the {} byte limit (raise max_input_bytes to allow larger diffs)",
            source, max_bytes
        )));
    }

    let text = String::from_utf8(bytes).map_err(|e| {
        DiffsumError::InputError(format!(
            "{} is not valid UTF-8 (invalid byte at offset {})",
            source,
            e.utf8_error().valid_up_to()
        ))
    })?;

    if text.trim().is_empty() {
        return Err(DiffsumError::InputError(format!("{} is empty", source)));
    }

    log::debug!("read {} bytes from {}", text.len(), source);
    Ok(text)
}
