//! Output rendering for summary reports.
//!
//! Renders a [`Report`] as plain text, Markdown, JSON or a user template.
//! Rendering never changes the summary; it only chooses a presentation.

mod json;
mod markdown;
mod template;
mod text;

#[cfg(test)]
mod tests;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Report;
use crate::error::Result;

pub use template::{TEMPLATE_FIELDS, render_template};

/// Built-in output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    #[default]
    Plain,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Names accepted on the command line and in configuration.
    pub const NAMES: [&'static str; 5] = ["plain", "text", "markdown", "md", "json"];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format '{}' (expected one of: {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.as_str().to_string()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a report in one of the built-in formats.
///
/// Text formats end with a newline.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    log::debug!("rendering report as {}", format);
    match format {
        OutputFormat::Plain => Ok(text::render_plain(report)),
        OutputFormat::Markdown => Ok(markdown::render_markdown(report)),
        OutputFormat::Json => json::render_json(report),
    }
}
