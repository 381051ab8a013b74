//! Config struct definition and default implementation.

use super::types::*;
use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for diffsum.
///
/// This struct represents the contents of `.diffsum.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Output settings
    // =========================================================================
    /// Built-in format used when no template is selected.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Suppress informational logging.
    #[serde(default)]
    pub quiet: bool,

    /// Whether the summary lists recommendations.
    #[serde(default = "default_true")]
    pub include_recommendations: bool,

    /// Whether the summary lists key changes.
    #[serde(default = "default_true")]
    pub include_key_changes: bool,

    // =========================================================================
    // Analysis settings
    // =========================================================================
    /// Score (0-10) at or above which a file is flagged as high complexity.
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: u8,

    /// Inputs larger than this many bytes are rejected.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: u64,

    /// Extra extension to language mappings, e.g. `pyx: python`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub language_overrides: BTreeMap<String, String>,

    // =========================================================================
    // Templates
    // =========================================================================
    /// Named custom templates, selected with `--template-name`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub templates: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            quiet: false,
            include_recommendations: default_true(),
            include_key_changes: default_true(),
            complexity_threshold: default_complexity_threshold(),
            max_input_bytes: default_max_input_bytes(),
            language_overrides: BTreeMap::new(),
            templates: BTreeMap::new(),
        }
    }
}
