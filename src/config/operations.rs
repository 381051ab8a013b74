//! Config loading, discovery, validation, and utility operations.

use super::model::Config;
use super::types::*;
use crate::error::{DiffsumError, Result};
use crate::language::LanguageId;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".diffsum.yaml";

/// Commented sample written by `diffsum init-config`.
pub const SAMPLE_CONFIG: &str = r#"# diffsum configuration
#
# Every key is optional; missing keys use the defaults shown here.

# Built-in output format: plain, markdown or json.
output_format: plain

# Suppress informational messages on stderr.
quiet: false

include_recommendations: true
include_key_changes: true

# Files scoring at or above this value (0-10) are flagged as high complexity.
complexity_threshold: 7

# Reject diff input larger than this many bytes.
max_input_bytes: 1000000

# Map extra file extensions to a built-in language.
language_overrides:
  pyx: python
  mjs: javascript

# Named templates, used with `diffsum summarize --template-name NAME`.
# Fields: {overview} {total_files} {files_added} {files_modified}
# {files_deleted} {files_renamed} {lines_added} {lines_removed}
# {dominant_purpose} {key_changes} {recommendations} {file_summaries}
templates:
  brief: "{overview}"
  commit: |
    {overview}

    {key_changes}
"#;

impl Config {
    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DiffsumError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    #[cfg(test)]
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DiffsumError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Find and load the effective configuration.
    ///
    /// Layers, lowest first: the user config (see [`user_config_path`]),
    /// then the explicit path (which must exist) or [`CONFIG_FILE_NAME`] in
    /// `dir`. Keys in a higher layer replace those below it; `templates` and
    /// `language_overrides` are merged entry by entry. Environment overrides
    /// are applied on top and the result is validated again.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let lookup = |key: &str| std::env::var(key).ok();

        let mut layers = Vec::new();
        if let Some(path) = user_config_path(lookup)
            && path.is_file()
        {
            layers.push(path);
        }
        if let Some(path) = Self::locate(explicit, dir)? {
            layers.push(path);
        }

        let mut config = Self::load_layers(&layers)?;
        config.apply_env_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn load_layers(paths: &[PathBuf]) -> Result<Self> {
        if paths.is_empty() {
            log::debug!("no config file found; using defaults");
            return Ok(Self::default());
        }

        let mut merged = Value::Mapping(Mapping::new());
        for path in paths {
            log::debug!("loading config from {}", path.display());
            merge_yaml(&mut merged, Self::load_layer(path)?);
        }

        serde_yaml::from_value(merged)
            .map_err(|e| DiffsumError::UserError(format!("failed to merge config files: {}", e)))
    }

    /// Read one config file as raw YAML once it is known to be a valid
    /// config on its own. Errors name the file.
    fn load_layer(path: &Path) -> Result<Value> {
        let content = read_config_file(path)?;
        Self::from_yaml(&content).map_err(|e| in_file(e, path))?;

        if content.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_yaml::from_str(&content).map_err(|e| {
            in_file(
                DiffsumError::UserError(format!("failed to parse config YAML: {}", e)),
                path,
            )
        })
    }

    fn locate(explicit: Option<&Path>, dir: &Path) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(DiffsumError::UserError(format!(
                    "config file '{}' does not exist",
                    path.display()
                )));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        Ok(candidate.is_file().then_some(candidate))
    }

    /// Apply `DIFFSUM_*` overrides read through `lookup`.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_FORMAT) {
            match value.parse() {
                Ok(format) => self.output_format = format,
                Err(e) => log::warn!("ignoring {}: {}", ENV_FORMAT, e),
            }
        }

        if let Some(value) = lookup(ENV_QUIET) {
            match parse_bool(&value) {
                Some(quiet) => self.quiet = quiet,
                None => log::warn!("ignoring {}: '{}' is not a boolean", ENV_QUIET, value),
            }
        }

        if let Some(value) = lookup(ENV_COMPLEXITY_THRESHOLD) {
            match value.trim().parse::<u8>() {
                Ok(threshold) if threshold <= MAX_COMPLEXITY_THRESHOLD => {
                    self.complexity_threshold = threshold
                }
                _ => log::warn!(
                    "ignoring {}: '{}' is not a number from 0 to {}",
                    ENV_COMPLEXITY_THRESHOLD,
                    value,
                    MAX_COMPLEXITY_THRESHOLD
                ),
            }
        }

        if let Some(value) = lookup(ENV_MAX_INPUT_BYTES) {
            match value.trim().parse::<u64>() {
                Ok(bytes) if bytes > 0 => self.max_input_bytes = bytes,
                _ => log::warn!(
                    "ignoring {}: '{}' is not a positive number",
                    ENV_MAX_INPUT_BYTES,
                    value
                ),
            }
        }
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `complexity_threshold` must be at most 10
    /// - `max_input_bytes` must be positive
    /// - `language_overrides` keys must be non-empty and values must name a known language
    /// - `templates` names must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.complexity_threshold > MAX_COMPLEXITY_THRESHOLD {
            return Err(DiffsumError::UserError(format!(
                "config validation failed: complexity_threshold must be between 0 and {} (found {})",
                MAX_COMPLEXITY_THRESHOLD, self.complexity_threshold
            )));
        }

        if self.max_input_bytes == 0 {
            return Err(DiffsumError::UserError(
                "config validation failed: max_input_bytes must be greater than 0".to_string(),
            ));
        }

        for (ext, language) in &self.language_overrides {
            if ext.trim_start_matches('.').is_empty() {
                return Err(DiffsumError::UserError(
                    "config validation failed: language_overrides keys must be non-empty"
                        .to_string(),
                ));
            }
            if language.parse::<LanguageId>().is_err() {
                return Err(DiffsumError::UserError(format!(
                    "config validation failed: unknown language '{}' for extension '{}'. Use one of: {}",
                    language,
                    ext,
                    LanguageId::NAMES.join(", ")
                )));
            }
        }

        if self.templates.keys().any(|name| name.trim().is_empty()) {
            return Err(DiffsumError::UserError(
                "config validation failed: template names must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Look up a named template.
    pub fn template(&self, name: &str) -> Result<&str> {
        self.templates.get(name).map(String::as_str).ok_or_else(|| {
            let known = if self.templates.is_empty() {
                "no templates are configured".to_string()
            } else {
                format!(
                    "available: {}",
                    self.templates.keys().cloned().collect::<Vec<_>>().join(", ")
                )
            };
            DiffsumError::UserError(format!("unknown template '{}' ({})", name, known))
        })
    }
}

/// Location of the user-level config: `$XDG_CONFIG_HOME/diffsum/config.yaml`,
/// else `$HOME/.config/diffsum/config.yaml`. `None` when neither is set.
pub fn user_config_path<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let config_home = non_empty(ENV_XDG_CONFIG_HOME)
        .map(PathBuf::from)
        .or_else(|| non_empty(ENV_HOME).map(|home| PathBuf::from(home).join(".config")))?;

    Some(config_home.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE_NAME))
}

fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        DiffsumError::UserError(format!(
            "failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Attach the file name to a config error.
fn in_file(err: DiffsumError, path: &Path) -> DiffsumError {
    match err {
        DiffsumError::UserError(msg) => {
            DiffsumError::UserError(format!("{} (in '{}')", msg, path.display()))
        }
        other => other,
    }
}

/// Overlay `layer` onto `base`. Nested mappings merge key by key; any other
/// value replaces what was there. A null layer changes nothing.
fn merge_yaml(base: &mut Value, layer: Value) {
    match (base, layer) {
        (_, Value::Null) => {}
        (Value::Mapping(base), Value::Mapping(layer)) => {
            for (key, value) in layer {
                let nested = value.is_mapping() && base.get(&key).is_some_and(Value::is_mapping);
                if nested && let Some(existing) = base.get_mut(&key) {
                    merge_yaml(existing, value);
                } else {
                    base.insert(key, value);
                }
            }
        }
        (base, layer) => *base = layer,
    }
}
