//! Configuration constants and defaults for diffsum.

use crate::summary::{DEFAULT_COMPLEXITY_THRESHOLD, MAX_COMPLEXITY};

/// Default upper bound on the size of the diff input.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 1_000_000;

/// Environment variable overriding `output_format`.
pub const ENV_FORMAT: &str = "DIFFSUM_FORMAT";
/// Environment variable overriding `quiet`.
pub const ENV_QUIET: &str = "DIFFSUM_QUIET";
/// Environment variable overriding `complexity_threshold`.
pub const ENV_COMPLEXITY_THRESHOLD: &str = "DIFFSUM_COMPLEXITY_THRESHOLD";
/// Environment variable overriding `max_input_bytes`.
pub const ENV_MAX_INPUT_BYTES: &str = "DIFFSUM_MAX_INPUT_BYTES";

/// Directory of the user-level config under the config home.
pub const USER_CONFIG_DIR: &str = "diffsum";
/// File name of the user-level config.
pub const USER_CONFIG_FILE_NAME: &str = "config.yaml";

pub const ENV_XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub const ENV_HOME: &str = "HOME";

/// Highest accepted `complexity_threshold`.
pub const MAX_COMPLEXITY_THRESHOLD: u8 = MAX_COMPLEXITY;

/// Parse a boolean environment value (`1/0`, `true/false`, `yes/no`, `on/off`).
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Default value functions for serde
pub(crate) fn default_complexity_threshold() -> u8 {
    DEFAULT_COMPLEXITY_THRESHOLD
}
pub(crate) fn default_max_input_bytes() -> u64 {
    DEFAULT_MAX_INPUT_BYTES
}
pub(crate) fn default_true() -> bool {
    true
}
