//! Tests for config functionality.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::operations::user_config_path;
use crate::config::types::{DEFAULT_MAX_INPUT_BYTES, parse_bool};
use crate::config::{CONFIG_FILE_NAME, Config, SAMPLE_CONFIG};
use crate::error::DiffsumError;
use crate::render::OutputFormat;
use crate::test_support::EnvGuard;
use serial_test::serial;
use tempfile::TempDir;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.output_format, OutputFormat::Plain);
    assert!(!config.quiet);
    assert!(config.include_recommendations);
    assert!(config.include_key_changes);
    assert_eq!(config.complexity_threshold, 7);
    assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    assert!(config.templates.is_empty());
    assert!(config.language_overrides.is_empty());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    // Should use all defaults
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
output_format: md
complexity_threshold: 5
"#;
    let config = Config::from_yaml(yaml).unwrap();

    // Specified values should be used
    assert_eq!(config.output_format, OutputFormat::Markdown);
    assert_eq!(config.complexity_threshold, 5);

    // Unspecified values should use defaults
    assert!(config.include_key_changes);
    assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
output_format: json
quiet: true
include_recommendations: false
include_key_changes: false
complexity_threshold: 9
max_input_bytes: 2048
language_overrides:
  pyx: python
  hh: c++
templates:
  brief: "{overview}"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(config.quiet);
    assert!(!config.include_recommendations);
    assert!(!config.include_key_changes);
    assert_eq!(config.complexity_threshold, 9);
    assert_eq!(config.max_input_bytes, 2048);
    assert_eq!(config.language_overrides["hh"], "c++");
    assert_eq!(config.template("brief").unwrap(), "{overview}");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
complexity_threshold: 3
future_option: true
nested:
  anything: 1
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.complexity_threshold, 3);
}

#[test]
fn test_invalid_format_rejected() {
    let err = Config::from_yaml("output_format: html").unwrap_err();

    assert!(matches!(err, DiffsumError::UserError(_)));
    assert!(err.to_string().contains("html"));
}

#[test]
fn test_validation_rejects_threshold_above_ten() {
    let err = Config::from_yaml("complexity_threshold: 11").unwrap_err();

    assert!(err.to_string().contains("complexity_threshold"));
}

#[test]
fn test_validation_rejects_zero_max_input_bytes() {
    let err = Config::from_yaml("max_input_bytes: 0").unwrap_err();

    assert!(err.to_string().contains("max_input_bytes"));
}

#[test]
fn test_validation_rejects_unknown_language() {
    let yaml = r#"
language_overrides:
  foo: cobol
"#;
    let err = Config::from_yaml(yaml).unwrap_err();

    assert!(err.to_string().contains("cobol"));
    assert!(err.to_string().contains("python"));
}

#[test]
fn test_validation_rejects_empty_override_key() {
    let mut config = Config::default();
    config
        .language_overrides
        .insert(".".to_string(), "python".to_string());

    assert!(config.validate().is_err());
}

#[test]
fn test_unknown_template_lists_available() {
    let mut config = Config::default();
    assert!(
        config
            .template("x")
            .unwrap_err()
            .to_string()
            .contains("no templates are configured")
    );

    config
        .templates
        .insert("brief".to_string(), "{overview}".to_string());
    let err = config.template("x").unwrap_err();
    assert!(err.to_string().contains("available: brief"));
}

#[test]
fn test_sample_config_is_valid() {
    let config = Config::from_yaml(SAMPLE_CONFIG).unwrap();

    assert_eq!(config.complexity_threshold, 7);
    assert_eq!(config.language_overrides["pyx"], "python");
    assert_eq!(config.template("brief").unwrap(), "{overview}");
    assert_eq!(
        config.template("commit").unwrap(),
        "{overview}\n\n{key_changes}\n"
    );
}

#[test]
fn test_yaml_roundtrip_keeps_values() {
    let mut config = Config::default();
    config.output_format = OutputFormat::Json;
    config.complexity_threshold = 4;
    config
        .templates
        .insert("t".to_string(), "{total_files}".to_string());

    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("output_format: json"));

    let reparsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(reparsed, config);
}

// =========================================================================
// Environment overrides
// =========================================================================

#[test]
fn test_env_overrides_apply() {
    let mut config = Config::default();

    config.apply_env_overrides(lookup_from(&[
        ("DIFFSUM_FORMAT", "markdown"),
        ("DIFFSUM_QUIET", "yes"),
        ("DIFFSUM_COMPLEXITY_THRESHOLD", "4"),
        ("DIFFSUM_MAX_INPUT_BYTES", "500"),
    ]));

    assert_eq!(config.output_format, OutputFormat::Markdown);
    assert!(config.quiet);
    assert_eq!(config.complexity_threshold, 4);
    assert_eq!(config.max_input_bytes, 500);
}

#[test]
fn test_invalid_env_overrides_ignored() {
    let mut config = Config::default();

    config.apply_env_overrides(lookup_from(&[
        ("DIFFSUM_FORMAT", "xml"),
        ("DIFFSUM_QUIET", "maybe"),
        ("DIFFSUM_COMPLEXITY_THRESHOLD", "42"),
        ("DIFFSUM_MAX_INPUT_BYTES", "0"),
    ]));

    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_bool_values() {
    assert_eq!(parse_bool("1"), Some(true));
    assert_eq!(parse_bool(" TRUE "), Some(true));
    assert_eq!(parse_bool("off"), Some(false));
    assert_eq!(parse_bool("nah"), None);
}

// =========================================================================
// Discovery
// =========================================================================

#[test]
#[serial]
fn test_discover_defaults_without_file() {
    let _env = EnvGuard::clear_diffsum_vars();
    let dir = TempDir::new().unwrap();

    let config = Config::discover(None, dir.path()).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_discover_reads_local_file() {
    let _env = EnvGuard::clear_diffsum_vars();
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "complexity_threshold: 2\n").unwrap();

    let config = Config::discover(None, dir.path()).unwrap();

    assert_eq!(config.complexity_threshold, 2);
}

#[test]
#[serial]
fn test_discover_explicit_path_wins() {
    let _env = EnvGuard::clear_diffsum_vars();
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "complexity_threshold: 2\n").unwrap();
    let explicit = dir.path().join("other.yaml");
    std::fs::write(&explicit, "complexity_threshold: 9\n").unwrap();

    let config = Config::discover(Some(&explicit), dir.path()).unwrap();

    assert_eq!(config.complexity_threshold, 9);
}

#[test]
#[serial]
fn test_discover_missing_explicit_path_fails() {
    let _env = EnvGuard::clear_diffsum_vars();
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yaml");

    let err = Config::discover(Some(&missing), dir.path()).unwrap_err();

    assert!(matches!(err, DiffsumError::UserError(_)));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
#[serial]
fn test_discover_applies_environment() {
    let mut env = EnvGuard::clear_diffsum_vars();
    env.set("DIFFSUM_FORMAT", "json");
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "output_format: markdown\n").unwrap();

    let config = Config::discover(None, dir.path()).unwrap();

    assert_eq!(config.output_format, OutputFormat::Json);
}

#[test]
#[serial]
fn test_discover_reports_bad_file() {
    let _env = EnvGuard::clear_diffsum_vars();
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "complexity_threshold: [1\n").unwrap();

    let err = Config::discover(None, dir.path()).unwrap_err();

    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}

// =========================================================================
// User-level config
// =========================================================================

/// Write `content` as the user config below `home` and return its path.
fn write_user_config(home: &Path, content: &str) -> PathBuf {
    let path = home.join(".config").join("diffsum").join("config.yaml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_user_config_path_prefers_xdg() {
    let path = user_config_path(lookup_from(&[
        ("XDG_CONFIG_HOME", "/xdg"),
        ("HOME", "/home/dev"),
    ]));
    assert_eq!(path, Some(PathBuf::from("/xdg/diffsum/config.yaml")));

    let path = user_config_path(lookup_from(&[("HOME", "/home/dev")]));
    assert_eq!(
        path,
        Some(PathBuf::from("/home/dev/.config/diffsum/config.yaml"))
    );

    assert_eq!(user_config_path(lookup_from(&[("HOME", "  ")])), None);
    assert_eq!(user_config_path(lookup_from(&[])), None);
}

#[test]
#[serial]
fn test_discover_reads_user_config() {
    let mut env = EnvGuard::clear_diffsum_vars();
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    env.set("HOME", home.path().to_str().unwrap());
    write_user_config(home.path(), "output_format: json\ncomplexity_threshold: 3\n");

    let config = Config::discover(None, project.path()).unwrap();

    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.complexity_threshold, 3);
}

#[test]
#[serial]
fn test_project_config_layers_over_user_config() {
    let mut env = EnvGuard::clear_diffsum_vars();
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    env.set("HOME", home.path().to_str().unwrap());
    write_user_config(
        home.path(),
        "output_format: json\ncomplexity_threshold: 3\ntemplates:\n  mine: \"{overview}\"\n  shared: \"{total_files}\"\n",
    );
    std::fs::write(
        project.path().join(CONFIG_FILE_NAME),
        "complexity_threshold: 5\ntemplates:\n  shared: \"{lines_added}\"\n  team: \"{key_changes}\"\n",
    )
    .unwrap();

    let config = Config::discover(None, project.path()).unwrap();

    // Project keys win, untouched user keys survive
    assert_eq!(config.complexity_threshold, 5);
    assert_eq!(config.output_format, OutputFormat::Json);
    // Templates merge entry by entry
    assert_eq!(config.template("mine").unwrap(), "{overview}");
    assert_eq!(config.template("shared").unwrap(), "{lines_added}");
    assert_eq!(config.template("team").unwrap(), "{key_changes}");
}

#[test]
#[serial]
fn test_explicit_config_layers_over_user_config() {
    let mut env = EnvGuard::clear_diffsum_vars();
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    env.set("HOME", home.path().to_str().unwrap());
    write_user_config(home.path(), "quiet: true\ncomplexity_threshold: 3\n");
    let explicit = project.path().join("ci.yaml");
    std::fs::write(&explicit, "complexity_threshold: 8\n").unwrap();

    let config = Config::discover(Some(&explicit), project.path()).unwrap();

    assert!(config.quiet);
    assert_eq!(config.complexity_threshold, 8);
}

#[test]
#[serial]
fn test_env_overrides_user_config() {
    let mut env = EnvGuard::clear_diffsum_vars();
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    env.set("HOME", home.path().to_str().unwrap());
    env.set("DIFFSUM_FORMAT", "markdown");
    write_user_config(home.path(), "output_format: json\n");

    let config = Config::discover(None, project.path()).unwrap();

    assert_eq!(config.output_format, OutputFormat::Markdown);
}

#[test]
#[serial]
fn test_discover_reports_bad_user_config() {
    let mut env = EnvGuard::clear_diffsum_vars();
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    env.set("HOME", home.path().to_str().unwrap());
    let path = write_user_config(home.path(), "complexity_threshold: 42\n");

    let err = Config::discover(None, project.path()).unwrap_err();

    assert!(matches!(err, DiffsumError::UserError(_)));
    assert!(err.to_string().contains("complexity_threshold"));
    assert!(err.to_string().contains(&path.display().to_string()));
}
