//! Tests for report rendering.

use super::{OutputFormat, render, render_template};
use crate::config::Config;
use crate::engine::{Report, SummaryEngine};
use crate::error::DiffsumError;

fn report_for(text: &str) -> Report {
    SummaryEngine::from_config(&Config::default())
        .unwrap()
        .run(text)
}

const LOGGING_DIFF: &str = "diff --git a/calculator.py b/calculator.py\n--- a/calculator.py\n+++ b/calculator.py\n@@ -1,2 +1,3 @@\n def add(x, y):\n+    print(\"x\")\n     return x + y\n";

const RENAME_DIFF: &str = "diff --git a/lib/a.rs b/lib/b.rs\nsimilarity index 100%\nrename from lib/a.rs\nrename to lib/b.rs\n";

// =========================================================================
// Output format parsing
// =========================================================================

#[test]
fn test_output_format_from_str() {
    assert_eq!("plain".parse::<OutputFormat>(), Ok(OutputFormat::Plain));
    assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Plain));
    assert_eq!("Markdown".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
    assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
    assert_eq!(" JSON ".parse::<OutputFormat>(), Ok(OutputFormat::Json));

    let err = "html".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("html"));
    assert!(err.contains("markdown"));
}

#[test]
fn test_output_format_deserializes_from_yaml() {
    let format: OutputFormat = serde_yaml::from_str("md").unwrap();
    assert_eq!(format, OutputFormat::Markdown);

    assert!(serde_yaml::from_str::<OutputFormat>("xml").is_err());
}

// =========================================================================
// Built-in formats
// =========================================================================

#[test]
fn test_plain_layout() {
    let out = render(&report_for(LOGGING_DIFF), OutputFormat::Plain).unwrap();

    assert!(out.starts_with("CODE CHANGE SUMMARY\n====="));
    assert!(out.contains(
        "OVERVIEW:\n1 file changed, 1 modified (+1 lines). Primary focus: Logging or debugging.\n"
    ));
    assert!(out.contains("  Total files changed: 1\n"));
    assert!(out.contains("  Files modified: 1\n"));
    assert!(!out.contains("Files deleted"));
    assert!(out.contains("  Lines added: +1\n  Lines removed: -0\n"));
    assert!(out.contains("KEY CHANGES:\n  1. Modified: calculator.py (Logging or debugging)\n"));
    assert!(out.contains("File: calculator.py\n"));
    assert!(out.contains(
        "Summary: Modified 'calculator.py' - (+1 lines) - Purpose: Logging or debugging\n"
    ));
    assert!(out.contains(
        "RECOMMENDATIONS:\n  1. Check that new logging and debug output is meant to ship\n"
    ));
}

#[test]
fn test_plain_empty_report_omits_sections() {
    let out = render(&report_for(""), OutputFormat::Plain).unwrap();

    assert!(out.contains("OVERVIEW:\nNo changes detected\n"));
    assert!(!out.contains("KEY CHANGES"));
    assert!(!out.contains("FILE DETAILS"));
    assert!(!out.contains("RECOMMENDATIONS"));
}

#[test]
fn test_markdown_layout() {
    let out = render(&report_for(LOGGING_DIFF), OutputFormat::Markdown).unwrap();

    assert!(out.starts_with("# Code Change Summary\n\n## Overview\n"));
    assert!(out.contains("- **Total files changed:** 1\n"));
    assert!(out.contains("- **Lines added:** +1\n"));
    assert!(out.contains("## Key Changes\n- Modified: calculator.py (Logging or debugging)\n"));
    assert!(out.contains("### `calculator.py`\n"));
    assert!(out.contains("## Recommendations\n"));
    assert!(out.ends_with('\n'));
}

#[test]
fn test_markdown_lists_highlights() {
    let report = report_for(
        "diff --git a/app.py b/app.py\n--- a/app.py\n+++ b/app.py\n@@ -1 +1 @@\n-def load(path):\n+def load(path, mode):\n",
    );

    let out = render(&report, OutputFormat::Markdown).unwrap();

    assert!(out.contains("**Key changes:**\n- Modified function 'load'\n"));
}

#[test]
fn test_json_view() {
    let out = render(&report_for(LOGGING_DIFF), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["statistics"]["total_files"], 1);
    assert_eq!(value["statistics"]["lines_added"], 1);
    assert_eq!(value["dominant_purpose"], "logging_or_debugging");

    let file = &value["file_summaries"][0];
    assert_eq!(file["filename"], "calculator.py");
    assert!(file.get("old_filename").is_none());
    assert_eq!(file["status"], "modified");
    assert_eq!(file["language"], "python");
    assert_eq!(file["purpose"], "logging_or_debugging");
    assert_eq!(file["rule"], "logging");
    assert_eq!(file["lines_added"], 1);
    assert_eq!(file["impact"]["scale"], "small");
    assert_eq!(file["impact"]["public_api_changed"], false);

    assert_eq!(
        value["key_changes"][0],
        "Modified: calculator.py (Logging or debugging)"
    );
    assert_eq!(value["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_json_rename_and_structure() {
    let out = render(&report_for(RENAME_DIFF), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    let file = &value["file_summaries"][0];
    assert_eq!(file["filename"], "lib/b.rs");
    assert_eq!(file["old_filename"], "lib/a.rs");
    assert_eq!(file["status"], "renamed");
    assert_eq!(file["language"], "rust");
    assert_eq!(file["purpose"], "unknown");
    assert!(file["rule"].is_null());
    assert_eq!(
        file["structural_changes"]["added"].as_array().unwrap().len(),
        0
    );
}

#[test]
fn test_json_includes_warnings() {
    let report = report_for(
        "diff --git a/src/app.py b/src/app.py\n--- a/src/app.py\n+++ b/src/app.py\n@@ garbage @@\n+x = 1\n",
    );

    let out = render(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["warnings"][0]["kind"], "malformed_hunk_header");
    assert_eq!(value["warnings"][0]["line"], 4);
}

#[test]
fn test_rendering_is_deterministic() {
    let report = report_for(LOGGING_DIFF);

    for format in [OutputFormat::Plain, OutputFormat::Markdown, OutputFormat::Json] {
        assert_eq!(
            render(&report, format).unwrap(),
            render(&report, format).unwrap()
        );
    }
}

// =========================================================================
// Templates
// =========================================================================

#[test]
fn test_template_substitutes_fields() {
    let report = report_for(LOGGING_DIFF);

    let out = render_template(
        &report,
        "{total_files} file(s): +{lines_added}/-{lines_removed}\n{key_changes}",
    )
    .unwrap();

    assert_eq!(
        out,
        "1 file(s): +1/-0\n- Modified: calculator.py (Logging or debugging)"
    );
}

#[test]
fn test_template_file_summaries() {
    let report = report_for(
        "diff --git a/app.py b/app.py\n--- a/app.py\n+++ b/app.py\n@@ -1 +1 @@\n-def load(path):\n+def load(path, mode):\n",
    );

    let out = render_template(&report, "{file_summaries}").unwrap();

    assert_eq!(
        out,
        "- app.py: Modified 'app.py' - (+1 lines, -1 lines) - modified function load - Purpose: Refactor\n  - Modified function 'load'"
    );
}

#[test]
fn test_template_empty_report() {
    let report = report_for("");

    let out = render_template(&report, "{overview}|{file_summaries}|{key_changes}|").unwrap();

    assert_eq!(out, "No changes detected|No file changes||");
}

#[test]
fn test_template_escaped_braces() {
    let report = report_for(LOGGING_DIFF);

    let out = render_template(&report, "{{files}}: { total_files }").unwrap();

    assert_eq!(out, "{files}: 1");
}

#[test]
fn test_template_unknown_field() {
    let report = report_for(LOGGING_DIFF);

    let err = render_template(&report, "{nope}").unwrap_err();

    assert!(matches!(err, DiffsumError::TemplateError(_)));
    assert!(err.to_string().contains("nope"));
}

#[test]
fn test_template_unbalanced_braces() {
    let report = report_for(LOGGING_DIFF);

    assert!(matches!(
        render_template(&report, "open {overview"),
        Err(DiffsumError::TemplateError(_))
    ));
    assert!(matches!(
        render_template(&report, "close } here"),
        Err(DiffsumError::TemplateError(_))
    ));
}
