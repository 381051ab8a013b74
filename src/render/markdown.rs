//! Markdown rendering.

use crate::engine::Report;

pub(super) fn render_markdown(report: &Report) -> String {
    let summary = &report.summary;
    let stats = &summary.statistics;
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Code Change Summary".to_string());
    lines.push(String::new());

    lines.push("## Overview".to_string());
    lines.push(summary.overview.clone());
    lines.push(String::new());

    lines.push("## Statistics".to_string());
    lines.push(format!("- **Total files changed:** {}", stats.total_files));
    for (count, label) in [
        (stats.files_added, "Files added"),
        (stats.files_modified, "Files modified"),
        (stats.files_deleted, "Files deleted"),
        (stats.files_renamed, "Files renamed"),
        (stats.binary_files, "Binary files"),
    ] {
        if count > 0 {
            lines.push(format!("- **{}:** {}", label, count));
        }
    }
    lines.push(format!("- **Lines added:** +{}", stats.lines_added));
    lines.push(format!("- **Lines removed:** -{}", stats.lines_removed));
    lines.push(String::new());

    if !summary.key_changes.is_empty() {
        lines.push("## Key Changes".to_string());
        lines.extend(summary.key_changes.iter().map(|c| format!("- {}", c)));
        lines.push(String::new());
    }

    if !summary.per_file.is_empty() {
        lines.push("## File Details".to_string());
        for file in &summary.per_file {
            lines.push(format!("### `{}`", file.change.path()));
            lines.push(file.description.clone());
            if !file.highlights.is_empty() {
                lines.push(String::new());
                lines.push("**Key changes:**".to_string());
                lines.extend(file.highlights.iter().map(|h| format!("- {}", h)));
            }
            lines.push(String::new());
        }
    }

    if !summary.recommendations.is_empty() {
        lines.push("## Recommendations".to_string());
        lines.extend(summary.recommendations.iter().map(|r| format!("- {}", r)));
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
