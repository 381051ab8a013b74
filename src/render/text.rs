//! Plain text rendering.

use crate::engine::Report;

const RULE_WIDTH: usize = 50;

pub(super) fn render_plain(report: &Report) -> String {
    let summary = &report.summary;
    let stats = &summary.statistics;
    let mut out = String::new();

    out.push_str("CODE CHANGE SUMMARY\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    out.push_str("OVERVIEW:\n");
    out.push_str(&summary.overview);
    out.push_str("\n\n");

    out.push_str("STATISTICS:\n");
    out.push_str(&format!("  Total files changed: {}\n", stats.total_files));
    for (count, label) in [
        (stats.files_added, "Files added"),
        (stats.files_modified, "Files modified"),
        (stats.files_deleted, "Files deleted"),
        (stats.files_renamed, "Files renamed"),
        (stats.binary_files, "Binary files"),
    ] {
        if count > 0 {
            out.push_str(&format!("  {}: {}\n", label, count));
        }
    }
    out.push_str(&format!("  Lines added: +{}\n", stats.lines_added));
    out.push_str(&format!("  Lines removed: -{}\n", stats.lines_removed));
    out.push('\n');

    if !summary.key_changes.is_empty() {
        out.push_str("KEY CHANGES:\n");
        for (i, change) in summary.key_changes.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, change));
        }
        out.push('\n');
    }

    if !summary.per_file.is_empty() {
        out.push_str("FILE DETAILS:\n");
        out.push_str(&"-".repeat(30));
        out.push('\n');
        for file in &summary.per_file {
            out.push_str(&format!("File: {}\n", file.change.path()));
            out.push_str(&format!("Summary: {}\n", file.description));
            if !file.highlights.is_empty() {
                out.push_str("Key changes:\n");
                for highlight in &file.highlights {
                    out.push_str(&format!("  - {}\n", highlight));
                }
            }
            out.push('\n');
        }
    }

    if !summary.recommendations.is_empty() {
        out.push_str("RECOMMENDATIONS:\n");
        for (i, rec) in summary.recommendations.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, rec));
        }
        out.push('\n');
    }

    out
}
