//! Custom template substitution.
//!
//! Templates reference fields as `{name}`. `{{` and `}}` produce literal
//! braces. Unknown fields and unbalanced braces are template errors.

use crate::engine::Report;
use crate::error::{DiffsumError, Result};
use crate::summary::OverallSummary;

/// Fields a template may reference.
pub const TEMPLATE_FIELDS: [&str; 12] = [
    "overview",
    "total_files",
    "files_added",
    "files_modified",
    "files_deleted",
    "files_renamed",
    "lines_added",
    "lines_removed",
    "dominant_purpose",
    "key_changes",
    "recommendations",
    "file_summaries",
];

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn file_summaries(summary: &OverallSummary) -> String {
    if summary.per_file.is_empty() {
        return "No file changes".to_string();
    }

    let mut lines = Vec::new();
    for file in &summary.per_file {
        lines.push(format!("- {}: {}", file.change.path(), file.description));
        lines.extend(file.highlights.iter().map(|h| format!("  - {}", h)));
    }
    lines.join("\n")
}

fn field_value(summary: &OverallSummary, name: &str) -> Option<String> {
    let stats = &summary.statistics;
    let value = match name {
        "overview" => summary.overview.clone(),
        "total_files" => stats.total_files.to_string(),
        "files_added" => stats.files_added.to_string(),
        "files_modified" => stats.files_modified.to_string(),
        "files_deleted" => stats.files_deleted.to_string(),
        "files_renamed" => stats.files_renamed.to_string(),
        "lines_added" => stats.lines_added.to_string(),
        "lines_removed" => stats.lines_removed.to_string(),
        "dominant_purpose" => summary.dominant_purpose.category.label().to_string(),
        "key_changes" => bullet_list(&summary.key_changes),
        "recommendations" => bullet_list(&summary.recommendations),
        "file_summaries" => file_summaries(summary),
        _ => return None,
    };
    Some(value)
}

/// Substitute report fields into `template`.
///
/// # Returns
///
/// * `Ok(String)` - The rendered text
/// * `Err(DiffsumError::TemplateError)` - Unknown field or unbalanced braces
pub fn render_template(report: &Report, template: &str) -> Result<String> {
    let summary = &report.summary;
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if chars.next_if(|&(_, c)| c == '{').is_some() {
                    out.push('{');
                    continue;
                }

                let mut name = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(DiffsumError::TemplateError(format!(
                        "unclosed '{{' at byte {}",
                        pos
                    )));
                }

                let key = name.trim();
                let value = field_value(summary, key).ok_or_else(|| {
                    DiffsumError::TemplateError(format!(
                        "unknown template field '{}'\n\nFix: use one of: {}",
                        key,
                        TEMPLATE_FIELDS.join(", ")
                    ))
                })?;
                out.push_str(&value);
            }
            '}' => {
                if chars.next_if(|&(_, c)| c == '}').is_none() {
                    return Err(DiffsumError::TemplateError(format!(
                        "unmatched '}}' at byte {} (write '}}}}' for a literal brace)",
                        pos
                    )));
                }
                out.push('}');
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}
