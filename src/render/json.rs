//! JSON rendering.
//!
//! The JSON view is a flattened projection of the report: paths instead of
//! full file records, structural changes as `"kind 'name'"` strings.

use serde::Serialize;

use crate::analyze::StructuralDelta;
use crate::classify::ChangeCategory;
use crate::diff::{FileStatus, ParseWarning};
use crate::engine::Report;
use crate::error::{DiffsumError, Result};
use crate::language::LanguageId;
use crate::summary::{ChangeStatistics, FileReport, ImpactAssessment};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    overview: &'a str,
    statistics: ChangeStatistics,
    dominant_purpose: ChangeCategory,
    file_summaries: Vec<JsonFile<'a>>,
    key_changes: &'a [String],
    recommendations: &'a [String],
    warnings: &'a [ParseWarning],
}

#[derive(Debug, Serialize)]
struct JsonFile<'a> {
    filename: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_filename: Option<&'a str>,
    status: FileStatus,
    binary: bool,
    language: Option<LanguageId>,
    purpose: ChangeCategory,
    rule: Option<&'static str>,
    complexity: u8,
    impact: ImpactAssessment,
    lines_added: usize,
    lines_removed: usize,
    summary: &'a str,
    key_changes: &'a [String],
    structural_changes: JsonStructure,
}

#[derive(Debug, Default, Serialize)]
struct JsonStructure {
    added: Vec<String>,
    removed: Vec<String>,
    modified: Vec<String>,
}

impl JsonStructure {
    fn from_delta(delta: &StructuralDelta) -> Self {
        Self {
            added: delta.added_only.iter().map(|id| id.to_string()).collect(),
            removed: delta.removed_only.iter().map(|id| id.to_string()).collect(),
            modified: delta.modified.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl<'a> JsonFile<'a> {
    fn from_report(report: &'a FileReport) -> Self {
        let change = &report.change;
        let old_filename = match change.status {
            FileStatus::Renamed => change.old_path.as_deref(),
            _ => None,
        };

        Self {
            filename: change.path(),
            old_filename,
            status: change.status,
            binary: change.is_binary,
            language: report.language,
            purpose: report.purpose.category,
            rule: report.purpose.rule,
            complexity: report.complexity,
            impact: report.impact,
            lines_added: change.lines_added(),
            lines_removed: change.lines_removed(),
            summary: &report.description,
            key_changes: &report.highlights,
            structural_changes: JsonStructure::from_delta(&report.delta),
        }
    }
}

pub(super) fn render_json(report: &Report) -> Result<String> {
    let summary = &report.summary;
    let view = JsonReport {
        overview: &summary.overview,
        statistics: summary.statistics,
        dominant_purpose: summary.dominant_purpose.category,
        file_summaries: summary.per_file.iter().map(JsonFile::from_report).collect(),
        key_changes: &summary.key_changes,
        recommendations: &summary.recommendations,
        warnings: &report.warnings,
    };

    let mut out = serde_json::to_string_pretty(&view)
        .map_err(|e| DiffsumError::OutputError(format!("failed to serialize JSON: {}", e)))?;
    out.push('\n');
    Ok(out)
}
