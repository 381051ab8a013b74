//! Summary aggregation.
//!
//! Combines per-file analysis into an [`OverallSummary`]: statistics,
//! per-file reports, ordered key changes and recommendations. Aggregation
//! is a pure function of its inputs.

mod complexity;
mod describe;
mod impact;
mod stats;


use serde::Serialize;

pub use complexity::{MAX_COMPLEXITY, complexity_score};
pub use impact::{ChangeScale, ImpactAssessment};
pub use stats::ChangeStatistics;

use crate::analyze::StructuralDelta;
use crate::classify::{Purpose, classify_overall};
use crate::diff::{DiffDocument, FileChange};
use crate::language::LanguageId;

/// Default score at or above which a change counts as high complexity.
pub const DEFAULT_COMPLEXITY_THRESHOLD: u8 = 7;

/// Knobs for aggregation, taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    pub complexity_threshold: u8,
    pub include_key_changes: bool,
    pub include_recommendations: bool,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            complexity_threshold: DEFAULT_COMPLEXITY_THRESHOLD,
            include_key_changes: true,
            include_recommendations: true,
        }
    }
}

/// Everything known about one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub change: FileChange,
    pub language: Option<LanguageId>,
    pub delta: StructuralDelta,
    pub purpose: Purpose,
    pub complexity: u8,
    pub impact: ImpactAssessment,
    pub description: String,
    pub highlights: Vec<String>,
}

/// Result of summarizing a whole diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverallSummary {
    pub overview: String,
    pub statistics: ChangeStatistics,
    pub dominant_purpose: Purpose,
    pub key_changes: Vec<String>,
    pub recommendations: Vec<String>,
    pub per_file: Vec<FileReport>,
}

impl OverallSummary {
    pub fn is_empty(&self) -> bool {
        self.per_file.is_empty()
    }
}

/// Aggregate per-file results into an [`OverallSummary`].
///
/// `deltas`, `purposes` and `languages` are indexed like
/// `document.files`; a missing entry counts as an empty delta, an unknown
/// purpose or an unresolved language.
pub fn aggregate(
    document: &DiffDocument,
    deltas: &[StructuralDelta],
    purposes: &[Purpose],
    languages: &[Option<LanguageId>],
    options: &AggregateOptions,
) -> OverallSummary {
    let statistics = ChangeStatistics::from_document(document);
    let threshold = options.complexity_threshold;

    let per_file: Vec<FileReport> = document
        .files
        .iter()
        .enumerate()
        .map(|(idx, file)| {
            let delta = deltas.get(idx).cloned().unwrap_or_default();
            let purpose = purposes.get(idx).copied().unwrap_or_else(Purpose::unknown);
            let language = languages.get(idx).copied().flatten();
            let complexity = complexity_score(file, &delta, language);
            let impact = ImpactAssessment::assess(file, &delta);

            FileReport {
                description: describe::describe_file(file, &delta, &purpose),
                highlights: describe::highlights(&delta, complexity, threshold, &impact),
                change: file.clone(),
                language,
                delta,
                purpose,
                complexity,
                impact,
            }
        })
        .collect();

    let file_purposes: Vec<Purpose> = per_file.iter().map(|r| r.purpose).collect();
    let dominant_purpose = classify_overall(&file_purposes, &statistics);

    let key_changes = if options.include_key_changes {
        describe::key_changes(&per_file)
    } else {
        Vec::new()
    };
    let recommendations = if options.include_recommendations {
        describe::recommendations(&per_file, &statistics, threshold)
    } else {
        Vec::new()
    };

    OverallSummary {
        overview: describe::overview(&statistics, &dominant_purpose),
        statistics,
        dominant_purpose,
        key_changes,
        recommendations,
        per_file,
    }
}
