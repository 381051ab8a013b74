//! Human-readable text derived from the analysis results.

use std::collections::BTreeMap;

use super::{FileReport, ImpactAssessment};
use super::stats::ChangeStatistics;
use crate::analyze::{ElementId, StructuralDelta};
use crate::classify::{ChangeCategory, Purpose};
use crate::diff::{FileChange, FileStatus};
use crate::language::ElementKind;

/// Complexity at which a change is called out as medium.
const MEDIUM_COMPLEXITY: u8 = 4;

/// Total changed lines above which a split is suggested.
const LARGE_CHANGE_LINES: usize = 500;

const MAX_RECOMMENDATIONS: usize = 8;

/// One-line description of a file change.
///
/// Example: `Modified 'src/app.py' - (+3 lines, -1 lines) - added function load - Purpose: Bug fix`
pub(super) fn describe_file(file: &FileChange, delta: &StructuralDelta, purpose: &Purpose) -> String {
    let mut parts = vec![match file.status {
        FileStatus::Added => format!("Added new file '{}'", file.path()),
        FileStatus::Deleted => format!("Deleted file '{}'", file.path()),
        FileStatus::Renamed => format!(
            "Renamed '{}' to '{}'",
            file.old_path.as_deref().unwrap_or_default(),
            file.path()
        ),
        FileStatus::Modified => format!("Modified '{}'", file.path()),
    }];

    if file.is_binary {
        parts.push("(binary)".to_string());
    } else {
        let (added, removed) = (file.lines_added(), file.lines_removed());
        let mut counts = Vec::new();
        if added > 0 {
            counts.push(format!("+{} lines", added));
        }
        if removed > 0 {
            counts.push(format!("-{} lines", removed));
        }
        if !counts.is_empty() {
            parts.push(format!("({})", counts.join(", ")));
        }
    }

    let structure = describe_structure(delta);
    if !structure.is_empty() {
        parts.push(structure);
    }

    if purpose.category != ChangeCategory::Unknown {
        parts.push(format!("Purpose: {}", purpose.category));
    }

    parts.join(" - ")
}

/// Elements grouped by kind, e.g. `added function load, modified 2 functions; added import os`.
fn describe_structure(delta: &StructuralDelta) -> String {
    let mut groups: BTreeMap<ElementKind, Vec<String>> = BTreeMap::new();

    for (verb, set) in [
        ("added", &delta.added_only),
        ("removed", &delta.removed_only),
        ("modified", &delta.modified),
    ] {
        let mut by_kind: BTreeMap<ElementKind, Vec<&ElementId>> = BTreeMap::new();
        for id in set {
            by_kind.entry(id.kind).or_default().push(id);
        }
        for (kind, ids) in by_kind {
            let text = match ids.as_slice() {
                [only] => format!("{} {} {}", verb, kind, only.name),
                many => format!("{} {} {}", verb, many.len(), plural(kind)),
            };
            groups.entry(kind).or_default().push(text);
        }
    }

    groups
        .into_values()
        .map(|texts| texts.join(", "))
        .collect::<Vec<_>>()
        .join("; ")
}

fn plural(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Function => "functions",
        ElementKind::Class => "classes",
        ElementKind::Import => "imports",
        ElementKind::Type => "types",
    }
}

/// Element-level highlights plus complexity and impact callouts.
pub(super) fn highlights(
    delta: &StructuralDelta,
    complexity: u8,
    threshold: u8,
    impact: &ImpactAssessment,
) -> Vec<String> {
    let mut out = Vec::new();

    for id in &delta.added_only {
        out.push(format!("Added {}", id));
    }
    for id in &delta.removed_only {
        out.push(format!("Removed {}", id));
    }
    for id in &delta.modified {
        out.push(format!("Modified {}", id));
    }

    if complexity >= threshold {
        out.push(format!("High complexity change (score: {}/10)", complexity));
    } else if complexity >= MEDIUM_COMPLEXITY {
        out.push(format!("Medium complexity change (score: {}/10)", complexity));
    }

    if impact.is_high() {
        out.push("High impact change - review carefully".to_string());
    }

    out
}

/// One key-change entry per file, ordered by status priority then path.
pub(super) fn key_changes(reports: &[FileReport]) -> Vec<String> {
    let mut ordered: Vec<&FileReport> = reports.iter().collect();
    ordered.sort_by(|a, b| {
        a.change
            .status
            .priority()
            .cmp(&b.change.status.priority())
            .then_with(|| a.change.path().cmp(b.change.path()))
    });

    ordered.into_iter().map(key_change).collect()
}

fn key_change(report: &FileReport) -> String {
    let file = &report.change;
    let base = match file.status {
        FileStatus::Added => format!("New file: {}", file.path()),
        FileStatus::Deleted => format!("Deleted file: {}", file.path()),
        FileStatus::Renamed => format!(
            "Renamed: {} -> {}",
            file.old_path.as_deref().unwrap_or_default(),
            file.path()
        ),
        FileStatus::Modified => format!("Modified: {}", file.path()),
    };

    match report.purpose.category {
        ChangeCategory::Unknown => base,
        category => format!("{} ({})", base, category),
    }
}

/// Recommendations from a fixed, ordered list of heuristics.
pub(super) fn recommendations(
    reports: &[FileReport],
    stats: &ChangeStatistics,
    threshold: u8,
) -> Vec<String> {
    let has = |category: ChangeCategory| reports.iter().any(|r| r.purpose.category == category);
    let high_complexity = reports.iter().filter(|r| r.complexity >= threshold).count();
    let touches_imports = reports.iter().any(|r| {
        r.delta
            .added
            .iter()
            .chain(&r.delta.removed)
            .any(|e| e.kind == ElementKind::Import)
    });

    let mut out = Vec::new();

    if high_complexity > 0 {
        out.push(format!(
            "Review {} high-complexity change{} carefully",
            high_complexity,
            if high_complexity == 1 { "" } else { "s" }
        ));
    }
    if has(ChangeCategory::FeatureAddition) && !has(ChangeCategory::TestChange) {
        out.push("Consider adding tests for the new functionality".to_string());
    }
    if has(ChangeCategory::FeatureAddition) && !has(ChangeCategory::DocumentationChange) {
        out.push("Consider updating documentation for new features".to_string());
    }
    if reports.iter().any(|r| r.impact.public_api_changed) {
        out.push("API changes detected - ensure backward compatibility".to_string());
    }
    if has(ChangeCategory::BugFix) && !has(ChangeCategory::TestChange) {
        out.push("Add a regression test that covers the fix".to_string());
    }
    if has(ChangeCategory::LoggingOrDebugging) {
        out.push("Check that new logging and debug output is meant to ship".to_string());
    }
    if stats.files_deleted > 0 {
        out.push("Verify that nothing still depends on the deleted files".to_string());
    }
    if stats.files_renamed > 0 {
        out.push("Update references and import paths for renamed files".to_string());
    }
    if stats.lines_changed() > LARGE_CHANGE_LINES {
        out.push("Large-scale changes - consider breaking into smaller commits".to_string());
    }
    if has(ChangeCategory::DependencyChange) || touches_imports {
        out.push("Dependency changes detected - verify build and deployment".to_string());
    }

    out.truncate(MAX_RECOMMENDATIONS);
    out
}

/// Overview sentence for the whole document.
pub(super) fn overview(stats: &ChangeStatistics, dominant: &Purpose) -> String {
    if stats.total_files == 0 {
        return "No changes detected".to_string();
    }

    let mut parts = vec![if stats.total_files == 1 {
        "1 file changed".to_string()
    } else {
        format!("{} files changed", stats.total_files)
    }];

    for (count, label) in [
        (stats.files_added, "added"),
        (stats.files_modified, "modified"),
        (stats.files_deleted, "deleted"),
        (stats.files_renamed, "renamed"),
    ] {
        if count > 0 {
            parts.push(format!("{} {}", count, label));
        }
    }

    let mut sentence = parts.join(", ");

    let mut lines = Vec::new();
    if stats.lines_added > 0 {
        lines.push(format!("+{}", stats.lines_added));
    }
    if stats.lines_removed > 0 {
        lines.push(format!("-{}", stats.lines_removed));
    }
    if !lines.is_empty() {
        sentence.push_str(&format!(" ({} lines)", lines.join(", ")));
    }
    sentence.push('.');

    if dominant.category != ChangeCategory::Unknown {
        sentence.push_str(&format!(" Primary focus: {}.", dominant.category));
    }

    sentence
}
