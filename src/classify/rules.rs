//! The ordered purpose rule table.
//!
//! Rules are evaluated top to bottom and the first one whose predicate holds
//! decides the category. The position of a rule in [`RULES`] is also its
//! rank for tie-breaking across files.

use super::ChangeCategory;
use super::signals::Signals;
use crate::analyze::StructuralDelta;
use crate::diff::{FileChange, FileStatus, LineKind};
use crate::language::{ElementKind, LanguageProfile};

/// Everything a rule may look at for one file.
pub(super) struct Evidence<'a> {
    pub file: &'a FileChange,
    pub delta: &'a StructuralDelta,
    pub profile: Option<&'a LanguageProfile>,
}

impl Evidence<'_> {
    fn path_matches(&self, set: &globset::GlobSet) -> bool {
        self.file.language_paths().any(|p| set.is_match(p))
    }

    fn any_line(&self, kind: LineKind, pred: impl Fn(&str) -> bool) -> bool {
        self.file.lines(kind).any(|l| pred(&l.text))
    }
}

pub(super) struct Rule {
    pub name: &'static str,
    pub category: ChangeCategory,
    pub applies: fn(&Signals, &Evidence<'_>) -> bool,
}

pub(super) const RULES: &[Rule] = &[
    Rule {
        name: "test-path",
        category: ChangeCategory::TestChange,
        applies: test_path,
    },
    Rule {
        name: "docs-path",
        category: ChangeCategory::DocumentationChange,
        applies: docs_path,
    },
    Rule {
        name: "manifest-path",
        category: ChangeCategory::DependencyChange,
        applies: manifest_path,
    },
    Rule {
        name: "logging",
        category: ChangeCategory::LoggingOrDebugging,
        applies: logging,
    },
    Rule {
        name: "bug-fix",
        category: ChangeCategory::BugFix,
        applies: bug_fix,
    },
    Rule {
        name: "comment-only",
        category: ChangeCategory::DocumentationChange,
        applies: comment_only,
    },
    Rule {
        name: "new-elements",
        category: ChangeCategory::FeatureAddition,
        applies: new_elements,
    },
    Rule {
        name: "reworked-elements",
        category: ChangeCategory::Refactor,
        applies: reworked_elements,
    },
    Rule {
        name: "import-churn",
        category: ChangeCategory::Refactor,
        applies: import_churn,
    },
    Rule {
        name: "new-imports",
        category: ChangeCategory::DependencyChange,
        applies: new_imports,
    },
];

fn test_path(s: &Signals, e: &Evidence<'_>) -> bool {
    e.path_matches(&s.test_paths)
}

fn docs_path(s: &Signals, e: &Evidence<'_>) -> bool {
    e.path_matches(&s.doc_paths)
}

fn manifest_path(s: &Signals, e: &Evidence<'_>) -> bool {
    e.path_matches(&s.manifest_paths)
}

/// Every non-blank changed line is a comment, and there is at least one.
fn comment_only(_: &Signals, e: &Evidence<'_>) -> bool {
    let Some(profile) = e.profile else {
        return false;
    };

    let mut changed = e
        .file
        .hunks
        .iter()
        .flat_map(|h| &h.lines)
        .filter(|l| l.kind != LineKind::Context && !l.text.trim().is_empty())
        .peekable();

    changed.peek().is_some() && changed.all(|l| profile.is_comment(&l.text))
}

fn bug_fix(s: &Signals, e: &Evidence<'_>) -> bool {
    // Whole-file additions and deletions leave nothing fixed in place.
    if matches!(e.file.status, FileStatus::Added | FileStatus::Deleted) {
        return false;
    }

    e.any_line(LineKind::Added, |t| {
        s.fix_keywords.is_match(t) || s.error_handling.is_match(t)
    }) || e.any_line(LineKind::Removed, |t| s.debt_markers.is_match(t))
}

fn logging(s: &Signals, e: &Evidence<'_>) -> bool {
    e.any_line(LineKind::Added, |t| s.logging.is_match(t))
}

/// An Added-only function or class, and nothing removed outright.
fn new_elements(_: &Signals, e: &Evidence<'_>) -> bool {
    (e.delta.has_added_only(ElementKind::Function) || e.delta.has_added_only(ElementKind::Class))
        && e.delta.removed_only.is_empty()
}

fn reworked_elements(_: &Signals, e: &Evidence<'_>) -> bool {
    !e.delta.modified.is_empty() && e.delta.added_only.is_empty()
}

/// Imports were both added and removed, and nothing else changed shape.
fn import_churn(_: &Signals, e: &Evidence<'_>) -> bool {
    e.delta.only_kind(ElementKind::Import) && !e.delta.added.is_empty() && !e.delta.removed.is_empty()
}

fn new_imports(_: &Signals, e: &Evidence<'_>) -> bool {
    e.delta.only_kind(ElementKind::Import) && !e.delta.added_only.is_empty() && e.delta.removed.is_empty()
}

/// Rank of the earliest rule producing `category`; `Unknown` ranks last.
pub(super) fn category_rank(category: ChangeCategory) -> usize {
    RULES
        .iter()
        .position(|r| r.category == category)
        .unwrap_or(RULES.len())
}
