//! Purpose classification.
//!
//! Assigns each file a [`ChangeCategory`] from a fixed, ordered rule table
//! (first match wins) and derives the dominant category across files.
//! All signals are weak textual heuristics.

mod rules;
mod signals;


use std::collections::BTreeMap;

use serde::Serialize;

use crate::analyze::StructuralDelta;
use crate::diff::FileChange;
use crate::error::Result;
use crate::language::LanguageProfile;
use crate::summary::ChangeStatistics;

use rules::{Evidence, RULES, category_rank};
use signals::Signals;

/// Probable intent of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCategory {
    FeatureAddition,
    BugFix,
    Refactor,
    LoggingOrDebugging,
    TestChange,
    DocumentationChange,
    DependencyChange,
    Unknown,
}

impl ChangeCategory {
    pub fn label(self) -> &'static str {
        match self {
            ChangeCategory::FeatureAddition => "Feature addition",
            ChangeCategory::BugFix => "Bug fix",
            ChangeCategory::Refactor => "Refactor",
            ChangeCategory::LoggingOrDebugging => "Logging or debugging",
            ChangeCategory::TestChange => "Test change",
            ChangeCategory::DocumentationChange => "Documentation change",
            ChangeCategory::DependencyChange => "Dependency change",
            ChangeCategory::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Purpose {
    pub category: ChangeCategory,
    /// Name of the rule that fired, if any.
    pub rule: Option<&'static str>,
    /// Tie-break rank: lower wins.
    #[serde(skip)]
    pub rank: usize,
}

impl Purpose {
    pub fn unknown() -> Self {
        Self {
            category: ChangeCategory::Unknown,
            rule: None,
            rank: RULES.len(),
        }
    }
}

/// Per-file purpose classifier with its signals compiled once.
#[derive(Debug, Clone)]
pub struct PurposeClassifier {
    signals: Signals,
}

impl PurposeClassifier {
    /// Compile the classifier's path globs and keyword patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            signals: Signals::compile()?,
        })
    }

    /// Classify one file. The first rule in table order that applies wins;
    /// no match yields `Unknown`.
    pub fn classify(
        &self,
        file: &FileChange,
        delta: &StructuralDelta,
        profile: Option<&LanguageProfile>,
    ) -> Purpose {
        let evidence = Evidence {
            file,
            delta,
            profile,
        };

        RULES
            .iter()
            .enumerate()
            .find(|(_, rule)| (rule.applies)(&self.signals, &evidence))
            .map(|(rank, rule)| {
                log::trace!("{}: rule '{}' -> {}", file.path(), rule.name, rule.category);
                Purpose {
                    category: rule.category,
                    rule: Some(rule.name),
                    rank,
                }
            })
            .unwrap_or_else(Purpose::unknown)
    }
}

/// Pick the dominant purpose across files.
///
/// The most frequent category wins; ties go to the category whose first
/// rule comes earliest in the table, with `Unknown` last. No files means
/// `Unknown`.
pub fn classify_overall(purposes: &[Purpose], stats: &ChangeStatistics) -> Purpose {
    if stats.total_files == 0 || purposes.is_empty() {
        return Purpose::unknown();
    }

    let mut counts: BTreeMap<ChangeCategory, usize> = BTreeMap::new();
    for purpose in purposes {
        *counts.entry(purpose.category).or_default() += 1;
    }

    let (category, _) = counts
        .into_iter()
        .map(|(category, count)| (category, (count, category_rank(category))))
        .max_by(|(_, (ca, ra)), (_, (cb, rb))| ca.cmp(cb).then(rb.cmp(ra)))
        .unwrap_or((ChangeCategory::Unknown, (0, RULES.len())));

    Purpose {
        category,
        rule: None,
        rank: category_rank(category),
    }
}
