//! Pipeline wiring: parse, analyze, classify, aggregate.
//!
//! A [`SummaryEngine`] holds only immutable, precompiled state, so a single
//! engine can serve any number of runs and separate runs share nothing
//! mutable.

use crate::analyze::analyze;
use crate::classify::PurposeClassifier;
use crate::config::Config;
use crate::diff::{self, ParseWarning};
use crate::error::Result;
use crate::language::LanguageRegistry;
use crate::summary::{AggregateOptions, OverallSummary, aggregate};

/// Output of one run: the summary plus any recovered parse anomalies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub summary: OverallSummary,
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug, Clone)]
pub struct SummaryEngine {
    registry: LanguageRegistry,
    classifier: PurposeClassifier,
    options: AggregateOptions,
}

impl SummaryEngine {
    pub fn new(
        registry: LanguageRegistry,
        classifier: PurposeClassifier,
        options: AggregateOptions,
    ) -> Self {
        Self {
            registry,
            classifier,
            options,
        }
    }

    /// Build an engine from configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(SummaryEngine)` - Built-in tables compiled and overrides applied
    /// * `Err(DiffsumError)` - A pattern failed to compile or an override names an unknown language
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = LanguageRegistry::builtin()?.with_overrides(&config.language_overrides)?;
        let classifier = PurposeClassifier::new()?;
        let options = AggregateOptions {
            complexity_threshold: config.complexity_threshold,
            include_key_changes: config.include_key_changes,
            include_recommendations: config.include_recommendations,
        };
        Ok(Self::new(registry, classifier, options))
    }

    /// Summarize diff text. Never fails: anomalies come back as warnings.
    pub fn run(&self, text: &str) -> Report {
        let parsed = diff::parse(text);
        let document = parsed.document;

        let mut deltas = Vec::with_capacity(document.len());
        let mut purposes = Vec::with_capacity(document.len());
        let mut languages = Vec::with_capacity(document.len());

        for file in &document.files {
            let profile = file
                .language_paths()
                .find_map(|path| self.registry.resolve(path));
            let delta = analyze(file, profile);
            purposes.push(self.classifier.classify(file, &delta, profile));
            languages.push(profile.map(|p| p.id));
            deltas.push(delta);
        }

        log::debug!(
            "analyzed {} file(s); {} with a known language",
            document.len(),
            languages.iter().filter(|l| l.is_some()).count()
        );

        let summary = aggregate(&document, &deltas, &purposes, &languages, &self.options);
        log::info!(
            "summarized {} file(s), +{} -{} lines, dominant purpose: {}",
            summary.statistics.total_files,
            summary.statistics.lines_added,
            summary.statistics.lines_removed,
            summary.dominant_purpose.category
        );

        Report {
            summary,
            warnings: parsed.warnings,
        }
    }
}
