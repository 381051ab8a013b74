//! Structural analysis of changed lines.
//!
//! Runs a language profile's element matchers over the Added and Removed
//! lines of a file (never Context) and reconciles the two sides into a
//! [`StructuralDelta`].

mod delta;


use std::collections::BTreeSet;

pub use delta::{ElementId, Origin, StructuralDelta, StructuralElement};

use crate::diff::{FileChange, LineKind};
use crate::language::LanguageProfile;

/// Detect every element declared on a changed line, in input order.
///
/// Each matcher contributes at most one element per line. Binary files and
/// files without a profile yield nothing.
pub fn detect_elements(file: &FileChange, profile: Option<&LanguageProfile>) -> Vec<StructuralElement> {
    let Some(profile) = profile else {
        return Vec::new();
    };
    if file.is_binary {
        return Vec::new();
    }

    let mut elements = Vec::new();
    for line in file.hunks.iter().flat_map(|h| &h.lines) {
        let origin = match line.kind {
            LineKind::Added => Origin::Added,
            LineKind::Removed => Origin::Removed,
            LineKind::Context => continue,
        };

        for (kind, name) in profile.elements_in(&line.text) {
            elements.push(StructuralElement {
                kind,
                name: name.to_string(),
                origin,
            });
        }
    }
    elements
}

/// Compute the structural delta for one file.
///
/// Repeated `(kind, name)` pairs on the same side collapse into one element.
pub fn analyze(file: &FileChange, profile: Option<&LanguageProfile>) -> StructuralDelta {
    let mut added = BTreeSet::new();
    let mut removed = BTreeSet::new();

    for element in detect_elements(file, profile) {
        match element.origin {
            Origin::Added => added.insert(element.id()),
            Origin::Removed => removed.insert(element.id()),
        };
    }

    let delta = StructuralDelta::from_sides(added, removed);
    if !delta.is_empty() {
        log::trace!(
            "{}: {} added, {} removed, {} modified",
            file.path(),
            delta.added_only.len(),
            delta.removed_only.len(),
            delta.modified.len()
        );
    }
    delta
}
