//! Per-file impact assessment.
//!
//! Impact is separate from complexity: it looks at how much of a file's
//! surface moved, not how hard the change is to read.

use serde::Serialize;

use crate::analyze::{ElementId, StructuralDelta};
use crate::diff::FileChange;
use crate::language::ElementKind;

/// Lines changed above which a change is medium scale.
const MEDIUM_SCALE_LINES: usize = 20;
/// Lines changed above which a change is large scale.
const LARGE_SCALE_LINES: usize = 100;

/// How many lines a change touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeScale {
    Small,
    Medium,
    Large,
}

impl ChangeScale {
    pub fn from_lines(lines: usize) -> Self {
        match lines {
            n if n > LARGE_SCALE_LINES => ChangeScale::Large,
            n if n > MEDIUM_SCALE_LINES => ChangeScale::Medium,
            _ => ChangeScale::Small,
        }
    }
}

/// What a file change may affect beyond itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactAssessment {
    pub scale: ChangeScale,
    /// Touched functions, classes and types whose names are public.
    pub public_elements: usize,
    /// Touched functions, classes and types named with a leading `_`.
    pub internal_elements: usize,
    /// A public element was removed or modified, so callers may break.
    pub public_api_changed: bool,
    pub class_structure: bool,
    pub dependencies: bool,
}

impl ImpactAssessment {
    pub fn assess(file: &FileChange, delta: &StructuralDelta) -> Self {
        let touched = || {
            delta
                .added_only
                .iter()
                .chain(&delta.removed_only)
                .chain(&delta.modified)
        };

        let (internal, public): (Vec<&ElementId>, Vec<&ElementId>) = touched()
            .filter(|id| id.kind != ElementKind::Import)
            .partition(|id| is_internal(id));

        let public_api_changed = delta
            .removed_only
            .iter()
            .chain(&delta.modified)
            .any(|id| id.kind != ElementKind::Import && !is_internal(id));

        Self {
            scale: ChangeScale::from_lines(file.lines_added() + file.lines_removed()),
            public_elements: public.len(),
            internal_elements: internal.len(),
            public_api_changed,
            class_structure: touched().any(|id| id.kind == ElementKind::Class),
            dependencies: touched().any(|id| id.kind == ElementKind::Import),
        }
    }

    pub fn is_high(&self) -> bool {
        self.scale == ChangeScale::Large
    }
}

fn is_internal(id: &ElementId) -> bool {
    id.name.starts_with('_')
}
