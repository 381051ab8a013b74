//! Structural element types and the per-file delta.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::language::ElementKind;

/// Which side of the diff an element was seen on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Added,
    Removed,
}

/// Identity of a structural element: two elements are the same if their
/// kind and name match, regardless of where they appear.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId {
    pub kind: ElementKind,
    pub name: String,
}

impl ElementId {
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind, self.name)
    }
}

/// An element detected on one changed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralElement {
    pub kind: ElementKind,
    pub name: String,
    pub origin: Origin,
}

impl StructuralElement {
    pub fn id(&self) -> ElementId {
        ElementId::new(self.kind, self.name.clone())
    }
}

/// Structural changes for one file.
///
/// `added` and `removed` hold everything seen on each side. The remaining
/// three sets partition their union: an element present on both sides is
/// `modified`, otherwise it is `added_only` or `removed_only`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuralDelta {
    #[serde(skip)]
    pub added: BTreeSet<ElementId>,
    #[serde(skip)]
    pub removed: BTreeSet<ElementId>,
    pub added_only: BTreeSet<ElementId>,
    pub removed_only: BTreeSet<ElementId>,
    pub modified: BTreeSet<ElementId>,
}

impl StructuralDelta {
    /// Reconcile the two sides into a delta.
    pub fn from_sides(added: BTreeSet<ElementId>, removed: BTreeSet<ElementId>) -> Self {
        let modified: BTreeSet<ElementId> = added.intersection(&removed).cloned().collect();
        let added_only = added.difference(&removed).cloned().collect();
        let removed_only = removed.difference(&added).cloned().collect();

        Self {
            added,
            removed,
            added_only,
            removed_only,
            modified,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Number of distinct elements touched.
    pub fn change_count(&self) -> usize {
        self.added_only.len() + self.removed_only.len() + self.modified.len()
    }

    pub fn has_added_only(&self, kind: ElementKind) -> bool {
        self.added_only.iter().any(|e| e.kind == kind)
    }

    /// Whether every touched element is of the given kind.
    pub fn only_kind(&self, kind: ElementKind) -> bool {
        !self.is_empty()
            && self
                .added
                .iter()
                .chain(&self.removed)
                .all(|e| e.kind == kind)
    }

    /// Whether a class or type definition was added or modified.
    pub fn touches_types(&self) -> bool {
        self.added
            .iter()
            .any(|e| matches!(e.kind, ElementKind::Class | ElementKind::Type))
    }
}
