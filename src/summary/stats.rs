//! Aggregate counts over a diff document.

use serde::Serialize;

use crate::diff::{DiffDocument, FileStatus};

/// File and line counts for a whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeStatistics {
    pub total_files: usize,
    pub files_added: usize,
    pub files_modified: usize,
    pub files_deleted: usize,
    pub files_renamed: usize,
    pub binary_files: usize,
    pub lines_added: usize,
    pub lines_removed: usize,
}

impl ChangeStatistics {
    /// Count files by status and lines by hunk line kind.
    pub fn from_document(document: &DiffDocument) -> Self {
        let mut stats = Self::default();

        for file in &document.files {
            stats.total_files += 1;
            match file.status {
                FileStatus::Added => stats.files_added += 1,
                FileStatus::Modified => stats.files_modified += 1,
                FileStatus::Deleted => stats.files_deleted += 1,
                FileStatus::Renamed => stats.files_renamed += 1,
            }
            if file.is_binary {
                stats.binary_files += 1;
            }
            stats.lines_added += file.lines_added();
            stats.lines_removed += file.lines_removed();
        }

        stats
    }

    pub fn lines_changed(&self) -> usize {
        self.lines_added + self.lines_removed
    }
}
