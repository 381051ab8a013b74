//! Parsed diff records.

use serde::Serialize;

/// Path used by the unified diff format for "no file" (added/deleted files).
pub const NO_FILE: &str = "/dev/null";

/// How a file changed between the two sides of the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl FileStatus {
    /// Derive the status purely from which paths are present.
    ///
    /// Both paths absent cannot come out of the parser; it is reported as
    /// `Modified`.
    pub fn from_paths(old_path: Option<&str>, new_path: Option<&str>) -> Self {
        match (old_path, new_path) {
            (None, Some(_)) => FileStatus::Added,
            (Some(_), None) => FileStatus::Deleted,
            (Some(old), Some(new)) if old != new => FileStatus::Renamed,
            _ => FileStatus::Modified,
        }
    }

    /// Ordering used for key changes: Added, Deleted, Renamed, Modified.
    pub fn priority(self) -> u8 {
        match self {
            FileStatus::Added => 0,
            FileStatus::Deleted => 1,
            FileStatus::Renamed => 2,
            FileStatus::Modified => 3,
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FileStatus::Added => "added",
            FileStatus::Modified => "modified",
            FileStatus::Deleted => "deleted",
            FileStatus::Renamed => "renamed",
        };
        write!(f, "{}", s)
    }
}

/// Role of a single line inside a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Context,
    Added,
    Removed,
}

/// A single line of a hunk body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HunkLine {
    pub kind: LineKind,
    /// Line text without the leading `+`/`-`/space marker.
    pub text: String,
    /// Set when a `\ No newline at end of file` marker followed this line.
    pub no_newline_at_eof: bool,
}

impl HunkLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            no_newline_at_eof: false,
        }
    }
}

/// A contiguous block of changes with its range header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    /// First line on the old side (1-based, 0 for an empty side).
    pub old_start: usize,
    pub old_count: usize,
    /// First line on the new side (1-based, 0 for an empty side).
    pub new_start: usize,
    pub new_count: usize,
    /// Optional heading after the closing `@@` (usually the enclosing function).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub section: String,
    pub lines: Vec<HunkLine>,
}

impl Hunk {
    pub fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }

    /// Whether the body agrees with the declared ranges.
    pub fn is_consistent(&self) -> bool {
        let context = self.count(LineKind::Context);
        context + self.count(LineKind::Removed) == self.old_count
            && context + self.count(LineKind::Added) == self.new_count
    }
}

/// All changes to a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    /// Path before the change; `None` for added files.
    pub old_path: Option<String>,
    /// Path after the change; `None` for deleted files.
    pub new_path: Option<String>,
    pub status: FileStatus,
    pub is_binary: bool,
    pub hunks: Vec<Hunk>,
}

impl FileChange {
    /// The path to show for this file: the new path, or the old one for deletions.
    pub fn path(&self) -> &str {
        self.new_path
            .as_deref()
            .or(self.old_path.as_deref())
            .unwrap_or(NO_FILE)
    }

    /// Candidate paths for language resolution, new side first.
    pub fn language_paths(&self) -> impl Iterator<Item = &str> {
        self.new_path.as_deref().into_iter().chain(self.old_path.as_deref())
    }

    pub fn lines(&self, kind: LineKind) -> impl Iterator<Item = &HunkLine> {
        self.hunks
            .iter()
            .flat_map(|h| h.lines.iter())
            .filter(move |l| l.kind == kind)
    }

    pub fn lines_added(&self) -> usize {
        self.lines(LineKind::Added).count()
    }

    pub fn lines_removed(&self) -> usize {
        self.lines(LineKind::Removed).count()
    }
}

/// Ordered file changes in the order they appear in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffDocument {
    pub files: Vec<FileChange>,
}

impl DiffDocument {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}
