//! Recoverable parse anomalies.

use serde::Serialize;

/// Category of a recovered parse anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// `@@` line whose ranges could not be parsed; its body was skipped.
    MalformedHunkHeader,
    /// Hunk body disagrees with its declared line counts.
    HunkCountMismatch,
    /// Input ended before the hunk body was complete.
    TruncatedHunk,
    /// Hunk header with no enclosing file section.
    OrphanHunk,
    /// `\ No newline at end of file` with no preceding hunk line.
    OrphanNoNewlineMarker,
    /// Line inside a file section that is neither a header nor a body line.
    UnrecognizedLine,
}

/// A recoverable anomaly found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    /// 1-based line number in the input.
    pub line: usize,
    pub kind: WarningKind,
    pub message: String,
}

impl ParseWarning {
    pub fn new(line: usize, kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}
