//! Core diff parsing logic.
//!
//! The parser is a single forward pass over the input lines with at most
//! two lines of lookahead. It never fails: anything it cannot make sense of
//! is skipped and reported as a [`ParseWarning`].

use super::helpers::{
    normalize_path, parse_binary_line, parse_diff_git_line, parse_file_marker, parse_hunk_header,
};
use super::model::{DiffDocument, FileChange, FileStatus, Hunk, HunkLine, LineKind};
use super::warnings::{ParseWarning, WarningKind};

/// Result of parsing a diff: the document plus any recovered anomalies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDiff {
    pub document: DiffDocument,
    pub warnings: Vec<ParseWarning>,
}

/// Parse unified diff text into a [`DiffDocument`].
///
/// Empty or whitespace-only input yields an empty document and no warnings.
///
/// # Example
///
/// ```ignore
/// let parsed = parse("diff --git a/x.py b/x.py\n--- a/x.py\n+++ b/x.py\n@@ -1 +1,2 @@\n a = 1\n+b = 2\n");
/// assert_eq!(parsed.document.files.len(), 1);
/// assert!(parsed.warnings.is_empty());
/// ```
pub fn parse(text: &str) -> ParsedDiff {
    let mut parser = DiffParser::default();
    let lines: Vec<&str> = text.lines().collect();

    for (idx, line) in lines.iter().enumerate() {
        let ahead = Lookahead {
            next: lines.get(idx + 1).copied(),
            after: lines.get(idx + 2).copied(),
        };
        parser.feed(idx + 1, line, ahead);
    }

    let parsed = parser.finish();
    log::debug!(
        "parsed {} file section(s) with {} warning(s)",
        parsed.document.files.len(),
        parsed.warnings.len()
    );
    parsed
}

/// The two lines following the current one.
#[derive(Debug, Clone, Copy)]
struct Lookahead<'a> {
    next: Option<&'a str>,
    after: Option<&'a str>,
}

impl Lookahead<'_> {
    /// A `---`/`+++` pair starts here and is followed by a hunk header.
    fn opens_section_with_hunk(&self, line: &str) -> bool {
        starts_file_markers(line, self.next) && self.after.is_some_and(|a| a.starts_with("@@"))
    }
}

/// What to do with lines that are not headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    /// Between headers: metadata lines are interpreted.
    #[default]
    Header,
    /// After a malformed hunk header: body lines are dropped.
    SkipHunkBody,
    /// Inside a `GIT binary patch` payload.
    SkipBinaryPatch,
}

/// A file section being assembled.
#[derive(Debug)]
struct Section {
    old_path: Option<String>,
    new_path: Option<String>,
    is_binary: bool,
    hunks: Vec<Hunk>,
    /// Set once the `+++` marker has been consumed.
    saw_markers: bool,
}

impl Section {
    fn new(old_path: Option<String>, new_path: Option<String>) -> Self {
        Self {
            old_path,
            new_path,
            is_binary: false,
            hunks: Vec::new(),
            saw_markers: false,
        }
    }

    /// A `---`/`+++` pair can only belong to a section that has not seen one yet.
    fn accepts_markers(&self) -> bool {
        !self.saw_markers && self.hunks.is_empty() && !self.is_binary
    }

    fn into_file_change(self) -> FileChange {
        let status = FileStatus::from_paths(self.old_path.as_deref(), self.new_path.as_deref());
        FileChange {
            old_path: self.old_path,
            new_path: self.new_path,
            status,
            is_binary: self.is_binary,
            hunks: self.hunks,
        }
    }
}

/// A hunk whose body is still being read.
#[derive(Debug)]
struct OpenHunk {
    hunk: Hunk,
    header_line: usize,
    old_remaining: usize,
    new_remaining: usize,
}

impl OpenHunk {
    fn exhausted(&self) -> bool {
        self.old_remaining == 0 && self.new_remaining == 0
    }

    fn push(&mut self, kind: LineKind, text: &str) {
        match kind {
            LineKind::Context => {
                self.old_remaining = self.old_remaining.saturating_sub(1);
                self.new_remaining = self.new_remaining.saturating_sub(1);
            }
            LineKind::Added => self.new_remaining = self.new_remaining.saturating_sub(1),
            LineKind::Removed => self.old_remaining = self.old_remaining.saturating_sub(1),
        }
        self.hunk.lines.push(HunkLine::new(kind, text));
    }

    /// Attach a `\ No newline at end of file` marker to the last line read.
    fn mark_no_newline(&mut self) -> bool {
        match self.hunk.lines.last_mut() {
            Some(last) => {
                last.no_newline_at_eof = true;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Default)]
struct DiffParser {
    files: Vec<FileChange>,
    warnings: Vec<ParseWarning>,
    section: Option<Section>,
    hunk: Option<OpenHunk>,
    mode: Mode,
}

impl DiffParser {
    fn feed(&mut self, line_no: usize, line: &str, ahead: Lookahead<'_>) {
        let next = ahead.next;
        if let Some(rest) = line.strip_prefix("diff --git ") {
            self.start_git_section(line_no, rest);
            return;
        }

        if self.hunk.is_some() {
            if !self.feed_hunk_body(line_no, line, ahead) {
                return;
            }
        } else if self.mode != Mode::Header && self.skip_line(line, next) {
            return;
        }

        self.feed_header(line_no, line, next);
    }

    /// Consume a line as part of the open hunk.
    ///
    /// Returns `true` when the hunk was closed and the line still needs
    /// header handling. A marker pair ends the hunk once its counts are
    /// used up, or at any point when a hunk header follows the pair.
    fn feed_hunk_body(&mut self, line_no: usize, line: &str, ahead: Lookahead<'_>) -> bool {
        let Some(open) = self.hunk.as_mut() else {
            return true;
        };
        let exhausted = open.exhausted();

        let next_section = (exhausted && starts_file_markers(line, ahead.next))
            || ahead.opens_section_with_hunk(line);
        if line.starts_with("@@") || next_section {
            self.close_hunk(false);
            return true;
        }

        // format-patch signature separator
        if exhausted && line == "-- " {
            self.finish_section();
            return false;
        }

        match line.as_bytes().first() {
            Some(b'+') => open.push(LineKind::Added, &line[1..]),
            Some(b'-') => open.push(LineKind::Removed, &line[1..]),
            Some(b' ') => open.push(LineKind::Context, &line[1..]),
            Some(b'\\') => {
                if !open.mark_no_newline() {
                    self.warn(
                        line_no,
                        WarningKind::OrphanNoNewlineMarker,
                        "no-newline marker with no preceding line",
                    );
                }
            }
            None if !exhausted => open.push(LineKind::Context, ""),
            _ => {
                self.close_hunk(false);
                return true;
            }
        }

        false
    }

    /// Drop a line while skipping a malformed hunk body or binary payload.
    ///
    /// Returns `false` when the line ends the skipped region.
    fn skip_line(&mut self, line: &str, next: Option<&str>) -> bool {
        if starts_file_markers(line, next) {
            self.mode = Mode::Header;
            return false;
        }

        match self.mode {
            Mode::SkipHunkBody => {
                let body = line.is_empty() || matches!(line.as_bytes()[0], b'+' | b'-' | b' ' | b'\\');
                if body {
                    return true;
                }
                self.mode = Mode::Header;
                false
            }
            Mode::SkipBinaryPatch => true,
            Mode::Header => false,
        }
    }

    fn feed_header(&mut self, line_no: usize, line: &str, next: Option<&str>) {
        if line.starts_with("@@") {
            self.start_hunk(line_no, line);
            return;
        }

        if let Some(rest) = line.strip_prefix("--- ")
            && next.is_some_and(|n| n.starts_with("+++ "))
        {
            let old_path = parse_file_marker(rest);
            match self.section.as_mut() {
                Some(section) if section.accepts_markers() => section.old_path = old_path,
                _ => {
                    self.finish_section();
                    self.section = Some(Section::new(old_path, None));
                }
            }
            return;
        }

        if let Some(rest) = line.strip_prefix("+++ ")
            && let Some(section) = self.section.as_mut()
            && !section.saw_markers
        {
            section.new_path = parse_file_marker(rest);
            section.saw_markers = true;
            return;
        }

        if let Some((old, new)) = parse_binary_line(line) {
            match self.section.as_mut() {
                Some(section) if section.hunks.is_empty() => {
                    section.old_path = old;
                    section.new_path = new;
                    section.is_binary = true;
                }
                _ => {
                    self.finish_section();
                    let mut section = Section::new(old, new);
                    section.is_binary = true;
                    self.section = Some(section);
                }
            }
            return;
        }

        let Some(section) = self.section.as_mut() else {
            if !line.trim().is_empty() {
                log::trace!("ignoring preamble line {}", line_no);
            }
            return;
        };

        if line == "GIT binary patch" {
            section.is_binary = true;
            self.mode = Mode::SkipBinaryPatch;
        } else if let Some(path) = line
            .strip_prefix("rename from ")
            .or_else(|| line.strip_prefix("copy from "))
        {
            section.old_path = Some(normalize_path(path));
        } else if let Some(path) = line
            .strip_prefix("rename to ")
            .or_else(|| line.strip_prefix("copy to "))
        {
            section.new_path = Some(normalize_path(path));
        } else if line.starts_with("new file mode") {
            section.old_path = None;
        } else if line.starts_with("deleted file mode") {
            section.new_path = None;
        } else if is_ignored_metadata(line) || line.trim().is_empty() {
            // nothing to record
        } else {
            self.warn(
                line_no,
                WarningKind::UnrecognizedLine,
                format!("unrecognized line in file section: {}", truncate(line)),
            );
        }
    }

    fn start_git_section(&mut self, line_no: usize, rest: &str) {
        self.finish_section();

        match parse_diff_git_line(rest) {
            Some((old, new)) => self.section = Some(Section::new(Some(old), Some(new))),
            None => {
                self.warn(
                    line_no,
                    WarningKind::UnrecognizedLine,
                    format!("could not read paths from file header: {}", truncate(rest)),
                );
                self.section = Some(Section::new(None, None));
            }
        }
    }

    fn start_hunk(&mut self, line_no: usize, line: &str) {
        if self.section.is_none() {
            self.warn(
                line_no,
                WarningKind::OrphanHunk,
                "hunk header outside of a file section",
            );
            self.mode = Mode::SkipHunkBody;
            return;
        }

        let Some(header) = parse_hunk_header(line) else {
            self.warn(
                line_no,
                WarningKind::MalformedHunkHeader,
                format!("malformed hunk header: {}", truncate(line)),
            );
            self.mode = Mode::SkipHunkBody;
            return;
        };

        self.mode = Mode::Header;
        self.hunk = Some(OpenHunk {
            old_remaining: header.old_count,
            new_remaining: header.new_count,
            header_line: line_no,
            hunk: Hunk {
                old_start: header.old_start,
                old_count: header.old_count,
                new_start: header.new_start,
                new_count: header.new_count,
                section: header.section,
                lines: Vec::new(),
            },
        });
    }

    fn close_hunk(&mut self, at_eof: bool) {
        let Some(open) = self.hunk.take() else {
            return;
        };

        if !open.hunk.is_consistent() {
            let (kind, message) = if at_eof && !open.exhausted() {
                (
                    WarningKind::TruncatedHunk,
                    "input ended inside hunk; keeping the lines read so far",
                )
            } else {
                (
                    WarningKind::HunkCountMismatch,
                    "hunk body does not match its declared line counts",
                )
            };
            self.warn(open.header_line, kind, message);
        }

        if let Some(section) = self.section.as_mut() {
            section.hunks.push(open.hunk);
        }
    }

    fn finish_section(&mut self) {
        self.close_hunk(false);
        self.mode = Mode::Header;
        if let Some(section) = self.section.take() {
            self.files.push(section.into_file_change());
        }
    }

    fn finish(mut self) -> ParsedDiff {
        self.close_hunk(true);
        self.finish_section();
        ParsedDiff {
            document: DiffDocument { files: self.files },
            warnings: self.warnings,
        }
    }

    fn warn(&mut self, line: usize, kind: WarningKind, message: impl Into<String>) {
        let warning = ParseWarning::new(line, kind, message);
        log::debug!("recovered from parse anomaly at {}", warning);
        self.warnings.push(warning);
    }
}

/// Whether `line` and the following line form a `---`/`+++` marker pair.
fn starts_file_markers(line: &str, next: Option<&str>) -> bool {
    line.starts_with("--- ") && next.is_some_and(|n| n.starts_with("+++ "))
}

fn is_ignored_metadata(line: &str) -> bool {
    const PREFIXES: [&str; 6] = [
        "index ",
        "old mode ",
        "new mode ",
        "similarity index ",
        "dissimilarity index ",
        "mode change ",
    ];
    PREFIXES.iter().any(|p| line.starts_with(p))
}

fn truncate(line: &str) -> String {
    const MAX: usize = 80;
    match line.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &line[..idx]),
        None => line.to_string(),
    }
}
