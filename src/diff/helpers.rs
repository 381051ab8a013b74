//! Helper functions for diff parsing.

use super::model::NO_FILE;

/// Ranges and heading parsed from a hunk header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct HunkHeader {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
    pub section: String,
}

/// Parse the old and new paths from a "diff --git" line.
///
/// Handles various formats:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/path/to/file b/path/to/renamed" (rename)
/// - "\"a/my file\" \"b/my file\"" (quoted paths)
///
/// Returns `(old, new)` without the `a/`/`b/` prefixes, or None if parsing fails.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<(String, String)> {
    let rest = rest.trim_end();

    // Quoted form: both paths are wrapped in double quotes
    if let Some(inner) = rest.strip_prefix('"')
        && let Some(split) = inner.find("\" \"")
    {
        let old = &inner[..split];
        let new = inner[split + 3..].strip_suffix('"')?;
        return Some((strip_side_prefix(old), strip_side_prefix(new)));
    }

    // Paths can contain spaces, so split on the last " b/" occurrence
    if let Some(b_pos) = rest.rfind(" b/") {
        let old = &rest[..b_pos];
        let new = &rest[b_pos + 1..];
        return Some((strip_side_prefix(old), strip_side_prefix(new)));
    }

    // Fallback for non-standard prefixes (e.g. --no-prefix): two plain tokens
    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() == 2 {
        return Some((normalize_path(parts[0]), normalize_path(parts[1])));
    }

    None
}

/// Parse the path of a `--- ` or `+++ ` marker line (text after the marker).
///
/// Returns `None` for the `/dev/null` sentinel. Trailing tab-separated
/// timestamps written by `diff -u` are dropped.
pub(super) fn parse_file_marker(rest: &str) -> Option<String> {
    let path = rest.split('\t').next().unwrap_or(rest).trim_end();
    let path = unquote(path);

    if path == NO_FILE || path.is_empty() {
        return None;
    }

    Some(strip_side_prefix(path))
}

/// Parse the paths of a "Binary files A and B differ" line.
///
/// Returns `None` when the line does not have that shape; otherwise the
/// two sides, each `None` for `/dev/null`.
pub(super) fn parse_binary_line(line: &str) -> Option<(Option<String>, Option<String>)> {
    let inner = line.strip_prefix("Binary files ")?.strip_suffix(" differ")?;

    // Prefer a split that lands on a recognizable second path
    let split = inner
        .find(" and b/")
        .or_else(|| inner.find(" and /dev/null"))
        .or_else(|| inner.find(" and "))?;

    let old = &inner[..split];
    let new = &inner[split + 5..];

    Some((parse_file_marker(old), parse_file_marker(new)))
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@"
/// Also handles: "@@ -old_start,old_len +new_start,new_len @@ context info"
///
/// Omitted lengths default to 1. Returns None if parsing fails.
pub(super) fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    // Remove leading "@@ " and trailing " @@" (with optional context)
    let line = line.strip_prefix("@@ ")?;

    // Find the closing " @@"
    let end_marker = line.find(" @@")?;
    let range_part = &line[..end_marker];
    let section = line[end_marker + 3..].trim().to_string();

    // Split into old and new ranges
    let parts: Vec<&str> = range_part.split_whitespace().collect();
    if parts.len() != 2 {
        return None;
    }

    let (old_start, old_count) = parse_range(parts[0].strip_prefix('-')?)?;
    let (new_start, new_count) = parse_range(parts[1].strip_prefix('+')?)?;

    Some(HunkHeader {
        old_start,
        old_count,
        new_start,
        new_count,
        section,
    })
}

/// Parse a range specification.
///
/// Format: "start" or "start,len"; the length defaults to 1.
fn parse_range(range: &str) -> Option<(usize, usize)> {
    match range.split_once(',') {
        Some((start, len)) => Some((start.parse().ok()?, len.parse().ok()?)),
        None => Some((range.parse().ok()?, 1)),
    }
}

/// Drop a git side prefix (`a/` or `b/`) and normalize separators.
fn strip_side_prefix(path: &str) -> String {
    let path = unquote(path);
    let stripped = path
        .strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path);
    normalize_path(stripped)
}

fn unquote(path: &str) -> &str {
    path.strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path)
}

/// Normalize a file path to use forward slashes.
///
/// This ensures consistent path format for glob matching,
/// regardless of the platform where the diff was generated.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
