//! Per-file complexity score.

use crate::analyze::StructuralDelta;
use crate::diff::{FileChange, FileStatus};
use crate::language::LanguageId;

/// Highest possible score.
pub const MAX_COMPLEXITY: u8 = 10;

/// Files whose changes are data or prose rather than code.
const LOW_COMPLEXITY_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "md", "markdown", "toml", "txt"];

/// Score a file change from 0 to [`MAX_COMPLEXITY`].
///
/// Contributions:
/// - lines changed: more than 10, 50, 100 or 200 lines add 1 to 4 points
/// - each distinct structural change adds 1, up to 3
/// - an added or modified class or type adds 2
/// - each modified element adds 1, up to 2
/// - Rust, C++ and Java add 1; data and documentation files subtract 1
/// - a rename adds 1, a deletion adds 2
pub fn complexity_score(
    file: &FileChange,
    delta: &StructuralDelta,
    language: Option<LanguageId>,
) -> u8 {
    let lines = file.lines_added() + file.lines_removed();
    let mut score: u8 = match lines {
        n if n > 200 => 4,
        n if n > 100 => 3,
        n if n > 50 => 2,
        n if n > 10 => 1,
        _ => 0,
    };

    score += delta.change_count().min(3) as u8;
    if delta.touches_types() {
        score += 2;
    }
    score += delta.modified.len().min(2) as u8;

    if matches!(
        language,
        Some(LanguageId::Rust | LanguageId::Cpp | LanguageId::Java)
    ) {
        score += 1;
    } else if is_low_complexity_file(file.path()) {
        score = score.saturating_sub(1);
    }

    match file.status {
        FileStatus::Renamed => score += 1,
        FileStatus::Deleted => score += 2,
        FileStatus::Added | FileStatus::Modified => {}
    }

    score.min(MAX_COMPLEXITY)
}

fn is_low_complexity_file(path: &str) -> bool {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((_, ext)) => LOW_COMPLEXITY_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}
