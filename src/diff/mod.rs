//! Unified diff parsing for diffsum.
//!
//! Turns raw `git diff` / `diff -u` text into an ordered list of per-file
//! change records with their hunks. The parser tolerates the irregular
//! shapes real diff streams take:
//! - Renames and copies (`rename from`/`rename to`)
//! - New and deleted files (`/dev/null` on one side)
//! - Binary markers (`Binary files ... differ`, `GIT binary patch`)
//! - `\ No newline at end of file` markers
//! - Mode-only and rename-only sections with no hunks
//! - Malformed, miscounted or truncated hunks (recovered with a warning)

mod helpers;
mod model;
mod parser;
mod warnings;


// Re-export public API
pub use model::{DiffDocument, FileChange, FileStatus, Hunk, HunkLine, LineKind, NO_FILE};
pub use parser::{ParsedDiff, parse};
pub use warnings::{ParseWarning, WarningKind};
