//! Atomic file writes.
//!
//! Every write follows the same pattern:
//! 1. Write content to a temporary file in the target's directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! The rename is atomic when source and target share a filesystem, which
//! holds because the temporary file lives next to the target. On a crash a
//! `.{filename}.{pid}.tmp` file may remain.

use crate::error::{DiffsumError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// # Returns
///
/// * `Ok(())` - The target now holds exactly `content`
/// * `Err(DiffsumError::OutputError)` - Directory creation, write or rename failed
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            DiffsumError::OutputError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            DiffsumError::OutputError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.{}.tmp", filename, std::process::id());
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        DiffsumError::OutputError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(DiffsumError::OutputError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        DiffsumError::OutputError(format!("failed to write '{}': {}", target.display(), e))
    })?;

    sync_parent(target);
    Ok(())
}

/// Persist the directory entry created by the rename.
#[cfg(unix)]
fn sync_parent(target: &Path) {
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent(_target: &Path) {}
