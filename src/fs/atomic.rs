//! Atomic file write operations.
//!
//! All writes follow the same pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Atomically replace the target file via rename
//!
//! Source and destination live in the same directory, so the rename stays on
//! one filesystem. On crash a temporary file (`.{filename}.tmp`) may remain.
//!
//! Parent directories are NOT created here: every output path this tool
//! writes is expected to point into an existing directory, and a missing
//! parent must surface as an error to the caller.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// Errors are plain `io::Error`s; callers classify them into their own
/// failure category (config write vs stylesheet write).
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> io::Result<()> {
    let path = path.as_ref();

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&temp_path);
    })?;

    // Sync the parent directory so the rename itself is durable.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Temporary file path in the same directory as the target: `.{filename}.tmp`.
fn temp_path_for(target: &Path) -> io::Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid file path"))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync it to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;

    file.write_all(content).inspect_err(|_| {
        let _ = fs::remove_file(path);
    })?;

    file.sync_all().inspect_err(|_| {
        let _ = fs::remove_file(path);
    })?;

    Ok(())
}
