//! File writes with automatic parent creation.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{LogError, LogResult};

/// Replaces `dest` with `bytes` via a temporary file in the same directory,
/// so readers never observe a half-written file.
pub fn write_atomic(dest: &Path, bytes: impl AsRef<[u8]>) -> LogResult<()> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| LogError::io(parent, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| LogError::io(parent, e))?;
    tmp.write_all(bytes.as_ref())
        .map_err(|e| LogError::io(tmp.path(), e))?;
    tmp.persist(dest).map_err(|e| LogError::io(dest, e.error))?;
    Ok(())
}

/// Appends `line` to `path`, creating the file (and its parent directory) if
/// absent. The handle is flushed and closed before returning, on every path.
pub fn append_line(path: &Path, line: &str) -> LogResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LogError::io(parent, e))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::io(path, e))?;
    file.write_all(line.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| LogError::io(path, e))
}
