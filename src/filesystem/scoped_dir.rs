use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{LogError, LogResult};
use crate::filesystem::atomic::write_atomic;

/// A directory handle whose operations take paths relative to its root.
///
/// Absolute paths and `..` components are rejected with
/// [`LogError::PathEscape`], so callers cannot reach outside the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedDir {
    root: PathBuf,
}

impl ScopedDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `rel` against the root.
    pub fn path(&self, rel: impl AsRef<Path>) -> LogResult<PathBuf> {
        let rel = rel.as_ref();
        let escapes = rel.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes || rel.as_os_str().is_empty() {
            return Err(LogError::PathEscape(rel.to_path_buf()));
        }
        Ok(self.root.join(rel))
    }

    pub fn exists(&self, rel: impl AsRef<Path>) -> LogResult<bool> {
        Ok(self.path(rel)?.exists())
    }

    pub fn write_atomic(&self, rel: impl AsRef<Path>, bytes: impl AsRef<[u8]>) -> LogResult<()> {
        write_atomic(&self.path(rel)?, bytes)
    }

    pub fn copy_file(&self, from: impl AsRef<Path>, to: impl AsRef<Path>) -> LogResult<()> {
        let src = self.path(from)?;
        let dst = self.path(to)?;
        fs::copy(&src, &dst).map_err(|e| LogError::io(src, e))?;
        Ok(())
    }

    pub fn rename_file(&self, from: impl AsRef<Path>, to: impl AsRef<Path>) -> LogResult<()> {
        let src = self.path(from)?;
        let dst = self.path(to)?;
        fs::rename(&src, &dst).map_err(|e| LogError::io(src, e))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn rejects_paths_outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let scoped = ScopedDir::new(dir.path());
        assert!(matches!(
            scoped.path("../etc/passwd"),
            Err(LogError::PathEscape(_))
        ));
        assert!(matches!(
            scoped.path("/etc/passwd"),
            Err(LogError::PathEscape(_))
        ));
        assert!(matches!(scoped.path(""), Err(LogError::PathEscape(_))));
        assert!(scoped.path("nested/ok.txt").is_ok());
    }

    #[test]
    fn copy_then_rename_back() {
        let dir = tempfile::tempdir().unwrap();
        let scoped = ScopedDir::new(dir.path().join("etc"));

        scoped.write_atomic("env.conf", "[deploy]\nmode = developer\n").unwrap();
        scoped.copy_file("env.conf", "env.conf.base").unwrap();
        scoped.write_atomic("env.conf", "changed").unwrap();

        scoped.rename_file("env.conf.base", "env.conf").unwrap();

        assert!(!scoped.exists("env.conf.base").unwrap());
        let content = fs::read_to_string(scoped.path("env.conf").unwrap()).unwrap();
        assert!(content.contains("developer"));
    }

    #[test]
    fn rename_of_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let scoped = ScopedDir::new(dir.path());
        assert!(matches!(
            scoped.rename_file("absent", "target"),
            Err(LogError::Io { .. })
        ));
        assert!(!scoped.exists("target").unwrap());
    }
}
