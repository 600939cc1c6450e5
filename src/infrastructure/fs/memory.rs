//! In-memory File System
//!
//! A `FileSystem` backed by maps, with per-path failure injection. Used to
//! exercise error paths that are awkward to reproduce on a real disk.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    failing: BTreeSet<PathBuf>,
}

/// In-memory file system
///
/// Clones share the same state, so a test can hand one clone to a use case
/// and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its ancestor directories
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        let mut inner = self.lock();
        if let Some(parent) = path.parent() {
            insert_ancestors(&mut inner.dirs, parent);
        }
        inner.files.insert(path.to_path_buf(), content.into());
    }

    /// Add a directory and its ancestors
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        insert_ancestors(&mut self.lock().dirs, path.as_ref());
    }

    /// Make every read, listing or write of `path` fail with an I/O error
    pub fn fail_path(&self, path: impl AsRef<Path>) {
        self.lock().failing.insert(path.as_ref().to_path_buf());
    }

    /// Current content of a file, if present
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Poisoning is ignored: every operation leaves the maps consistent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn insert_ancestors(dirs: &mut BTreeSet<PathBuf>, path: &Path) {
    for ancestor in path.ancestors() {
        if !ancestor.as_os_str().is_empty() {
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

fn simulated_failure(path: &Path) -> FsError {
    FsError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::other("simulated I/O failure"),
    }
}

impl Inner {
    fn check_failing(&self, path: &Path) -> FsResult<()> {
        if self.failing.contains(path) {
            return Err(simulated_failure(path));
        }
        Ok(())
    }

    fn has_file_ancestor(&self, path: &Path) -> bool {
        path.ancestors()
            .skip(1)
            .any(|ancestor| self.files.contains_key(ancestor))
    }
}

impl FileSystem for MemoryFs {
    fn entry_kind(&self, path: &Path) -> FsResult<EntryKind> {
        let inner = self.lock();
        if inner.files.contains_key(path) {
            Ok(EntryKind::File)
        } else if inner.dirs.contains(path) {
            Ok(EntryKind::Directory)
        } else if inner.has_file_ancestor(path) {
            Err(FsError::NotADirectory(path.to_path_buf()))
        } else {
            Err(FsError::NotFound(path.to_path_buf()))
        }
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        let inner = self.lock();
        inner.check_failing(path)?;
        if inner.files.contains_key(path) {
            return Err(FsError::NotADirectory(path.to_path_buf()));
        }
        if !inner.dirs.contains(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }

        let children = inner
            .files
            .keys()
            .chain(inner.dirs.iter())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        Ok(children)
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        let inner = self.lock();
        inner.check_failing(path)?;
        match inner.files.get(path) {
            Some(content) => Ok(content.clone()),
            None if inner.dirs.contains(path) => Err(FsError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other("is a directory"),
            }),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut inner = self.lock();
        inner.check_failing(path)?;
        if inner.dirs.contains(path) {
            return Err(FsError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other("is a directory"),
            });
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.dirs.contains(parent) {
                return Err(FsError::NotFound(parent.to_path_buf()));
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut inner = self.lock();
        inner.check_failing(path)?;
        if inner.files.contains_key(path) || inner.has_file_ancestor(path) {
            return Err(FsError::NotADirectory(path.to_path_buf()));
        }
        insert_ancestors(&mut inner.dirs, path);
        Ok(())
    }
}
