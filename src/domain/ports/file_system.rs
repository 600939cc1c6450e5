//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the aggregator run against the local disk or an in-memory fake
//! without changing any domain code.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// Path does not exist
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Path exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// Any other I/O failure
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` raised while operating on `path`.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::NotADirectory => FsError::NotADirectory(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

/// What a path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MemoryFs` - in-memory, with injectable failures for testing
pub trait FileSystem {
    /// Inspect a path (stat)
    fn entry_kind(&self, path: &Path) -> FsResult<EntryKind>;

    /// Names of the entries directly inside a directory
    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>>;

    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to a file, replacing it entirely
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn entry_kind(&self, path: &Path) -> FsResult<EntryKind> {
        (**self).entry_kind(path)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        (**self).read_dir(path)
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }
}
