//! Destination Writer
//!
//! Writes the combined document to a destination, creating its parent
//! directory first when needed.

use std::path::Path;

use crate::domain::ports::build_events::emit;
use crate::domain::ports::{BuildEvent, BuildEventSink, EntryKind, FileSystem, FsError};
use crate::error::{RuleMergeError, RuleMergeResult};

/// Writes content to destination paths through the `FileSystem` port
pub struct DestinationWriter<'a, FS: ?Sized> {
    fs: &'a FS,
    sink: &'a dyn BuildEventSink,
}

impl<'a, FS> DestinationWriter<'a, FS>
where
    FS: FileSystem + ?Sized,
{
    pub fn new(fs: &'a FS, sink: &'a dyn BuildEventSink) -> Self {
        Self { fs, sink }
    }

    /// Make sure the parent directory of `destination` exists.
    ///
    /// Creates it recursively when missing; fails when the parent path exists
    /// but is not a directory.
    pub fn ensure_parent(&self, destination: &Path) -> RuleMergeResult<()> {
        let parent = match destination.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Ok(()),
        };

        match self.fs.entry_kind(parent) {
            Ok(EntryKind::Directory) => Ok(()),
            Ok(EntryKind::File) | Err(FsError::NotADirectory(_)) => {
                Err(RuleMergeError::NotADirectory {
                    path: parent.to_path_buf(),
                })
            }
            Err(err) if err.is_not_found() => {
                self.fs
                    .create_dir_all(parent)
                    .map_err(|source| RuleMergeError::DirectoryCreate {
                        path: parent.to_path_buf(),
                        source,
                    })?;
                emit(
                    self.sink,
                    BuildEvent::DirectoryCreated {
                        path: parent.to_path_buf(),
                    },
                );
                Ok(())
            }
            Err(source) => Err(RuleMergeError::DirectoryInspect {
                path: parent.to_path_buf(),
                source,
            }),
        }
    }

    /// Write `content` to `destination`, replacing any existing file.
    pub fn write(&self, destination: &Path, content: &str) -> RuleMergeResult<()> {
        let result = self.ensure_parent(destination).and_then(|()| {
            emit(
                self.sink,
                BuildEvent::DestinationWriting {
                    path: destination.to_path_buf(),
                },
            );
            self.fs
                .write(destination, content)
                .map_err(|source| RuleMergeError::Write {
                    path: destination.to_path_buf(),
                    source,
                })
        });

        match &result {
            Ok(()) => emit(
                self.sink,
                BuildEvent::DestinationWritten {
                    path: destination.to_path_buf(),
                    bytes: content.len(),
                },
            ),
            Err(err) => emit(
                self.sink,
                BuildEvent::DestinationFailed {
                    path: destination.to_path_buf(),
                    error: err.to_string(),
                },
            ),
        }

        result
    }
}
