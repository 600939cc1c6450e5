//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the destination directory and are
/// renamed into place, so readers never see a half-written document.
/// A destination that is a symlink is written through to its target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn entry_kind(&self, path: &Path) -> FsResult<EntryKind> {
        let metadata = std::fs::metadata(path).map_err(|e| FsError::from_io(path, e))?;
        if metadata.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::File)
        }
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let target = write_target(path)?;
        let path = target.as_path();
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp =
            tempfile::NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(dir, e))?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.flush())
            .map_err(|e| FsError::from_io(path, e))?;

        // NamedTempFile is created 0600; keep the mode of the file being replaced.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(path)
                .map(|m| m.permissions().mode())
                .unwrap_or(0o644);
            temp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(mode))
                .map_err(|e| FsError::from_io(path, e))?;
        }

        temp.persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }
}

/// The file a write to `path` must replace: the link target for symlinks.
fn write_target(path: &Path) -> FsResult<PathBuf> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {}
        _ => return Ok(path.to_path_buf()),
    }

    match std::fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        // Dangling link: create the file it names.
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let link = std::fs::read_link(path).map_err(|e| FsError::from_io(path, e))?;
            Ok(match path.parent() {
                Some(parent) if link.is_relative() => parent.join(link),
                _ => link,
            })
        }
        Err(e) => Err(FsError::from_io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("test.txt");
        let fs = LocalFs::new();

        fs.write(&file, "hello world").unwrap();
        let content = fs.read(&file).unwrap();

        assert_eq!(content, "hello world");
    }

    #[test]
    fn local_fs_write_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join(".clinerules");
        std::fs::write(&file, "a much longer original body").unwrap();

        LocalFs::new().write(&file, "short").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "short");
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_write_goes_through_symlink() {
        let dir = tempdir().unwrap();
        let shared = dir.path().join("shared.md");
        let link = dir.path().join(".clinerules");
        std::fs::write(&shared, "old\n").unwrap();
        std::os::unix::fs::symlink("shared.md", &link).unwrap();

        LocalFs::new().write(&link, "new\n").unwrap();

        assert!(std::fs::symlink_metadata(&link)
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(std::fs::read_to_string(&shared).unwrap(), "new\n");
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_write_creates_dangling_symlink_target() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("copilot.md");
        std::os::unix::fs::symlink("rules.md", &link).unwrap();

        LocalFs::new().write(&link, "x").unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("rules.md")).unwrap(),
            "x"
        );
        assert!(std::fs::symlink_metadata(&link)
            .unwrap()
            .file_type()
            .is_symlink());
    }

    #[test]
    fn local_fs_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        fs.write(&dir.path().join("out.md"), "x").unwrap();

        let names = fs.read_dir(dir.path()).unwrap();
        assert_eq!(names, vec!["out.md".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_write_keeps_readable_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let file = dir.path().join(".clinerules");
        LocalFs::new().write(&file, "x").unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn local_fs_entry_kind() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f.mdc");
        std::fs::write(&file, "x").unwrap();
        let fs = LocalFs::new();

        assert_eq!(fs.entry_kind(dir.path()).unwrap(), EntryKind::Directory);
        assert_eq!(fs.entry_kind(&file).unwrap(), EntryKind::File);
        assert!(fs
            .entry_kind(&dir.path().join("missing"))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn local_fs_read_dir_lists_names() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.mdc"), "a").unwrap();
        std::fs::write(dir.path().join("b.mdc"), "b").unwrap();
        let fs = LocalFs::new();

        let mut names = fs.read_dir(dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["a.mdc".to_string(), "b.mdc".to_string()]);
    }

    #[test]
    fn local_fs_read_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let err = LocalFs::new()
            .read(&dir.path().join("nope.mdc"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn local_fs_create_dir_all() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        let fs = LocalFs::new();

        fs.create_dir_all(&nested).unwrap();

        assert!(nested.is_dir());
    }
}
