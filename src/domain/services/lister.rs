//! Directory Lister
//!
//! Finds the rule fragments in the source directory.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::error::{RuleMergeError, RuleMergeResult};

/// Fragment names found in the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceListing {
    /// Directory exists; names matching the extension (possibly none)
    Found(BTreeSet<String>),
    /// Directory does not exist; treated as an empty rule set
    Missing,
}

impl SourceListing {
    pub fn names(&self) -> Vec<&str> {
        match self {
            SourceListing::Found(names) => names.iter().map(String::as_str).collect(),
            SourceListing::Missing => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SourceListing::Found(names) => names.is_empty(),
            SourceListing::Missing => true,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SourceListing::Missing)
    }
}

/// List the names in `dir` that end with `extension`.
///
/// A missing directory is not an error. Any other failure to read the
/// directory is.
pub fn list_fragments<FS>(fs: &FS, dir: &Path, extension: &str) -> RuleMergeResult<SourceListing>
where
    FS: FileSystem + ?Sized,
{
    match fs.read_dir(dir) {
        Ok(entries) => Ok(SourceListing::Found(
            entries
                .into_iter()
                .filter(|name| name.ends_with(extension))
                .collect(),
        )),
        Err(err) if err.is_not_found() => Ok(SourceListing::Missing),
        Err(source) => Err(RuleMergeError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
