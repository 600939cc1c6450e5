//! Build Report
//!
//! What a build run produced.

use std::path::PathBuf;

use crate::domain::entities::CombinedDocument;
use crate::domain::value_objects::ContentHash;

/// Result of a successful build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Fragment names in output order
    pub order: Vec<String>,
    /// The combined document
    pub document: CombinedDocument,
    /// Destinations written (or that would be written, for a dry run)
    pub destinations: Vec<PathBuf>,
    /// The source directory had no fragments
    pub empty_source: bool,
    /// Nothing was written
    pub dry_run: bool,
}

impl BuildReport {
    pub fn hash(&self) -> ContentHash {
        self.document.hash()
    }

    pub fn fragment_count(&self) -> usize {
        self.document.fragment_count()
    }
}
