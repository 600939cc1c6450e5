//! Error types for rulemerge
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for rulemerge operations
pub type RuleMergeResult<T> = Result<T, RuleMergeError>;

/// A rule fragment that could not be read
#[derive(Debug)]
pub struct FragmentFailure {
    pub path: PathBuf,
    pub cause: FsError,
}

/// A destination that could not be written
#[derive(Debug)]
pub struct DestinationFailure {
    pub path: PathBuf,
    pub error: RuleMergeError,
}

/// Main error type for rulemerge operations
#[derive(Error, Debug)]
pub enum RuleMergeError {
    /// Source directory exists but could not be listed
    #[error("failed to read rule directory {}: {source}", path.display())]
    DirectoryRead { path: PathBuf, source: FsError },

    /// One or more fragments could not be read
    #[error(
        "failed to read {} rule fragment(s):\n{}",
        .failures.len(),
        render_fragment_failures(.failures)
    )]
    FragmentRead { failures: Vec<FragmentFailure> },

    /// A destination's parent path exists but is a file
    #[error("path exists but is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// A destination's parent directory could not be inspected
    #[error("failed to inspect directory {}: {source}", path.display())]
    DirectoryInspect { path: PathBuf, source: FsError },

    /// A destination's parent directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreate { path: PathBuf, source: FsError },

    /// A destination file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: FsError },

    /// A destination could not be read back for comparison
    #[error("failed to read {}: {source}", path.display())]
    DestinationRead { path: PathBuf, source: FsError },

    /// Several destinations failed under the best-effort write policy
    #[error(
        "failed to write {} destination(s):\n{}",
        .failures.len(),
        render_destination_failures(.failures)
    )]
    DestinationWrite { failures: Vec<DestinationFailure> },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration value is unusable
    #[error("invalid configuration value '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    /// No destinations are configured
    #[error("no output destinations configured")]
    NoDestinations,

    /// Configuration file exists but could not be read
    #[error("failed to read configuration {}: {source}", file.display())]
    ConfigRead {
        file: PathBuf,
        source: std::io::Error,
    },
}

impl RuleMergeError {
    /// Paths this error is about, in the order they were recorded.
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            RuleMergeError::DirectoryRead { path, .. }
            | RuleMergeError::NotADirectory { path }
            | RuleMergeError::DirectoryInspect { path, .. }
            | RuleMergeError::DirectoryCreate { path, .. }
            | RuleMergeError::Write { path, .. }
            | RuleMergeError::DestinationRead { path, .. } => vec![path.as_path()],
            RuleMergeError::FragmentRead { failures } => {
                failures.iter().map(|f| f.path.as_path()).collect()
            }
            RuleMergeError::DestinationWrite { failures } => {
                failures.iter().map(|f| f.path.as_path()).collect()
            }
            RuleMergeError::InvalidConfig { file, .. }
            | RuleMergeError::ConfigRead { file, .. } => vec![file.as_path()],
            RuleMergeError::InvalidConfigValue { .. } | RuleMergeError::NoDestinations => {
                Vec::new()
            }
        }
    }
}

fn render_fragment_failures(failures: &[FragmentFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("  - {}: {}", f.path.display(), f.cause))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_destination_failures(failures: &[DestinationFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("  - {}: {}", f.path.display(), f.error))
        .collect::<Vec<_>>()
        .join("\n")
}
