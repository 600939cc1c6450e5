//! Build Configuration
//!
//! Everything a build run needs, passed in explicitly.

use std::path::{Path, PathBuf};

use crate::domain::policies::OrderingPolicy;
use crate::domain::value_objects::WritePolicy;
use crate::error::{RuleMergeError, RuleMergeResult};

/// Default fragment extension
pub const DEFAULT_EXTENSION: &str = ".mdc";

/// Configuration for a single build run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory holding the rule fragments
    pub source_dir: PathBuf,
    /// Only names ending with this are fragments
    pub extension: String,
    /// Priority list and base fragment
    pub policy: OrderingPolicy,
    /// Where the combined document goes; the first one is the primary
    pub destinations: Vec<PathBuf>,
    /// What to do when a destination write fails
    pub write_policy: WritePolicy,
}

impl BuildConfig {
    pub fn new(source_dir: impl Into<PathBuf>, destinations: Vec<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            policy: OrderingPolicy::default(),
            destinations,
            write_policy: WritePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: OrderingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_write_policy(mut self, write_policy: WritePolicy) -> Self {
        self.write_policy = write_policy;
        self
    }

    /// The destination written even when there are no fragments
    pub fn primary_destination(&self) -> Option<&Path> {
        self.destinations.first().map(PathBuf::as_path)
    }

    pub fn validate(&self) -> RuleMergeResult<()> {
        if self.destinations.is_empty() {
            return Err(RuleMergeError::NoDestinations);
        }
        if self.extension.is_empty() {
            return Err(RuleMergeError::InvalidConfigValue {
                key: "source.extension".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let config = BuildConfig::new("/p/rules", vec![PathBuf::from("/p/.clinerules")]);
        assert_eq!(config.extension, ".mdc");
        assert_eq!(config.policy, OrderingPolicy::default());
        assert_eq!(config.write_policy, WritePolicy::FailFast);
        assert_eq!(config.primary_destination(), Some(Path::new("/p/.clinerules")));
    }

    #[test]
    fn validate_requires_a_destination() {
        let config = BuildConfig::new("/p/rules", Vec::new());
        assert!(matches!(config.validate(), Err(RuleMergeError::NoDestinations)));
    }

    #[test]
    fn validate_rejects_empty_extension() {
        let config =
            BuildConfig::new("/p/rules", vec![PathBuf::from("/p/out")]).with_extension("");
        assert!(matches!(
            config.validate(),
            Err(RuleMergeError::InvalidConfigValue { .. })
        ));
    }
}
