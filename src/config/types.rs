//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::build::BuildConfig;
use crate::domain::policies::{OrderingPolicy, DEFAULT_BASE, DEFAULT_PRIORITY};
use crate::domain::value_objects::WritePolicy;
use crate::error::RuleMergeResult;

use super::loader;

/// Where rule fragments come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
            extension: default_extension(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(".cursor/rules")
}

fn default_extension() -> String {
    ".mdc".to_string()
}

/// Fragment ordering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfig {
    #[serde(default = "default_base")]
    pub base: String,

    #[serde(default = "default_priority")]
    pub priority: Vec<String>,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            priority: default_priority(),
        }
    }
}

fn default_base() -> String {
    DEFAULT_BASE.to_string()
}

fn default_priority() -> Vec<String> {
    DEFAULT_PRIORITY.iter().map(|s| s.to_string()).collect()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_destinations")]
    pub destinations: Vec<PathBuf>,

    #[serde(default)]
    pub on_error: WritePolicy,

    #[serde(default)]
    pub color: ColorMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            destinations: default_destinations(),
            on_error: WritePolicy::default(),
            color: ColorMode::default(),
        }
    }
}

fn default_destinations() -> Vec<PathBuf> {
    vec![
        PathBuf::from(".clinerules"),
        PathBuf::from(".github/copilot-instructions.md"),
    ]
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub order: OrderConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file, discarding warnings
    pub fn load(path: &Path) -> RuleMergeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Resolve into a build configuration.
    ///
    /// Relative paths are taken relative to `root`.
    pub fn to_build_config(&self, root: &Path) -> BuildConfig {
        let destinations = self
            .output
            .destinations
            .iter()
            .map(|d| root.join(d))
            .collect();

        BuildConfig::new(root.join(&self.source.dir), destinations)
            .with_extension(self.source.extension.clone())
            .with_policy(OrderingPolicy::new(
                self.order.base.clone(),
                self.order.priority.iter().cloned(),
            ))
            .with_write_policy(self.output.on_error)
    }
}
