//! Configuration module for rulemerge
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RULEMERGE_*)
//! 3. Project config (`rulemerge.toml` or `--config <FILE>`)
//! 4. User config (`<config dir>/rulemerge/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    apply_env_overrides, discover, load_with_warnings, LoadedConfig, ENV_DESTINATIONS, ENV_SOURCE,
    ENV_USER_CONFIG_PATH, ENV_WRITE_POLICY, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, OrderConfig, OutputConfig, SourceConfig};
