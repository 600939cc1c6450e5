//! rulemerge - combines AI assistant rule fragments into one document
//!
//! Fragments (`*.mdc` files in a source directory) are ordered by a fixed
//! priority list with an alphabetical fallback, wrapped in START/END banners,
//! and written to every configured destination (`.clinerules`, Copilot
//! instructions, ...).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    BuildConfig, BuildReport, BuildUseCase, CheckReport, CheckUseCase, DestinationCheck,
    DestinationStatus, OrderUseCase,
};
pub use config::{ColorMode, Config, LoadedConfig};
pub use domain::entities::{CombinedDocument, RuleFragment};
pub use domain::policies::{OrderingPolicy, DEFAULT_BASE, DEFAULT_PRIORITY};
pub use domain::ports::{BuildEvent, BuildEventSink, FileSystem, FsError, NoopEventSink};
pub use domain::value_objects::{ContentHash, WritePolicy};
pub use error::{RuleMergeError, RuleMergeResult};
pub use infrastructure::{JsonEventSink, LocalFs, MemoryFs};
