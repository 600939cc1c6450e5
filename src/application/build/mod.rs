//! Build Module
//!
//! Orchestrates a rule build.
//!
//! ## Structure
//!
//! - `config` - The explicit configuration object (`BuildConfig`)
//! - `report` - Result type (`BuildReport`)
//! - `use_case` - The orchestrator (`BuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use rulemerge::application::build::{BuildConfig, BuildUseCase};
//! use rulemerge::infrastructure::LocalFs;
//!
//! let config = BuildConfig::new("rules", vec![".clinerules".into()]);
//! let report = BuildUseCase::new(LocalFs::new()).execute(&config)?;
//! ```

mod config;
mod report;
mod use_case;

pub use config::BuildConfig;
pub use report::BuildReport;
pub use use_case::BuildUseCase;
