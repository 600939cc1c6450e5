//! Domain Entities
//!
//! - `RuleFragment` - One input file contributing to the output
//! - `CombinedDocument` - The banner-delimited concatenation written to destinations

mod document;
mod fragment;

pub use document::{CombinedDocument, END_BANNER_PREFIX, START_BANNER_PREFIX};
pub use fragment::RuleFragment;
