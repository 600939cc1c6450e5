//! Domain Policies
//!
//! Rules that govern how fragments are placed in the combined document.

mod ordering;

pub use ordering::{locale_cmp, OrderingPolicy, SortOutcome, DEFAULT_BASE, DEFAULT_PRIORITY};
