//! Check Module
//!
//! Verifies that every destination already holds what a build would write.
//! Meant for CI, where committed `.clinerules` files must match the sources.

mod report;
mod use_case;

pub use report::{CheckReport, DestinationCheck, DestinationStatus};
pub use use_case::CheckUseCase;
