//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - List, sort, combine and write the rule fragments
//! - `CheckUseCase` - Compare destinations with a fresh in-memory build
//! - `OrderUseCase` - Resolve the fragment order without reading contents

pub mod build;
pub mod check;
mod compose;
mod order;

pub use build::{BuildConfig, BuildReport, BuildUseCase};
pub use check::{CheckReport, CheckUseCase, DestinationCheck, DestinationStatus};
pub use order::OrderUseCase;
