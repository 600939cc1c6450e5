//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod hash;
mod write_policy;

pub use config_warning::ConfigWarning;
pub use hash::ContentHash;
pub use write_policy::WritePolicy;
