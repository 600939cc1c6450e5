//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `events/` - Event sinks (JSON; Recording in unit tests)

pub mod events;
pub mod fs;

pub use events::JsonEventSink;
#[cfg(test)]
pub use events::RecordingEventSink;
pub use fs::{LocalFs, MemoryFs};
