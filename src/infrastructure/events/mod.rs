//! Event Sink Implementations
//!
//! Concrete implementations of BuildEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - RecordingEventSink: keeps events in memory for unit tests
//!
//! The human-readable console sink lives with the CLI.

mod json;
#[cfg(test)]
mod recording;

pub use json::JsonEventSink;
#[cfg(test)]
pub use recording::RecordingEventSink;
