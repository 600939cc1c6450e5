//! Build Event Port
//!
//! Observable interface for build runs. The domain and application layers
//! report progress and warnings here instead of printing.

use std::path::PathBuf;

/// Event emitted during a build run
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// Build started
    Started {
        source: PathBuf,
        destinations: Vec<PathBuf>,
    },

    /// A destination's parent directory was created
    DirectoryCreated { path: PathBuf },

    /// The source directory does not exist (treated as empty)
    SourceMissing { path: PathBuf },

    /// No fragments were found; `primary` is the destination that gets an
    /// empty document, absent when nothing will be written
    NoFragments {
        source: PathBuf,
        primary: Option<PathBuf>,
    },

    /// The base fragment is not present and will not be in the output
    BaseMissing { base: String },

    /// Fragments outside the priority list were appended alphabetically
    UnlistedFragments { names: Vec<String> },

    /// Final fragment order
    OrderResolved { order: Vec<String> },

    /// A fragment was read
    FragmentRead { index: usize, path: PathBuf },

    /// A fragment could not be read (the run keeps reading the rest)
    FragmentFailed {
        index: usize,
        path: PathBuf,
        error: String,
    },

    /// Writing a destination started
    DestinationWriting { path: PathBuf },

    /// A destination was written
    DestinationWritten { path: PathBuf, bytes: usize },

    /// A destination could not be written
    DestinationFailed { path: PathBuf, error: String },

    /// Build finished successfully
    Completed {
        fragment_count: usize,
        destinations: Vec<PathBuf>,
        hash: String,
        dry_run: bool,
    },
}

impl BuildEvent {
    /// Whether this is a per-file event (suppressed by summary-only sinks)
    pub fn is_detailed(&self) -> bool {
        matches!(
            self,
            BuildEvent::DirectoryCreated { .. }
                | BuildEvent::FragmentRead { .. }
                | BuildEvent::DestinationWriting { .. }
                | BuildEvent::DestinationWritten { .. }
        )
    }

    /// Whether this event is a warning
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            BuildEvent::SourceMissing { .. }
                | BuildEvent::NoFragments { .. }
                | BuildEvent::BaseMissing { .. }
                | BuildEvent::UnlistedFragments { .. }
        )
    }
}

/// Trait for receiving build events
///
/// Implementations can be:
/// - ConsoleEventSink: progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Forward an event, skipping detailed ones the sink does not want.
pub(crate) fn emit(sink: &dyn BuildEventSink, event: BuildEvent) {
    if event.is_detailed() && !sink.wants_detailed_events() {
        return;
    }
    sink.on_event(event);
}
