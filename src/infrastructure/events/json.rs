//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn display_all(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| display(p)).collect()
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let command = self.command;
        let json = match event {
            BuildEvent::Started {
                source,
                destinations,
            } => serde_json::json!({
                "event": "start",
                "command": command,
                "source": display(&source),
                "destinations": display_all(&destinations),
            }),

            BuildEvent::DirectoryCreated { path } => serde_json::json!({
                "event": "directory_created",
                "command": command,
                "path": display(&path),
            }),

            BuildEvent::SourceMissing { path } => serde_json::json!({
                "event": "warning",
                "command": command,
                "kind": "source_missing",
                "path": display(&path),
            }),

            BuildEvent::NoFragments { source, primary } => serde_json::json!({
                "event": "warning",
                "command": command,
                "kind": "no_fragments",
                "source": display(&source),
                "primary": primary.as_deref().map(display),
            }),

            BuildEvent::BaseMissing { base } => serde_json::json!({
                "event": "warning",
                "command": command,
                "kind": "base_missing",
                "base": base,
            }),

            BuildEvent::UnlistedFragments { names } => serde_json::json!({
                "event": "warning",
                "command": command,
                "kind": "unlisted_fragments",
                "names": names,
            }),

            BuildEvent::OrderResolved { order } => serde_json::json!({
                "event": "order",
                "command": command,
                "order": order,
            }),

            BuildEvent::FragmentRead { index, path } => serde_json::json!({
                "event": "item_read",
                "command": command,
                "index": index,
                "path": display(&path),
            }),

            BuildEvent::FragmentFailed { index, path, error } => serde_json::json!({
                "event": "item_error",
                "command": command,
                "index": index,
                "path": display(&path),
                "error": error,
            }),

            BuildEvent::DestinationWriting { path } => serde_json::json!({
                "event": "write_start",
                "command": command,
                "path": display(&path),
            }),

            BuildEvent::DestinationWritten { path, bytes } => serde_json::json!({
                "event": "written",
                "command": command,
                "path": display(&path),
                "bytes": bytes,
            }),

            BuildEvent::DestinationFailed { path, error } => serde_json::json!({
                "event": "write_error",
                "command": command,
                "path": display(&path),
                "error": error,
            }),

            BuildEvent::Completed {
                fragment_count,
                destinations,
                hash,
                dry_run,
            } => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": "success",
                "fragments": fragment_count,
                "destinations": display_all(&destinations),
                "hash": hash,
                "dry_run": dry_run,
            }),
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true
    }
}
