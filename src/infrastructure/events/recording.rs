//! Recording Event Sink
//!
//! Collects every event so tests can assert which signals fired.

use std::sync::{Arc, Mutex};

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Event sink that records all events
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<BuildEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<BuildEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events that are warnings, in arrival order
    pub fn warnings(&self) -> Vec<BuildEvent> {
        self.events().into_iter().filter(BuildEvent::is_warning).collect()
    }
}

impl BuildEventSink for RecordingEventSink {
    fn on_event(&self, event: BuildEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_and_filters_warnings() {
        let sink = RecordingEventSink::new();
        sink.on_event(BuildEvent::OrderResolved {
            order: vec!["a.mdc".to_string()],
        });
        sink.on_event(BuildEvent::BaseMissing {
            base: "base.mdc".to_string(),
        });

        assert_eq!(sink.events().len(), 2);
        assert_eq!(
            sink.warnings(),
            vec![BuildEvent::BaseMissing {
                base: "base.mdc".to_string()
            }]
        );
    }
}
