//! Order Use Case
//!
//! Resolves the fragment order without reading any fragment.

use std::sync::Arc;

use crate::application::build::BuildConfig;
use crate::application::compose::resolve_order;
use crate::domain::ports::{BuildEventSink, FileSystem, NoopEventSink};
use crate::error::RuleMergeResult;

pub struct OrderUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    event_sink: Arc<dyn BuildEventSink>,
}

impl<FS> OrderUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self::with_events(file_system, Arc::new(NoopEventSink))
    }

    pub fn with_events(file_system: FS, event_sink: Arc<dyn BuildEventSink>) -> Self {
        Self {
            file_system,
            event_sink,
        }
    }

    /// The order a build would combine fragments in (empty when there are none).
    pub fn execute(&self, config: &BuildConfig) -> RuleMergeResult<Vec<String>> {
        let order = resolve_order(&self.file_system, config, None, self.event_sink.as_ref())?;
        Ok(order.unwrap_or_default())
    }
}
