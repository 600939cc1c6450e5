//! Build Use Case
//!
//! Orchestrates a build run:
//! 1. Prepare every destination's parent directory
//! 2. List the source directory (missing → empty)
//! 3. Empty → write an empty document to the primary destination and stop
//! 4. Sort fragment names by the ordering policy
//! 5. Combine fragments (all read failures reported together)
//! 6. Write the combined document to every destination

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::compose::{compose, Composition};
use crate::domain::entities::CombinedDocument;
use crate::domain::ports::build_events::emit;
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem, NoopEventSink};
use crate::domain::services::DestinationWriter;
use crate::domain::value_objects::WritePolicy;
use crate::error::{DestinationFailure, RuleMergeError, RuleMergeResult};

use super::config::BuildConfig;
use super::report::BuildReport;

/// Build use case, parameterized by its file system port
pub struct BuildUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    event_sink: Arc<dyn BuildEventSink>,
}

impl<FS> BuildUseCase<FS>
where
    FS: FileSystem,
{
    /// Silent build
    pub fn new(file_system: FS) -> Self {
        Self::with_events(file_system, Arc::new(NoopEventSink))
    }

    /// Build reporting progress to `event_sink`
    pub fn with_events(file_system: FS, event_sink: Arc<dyn BuildEventSink>) -> Self {
        Self {
            file_system,
            event_sink,
        }
    }

    /// Run the build and write the destinations
    pub fn execute(&self, config: &BuildConfig) -> RuleMergeResult<BuildReport> {
        config.validate()?;
        let sink = self.event_sink.as_ref();
        self.emit_started(config);

        let writer = DestinationWriter::new(&self.file_system, sink);
        for destination in &config.destinations {
            writer.ensure_parent(destination)?;
        }

        let report = match compose(&self.file_system, config, sink)? {
            Composition::Empty => {
                let primary = config
                    .primary_destination()
                    .ok_or(RuleMergeError::NoDestinations)?;
                let document = CombinedDocument::empty();
                writer.write(primary, document.content())?;

                BuildReport {
                    order: Vec::new(),
                    document,
                    destinations: vec![primary.to_path_buf()],
                    empty_source: true,
                    dry_run: false,
                }
            }
            Composition::Document { order, document } => {
                let destinations = self.write_all(&writer, config, document.content())?;
                BuildReport {
                    order,
                    document,
                    destinations,
                    empty_source: false,
                    dry_run: false,
                }
            }
        };

        self.emit_completed(&report);
        Ok(report)
    }

    /// Run the build without touching any destination
    pub fn dry_run(&self, config: &BuildConfig) -> RuleMergeResult<BuildReport> {
        config.validate()?;
        self.emit_started(config);

        let report = match compose(&self.file_system, config, self.event_sink.as_ref())? {
            Composition::Empty => BuildReport {
                order: Vec::new(),
                document: CombinedDocument::empty(),
                destinations: config
                    .primary_destination()
                    .map(|p| vec![p.to_path_buf()])
                    .unwrap_or_default(),
                empty_source: true,
                dry_run: true,
            },
            Composition::Document { order, document } => BuildReport {
                order,
                document,
                destinations: config.destinations.clone(),
                empty_source: false,
                dry_run: true,
            },
        };

        self.emit_completed(&report);
        Ok(report)
    }

    fn write_all(
        &self,
        writer: &DestinationWriter<'_, FS>,
        config: &BuildConfig,
        content: &str,
    ) -> RuleMergeResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(config.destinations.len());

        match config.write_policy {
            WritePolicy::FailFast => {
                for destination in &config.destinations {
                    writer.write(destination, content)?;
                    written.push(destination.clone());
                }
            }
            WritePolicy::BestEffort => {
                let mut failures = Vec::new();
                for destination in &config.destinations {
                    match writer.write(destination, content) {
                        Ok(()) => written.push(destination.clone()),
                        Err(error) => failures.push(DestinationFailure {
                            path: destination.clone(),
                            error,
                        }),
                    }
                }
                if !failures.is_empty() {
                    return Err(RuleMergeError::DestinationWrite { failures });
                }
            }
        }

        Ok(written)
    }

    fn emit_started(&self, config: &BuildConfig) {
        emit(
            self.event_sink.as_ref(),
            BuildEvent::Started {
                source: config.source_dir.clone(),
                destinations: config.destinations.clone(),
            },
        );
    }

    fn emit_completed(&self, report: &BuildReport) {
        emit(
            self.event_sink.as_ref(),
            BuildEvent::Completed {
                fragment_count: report.fragment_count(),
                destinations: report.destinations.clone(),
                hash: report.hash().to_string(),
                dry_run: report.dry_run,
            },
        );
    }
}
