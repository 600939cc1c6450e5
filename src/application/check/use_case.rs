//! Check Use Case

use std::sync::Arc;

use crate::application::build::BuildConfig;
use crate::application::compose::{compose, Composition};
use crate::domain::ports::{BuildEventSink, FileSystem, NoopEventSink};
use crate::error::{RuleMergeError, RuleMergeResult};

use super::report::{CheckReport, DestinationCheck, DestinationStatus};

/// Compares destinations with an in-memory build
pub struct CheckUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    event_sink: Arc<dyn BuildEventSink>,
}

impl<FS> CheckUseCase<FS>
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

    /// Build in memory and compare.
    ///
    /// With no fragments only the primary destination is checked, since a
    /// build would leave the others untouched.
    pub fn execute(&self, config: &BuildConfig) -> RuleMergeResult<CheckReport> {
        config.validate()?;

        let (expected, targets) =
            match compose(&self.file_system, config, self.event_sink.as_ref())? {
                Composition::Empty => (String::new(), &config.destinations[..1]),
                Composition::Document { document, .. } => {
                    (document.into_content(), &config.destinations[..])
                }
            };

        let mut destinations = Vec::with_capacity(targets.len());
        for path in targets {
            let status = match self.file_system.read(path) {
                Ok(current) if current == expected => DestinationStatus::UpToDate,
                Ok(current) => DestinationStatus::Stale { current },
                Err(err) if err.is_not_found() => DestinationStatus::Missing,
                Err(source) => {
                    return Err(RuleMergeError::DestinationRead {
                        path: path.clone(),
                        source,
                    })
                }
            };
            destinations.push(DestinationCheck {
                path: path.clone(),
                status,
            });
        }

        Ok(CheckReport {
            expected,
            destinations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::build::BuildUseCase;
    use crate::infrastructure::fs::MemoryFs;
    use std::path::PathBuf;

    fn config() -> BuildConfig {
        BuildConfig::new(
            "/p/rules",
            vec![PathBuf::from("/p/.clinerules"), PathBuf::from("/p/copilot.md")],
        )
    }

    #[test]
    fn fresh_build_is_up_to_date() {
        let fs = MemoryFs::new();
        fs.add_file("/p/rules/base.mdc", "B");
        BuildUseCase::new(fs.clone()).execute(&config()).unwrap();

        let report = CheckUseCase::new(fs).execute(&config()).unwrap();

        assert!(report.is_up_to_date());
        assert_eq!(report.destinations.len(), 2);
    }

    #[test]
    fn edited_source_makes_destinations_stale() {
        let fs = MemoryFs::new();
        fs.add_file("/p/rules/base.mdc", "B");
        BuildUseCase::new(fs.clone()).execute(&config()).unwrap();
        fs.add_file("/p/rules/base.mdc", "B2");

        let report = CheckUseCase::new(fs).execute(&config()).unwrap();

        assert!(!report.is_up_to_date());
        assert_eq!(report.outdated().count(), 2);
        assert!(matches!(
            report.destinations[0].status,
            DestinationStatus::Stale { ref current } if current.contains("\nB\n")
        ));
    }

    #[test]
    fn missing_destination_is_reported() {
        let fs = MemoryFs::new();
        fs.add_file("/p/rules/base.mdc", "B");

        let report = CheckUseCase::new(fs).execute(&config()).unwrap();

        assert!(report
            .destinations
            .iter()
            .all(|d| d.status == DestinationStatus::Missing));
    }

    #[test]
    fn empty_source_checks_primary_only() {
        let fs = MemoryFs::new();
        fs.add_file("/p/.clinerules", "");

        let report = CheckUseCase::new(fs).execute(&config()).unwrap();

        assert_eq!(report.destinations.len(), 1);
        assert!(report.is_up_to_date());
    }

    #[test]
    fn unreadable_destination_is_an_error() {
        let fs = MemoryFs::new();
        fs.add_file("/p/rules/base.mdc", "B");
        fs.add_file("/p/.clinerules", "x");
        fs.fail_path("/p/.clinerules");

        let err = CheckUseCase::new(fs).execute(&config()).unwrap_err();
        assert!(matches!(err, RuleMergeError::DestinationRead { .. }));
    }
}
