//! Check Report

use std::path::PathBuf;

/// State of one destination compared with a fresh build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationStatus {
    UpToDate,
    /// Exists with different content
    Stale { current: String },
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationCheck {
    pub path: PathBuf,
    pub status: DestinationStatus,
}

/// Result of a check run
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Content a build would write
    pub expected: String,
    pub destinations: Vec<DestinationCheck>,
}

impl CheckReport {
    pub fn is_up_to_date(&self) -> bool {
        self.destinations
            .iter()
            .all(|d| d.status == DestinationStatus::UpToDate)
    }

    pub fn outdated(&self) -> impl Iterator<Item = &DestinationCheck> {
        self.destinations
            .iter()
            .filter(|d| d.status != DestinationStatus::UpToDate)
    }
}
