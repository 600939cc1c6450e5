//! Write Policy Value Object
//!
//! Decides what happens when one of several destinations cannot be written.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Policy for writing the combined document to multiple destinations
///
/// - `FailFast`: stop at the first failed destination (default)
/// - `BestEffort`: attempt every destination, then report all failures
///
/// Either way a failed write makes the run fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    #[default]
    FailFast,
    BestEffort,
}

impl WritePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WritePolicy::FailFast => "fail-fast",
            WritePolicy::BestEffort => "best-effort",
        }
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "fail-fast" | "failfast" => Ok(WritePolicy::FailFast),
            "best-effort" | "besteffort" => Ok(WritePolicy::BestEffort),
            other => Err(format!(
                "unknown write policy '{}' (expected 'fail-fast' or 'best-effort')",
                other
            )),
        }
    }
}
