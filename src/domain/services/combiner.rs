//! Fragment Combiner
//!
//! Reads fragments in order and concatenates them. A failed read does not
//! stop the loop; every failure is collected and reported in one error.

use std::path::Path;

use crate::domain::entities::{CombinedDocument, RuleFragment};
use crate::domain::ports::build_events::emit;
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem};
use crate::error::{FragmentFailure, RuleMergeError, RuleMergeResult};

/// Read every fragment in `order` from `dir` and combine them.
///
/// Each read failure is reported to `sink` when it happens; once all files
/// have been attempted, any failures become a single `FragmentRead` error.
pub fn combine_fragments<FS>(
    fs: &FS,
    dir: &Path,
    order: &[String],
    sink: &dyn BuildEventSink,
) -> RuleMergeResult<CombinedDocument>
where
    FS: FileSystem + ?Sized,
{
    let mut fragments = Vec::with_capacity(order.len());
    let mut failures = Vec::new();

    for (index, name) in order.iter().enumerate() {
        let path = dir.join(name);
        match fs.read(&path) {
            Ok(content) => {
                emit(
                    sink,
                    BuildEvent::FragmentRead {
                        index,
                        path: path.clone(),
                    },
                );
                fragments.push(RuleFragment::new(name.as_str(), content));
            }
            Err(cause) => {
                emit(
                    sink,
                    BuildEvent::FragmentFailed {
                        index,
                        path: path.clone(),
                        error: cause.to_string(),
                    },
                );
                failures.push(FragmentFailure { path, cause });
            }
        }
    }

    if !failures.is_empty() {
        return Err(RuleMergeError::FragmentRead { failures });
    }

    Ok(CombinedDocument::from_fragments(&fragments))
}
