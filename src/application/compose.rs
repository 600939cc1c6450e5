//! Shared front half of a build: list, sort, combine.

use std::path::Path;

use crate::domain::entities::CombinedDocument;
use crate::domain::ports::build_events::emit;
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem};
use crate::domain::services::{combine_fragments, list_fragments};
use crate::error::RuleMergeResult;

use super::build::BuildConfig;

/// What the source directory turned into
pub(crate) enum Composition {
    /// No fragments; only the primary destination is written (with nothing)
    Empty,
    Document {
        order: Vec<String>,
        document: CombinedDocument,
    },
}

pub(crate) fn compose<FS>(
    fs: &FS,
    config: &BuildConfig,
    sink: &dyn BuildEventSink,
) -> RuleMergeResult<Composition>
where
    FS: FileSystem + ?Sized,
{
    let Some(order) = resolve_order(fs, config, config.primary_destination(), sink)? else {
        return Ok(Composition::Empty);
    };

    let document = combine_fragments(fs, &config.source_dir, &order, sink)?;

    Ok(Composition::Document { order, document })
}

/// List and sort the fragments, reporting warnings.
///
/// `None` means there is nothing to combine. `primary` is named in the
/// empty-source warning when the caller will write it.
pub(crate) fn resolve_order<FS>(
    fs: &FS,
    config: &BuildConfig,
    primary: Option<&Path>,
    sink: &dyn BuildEventSink,
) -> RuleMergeResult<Option<Vec<String>>>
where
    FS: FileSystem + ?Sized,
{
    let listing = list_fragments(fs, &config.source_dir, &config.extension)?;

    if listing.is_missing() {
        emit(
            sink,
            BuildEvent::SourceMissing {
                path: config.source_dir.clone(),
            },
        );
    }

    if listing.is_empty() {
        emit(
            sink,
            BuildEvent::NoFragments {
                source: config.source_dir.clone(),
                primary: primary.map(Path::to_path_buf),
            },
        );
        return Ok(None);
    }

    let outcome = config.policy.sort(listing.names());

    if outcome.base_missing {
        emit(
            sink,
            BuildEvent::BaseMissing {
                base: config.policy.base().to_string(),
            },
        );
    }
    if !outcome.unlisted.is_empty() {
        emit(
            sink,
            BuildEvent::UnlistedFragments {
                names: outcome.unlisted.clone(),
            },
        );
    }
    emit(
        sink,
        BuildEvent::OrderResolved {
            order: outcome.order.clone(),
        },
    );

    Ok(Some(outcome.order))
}
