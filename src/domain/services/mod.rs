//! Domain Services
//!
//! The steps of a build, each working through the `FileSystem` port.

mod combiner;
mod lister;
mod writer;

pub use combiner::combine_fragments;
pub use lister::{list_fragments, SourceListing};
pub use writer::DestinationWriter;
