//! Domain Layer
//!
//! The core of rulemerge: fragment ordering and combining without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Rule fragments and the combined document
//! - `value_objects/` - Immutable value types (ContentHash, WritePolicy)
//! - `policies/` - The ordering policy (priority list + alphabetical fallback)
//! - `services/` - Lister, combiner and destination writer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No ambient I/O** - All file access goes through the `FileSystem` port
//! 2. **No printing** - Progress is reported through `BuildEventSink`
//! 3. **Ports & Adapters** - Infrastructure provides the concrete implementations

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
