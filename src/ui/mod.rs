pub mod console_sink;
pub mod context;
pub mod diff;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
