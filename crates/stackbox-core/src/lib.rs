#![forbid(unsafe_code)]

//! Core: geometry primitives and the logging shim shared by the stackbox crates.

pub mod geometry;
pub mod logging;

pub use geometry::{Axis, Rect, Sides, Size};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};
