#![forbid(unsafe_code)]

//! stackbox public facade crate.
//!
//! Re-exports the layout engine and its geometry types, plus a prelude for
//! day-to-day use.
//!
//! ```
//! use stackbox::prelude::*;
//!
//! let mut arena = Arena::new();
//! let window = arena.insert(None)?;
//! arena.set_behavior(window, Behavior::column().fill(Fill::BOTH))?;
//!
//! let header = arena.insert(Some(window))?;
//! arena.set_size(header, None, Some(24))?;
//! arena.set_behavior(header, Behavior::row().fill(Fill::HORIZONTAL))?;
//!
//! let body = arena.insert(Some(window))?;
//! arena.set_behavior(body, Behavior::row().wrap(true).fill(Fill::BOTH))?;
//!
//! arena.compute_in(window, Rect::from_size(800, 600))?;
//! assert_eq!(arena.get_rect(header)?, Rect::new(0, 0, 800, 24));
//! assert_eq!(arena.get_rect(body)?, Rect::new(0, 24, 800, 576));
//! # Ok::<(), stackbox::LayoutError>(())
//! ```

// --- Geometry re-exports ---------------------------------------------------

pub use stackbox_core::geometry::{Axis, Rect, Sides, Size};

// --- Layout re-exports -----------------------------------------------------

pub use stackbox_layout::{
    Align, Arena, Behavior, Children, Direction, Fill, FixedSize, ItemId, LayoutError,
};

/// Standard result type for stackbox APIs.
pub type Result<T> = std::result::Result<T, LayoutError>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Align, Arena, Behavior, Direction, Fill, ItemId, LayoutError, Rect, Result, Sides, Size,
    };
}
