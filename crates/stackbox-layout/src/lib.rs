#![forbid(unsafe_code)]

//! Stacking-box layout.
//!
//! A tree of boxes lives in an [`Arena`]. Each box has an optional fixed
//! size, outer margins and a [`Behavior`] that says how it stacks its
//! children and how it sits inside its parent. [`Arena::compute`] resolves
//! the whole tree in two non-recursive passes:
//!
//! 1. a size pass, bottom-up, sums children along the stacking axis and
//!    takes the largest child across it;
//! 2. an arrange pass, top-down, splits each container's space among its
//!    children, wrapping, filling and aligning as requested.
//!
//! Results are absolute pixel rectangles, read back with
//! [`Arena::get_rect`]. Any later mutation marks them stale.
//!
//! ```
//! use stackbox_layout::{Arena, Behavior, Fill, Rect};
//!
//! let mut arena = Arena::new();
//! let root = arena.insert(None)?;
//! arena.set_size(root, Some(100), Some(10))?;
//!
//! let left = arena.insert(Some(root))?;
//! let right = arena.insert(Some(root))?;
//! for item in [left, right] {
//!     arena.set_behavior(item, Behavior::default().fill(Fill::BOTH))?;
//! }
//!
//! arena.compute(root);
//! assert_eq!(arena.get_rect(left)?, Rect::new(0, 0, 50, 10));
//! assert_eq!(arena.get_rect(right)?, Rect::new(50, 0, 50, 10));
//! # Ok::<(), stackbox_layout::LayoutError>(())
//! ```
//!
//! The arena keeps its scratch buffers across [`Arena::reset`], so a UI
//! that rebuilds its tree every frame stops allocating once warmed up.

pub mod arena;
mod arrange;
pub mod behavior;
mod compute;
mod distribute;
pub mod error;
pub mod item;
mod measure;

pub use arena::{Arena, Children};
pub use behavior::{Align, Behavior, Direction, Fill};
pub use error::LayoutError;
pub use item::{FixedSize, ItemId};
pub use stackbox_core::geometry::{Axis, Rect, Sides, Size};
