#![forbid(unsafe_code)]

//! Item handles and the per-item record stored in the arena.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use stackbox_core::{Axis, Rect, Sides, Size};

use crate::behavior::Behavior;

/// Stable handle to an item in an [`Arena`](crate::Arena).
///
/// A handle records which arena minted it and the arena's reset epoch at
/// that time, so handles from another arena or from before a
/// [`reset`](crate::Arena::reset) are rejected instead of aliasing new items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId {
    pub(crate) arena: u32,
    pub(crate) epoch: u32,
    pub(crate) index: u32,
}

impl ItemId {
    /// Insertion position of the item within its arena.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item {} (arena {}, epoch {})",
            self.index, self.arena, self.epoch
        )
    }
}

/// Explicit size of an item. `None` on an axis means the size is derived
/// from the children, or from the parent when the item fills that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl FixedSize {
    pub const fn new(width: Option<u32>, height: Option<u32>) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn get(&self, axis: Axis) -> Option<u32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Arena record. Tree links are slot indices into the same arena.
#[derive(Debug, Clone, Default)]
pub(crate) struct Item {
    pub(crate) parent: Option<u32>,
    pub(crate) first_child: Option<u32>,
    pub(crate) last_child: Option<u32>,
    pub(crate) next_sibling: Option<u32>,
    pub(crate) fixed: FixedSize,
    pub(crate) margins: Sides,
    pub(crate) behavior: Behavior,
    /// Output of the size pass.
    pub(crate) resolved: Size,
    /// Output of the arrange pass, absolute.
    pub(crate) rect: Rect,
    /// Arena revision at which `rect` was written; 0 = never.
    pub(crate) laid_out_at: u64,
}

impl Item {
    pub(crate) fn child_of(parent: Option<u32>) -> Self {
        Self {
            parent,
            ..Self::default()
        }
    }
}
