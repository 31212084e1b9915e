#![forbid(unsafe_code)]

use std::fmt;

use crate::item::ItemId;

/// Errors reported by [`Arena`](crate::Arena) operations.
///
/// All of them are local to the call that produced them; the arena is left
/// unchanged and remains usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The handle does not name a live item: it was minted before the last
    /// reset or is out of range.
    InvalidIndex { item: ItemId },
    /// Insertion referenced a parent that is not a live item of this arena.
    InvalidParent { parent: ItemId },
    /// The handle was minted by a different arena.
    ForeignItem { item: ItemId, arena: u32 },
    /// The item has not been laid out since it was created or since the
    /// arena was last mutated.
    StaleOrMissing { item: ItemId },
    /// Layout was requested on an arena with no items.
    EmptyTree,
    /// The arena cannot address any more items.
    TooManyItems { len: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex { item } => write!(f, "{item} is not live"),
            Self::InvalidParent { parent } => {
                write!(f, "cannot insert under {parent}: parent is not live")
            }
            Self::ForeignItem { item, arena } => {
                write!(f, "{item} does not belong to arena {arena}")
            }
            Self::StaleOrMissing { item } => {
                write!(f, "{item} has no layout since its last change")
            }
            Self::EmptyTree => write!(f, "layout requested on an empty arena"),
            Self::TooManyItems { len } => {
                write!(f, "arena is full at {len} items")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
