#![forbid(unsafe_code)]

//! Item arena.
//!
//! All items of a layout tree live in one insertion-ordered vector and are
//! addressed by [`ItemId`] handles. Items are never removed individually;
//! [`Arena::reset`] drops the whole tree at once and keeps the allocation
//! for the next frame.

use std::iter::FusedIterator;
use std::sync::atomic::{AtomicU32, Ordering};

use stackbox_core::Sides;

use crate::arrange::ArrangeScratch;
use crate::behavior::Behavior;
use crate::error::LayoutError;
use crate::item::{FixedSize, Item, ItemId};
use crate::measure::MeasureScratch;

static NEXT_ARENA_ID: AtomicU32 = AtomicU32::new(1);

/// Owning store of a layout tree.
///
/// Every successful mutation bumps the arena's revision. Rects computed at
/// an older revision are reported as stale by
/// [`get_rect`](Arena::get_rect).
#[derive(Debug)]
pub struct Arena {
    id: u32,
    epoch: u32,
    pub(crate) revision: u64,
    pub(crate) items: Vec<Item>,
    pub(crate) measure: MeasureScratch,
    pub(crate) arrange: ArrangeScratch,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty arena with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            epoch: 0,
            revision: 1,
            items: Vec::with_capacity(capacity),
            measure: MeasureScratch::default(),
            arrange: ArrangeScratch::default(),
        }
    }

    /// Reserve room for at least `additional` more items.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Number of items the arena can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Number of live items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `item` names a live item of this arena.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.slot(item).is_ok()
    }

    /// Drop every item. Handles minted before the reset stop resolving;
    /// allocated capacity is kept.
    pub fn reset(&mut self) {
        self.items.clear();
        self.epoch = self.epoch.wrapping_add(1);
        self.touch();
    }

    /// Append a new item, as the last child of `parent` or as a new root.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidParent`] if `parent` is not a live item of this
    /// arena, [`LayoutError::TooManyItems`] if the arena cannot address
    /// another item.
    pub fn insert(&mut self, parent: Option<ItemId>) -> Result<ItemId, LayoutError> {
        let parent = match parent {
            Some(p) => {
                self.slot(p)
                    .map_err(|_| LayoutError::InvalidParent { parent: p })?;
                Some(p.index)
            }
            None => None,
        };
        let len = self.items.len();
        let index = u32::try_from(len).map_err(|_| LayoutError::TooManyItems { len })?;

        self.items.push(Item::child_of(parent));
        if let Some(p) = parent {
            let p = p as usize;
            match self.items[p].last_child {
                Some(last) => self.items[last as usize].next_sibling = Some(index),
                None => self.items[p].first_child = Some(index),
            }
            self.items[p].last_child = Some(index);
        }
        self.touch();
        Ok(self.handle(index))
    }

    /// Set the explicit size. `None` leaves the axis to be derived from
    /// children or from fill.
    pub fn set_size(
        &mut self,
        item: ItemId,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<(), LayoutError> {
        let slot = self.slot(item)?;
        self.items[slot].fixed = FixedSize::new(width, height);
        self.touch();
        Ok(())
    }

    /// The explicit size set with [`set_size`](Self::set_size).
    pub fn size(&self, item: ItemId) -> Result<FixedSize, LayoutError> {
        Ok(self.items[self.slot(item)?].fixed)
    }

    /// Set the outer margins, in left, top, right, bottom order.
    pub fn set_margins(
        &mut self,
        item: ItemId,
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
    ) -> Result<(), LayoutError> {
        self.set_sides(item, Sides::ltrb(left, top, right, bottom))
    }

    pub fn set_sides(&mut self, item: ItemId, margins: Sides) -> Result<(), LayoutError> {
        let slot = self.slot(item)?;
        self.items[slot].margins = margins;
        self.touch();
        Ok(())
    }

    pub fn margins(&self, item: ItemId) -> Result<Sides, LayoutError> {
        Ok(self.items[self.slot(item)?].margins)
    }

    pub fn set_behavior(&mut self, item: ItemId, behavior: Behavior) -> Result<(), LayoutError> {
        let slot = self.slot(item)?;
        self.items[slot].behavior = behavior;
        self.touch();
        Ok(())
    }

    pub fn behavior(&self, item: ItemId) -> Result<Behavior, LayoutError> {
        Ok(self.items[self.slot(item)?].behavior)
    }

    pub fn parent(&self, item: ItemId) -> Result<Option<ItemId>, LayoutError> {
        let slot = self.slot(item)?;
        Ok(self.items[slot].parent.map(|i| self.handle(i)))
    }

    pub fn first_child(&self, item: ItemId) -> Result<Option<ItemId>, LayoutError> {
        let slot = self.slot(item)?;
        Ok(self.items[slot].first_child.map(|i| self.handle(i)))
    }

    pub fn last_child(&self, item: ItemId) -> Result<Option<ItemId>, LayoutError> {
        let slot = self.slot(item)?;
        Ok(self.items[slot].last_child.map(|i| self.handle(i)))
    }

    pub fn next_sibling(&self, item: ItemId) -> Result<Option<ItemId>, LayoutError> {
        let slot = self.slot(item)?;
        Ok(self.items[slot].next_sibling.map(|i| self.handle(i)))
    }

    /// Children of `item` in insertion order.
    pub fn children(&self, item: ItemId) -> Result<Children<'_>, LayoutError> {
        let slot = self.slot(item)?;
        Ok(Children {
            arena: self,
            next: self.items[slot].first_child,
        })
    }

    /// Items without a parent, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items
            .iter()
            .zip(0u32..)
            .filter(|(item, _)| item.parent.is_none())
            .map(|(_, index)| self.handle(index))
    }

    /// Resolve a handle to its slot, rejecting foreign and dead handles.
    pub(crate) fn slot(&self, item: ItemId) -> Result<usize, LayoutError> {
        if item.arena != self.id {
            return Err(LayoutError::ForeignItem {
                item,
                arena: self.id,
            });
        }
        let index = item.index as usize;
        if item.epoch != self.epoch || index >= self.items.len() {
            return Err(LayoutError::InvalidIndex { item });
        }
        Ok(index)
    }

    #[inline]
    pub(crate) fn handle(&self, index: u32) -> ItemId {
        ItemId {
            arena: self.id,
            epoch: self.epoch,
            index,
        }
    }

    #[inline]
    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Iterator over an item's children. Created by [`Arena::children`].
#[derive(Debug, Clone)]
pub struct Children<'a> {
    arena: &'a Arena,
    next: Option<u32>,
}

impl Iterator for Children<'_> {
    type Item = ItemId;

    fn next(&mut self) -> Option<ItemId> {
        let index = self.next?;
        self.next = self.arena.items[index as usize].next_sibling;
        Some(self.arena.handle(index))
    }
}

impl FusedIterator for Children<'_> {}
