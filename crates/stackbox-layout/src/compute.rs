#![forbid(unsafe_code)]

//! Layout entry points and result queries.

use stackbox_core::{Rect, Size, debug, debug_span, trace};

use crate::arena::Arena;
use crate::arrange::{arrange, place_in, to_coord};
use crate::error::LayoutError;
use crate::item::{Item, ItemId};
use crate::measure::resolve_sizes;

impl Arena {
    /// Lay out the tree under `root` and return the root's rectangle.
    ///
    /// The root is placed at its own top-left margin with its resolved size;
    /// a wrapping column root then widens to hold its lines. An empty arena or a handle that is not live is not an error here: the
    /// call does nothing and returns an all-zero rectangle.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn compute(&mut self, root: ItemId) -> Rect {
        match self.try_compute(root) {
            Ok(rect) => rect,
            Err(err) => {
                debug!(error = %err, "compute skipped");
                Rect::default()
            }
        }
    }

    /// Like [`compute`](Self::compute) but reports why nothing was laid out.
    ///
    /// # Errors
    ///
    /// [`LayoutError::EmptyTree`] on an empty arena,
    /// [`LayoutError::InvalidIndex`] or [`LayoutError::ForeignItem`] when
    /// `root` is not a live item of this arena.
    pub fn try_compute(&mut self, root: ItemId) -> Result<Rect, LayoutError> {
        if self.items.is_empty() {
            return Err(LayoutError::EmptyTree);
        }
        let slot = self.slot(root)?;
        Ok(self.layout_subtree(slot, at_own_margin))
    }

    /// Lay out the tree under `root` inside a host area such as a window.
    ///
    /// The root is placed in `area` by its own fill flags, margins and
    /// alignment, the same way an overlay container places its children.
    ///
    /// # Errors
    ///
    /// Same as [`try_compute`](Self::try_compute).
    pub fn compute_in(&mut self, root: ItemId, area: Rect) -> Result<Rect, LayoutError> {
        if self.items.is_empty() {
            return Err(LayoutError::EmptyTree);
        }
        let slot = self.slot(root)?;
        Ok(self.layout_subtree(slot, |node| place_in(node, area)))
    }

    /// Lay out every root in insertion order. Returns how many trees were
    /// laid out.
    pub fn compute_all(&mut self) -> usize {
        let mut trees = 0;
        for index in 0..self.items.len() {
            if self.items[index].parent.is_some() {
                continue;
            }
            self.layout_subtree(index, at_own_margin);
            trees += 1;
        }
        trees
    }

    /// Rectangle computed for `item` by the last layout.
    ///
    /// # Errors
    ///
    /// [`LayoutError::StaleOrMissing`] when the arena changed after `item`
    /// was laid out, or `item` was never laid out. [`LayoutError::InvalidIndex`]
    /// or [`LayoutError::ForeignItem`] when the handle is not live.
    pub fn get_rect(&self, item: ItemId) -> Result<Rect, LayoutError> {
        let node = &self.items[self.slot(item)?];
        if node.laid_out_at != self.revision {
            return Err(LayoutError::StaleOrMissing { item });
        }
        Ok(node.rect)
    }

    /// Intrinsic size found for `item` by the last layout's size pass.
    ///
    /// # Errors
    ///
    /// Same as [`get_rect`](Self::get_rect).
    pub fn resolved_size(&self, item: ItemId) -> Result<Size, LayoutError> {
        let node = &self.items[self.slot(item)?];
        if node.laid_out_at != self.revision {
            return Err(LayoutError::StaleOrMissing { item });
        }
        Ok(node.resolved)
    }

    fn layout_subtree(&mut self, root: usize, place: impl FnOnce(&Item) -> Rect) -> Rect {
        let span = debug_span!("stackbox.compute", root);
        let _guard = span.enter();

        let root = root as u32;
        let measured = resolve_sizes(&mut self.items, root, &mut self.measure);
        trace!(items = measured, "size pass done");

        let rect = place(&self.items[root as usize]);
        let arranged = arrange(
            &mut self.items,
            root,
            rect,
            self.revision,
            &mut self.arrange,
        );
        trace!(items = arranged, "arrange pass done");
        debug_assert_eq!(measured, arranged);
        let rect = self.items[root as usize].rect;

        debug!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "layout computed"
        );
        rect
    }
}

/// Root placement for a tree laid out on its own.
fn at_own_margin(node: &Item) -> Rect {
    Rect::new(
        to_coord(i64::from(node.margins.left)),
        to_coord(i64::from(node.margins.top)),
        node.resolved.width,
        node.resolved.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::{Behavior, Fill};

    #[test]
    fn empty_arena_computes_to_zero() {
        let mut arena = Arena::new();
        let mut other = Arena::new();
        let root = other.insert(None).unwrap();
        assert_eq!(arena.try_compute(root), Err(LayoutError::EmptyTree));
        assert_eq!(arena.compute(root), Rect::default());
    }

    #[test]
    fn dead_root_computes_to_zero() {
        let mut arena = Arena::new();
        let root = arena.insert(None).unwrap();
        arena.reset();
        arena.insert(None).unwrap();
        assert_eq!(
            arena.try_compute(root),
            Err(LayoutError::InvalidIndex { item: root })
        );
        assert_eq!(arena.compute(root), Rect::default());
    }

    #[test]
    fn root_sits_at_its_margin() {
        let mut arena = Arena::new();
        let root = arena.insert(None).unwrap();
        arena.set_size(root, Some(30), Some(40)).unwrap();
        arena.set_margins(root, 4, 6, 100, 100).unwrap();
        assert_eq!(arena.compute(root), Rect::new(4, 6, 30, 40));
        assert_eq!(arena.get_rect(root), Ok(Rect::new(4, 6, 30, 40)));
    }

    #[test]
    fn rect_goes_stale_after_mutation() {
        let mut arena = Arena::new();
        let root = arena.insert(None).unwrap();
        arena.set_size(root, Some(10), Some(10)).unwrap();
        assert_eq!(
            arena.get_rect(root),
            Err(LayoutError::StaleOrMissing { item: root })
        );

        arena.compute(root);
        assert!(arena.get_rect(root).is_ok());
        assert_eq!(arena.resolved_size(root), Ok(Size::new(10, 10)));

        arena.set_behavior(root, Behavior::column()).unwrap();
        assert_eq!(
            arena.get_rect(root),
            Err(LayoutError::StaleOrMissing { item: root })
        );
        assert!(arena.resolved_size(root).is_err());
    }

    #[test]
    fn compute_in_fills_the_host_area() {
        let mut arena = Arena::new();
        let root = arena.insert(None).unwrap();
        arena
            .set_behavior(root, Behavior::column().fill(Fill::BOTH))
            .unwrap();
        let child = arena.insert(Some(root)).unwrap();
        arena.set_size(child, Some(20), Some(20)).unwrap();

        let area = Rect::new(10, 20, 300, 200);
        assert_eq!(arena.compute_in(root, area), Ok(area));
        assert_eq!(arena.get_rect(child), Ok(Rect::new(10, 20, 20, 20)));
    }

    #[test]
    fn compute_all_lays_out_every_root() {
        let mut arena = Arena::new();
        let a = arena.insert(None).unwrap();
        arena.set_size(a, Some(5), Some(5)).unwrap();
        let a_child = arena.insert(Some(a)).unwrap();
        let b = arena.insert(None).unwrap();
        arena.set_size(b, Some(7), Some(3)).unwrap();

        assert_eq!(arena.compute_all(), 2);
        assert_eq!(arena.get_rect(a), Ok(Rect::new(0, 0, 5, 5)));
        assert!(arena.get_rect(a_child).is_ok());
        assert_eq!(arena.get_rect(b), Ok(Rect::new(0, 0, 7, 3)));
    }
}
