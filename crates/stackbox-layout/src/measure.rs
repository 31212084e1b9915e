#![forbid(unsafe_code)]

//! Size pass: resolves every item's intrinsic size, children before parents.

use stackbox_core::{Axis, Size};

use crate::item::Item;

/// Reusable buffers for the size pass.
#[derive(Debug, Default)]
pub(crate) struct MeasureScratch {
    stack: Vec<u32>,
    order: Vec<u32>,
}

/// Resolve sizes for the subtree rooted at `root`. Returns the number of
/// items visited.
///
/// Walks the subtree in pre-order with an explicit stack, then resolves the
/// visit order backwards: every item appears after all of its descendants
/// in a pre-order listing, so the reversed listing is a valid post-order.
pub(crate) fn resolve_sizes(items: &mut [Item], root: u32, scratch: &mut MeasureScratch) -> usize {
    scratch.stack.clear();
    scratch.order.clear();
    scratch.stack.push(root);
    while let Some(index) = scratch.stack.pop() {
        scratch.order.push(index);
        let mut child = items[index as usize].first_child;
        while let Some(c) = child {
            scratch.stack.push(c);
            child = items[c as usize].next_sibling;
        }
    }

    for &index in scratch.order.iter().rev() {
        let resolved = intrinsic_size(items, index);
        items[index as usize].resolved = resolved;
    }
    scratch.order.len()
}

fn intrinsic_size(items: &[Item], index: u32) -> Size {
    let item = &items[index as usize];
    let stacking = item.behavior.direction.axis();
    let mut size = Size::ZERO;
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let value = match item.fixed.get(axis) {
            Some(fixed) => fixed,
            None => children_extent(items, item, axis, stacking == Some(axis)),
        };
        size.set(axis, value);
    }
    size
}

/// Children's outer extent along `axis`: summed when they stack along it,
/// otherwise the largest one. Wrapping is not considered here.
fn children_extent(items: &[Item], item: &Item, axis: Axis, stacked: bool) -> u32 {
    let mut need = 0u32;
    let mut child = item.first_child;
    while let Some(c) = child {
        let node = &items[c as usize];
        let outer = node
            .resolved
            .get(axis)
            .saturating_add(node.margins.sum(axis));
        need = if stacked {
            need.saturating_add(outer)
        } else {
            need.max(outer)
        };
        child = node.next_sibling;
    }
    need
}
