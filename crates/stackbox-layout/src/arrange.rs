#![forbid(unsafe_code)]

//! Arrange pass: hands each item its final rectangle, parents before
//! children.
//!
//! The pass keeps its own frame stack instead of recursing, so tree depth is
//! bounded only by memory. Coordinates are computed in `i64` and clamped
//! once when written into a [`Rect`].

use stackbox_core::{Axis, Rect};

use crate::behavior::{Align, Behavior};
use crate::distribute::WeightedSplit;
use crate::item::Item;

/// Reusable buffers for the arrange pass.
#[derive(Debug, Default)]
pub(crate) struct ArrangeScratch {
    frames: Vec<Frame>,
    children: Vec<u32>,
    placed: Vec<Rect>,
    lines: Vec<Line>,
}

/// An item waiting for its rectangle.
#[derive(Debug, Clone, Copy)]
struct Frame {
    item: u32,
    rect: Rect,
}

/// Why a line of children ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnd {
    /// Ran out of children.
    Last,
    /// The next child did not fit.
    Wrap,
    /// The next child asked for a new line.
    Break,
}

/// A run of children laid out along the stacking axis.
#[derive(Debug, Clone, Copy)]
struct Line {
    start: usize,
    end: usize,
    /// Space taken by non-fill children plus all margins.
    used: i64,
    fillers: usize,
    /// Non-fill children without a fixed size on the stacking axis.
    squeezable: u64,
    /// Largest outer extent across the stacking axis.
    cross: i64,
    ended: LineEnd,
}

impl Line {
    fn open(start: usize) -> Self {
        Self {
            start,
            end: start,
            used: 0,
            fillers: 0,
            squeezable: 0,
            cross: 0,
            ended: LineEnd::Last,
        }
    }

    fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Place the subtree under `root`, which occupies `rect`. Every visited item
/// is stamped with `revision`. Returns the number of items visited.
///
/// Expects the size pass to have run on the same subtree.
pub(crate) fn arrange(
    items: &mut [Item],
    root: u32,
    rect: Rect,
    revision: u64,
    scratch: &mut ArrangeScratch,
) -> usize {
    let ArrangeScratch {
        frames,
        children,
        placed,
        lines,
    } = scratch;

    frames.clear();
    frames.push(Frame { item: root, rect });
    let mut visited = 0;

    while let Some(Frame { item, rect }) = frames.pop() {
        visited += 1;
        let node = &mut items[item as usize];
        node.rect = rect;
        node.laid_out_at = revision;
        let behavior = node.behavior;

        children.clear();
        let mut child = node.first_child;
        while let Some(c) = child {
            children.push(c);
            child = items[c as usize].next_sibling;
        }
        if children.is_empty() {
            continue;
        }

        placed.clear();
        match behavior.direction.axis() {
            Some(axis) => {
                let lines_extent =
                    arrange_stacked(items, &behavior, rect, axis, children, placed, lines);
                // A wrapping column widens to hold all of its lines.
                if behavior.wrap && axis == Axis::Vertical {
                    items[item as usize].rect.width = to_extent(lines_extent);
                }
            }
            None => arrange_overlay(items, rect, children, placed),
        }

        // Reversed so the first child is popped first.
        for (&c, &r) in children.iter().zip(placed.iter()).rev() {
            frames.push(Frame { item: c, rect: r });
        }
    }
    visited
}

/// Row and column containers. Returns the summed cross extent of the lines.
fn arrange_stacked(
    items: &[Item],
    behavior: &Behavior,
    rect: Rect,
    axis: Axis,
    children: &[u32],
    placed: &mut Vec<Rect>,
    lines: &mut Vec<Line>,
) -> i64 {
    let cross = axis.cross();
    let origin = i64::from(rect.start(axis));
    let space = i64::from(rect.extent(axis));
    let far_edge = origin + space;
    let wrap = behavior.wrap;

    split_lines(items, axis, space, wrap, children, lines);

    let cross_origin = i64::from(rect.start(cross));
    let mut line_start = cross_origin;
    for line in lines.iter() {
        let members = &children[line.start..line.end];
        let line_extent = if wrap {
            line.cross
        } else {
            i64::from(rect.extent(cross))
        };

        let remaining = space - line.used;
        let mut lead = 0;
        let mut fill = None;
        let mut gaps = None;
        let mut squeeze = None;
        if remaining > 0 {
            let extra = remaining.unsigned_abs();
            if line.fillers > 0 {
                fill = Some(WeightedSplit::new(extra, fill_weights(items, members, axis)));
            } else {
                match behavior.justify {
                    Align::Start => {}
                    Align::Center => lead = remaining / 2,
                    Align::End => lead = remaining,
                    Align::Justify => {
                        // Last and manually broken lines of a wrapping
                        // container stay packed at the start.
                        if !wrap || line.ended == LineEnd::Wrap {
                            if line.len() > 1 {
                                gaps = Some(WeightedSplit::even(extra, line.len() as u64 - 1));
                            } else {
                                lead = remaining / 2;
                            }
                        }
                    }
                }
            }
        } else if remaining < 0 && !wrap && line.squeezable > 0 {
            squeeze = Some(WeightedSplit::even(remaining.unsigned_abs(), line.squeezable));
        }

        let mut cursor = origin + lead;
        for (pos, &c) in members.iter().enumerate() {
            let node = &items[c as usize];
            let m_start = i64::from(node.margins.start(axis));
            let m_end = i64::from(node.margins.end(axis));
            let resolved = i64::from(node.resolved.get(axis));

            let extent = if node.behavior.fill.on(axis) {
                fill.as_mut()
                    .map_or(0, |split| signed(split.share(node.behavior.weight())))
            } else if node.fixed.get(axis).is_none() {
                match squeeze.as_mut() {
                    Some(split) => (resolved - signed(split.share(1))).max(0),
                    None => resolved,
                }
            } else {
                resolved
            };

            let start = cursor + m_start;
            let visible = if wrap {
                extent.min(far_edge - m_end - start).max(0)
            } else {
                extent
            };
            cursor = start + extent + m_end;
            if pos + 1 < members.len() {
                if let Some(split) = gaps.as_mut() {
                    cursor += signed(split.share(1));
                }
            }

            let (cross_start, cross_extent) = place_on_axis(node, cross, line_start, line_extent);
            let mut r = Rect::default();
            r.set_span(axis, to_coord(start), to_extent(visible));
            r.set_span(cross, to_coord(cross_start), to_extent(cross_extent));
            placed.push(r);
        }

        line_start += line_extent;
    }
    line_start - cross_origin
}

/// Partition `children` into lines along `axis`.
fn split_lines(
    items: &[Item],
    axis: Axis,
    space: i64,
    wrap: bool,
    children: &[u32],
    lines: &mut Vec<Line>,
) {
    let cross = axis.cross();
    lines.clear();
    let mut line = Line::open(0);

    for (pos, &c) in children.iter().enumerate() {
        let node = &items[c as usize];
        let fills = node.behavior.fill.on(axis);
        let margins = i64::from(node.margins.sum(axis));
        let extent = if fills {
            margins
        } else {
            i64::from(node.resolved.get(axis)) + margins
        };

        if wrap && pos > line.start {
            let ended = if node.behavior.line_break {
                Some(LineEnd::Break)
            } else if line.used + extent > space {
                Some(LineEnd::Wrap)
            } else {
                None
            };
            if let Some(ended) = ended {
                line.end = pos;
                line.ended = ended;
                lines.push(line);
                line = Line::open(pos);
            }
        }

        line.used += extent;
        if fills {
            line.fillers += 1;
        } else if node.fixed.get(axis).is_none() {
            line.squeezable += 1;
        }
        let outer_cross = i64::from(node.resolved.get(cross)) + i64::from(node.margins.sum(cross));
        line.cross = line.cross.max(outer_cross);
    }

    line.end = children.len();
    line.ended = LineEnd::Last;
    lines.push(line);
}

fn fill_weights<'a>(
    items: &'a [Item],
    members: &'a [u32],
    axis: Axis,
) -> impl Iterator<Item = u64> + Clone + 'a {
    members
        .iter()
        .map(move |&c| &items[c as usize])
        .filter(move |node| node.behavior.fill.on(axis))
        .map(|node| node.behavior.weight())
}

/// Overlay containers: every child is placed against the whole container.
fn arrange_overlay(items: &[Item], rect: Rect, children: &[u32], placed: &mut Vec<Rect>) {
    placed.extend(children.iter().map(|&c| place_in(&items[c as usize], rect)));
}

/// Place `node` inside `area` on both axes by its own fill and alignment.
pub(crate) fn place_in(node: &Item, area: Rect) -> Rect {
    let mut rect = Rect::default();
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let (start, extent) = place_on_axis(
            node,
            axis,
            i64::from(area.start(axis)),
            i64::from(area.extent(axis)),
        );
        rect.set_span(axis, to_coord(start), to_extent(extent));
    }
    rect
}

/// Start and extent of `node` inside the span `[span_start, span_start +
/// span_extent)` along `axis`.
///
/// A filling item takes the span minus its margins. Any other item keeps its
/// resolved size, even when that overflows the span, and is positioned by
/// its alignment. Justify centers.
fn place_on_axis(node: &Item, axis: Axis, span_start: i64, span_extent: i64) -> (i64, i64) {
    let m_start = i64::from(node.margins.start(axis));
    let m_end = i64::from(node.margins.end(axis));
    if node.behavior.fill.on(axis) {
        return (span_start + m_start, (span_extent - m_start - m_end).max(0));
    }

    let extent = i64::from(node.resolved.get(axis));
    let start = match node.behavior.align_on(axis) {
        Align::Start => span_start + m_start,
        Align::End => span_start + span_extent - m_end - extent,
        Align::Center | Align::Justify => {
            let free = span_extent - m_start - m_end - extent;
            span_start + m_start + free.div_euclid(2)
        }
    };
    (start, extent)
}

#[inline]
fn signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[inline]
pub(crate) fn to_coord(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[inline]
pub(crate) fn to_extent(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}
