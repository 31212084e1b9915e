#![forbid(unsafe_code)]

//! Per-item behavior: how an item stacks its children and how it sits
//! inside its parent.

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use stackbox_core::Axis;

/// How a container lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Children stack left to right.
    #[default]
    Row,
    /// Children stack top to bottom.
    Column,
    /// Children share the whole container and are placed independently on
    /// both axes by their own fill and alignment.
    Overlay,
}

impl Direction {
    /// The stacking axis, or `None` for [`Direction::Overlay`].
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::Row => Some(Axis::Horizontal),
            Self::Column => Some(Axis::Vertical),
            Self::Overlay => None,
        }
    }
}

/// Placement of leftover space along one axis.
///
/// As a container's `justify` this positions each line of
/// children along the stacking axis (start, centered, end, or spread between
/// items). As a child's `align_h`/`align_v` it positions the item itself
/// inside the span its parent gives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Align {
    /// Leftover space goes after the content.
    #[default]
    Start,
    /// Leftover space is split before and after the content.
    Center,
    /// Leftover space goes before the content.
    End,
    /// Leftover space goes between items. A lone item is centered.
    Justify,
}

bitflags! {
    /// Axes along which an item expands to consume available space.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Fill: u8 {
        /// Expand horizontally.
        const HORIZONTAL = 0b01;
        /// Expand vertically.
        const VERTICAL   = 0b10;
        /// Expand in both directions.
        const BOTH       = 0b11;
    }
}

impl Fill {
    /// Whether the item fills along `axis`.
    #[inline]
    #[must_use]
    pub const fn on(self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.contains(Self::HORIZONTAL),
            Axis::Vertical => self.contains(Self::VERTICAL),
        }
    }
}

/// Behavior flags of a single item.
///
/// `direction`, `wrap` and `justify` describe the item as a container.
/// `fill`, `align_h`, `align_v`, `line_break` and `grow` describe the item as
/// a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Behavior {
    pub direction: Direction,
    /// Start a new line when the next child would overflow.
    pub wrap: bool,
    /// Placement of each line of children along the stacking axis when no
    /// child fills.
    pub justify: Align,
    pub fill: Fill,
    /// Placement inside the parent, horizontally.
    pub align_h: Align,
    /// Placement inside the parent, vertically.
    pub align_v: Align,
    /// Force this item onto a new line inside a wrapping parent.
    pub line_break: bool,
    /// Share of the parent's remaining space relative to fill siblings.
    /// Zero is treated as one.
    pub grow: u32,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            direction: Direction::Row,
            wrap: false,
            justify: Align::Start,
            fill: Fill::empty(),
            align_h: Align::Start,
            align_v: Align::Start,
            line_break: false,
            grow: 1,
        }
    }
}

impl Behavior {
    /// Build a behavior from the full set of stacking options.
    #[must_use]
    pub fn new(
        direction: Direction,
        wrap: bool,
        fill_h: bool,
        fill_v: bool,
        align_h: Align,
        align_v: Align,
    ) -> Self {
        let mut fill = Fill::empty();
        fill.set(Fill::HORIZONTAL, fill_h);
        fill.set(Fill::VERTICAL, fill_v);
        Self {
            direction,
            wrap,
            fill,
            align_h,
            align_v,
            ..Self::default()
        }
    }

    /// A container stacking children left to right.
    #[must_use]
    pub fn row() -> Self {
        Self::default()
    }

    /// A container stacking children top to bottom.
    #[must_use]
    pub fn column() -> Self {
        Self::default().direction(Direction::Column)
    }

    /// A container overlaying its children.
    #[must_use]
    pub fn overlay() -> Self {
        Self::default().direction(Direction::Overlay)
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    #[must_use]
    pub fn justify(mut self, justify: Align) -> Self {
        self.justify = justify;
        self
    }

    #[must_use]
    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Set the placement inside the parent on both axes.
    #[must_use]
    pub fn align(mut self, horizontal: Align, vertical: Align) -> Self {
        self.align_h = horizontal;
        self.align_v = vertical;
        self
    }

    #[must_use]
    pub fn align_h(mut self, align: Align) -> Self {
        self.align_h = align;
        self
    }

    #[must_use]
    pub fn align_v(mut self, align: Align) -> Self {
        self.align_v = align;
        self
    }

    #[must_use]
    pub fn line_break(mut self, line_break: bool) -> Self {
        self.line_break = line_break;
        self
    }

    #[must_use]
    pub fn grow(mut self, grow: u32) -> Self {
        self.grow = grow;
        self
    }

    /// Alignment along `axis`.
    #[inline]
    #[must_use]
    pub const fn align_on(&self, axis: Axis) -> Align {
        match axis {
            Axis::Horizontal => self.align_h,
            Axis::Vertical => self.align_v,
        }
    }

    /// Fill weight with the zero case folded to one.
    #[inline]
    pub(crate) fn weight(&self) -> u64 {
        u64::from(self.grow.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_start_aligned_row() {
        let b = Behavior::default();
        assert_eq!(b.direction, Direction::Row);
        assert!(!b.wrap);
        assert_eq!(b.justify, Align::Start);
        assert!(b.fill.is_empty());
        assert_eq!(b.align_h, Align::Start);
        assert_eq!(b.align_v, Align::Start);
        assert_eq!(b.grow, 1);
        assert!(!b.line_break);
    }

    #[test]
    fn flat_constructor_sets_fill_bits() {
        let b = Behavior::new(Direction::Column, true, true, false, Align::End, Align::Center);
        assert_eq!(b.direction, Direction::Column);
        assert!(b.wrap);
        assert_eq!(b.fill, Fill::HORIZONTAL);
        assert_eq!(b.align_on(Axis::Horizontal), Align::End);
        assert_eq!(b.align_on(Axis::Vertical), Align::Center);
        assert_eq!(b.justify, Align::Start);
    }

    #[test]
    fn justify_is_separate_from_own_alignment() {
        let b = Behavior::column().justify(Align::End).align_v(Align::Center);
        assert_eq!(b.justify, Align::End);
        assert_eq!(b.align_on(Axis::Vertical), Align::Center);

        let b = Behavior::row().align(Align::End, Align::End);
        assert_eq!(b.justify, Align::Start);
    }

    #[test]
    fn builder_methods_chain() {
        let b = Behavior::column()
            .wrap(true)
            .fill(Fill::BOTH)
            .align(Align::Center, Align::Justify)
            .line_break(true)
            .grow(3);
        assert_eq!(b.direction, Direction::Column);
        assert!(b.wrap);
        assert!(b.fill.on(Axis::Horizontal) && b.fill.on(Axis::Vertical));
        assert_eq!(b.align_h, Align::Center);
        assert_eq!(b.align_v, Align::Justify);
        assert!(b.line_break);
        assert_eq!(b.weight(), 3);

        let b = Behavior::overlay().align_h(Align::End).align_v(Align::End);
        assert_eq!(b.direction.axis(), None);
        assert_eq!(b.align_on(Axis::Vertical), Align::End);
    }

    #[test]
    fn zero_grow_weighs_as_one() {
        assert_eq!(Behavior::row().grow(0).weight(), 1);
    }

    #[test]
    fn direction_axes() {
        assert_eq!(Direction::Row.axis(), Some(Axis::Horizontal));
        assert_eq!(Direction::Column.axis(), Some(Axis::Vertical));
        assert_eq!(Direction::Overlay.axis(), None);
    }

    #[test]
    fn fill_axis_queries() {
        assert!(Fill::HORIZONTAL.on(Axis::Horizontal));
        assert!(!Fill::HORIZONTAL.on(Axis::Vertical));
        assert!(Fill::VERTICAL.on(Axis::Vertical));
        assert!(!Fill::empty().on(Axis::Horizontal));
        assert_eq!(Fill::HORIZONTAL | Fill::VERTICAL, Fill::BOTH);
    }
}
