//! Single-item placement within a region.
//!
//! The distributor requires at least two items; a lone item is placed
//! with an [`Alignment`] instead (centered, flush with an edge, or at a
//! fractional position). Placement reuses the same effective-region
//! geometry as distribution, so the two compose: distribute along one
//! axis, align along the other.

use crate::geom::{Axis, EdgeInsets, Point, Rect, Size};

/// Placement of an item within the free space along one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Flush with the leading edge (left or top).
    Leading,
    /// Centered in the free space.
    #[default]
    Center,
    /// Flush with the trailing edge (right or bottom).
    Trailing,
    /// At a fraction of the free space. `0.0` = leading, `1.0` = trailing;
    /// values outside that range are clamped.
    Fraction(f64),
}

impl Align {
    /// Offset from the leading edge for the given free space
    /// (region extent minus item extent).
    ///
    /// Negative free space is passed through: centering an oversized item
    /// yields a negative offset, hanging it past the leading edge.
    pub fn offset(self, space: f64) -> f64 {
        match self {
            Self::Leading => 0.0,
            Self::Center => space / 2.0,
            Self::Trailing => space,
            Self::Fraction(f) => space * f.clamp(0.0, 1.0),
        }
    }
}

/// Two-axis alignment: where a sized item sits within a region.
///
/// # Example
///
/// ```
/// use zenspace::{Alignment, Point, Rect, Size};
///
/// let region = Rect::new(0.0, 0.0, 100.0, 50.0);
/// let item = Size::new(20.0, 10.0);
/// assert_eq!(Alignment::CENTER.place(item, region), Point::new(40.0, 20.0));
/// assert_eq!(Alignment::BOTTOM_RIGHT.place(item, region), Point::new(80.0, 40.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    pub x: Align,
    pub y: Align,
}

impl Alignment {
    pub const TOP_LEFT: Self = Self::new(Align::Leading, Align::Leading);
    pub const TOP_CENTER: Self = Self::new(Align::Center, Align::Leading);
    pub const TOP_RIGHT: Self = Self::new(Align::Trailing, Align::Leading);
    pub const CENTER_LEFT: Self = Self::new(Align::Leading, Align::Center);
    pub const CENTER: Self = Self::new(Align::Center, Align::Center);
    pub const CENTER_RIGHT: Self = Self::new(Align::Trailing, Align::Center);
    pub const BOTTOM_LEFT: Self = Self::new(Align::Leading, Align::Trailing);
    pub const BOTTOM_CENTER: Self = Self::new(Align::Center, Align::Trailing);
    pub const BOTTOM_RIGHT: Self = Self::new(Align::Trailing, Align::Trailing);

    /// Create an alignment from per-axis components.
    pub const fn new(x: Align, y: Align) -> Self {
        Self { x, y }
    }

    /// Origin of `item` placed in `region`.
    pub fn place(self, item: Size, region: Rect) -> Point {
        Point::new(
            region.x + self.x.offset(region.width - item.width),
            region.y + self.y.offset(region.height - item.height),
        )
    }

    /// Full frame of `item` placed in `region`, optionally inset first.
    pub fn frame(self, item: Size, region: Rect, inset: EdgeInsets) -> Rect {
        let origin = self.place(item, region.inset(inset));
        Rect::new(origin.x, origin.y, item.width, item.height)
    }
}

/// Leading-edge position of a single item along `axis` within `region`.
///
/// The single-item analog of distribution: same coordinate conventions,
/// same region semantics, one item instead of a row.
pub fn align_along(axis: Axis, extent: f64, region: Rect, align: Align) -> f64 {
    region.min_along(axis) + align.offset(region.extent_along(axis) - extent)
}
