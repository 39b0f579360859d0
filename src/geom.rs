//! Scalar geometry: axes, sizes, rects, and edge insets.
//!
//! Everything here is a plain `Copy` value in continuous (f64) coordinates.
//! Rects are origin + size, y-down. Negative widths and heights are
//! representable and flow through the distribution math as overflow; no
//! constructor validates them.

/// Distribution axis.
///
/// Selects which dimension of a [`Size`] or [`Rect`] an operation reads:
/// `Horizontal` reads x/width, `Vertical` reads y/height.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Left-to-right. Extent is width, leading edge is the left edge.
    Horizontal,
    /// Top-to-bottom. Extent is height, leading edge is the top edge.
    Vertical,
}

impl Axis {
    /// The orthogonal axis.
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Width × height in continuous coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The extent along `axis` (width for horizontal, height for vertical).
    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// A point in continuous coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point from per-axis components: `main` along `axis`,
    /// `cross` along the orthogonal axis.
    pub fn from_axis(axis: Axis, main: f64, cross: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }
}

/// Axis-aligned rectangle: origin + size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect of the given size at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// The rect's size.
    pub const fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Leading edge along `axis` (x for horizontal, y for vertical).
    pub fn min_along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Extent along `axis` (width for horizontal, height for vertical).
    pub fn extent_along(self, axis: Axis) -> f64 {
        self.size().along(axis)
    }

    /// Trailing edge along `axis`.
    pub fn max_along(self, axis: Axis) -> f64 {
        self.min_along(axis) + self.extent_along(axis)
    }

    /// Shrink by `insets`: origin shifts by left/top, width loses
    /// left + right, height loses top + bottom.
    ///
    /// Negative insets grow the rect. Insets larger than the rect produce
    /// negative extents, which downstream distribution treats as overflow.
    pub fn inset(self, insets: EdgeInsets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: self.width - insets.left - insets.right,
            height: self.height - insets.top - insets.bottom,
        }
    }
}

/// Four-sided margin subtracted from a container's bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    /// No inset on any side.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create insets with each side given explicitly.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on all four sides.
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    /// `horizontal` on left and right, `vertical` on top and bottom.
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            top: vertical,
            left: horizontal,
            bottom: vertical,
            right: horizontal,
        }
    }
}

/// Snap a coordinate to the device-pixel grid for the given scale factor.
///
/// `snap(v, 2.0)` rounds to halves, `snap(v, 1.0)` to integers. Computed
/// positions are exact fractions of the container and often land between
/// pixels; snapping them avoids blurry edges when the consumer rasterizes.
/// A scale of zero or less returns the value unchanged.
pub fn snap(value: f64, scale: f64) -> f64 {
    if scale <= 0.0 {
        return value;
    }
    num_traits::Float::round(value * scale) / scale
}
