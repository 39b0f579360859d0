//! Even-gap (space-between) distribution along an axis.
//!
//! Positions a row or column of already-sized items inside a container so
//! that the first item is flush with the leading edge, the last is flush
//! with the trailing edge, and the space left over splits into equal gaps
//! between adjacent items:
//!
//! ```text
//! |[ ]--[ ]--[ ]--[ ]|
//! ```
//!
//! Item extents are inputs, never recomputed here. The distributor is a
//! pure function of its arguments: it holds no state between calls and
//! produces positions as an explicit result rather than writing through
//! item handles.
//!
//! # Example
//!
//! ```
//! use zenspace::{Axis, Rect, SpaceBetween};
//!
//! let region = Rect::new(0.0, 0.0, 100.0, 20.0);
//! let dist = SpaceBetween::new(Axis::Horizontal)
//!     .compute(region, &[10.0, 10.0, 10.0])
//!     .unwrap();
//!
//! assert_eq!(dist.gap(), 35.0);
//! let positions: Vec<f64> = dist.positions().collect();
//! assert_eq!(positions, [0.0, 45.0, 90.0]);
//! ```

use crate::align::Align;
use crate::geom::{Axis, EdgeInsets, Point, Rect, Size};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Distribution error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Fewer than two items. With a single item there is no adjacent pair
    /// to put a gap between, so the gap is undefined (the divisor is
    /// `count - 1`). Place single items with [`Alignment`](crate::Alignment)
    /// instead.
    TooFewItems,
}

/// Even-gap distribution configuration: an axis plus an optional inset.
///
/// Built once per layout pass and applied with [`compute`](Self::compute)
/// or [`frames`](Self::frames). Carries no state between calls.
///
/// # Example
///
/// ```
/// use zenspace::{Axis, EdgeInsets, Rect, SpaceBetween};
///
/// let dist = SpaceBetween::new(Axis::Horizontal)
///     .inset(EdgeInsets::symmetric(10.0, 0.0))
///     .compute(Rect::new(0.0, 0.0, 100.0, 20.0), &[20.0, 20.0])
///     .unwrap();
///
/// // Effective extent is 80; positions are in container coordinates.
/// assert_eq!(dist.gap(), 40.0);
/// assert_eq!(dist.to_vec(), [10.0, 70.0]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpaceBetween {
    axis: Axis,
    inset: EdgeInsets,
}

impl SpaceBetween {
    /// Distribution along `axis` with no inset.
    pub const fn new(axis: Axis) -> Self {
        Self {
            axis,
            inset: EdgeInsets::ZERO,
        }
    }

    /// Set the inset applied to the container before distribution.
    pub fn inset(mut self, inset: EdgeInsets) -> Self {
        self.inset = inset;
        self
    }

    /// Compute leading-edge positions for items with the given `extents`
    /// inside `region`.
    ///
    /// Extents are read along the configured axis, in order; order is
    /// preserved in the output. When the extents overflow the region the
    /// gap comes out negative and items overlap — that is defined
    /// behavior, not an error (deliberately overlapping stacks use it).
    ///
    /// # Errors
    ///
    /// [`LayoutError::TooFewItems`] when `extents` has fewer than two
    /// entries. No position is produced in that case.
    pub fn compute<'a>(
        &self,
        region: Rect,
        extents: &'a [f64],
    ) -> Result<Distribution<'a>, LayoutError> {
        let rect = region.inset(self.inset);
        let gap = even_gap(
            rect.extent_along(self.axis),
            extents.len(),
            extents.iter().sum(),
        )?;
        Ok(Distribution {
            axis: self.axis,
            region: rect,
            gap,
            extents,
        })
    }

    /// Compute a full frame per item: distributed along the configured
    /// axis, aligned with `cross` on the orthogonal axis within the
    /// effective region.
    ///
    /// The base operation is single-axis; this composes it with
    /// single-item cross placement for the common row/column case.
    ///
    /// # Errors
    ///
    /// [`LayoutError::TooFewItems`] when `sizes` has fewer than two
    /// entries.
    pub fn frames<'a>(
        &self,
        region: Rect,
        sizes: &'a [Size],
        cross: Align,
    ) -> Result<Frames<'a>, LayoutError> {
        let rect = region.inset(self.inset);
        let axis = self.axis;
        let gap = even_gap(
            rect.extent_along(axis),
            sizes.len(),
            sizes.iter().map(|s| s.along(axis)).sum(),
        )?;
        Ok(Frames {
            axis,
            cursor: rect.min_along(axis),
            gap,
            cross,
            region: rect,
            sizes: sizes.iter(),
        })
    }
}

/// Shared gap computation: effective extent minus total item extent,
/// split over `count - 1` voids.
fn even_gap(extent: f64, count: usize, total: f64) -> Result<f64, LayoutError> {
    if count < 2 {
        return Err(LayoutError::TooFewItems);
    }
    Ok((extent - total) / (count - 1) as f64)
}

/// A computed distribution: the explicit mapping from item order to
/// leading-edge position.
///
/// Borrows the extent list it was computed from; positions are produced
/// by a lazy cursor walk, so reading them allocates nothing. The same
/// `Distribution` yields identical positions every time it is iterated.
#[derive(Copy, Clone, Debug)]
pub struct Distribution<'a> {
    axis: Axis,
    /// Effective region (container after inset).
    region: Rect,
    gap: f64,
    extents: &'a [f64],
}

impl<'a> Distribution<'a> {
    /// The distribution axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The effective region: the container shrunk by the configured inset.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// The gap between every adjacent pair of items.
    ///
    /// Negative when the items overflow the effective region.
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Always false: construction requires at least two items.
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Leading-edge positions along the axis, in input order.
    ///
    /// Positions are in container coordinates (the inset is already
    /// folded into the start of the walk).
    pub fn positions(&self) -> Positions<'a> {
        Positions {
            cursor: self.region.min_along(self.axis),
            gap: self.gap,
            extents: self.extents.iter(),
        }
    }

    /// Positions paired with their extents, in input order.
    pub fn spans(&self) -> Spans<'a> {
        Spans {
            cursor: self.region.min_along(self.axis),
            gap: self.gap,
            extents: self.extents.iter(),
        }
    }

    /// Write the positions into `out`, one per item, in input order.
    ///
    /// # Panics
    ///
    /// Panics if `out.len()` differs from the item count.
    pub fn write_into(&self, out: &mut [f64]) {
        assert_eq!(
            out.len(),
            self.extents.len(),
            "position slice length {} != item count {}",
            out.len(),
            self.extents.len(),
        );
        for (slot, pos) in out.iter_mut().zip(self.positions()) {
            *slot = pos;
        }
    }

    /// Collect the positions into a vector.
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> Vec<f64> {
        self.positions().collect()
    }
}

/// One item's resolved placement along the distribution axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Leading edge.
    pub start: f64,
    /// The item's extent, as given.
    pub extent: f64,
}

impl Span {
    /// Trailing edge.
    pub fn end(self) -> f64 {
        self.start + self.extent
    }
}

/// Iterator over leading-edge positions. See [`Distribution::positions`].
#[derive(Clone, Debug)]
pub struct Positions<'a> {
    cursor: f64,
    gap: f64,
    extents: core::slice::Iter<'a, f64>,
}

impl Iterator for Positions<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let extent = *self.extents.next()?;
        let pos = self.cursor;
        self.cursor = pos + extent + self.gap;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.extents.size_hint()
    }
}

impl ExactSizeIterator for Positions<'_> {}

/// Iterator over [`Span`]s. See [`Distribution::spans`].
#[derive(Clone, Debug)]
pub struct Spans<'a> {
    cursor: f64,
    gap: f64,
    extents: core::slice::Iter<'a, f64>,
}

impl Iterator for Spans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let extent = *self.extents.next()?;
        let start = self.cursor;
        self.cursor = start + extent + self.gap;
        Some(Span { start, extent })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.extents.size_hint()
    }
}

impl ExactSizeIterator for Spans<'_> {}

/// Iterator over per-item frames. See [`SpaceBetween::frames`].
#[derive(Clone, Debug)]
pub struct Frames<'a> {
    axis: Axis,
    cursor: f64,
    gap: f64,
    cross: Align,
    region: Rect,
    sizes: core::slice::Iter<'a, Size>,
}

impl Iterator for Frames<'_> {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        let size = *self.sizes.next()?;
        let main = self.cursor;
        self.cursor = main + size.along(self.axis) + self.gap;

        let cross_axis = self.axis.cross();
        let free = self.region.extent_along(cross_axis) - size.along(cross_axis);
        let cross = self.region.min_along(cross_axis) + self.cross.offset(free);

        let origin = Point::from_axis(self.axis, main, cross);
        Some(Rect::new(origin.x, origin.y, size.width, size.height))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sizes.size_hint()
    }
}

impl ExactSizeIterator for Frames<'_> {}
