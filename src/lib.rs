//! Even-gap distribution and alignment geometry.
//!
//! Positions a row or column of already-sized items inside a container so
//! the outermost items sit flush with the container's edges and the
//! remaining space splits into equal gaps. Pure geometry — no view
//! hierarchy, no constraint solver, no allocations in the core path,
//! `no_std` compatible.
//!
//! # Modules
//!
//! - [`geom`] — axes, sizes, rects, edge insets, pixel snapping
//! - [`distribute`] — even-gap (space-between) distribution along an axis
//! - [`align`] — single-item placement within a region
//! - [`svg`] — debug rendering of computed layouts (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenspace::{Axis, EdgeInsets, Rect, SpaceBetween};
//!
//! let toolbar = Rect::new(0.0, 0.0, 320.0, 44.0);
//! let icon_widths = [24.0, 24.0, 24.0, 24.0];
//!
//! let dist = SpaceBetween::new(Axis::Horizontal)
//!     .inset(EdgeInsets::symmetric(16.0, 0.0))
//!     .compute(toolbar, &icon_widths)
//!     .unwrap();
//!
//! let x: Vec<f64> = dist.positions().collect();
//! assert_eq!(x, [16.0, 104.0, 192.0, 280.0]);
//! assert_eq!(dist.gap(), 64.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod align;
pub mod distribute;
pub mod geom;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from each module
pub use align::{Align, Alignment, align_along};
pub use distribute::{Distribution, Frames, LayoutError, Positions, SpaceBetween, Span, Spans};
pub use geom::{Axis, EdgeInsets, Point, Rect, Size, snap};
