//! SVG visualization of a computed distribution.
//!
//! Renders one annotated panel: the container, the effective region after
//! inset, and each item's resolved span. Handy for eyeballing gap math in
//! a browser without wiring the crate into a GUI host.
//!
//! # Example
//!
//! ```
//! use zenspace::{Axis, Rect, SpaceBetween, svg::render_distribution_svg};
//!
//! let container = Rect::new(0.0, 0.0, 100.0, 20.0);
//! let dist = SpaceBetween::new(Axis::Horizontal)
//!     .compute(container, &[10.0, 10.0, 10.0])
//!     .unwrap();
//!
//! let svg = render_distribution_svg(container, &dist);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::distribute::Distribution;
use crate::geom::{Axis, Rect};

/// Maximum pixel width of the rendered panel.
const MAX_PANEL_W: f64 = 400.0;
/// Maximum pixel height of the rendered panel.
const MAX_PANEL_H: f64 = 240.0;
/// Margin around the panel.
const MARGIN: f64 = 30.0;
/// Height of the annotation text area below the panel.
const ANNOTATION_H: f64 = 24.0;

/// Render a complete SVG document showing `dist` inside `container`.
///
/// `container` should be the rect the distribution was computed from;
/// the effective region (after inset) is drawn dashed inside it, and the
/// items are drawn spanning the effective region on the cross axis.
pub fn render_distribution_svg(container: Rect, dist: &Distribution<'_>) -> String {
    let scale = scale_to_fit(container);
    let panel_w = container.width * scale;
    let panel_h = container.height * scale;
    let total_w = panel_w + 2.0 * MARGIN;
    let total_h = panel_h + 2.0 * MARGIN + ANNOTATION_H;

    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .annotation { font-size: 11px; fill: #666; }
  .container { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .region { fill: none; stroke: #2c6faa; stroke-width: 1; stroke-dasharray: 4,2; }
  .item { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1; }
  @media (prefers-color-scheme: dark) {
    .annotation { fill: #aaa; }
    .container { fill: #2d2d2d; stroke: #555; }
    .region { stroke: #5a9fd4; }
    .item { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    // Container
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="container" rx="2"/>"#,
        MARGIN, MARGIN, panel_w, panel_h
    ));
    svg.push('\n');

    // Effective region, when the inset makes it differ from the container
    let region = dist.region();
    if region != container {
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="region"/>"#,
            MARGIN + (region.x - container.x) * scale,
            MARGIN + (region.y - container.y) * scale,
            region.width * scale,
            region.height * scale,
        ));
        svg.push('\n');
    }

    // Items: span the effective region on the cross axis
    let cross = dist.axis().cross();
    let cross_min = region.min_along(cross);
    let cross_extent = region.extent_along(cross);
    for span in dist.spans() {
        let (x, y, w, h) = match dist.axis() {
            Axis::Horizontal => (span.start, cross_min, span.extent, cross_extent),
            Axis::Vertical => (cross_min, span.start, cross_extent, span.extent),
        };
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="item" rx="1"/>"#,
            MARGIN + (x - container.x) * scale,
            MARGIN + (y - container.y) * scale,
            w * scale,
            h * scale,
        ));
        svg.push('\n');
    }

    // Annotation
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="annotation" text-anchor="middle">{} items, gap {:.2}</text>"#,
        total_w / 2.0,
        MARGIN + panel_h + 16.0,
        dist.len(),
        dist.gap(),
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Scale factor fitting `container` within MAX_PANEL_W × MAX_PANEL_H.
fn scale_to_fit(container: Rect) -> f64 {
    if container.width <= 0.0 || container.height <= 0.0 {
        return 1.0;
    }
    (MAX_PANEL_W / container.width).min(MAX_PANEL_H / container.height)
}
