//! Discrete placement simulation vs computed distribution.
//!
//! Integer-valued scenarios are replayed onto a one-cell-per-unit
//! occupancy track, where any overlap, drift, or uneven void is visible
//! cell by cell — the same result checked two independent ways.
//! Fractional scenarios are checked against the arithmetic the
//! distribution promises: flush edges, identical gaps, preserved order.

use zenspace::*;

/// One unit-wide cell on the track.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Cell {
    Void,
    Item(usize),
}

/// A 1-D occupancy track for integer-valued scenarios.
struct Track {
    cells: Vec<Cell>,
}

impl Track {
    fn new(extent: usize) -> Self {
        Self {
            cells: vec![Cell::Void; extent],
        }
    }

    /// Mark an item's span. Panics on fractional coordinates, spans that
    /// leave the track, or cells already claimed by another item.
    fn place(&mut self, index: usize, span: Span) {
        assert!(
            span.start.fract().abs() < 1e-9 && span.extent.fract().abs() < 1e-9,
            "item {index} not on the unit grid: {span:?}"
        );
        let start = span.start as usize;
        let extent = span.extent as usize;
        assert!(
            start + extent <= self.cells.len(),
            "item {index} leaves the track: {span:?}"
        );
        for cell in &mut self.cells[start..start + extent] {
            assert_eq!(*cell, Cell::Void, "item {index} overlaps at {span:?}");
            *cell = Cell::Item(index);
        }
    }

    /// Index of the first and last occupied cell.
    fn occupied_bounds(&self) -> (usize, usize) {
        let first = self.cells.iter().position(|c| *c != Cell::Void).unwrap();
        let last = self.cells.iter().rposition(|c| *c != Cell::Void).unwrap();
        (first, last)
    }

    /// Lengths of the void runs strictly between the first and last
    /// occupied cells.
    fn interior_void_runs(&self) -> Vec<usize> {
        let (first, last) = self.occupied_bounds();
        let mut runs = Vec::new();
        let mut run = 0usize;
        for cell in &self.cells[first..=last] {
            if *cell == Cell::Void {
                run += 1;
            } else if run > 0 {
                runs.push(run);
                run = 0;
            }
        }
        runs
    }

    /// Item indices in the order their cells appear on the track.
    fn item_order(&self) -> Vec<usize> {
        let mut order = Vec::new();
        for cell in &self.cells {
            if let Cell::Item(i) = *cell
                && order.last() != Some(&i)
            {
                order.push(i);
            }
        }
        order
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Distribute integer extents in an integer container and replay the
/// result on an occupancy track.
fn replay(container: usize, inset_lr: (usize, usize), extents: &[usize]) -> Track {
    let region = Rect::new(0.0, 0.0, container as f64, 10.0);
    let insets = EdgeInsets::new(0.0, inset_lr.0 as f64, 0.0, inset_lr.1 as f64);
    let extents_f: Vec<f64> = extents.iter().map(|&e| e as f64).collect();
    let dist = SpaceBetween::new(Axis::Horizontal)
        .inset(insets)
        .compute(region, &extents_f)
        .unwrap();

    let mut track = Track::new(container);
    for (i, span) in dist.spans().enumerate() {
        track.place(i, span);
    }
    track
}

// ── occupancy replay ────────────────────────────────────────────────────

#[test]
fn replayed_items_are_flush_and_evenly_spaced() {
    // (container, (inset_l, inset_r), extents) — integer gap by construction
    let scenarios: &[(usize, (usize, usize), &[usize])] = &[
        (100, (0, 0), &[10, 10, 10]),
        (100, (10, 10), &[20, 20]),
        (120, (0, 0), &[10, 20, 30]),
        (90, (0, 0), &[30, 15, 15, 12]),
        (70, (2, 2), &[9, 9, 9, 9]),
        (33, (0, 0), &[5, 5, 5, 5, 5]),
    ];

    for &(container, inset, extents) in scenarios {
        let track = replay(container, inset, extents);

        // Flush: first occupied cell at the effective leading edge, last
        // at the effective trailing edge.
        let (first, last) = track.occupied_bounds();
        assert_eq!(first, inset.0, "leading edge for {extents:?} in {container}");
        assert_eq!(
            last,
            container - inset.1 - 1,
            "trailing edge for {extents:?} in {container}"
        );

        // Equal gaps: every interior void run has the same length, one
        // run per adjacent pair.
        let runs = track.interior_void_runs();
        assert_eq!(runs.len(), extents.len() - 1, "void count for {extents:?}");
        assert!(
            runs.windows(2).all(|pair| pair[0] == pair[1]),
            "uneven voids {runs:?} for {extents:?}"
        );

        // Order preserved left to right.
        let order: Vec<usize> = (0..extents.len()).collect();
        assert_eq!(track.item_order(), order);
    }
}

#[test]
fn replayed_zero_gap_leaves_no_voids() {
    let track = replay(60, (0, 0), &[20, 20, 20]);
    assert!(track.interior_void_runs().is_empty());
    assert_eq!(track.item_order(), [0, 1, 2]);
}

// ── fractional properties ───────────────────────────────────────────────

#[test]
fn trailing_edge_is_flush_across_scenarios() {
    let scenarios: &[(f64, &[f64])] = &[
        (100.0, &[10.0, 10.0, 10.0]),
        (137.5, &[3.25, 19.0, 7.75, 42.0]),
        (64.0, &[32.0, 32.0]),
        (50.0, &[25.0, 25.0, 25.0]), // overflow: negative gap
        (90.0, &[0.0, 0.0, 0.0]),
        (1.0, &[0.125, 0.25, 0.0625]),
    ];
    for &(extent, extents) in scenarios {
        let region = Rect::new(0.0, 0.0, extent, 10.0);
        let d = SpaceBetween::new(Axis::Horizontal)
            .compute(region, extents)
            .unwrap();
        let first = d.spans().next().unwrap();
        let last = d.spans().last().unwrap();
        assert!(approx(first.start, 0.0), "leading edge for {extents:?}");
        assert!(
            approx(last.end(), extent),
            "trailing edge {} != {extent} for {extents:?}",
            last.end()
        );
    }
}

#[test]
fn adjacent_gaps_are_identical_and_order_is_kept() {
    let region = Rect::new(4.0, 0.0, 150.0, 10.0);
    let extents = [13.5, 2.0, 40.25, 9.0];
    let d = SpaceBetween::new(Axis::Horizontal)
        .compute(region, &extents)
        .unwrap();

    let spans: Vec<Span> = d.spans().collect();
    for pair in spans.windows(2) {
        assert!(approx(pair[1].start - pair[0].end(), d.gap()));
    }
    // Non-negative gap: leading edges strictly increase.
    assert!(d.gap() >= 0.0);
    for pair in spans.windows(2) {
        assert!(pair[0].start < pair[1].start);
    }
}

#[test]
fn both_axes_compute_the_same_numbers() {
    let extents = [12.0, 9.5, 30.0];
    let h = SpaceBetween::new(Axis::Horizontal)
        .inset(EdgeInsets::new(0.0, 3.0, 0.0, 5.0))
        .compute(Rect::new(0.0, 0.0, 200.0, 20.0), &extents)
        .unwrap();
    let v = SpaceBetween::new(Axis::Vertical)
        .inset(EdgeInsets::new(3.0, 0.0, 5.0, 0.0))
        .compute(Rect::new(0.0, 0.0, 20.0, 200.0), &extents)
        .unwrap();
    assert_eq!(h.to_vec(), v.to_vec());
    assert_eq!(h.gap(), v.gap());
}

#[test]
fn computing_twice_yields_identical_positions() {
    let region = Rect::new(0.0, 0.0, 311.0, 40.0);
    let extents = [17.0, 4.0, 31.5, 8.25];
    let sb = SpaceBetween::new(Axis::Horizontal).inset(EdgeInsets::uniform(6.0));
    assert_eq!(
        sb.compute(region, &extents).unwrap().to_vec(),
        sb.compute(region, &extents).unwrap().to_vec()
    );
}

// ── composition with alignment ──────────────────────────────────────────

#[test]
fn single_item_falls_back_to_alignment() {
    let region = Rect::new(0.0, 0.0, 100.0, 20.0);

    let result = SpaceBetween::new(Axis::Horizontal).compute(region, &[10.0]);
    assert_eq!(result.err(), Some(LayoutError::TooFewItems));

    // The documented fallback: center the lone item instead.
    let x = align_along(Axis::Horizontal, 10.0, region, Align::Center);
    assert_eq!(x, 45.0);
}

#[test]
fn frames_agree_with_distribute_plus_align() {
    let region = Rect::new(10.0, 5.0, 300.0, 60.0);
    let sizes = [
        Size::new(40.0, 20.0),
        Size::new(25.0, 60.0),
        Size::new(10.0, 35.0),
    ];
    let widths: Vec<f64> = sizes.iter().map(|s| s.width).collect();

    let sb = SpaceBetween::new(Axis::Horizontal);
    let positions = sb.compute(region, &widths).unwrap().to_vec();
    let frames: Vec<Rect> = sb.frames(region, &sizes, Align::Center).unwrap().collect();

    for ((frame, x), size) in frames.iter().zip(&positions).zip(&sizes) {
        assert!(approx(frame.x, *x));
        let y = align_along(Axis::Vertical, size.height, region, Align::Center);
        assert!(approx(frame.y, y));
        assert_eq!(frame.size(), *size);
    }
}

// ── pixel snapping ──────────────────────────────────────────────────────

#[test]
fn snapped_positions_land_on_the_pixel_grid() {
    // 103 wide, 3 × 10: gap 36.5 puts the middle item between pixels.
    let d = SpaceBetween::new(Axis::Horizontal)
        .compute(Rect::new(0.0, 0.0, 103.0, 10.0), &[10.0, 10.0, 10.0])
        .unwrap();
    assert_eq!(d.to_vec(), [0.0, 46.5, 93.0]);

    let snapped: Vec<f64> = d.positions().map(|p| snap(p, 1.0)).collect();
    assert_eq!(snapped, [0.0, 47.0, 93.0]);

    // On a 2x display the half-pixel position is already on the grid.
    let snapped_2x: Vec<f64> = d.positions().map(|p| snap(p, 2.0)).collect();
    assert_eq!(snapped_2x, [0.0, 46.5, 93.0]);
}
