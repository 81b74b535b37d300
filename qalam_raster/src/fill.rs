// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small rasterizers: filled outlines and round-capped segments.
//!
//! Both composite into the target with [`PixelBuffer::blend_max`], so shapes
//! can be layered in any order.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{BezPath, Line, PathEl, Point, Rect};

use crate::PixelBuffer;

/// Sub-samples per pixel along each axis when filling paths.
const SUBSAMPLES: usize = 4;

/// Sub-samples per pixel in total.
const FULL_COVERAGE: u32 = 16;

/// Curve flattening tolerance in pixels.
const FLATTEN_TOLERANCE: f64 = 0.1;

/// Rule deciding which regions of a self-overlapping path are inside.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FillRule {
    /// Inside where the winding number is non-zero (font outlines use this).
    #[default]
    NonZero,
    /// Inside where the winding number is odd.
    EvenOdd,
}

impl FillRule {
    #[inline]
    fn is_inside(self, winding: i32) -> bool {
        match self {
            Self::NonZero => winding != 0,
            Self::EvenOdd => winding % 2 != 0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Edge {
    p0: Point,
    p1: Point,
    dir: i32,
}

fn flatten_edges(path: &BezPath) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut start = Point::ZERO;
    let mut last = Point::ZERO;
    let push = |edges: &mut Vec<Edge>, a: Point, b: Point| {
        if a.y == b.y {
            return;
        }
        let (p0, p1, dir) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
        edges.push(Edge { p0, p1, dir });
    };
    kurbo::flatten(path, FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            // Close the previous subpath implicitly, as a fill would.
            push(&mut edges, last, start);
            start = p;
            last = p;
        }
        PathEl::LineTo(p) => {
            push(&mut edges, last, p);
            last = p;
        }
        PathEl::ClosePath => {
            push(&mut edges, last, start);
            last = start;
        }
        // `flatten` only emits lines.
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    push(&mut edges, last, start);
    edges
}

/// Fills `path` into `buffer` with `rule`, using 4×4 supersampling per pixel.
///
/// Coverage (the fraction of sub-samples inside the path) becomes alpha
/// `0..=255`. Open subpaths are closed implicitly.
pub fn fill_path(buffer: &mut PixelBuffer, path: &BezPath, rule: FillRule) {
    let (width, height) = buffer.size();
    if width == 0 || height == 0 {
        return;
    }
    let edges = flatten_edges(path);
    if edges.is_empty() {
        return;
    }

    let samples = SUBSAMPLES as f64;
    let mut coverage: Vec<u16> = alloc::vec![0; width];
    let mut crossings: Vec<(f64, i32)> = Vec::new();

    for row in 0..height {
        coverage.fill(0);
        let mut any = false;
        for sub in 0..SUBSAMPLES {
            let sy = row as f64 + (sub as f64 + 0.5) / samples;
            crossings.clear();
            for e in &edges {
                // Half-open in y so shared vertices count once.
                if sy >= e.p0.y && sy < e.p1.y {
                    let t = (sy - e.p0.y) / (e.p1.y - e.p0.y);
                    crossings.push((e.p0.x + t * (e.p1.x - e.p0.x), e.dir));
                }
            }
            if crossings.is_empty() {
                continue;
            }
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for pair in crossings.windows(2) {
                winding += pair[0].1;
                if rule.is_inside(winding) {
                    any |= add_span(&mut coverage, pair[0].0, pair[1].0);
                }
            }
        }
        if !any {
            continue;
        }
        for (x, &c) in coverage.iter().enumerate() {
            if c > 0 {
                let a = (u32::from(c) * 255 + FULL_COVERAGE / 2) / FULL_COVERAGE;
                buffer.blend_max(x, row, u8::try_from(a.min(255)).unwrap_or(u8::MAX));
            }
        }
    }
}

/// Adds one sub-sample row of coverage for the span `[x0, x1)`.
///
/// Sample `i` sits at `(i + 0.5) / SUBSAMPLES`. Returns true if any sample was
/// covered.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Sample indices are clamped to the row before the cast."
)]
fn add_span(coverage: &mut [u16], x0: f64, x1: f64) -> bool {
    let samples = SUBSAMPLES as f64;
    let limit = (coverage.len() * SUBSAMPLES) as f64;
    let first = (x0 * samples - 0.5).ceil().clamp(0.0, limit) as usize;
    let end = (x1 * samples - 0.5).ceil().clamp(0.0, limit) as usize;
    for i in first..end {
        coverage[i / SUBSAMPLES] += 1;
    }
    first < end
}

/// Stamps a round-capped segment of radius `half_width` into `buffer`.
///
/// A pixel's alpha is its distance-based coverage: fully opaque when its
/// center lies within `half_width - 0.5` of the segment, fading to zero at
/// `half_width + 0.5`. A degenerate segment stamps a disk.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Pixel bounds and coverage are clamped before the casts."
)]
pub fn stamp_segment(buffer: &mut PixelBuffer, line: Line, half_width: f64) {
    let (width, height) = buffer.size();
    if width == 0 || height == 0 || half_width.is_nan() || half_width <= 0.0 {
        return;
    }
    let bounds = Rect::from_points(line.p0, line.p1).inflate(half_width + 1.0, half_width + 1.0);
    let x_start = bounds.x0.floor().clamp(0.0, width as f64) as usize;
    let x_end = bounds.x1.ceil().clamp(0.0, width as f64) as usize;
    let y_start = bounds.y0.floor().clamp(0.0, height as f64) as usize;
    let y_end = bounds.y1.ceil().clamp(0.0, height as f64) as usize;

    for y in y_start..y_end {
        for x in x_start..x_end {
            let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let dist = distance_to_segment(center, line);
            let cover = (half_width + 0.5 - dist).clamp(0.0, 1.0);
            if cover > 0.0 {
                buffer.blend_max(x, y, (cover * 255.0).round() as u8);
            }
        }
    }
}

/// Distance from `pt` to the closest point on `line`.
fn distance_to_segment(pt: Point, line: Line) -> f64 {
    let v = line.p1 - line.p0;
    let w = pt - line.p0;
    let len2 = v.hypot2();
    let t = if len2 > 0.0 { w.dot(v) / len2 } else { 0.0 };
    let proj = line.p0 + v * t.clamp(0.0, 1.0);
    (pt - proj).hypot()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
        let mut p = BezPath::new();
        p.move_to((x0, y0));
        p.line_to((x1, y0));
        p.line_to((x1, y1));
        p.line_to((x0, y1));
        p.close_path();
        p
    }

    #[test]
    fn pixel_aligned_square_fills_exactly() {
        let mut b = PixelBuffer::new(10, 10);
        fill_path(&mut b, &square(2.0, 3.0, 6.0, 8.0), FillRule::NonZero);
        assert_eq!(b.count_above(0), 4 * 5);
        assert_eq!(b.alpha_at(2, 3), 255);
        assert_eq!(b.alpha_at(5, 7), 255);
        assert_eq!(b.alpha_at(6, 7), 0);
        assert_eq!(b.alpha_at(1, 3), 0);
    }

    #[test]
    fn half_covered_pixels_get_half_alpha() {
        let mut b = PixelBuffer::new(4, 1);
        fill_path(&mut b, &square(0.0, 0.0, 1.5, 1.0), FillRule::NonZero);
        assert_eq!(b.alpha_at(0, 0), 255);
        assert_eq!(b.alpha_at(1, 0), 128);
        assert_eq!(b.alpha_at(2, 0), 0);
    }

    #[test]
    fn fill_rule_controls_holes() {
        // Outer square and an inner square with the same orientation.
        let mut path = square(0.0, 0.0, 10.0, 10.0);
        path.extend(square(3.0, 3.0, 7.0, 7.0).elements().iter().copied());

        let mut nonzero = PixelBuffer::new(10, 10);
        fill_path(&mut nonzero, &path, FillRule::NonZero);
        assert_eq!(nonzero.alpha_at(5, 5), 255);

        let mut evenodd = PixelBuffer::new(10, 10);
        fill_path(&mut evenodd, &path, FillRule::EvenOdd);
        assert_eq!(evenodd.alpha_at(5, 5), 0);
        assert_eq!(evenodd.alpha_at(1, 1), 255);
    }

    #[test]
    fn curved_outlines_are_flattened() {
        use kurbo::{Circle, Shape as _};

        let circle = Circle::new((20.0, 20.0), 10.0).to_path(0.01);
        assert!(
            circle
                .elements()
                .iter()
                .any(|el| matches!(el, PathEl::CurveTo(..))),
            "circle path should contain curves"
        );
        let mut b = PixelBuffer::new(40, 40);
        fill_path(&mut b, &circle, FillRule::NonZero);
        let area = b.alphas().iter().map(|&a| f64::from(a)).sum::<f64>() / 255.0;
        assert!((area - 314.16).abs() < 3.0, "circle area {area}");
        assert_eq!(b.alpha_at(20, 20), 255);
        assert_eq!(b.alpha_at(20, 8), 0);
    }

    #[test]
    fn shapes_hanging_over_the_edge_are_clipped() {
        let mut b = PixelBuffer::new(5, 5);
        fill_path(&mut b, &square(-10.0, -10.0, 2.0, 20.0), FillRule::NonZero);
        assert_eq!(b.count_above(0), 2 * 5);
    }

    #[test]
    fn segment_stamp_is_round_capped() {
        let mut b = PixelBuffer::new(40, 20);
        stamp_segment(&mut b, Line::new((10.0, 10.0), (30.0, 10.0)), 6.0);
        // On the centerline and within the caps.
        assert_eq!(b.alpha_at(20, 9), 255);
        assert_eq!(b.alpha_at(5, 9), 255);
        // Beyond the cap radius.
        assert_eq!(b.alpha_at(2, 9), 0);
        // Cap corners are rounded off.
        assert_eq!(b.alpha_at(4, 4), 0);
        assert_eq!(b.alpha_at(20, 4), 255);
    }

    #[test]
    fn degenerate_segment_stamps_a_disk() {
        let mut b = PixelBuffer::new(20, 20);
        stamp_segment(&mut b, Line::new((10.0, 10.0), (10.0, 10.0)), 3.0);
        assert_eq!(b.alpha_at(10, 10), 255);
        assert_eq!(b.alpha_at(10, 14), 0);
        assert!(b.count_above(50) > 20);
    }
}
