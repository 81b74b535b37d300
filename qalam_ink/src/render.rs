// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterizing drawings with a round brush.

use kurbo::Line;
use qalam_raster::{PixelBuffer, stamp_segment};

use crate::{Drawing, Stroke};

/// Brush used to render strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Line width in canvas pixels. Caps and joins are round.
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { width: 12.0 }
    }
}

/// Renders one stroke into `buffer`.
///
/// Strokes with fewer than two points draw nothing: a tap without movement
/// leaves no line, exactly like a canvas path with a single `moveTo`.
pub fn render_stroke(buffer: &mut PixelBuffer, stroke: &Stroke, style: &StrokeStyle) {
    let half_width = style.width / 2.0;
    for pair in stroke.points().windows(2) {
        stamp_segment(buffer, Line::new(pair[0], pair[1]), half_width);
    }
}

/// Renders `drawing`, plus the optional in-flight stroke, into a new
/// `width × height` buffer.
#[must_use]
pub fn render_drawing(
    drawing: &Drawing,
    current: Option<&Stroke>,
    width: usize,
    height: usize,
    style: &StrokeStyle,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for stroke in drawing.strokes().iter().chain(current) {
        render_stroke(&mut buffer, stroke, style);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn single_point_strokes_are_invisible() {
        let mut d = Drawing::new();
        d.push(Stroke::from_points([Point::new(20.0, 20.0)]));
        let b = render_drawing(&d, None, 40, 40, &StrokeStyle::default());
        assert_eq!(b.count_above(0), 0);
    }

    #[test]
    fn brush_width_is_respected() {
        let mut d = Drawing::new();
        d.push(Stroke::from_points([Point::new(10.0, 20.0), Point::new(30.0, 20.0)]));
        let b = render_drawing(&d, None, 40, 40, &StrokeStyle::default());
        // Column 20 is covered for 12 rows around the centerline.
        let column: usize = (0..40).filter(|&y| b.alpha_at(20, y) > 50).count();
        assert_eq!(column, 12);
    }

    #[test]
    fn in_flight_stroke_is_rendered() {
        let d = Drawing::new();
        let current = Stroke::from_points([Point::new(5.0, 5.0), Point::new(5.0, 30.0)]);
        let b = render_drawing(&d, Some(&current), 40, 40, &StrokeStyle::default());
        assert_eq!(b.alpha_at(5, 15), 255);
    }

    #[test]
    fn polyline_joins_have_no_gaps() {
        let stroke = Stroke::from_points([
            Point::new(5.0, 5.0),
            Point::new(30.0, 5.0),
            Point::new(30.0, 30.0),
        ]);
        let mut b = PixelBuffer::new(40, 40);
        render_stroke(&mut b, &stroke, &StrokeStyle { width: 4.0 });
        assert_eq!(b.alpha_at(30, 5), 255);
        assert_eq!(b.alpha_at(31, 6), 255);
        assert_eq!(b.alpha_at(20, 20), 0);
    }
}
