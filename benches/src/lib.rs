// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Qalam benchmarks.
//!
//! The fixtures model a child tracing the letter "O" on the default 600×600
//! canvas: a thick ring as the template, and a wobbly hand-drawn loop plus a
//! few stray scribbles as the drawing.

use core::f64::consts::TAU;

use kurbo::Point;
use qalam_ink::{Drawing, Stroke, StrokeStyle, render_drawing};
use qalam_raster::PixelBuffer;

/// Side of the square benchmark canvas.
pub const CANVAS: usize = 600;

/// A ring centered on the canvas, 40 px thick.
#[must_use]
pub fn ring_template() -> PixelBuffer {
    let mut buffer = PixelBuffer::new(CANVAS, CANVAS);
    let center = Point::new(CANVAS as f64 / 2.0, CANVAS as f64 / 2.0);
    for y in 0..CANVAS {
        for x in 0..CANVAS {
            let d = Point::new(x as f64 + 0.5, y as f64 + 0.5).distance(center);
            if (150.0..190.0).contains(&d) {
                buffer.set_alpha(x, y, 255);
            }
        }
    }
    buffer
}

/// A loop that wanders around the ring, plus strokes well away from it.
#[must_use]
pub fn traced_drawing() -> PixelBuffer {
    let mut drawing = Drawing::new();
    let center = CANVAS as f64 / 2.0;
    drawing.push(Stroke::from_points((0..=120).map(|i| {
        let t = f64::from(i) / 120.0 * TAU;
        let r = 170.0 + 18.0 * (5.0 * t).sin();
        Point::new(center + r * t.cos(), center + r * t.sin())
    })));
    drawing.push(Stroke::from_points([Point::new(20.0, 20.0), Point::new(80.0, 60.0)]));
    drawing.push(Stroke::from_points([Point::new(300.0, 290.0), Point::new(310.0, 310.0)]));
    render_drawing(&drawing, None, CANVAS, CANVAS, &StrokeStyle::default())
}
