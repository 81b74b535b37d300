// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven stroke capture.
//!
//! Hosts translate their pointer events into three calls:
//!
//! - pointer down → [`StrokeCapture::start_stroke`]
//! - pointer move while pressed → [`StrokeCapture::append_to_stroke`]
//! - pointer up or leaving the canvas → [`StrokeCapture::end_stroke`]
//!
//! Moves without an active stroke are ignored, so hosts can forward every
//! move event without tracking the button state themselves.

use core::mem;

use kurbo::{Point, Rect, Size};

use crate::{Drawing, Stroke};

/// Accumulates pointer drags into a [`Drawing`].
#[derive(Clone, Debug, Default)]
pub struct StrokeCapture {
    drawing: Drawing,
    /// In-flight stroke, present between `start_stroke` and `end_stroke`.
    current: Option<Stroke>,
}

impl StrokeCapture {
    /// Creates a capture with an empty drawing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            drawing: Drawing::new(),
            current: None,
        }
    }

    /// Begins a new stroke at `point`.
    ///
    /// A stroke still in flight is discarded; hosts that miss an up event
    /// must not leak it into the next gesture.
    pub fn start_stroke(&mut self, point: Point) {
        let mut stroke = Stroke::new();
        stroke.push(point);
        self.current = Some(stroke);
    }

    /// Extends the in-flight stroke. Ignored when no stroke is active.
    ///
    /// Returns true if the point was recorded.
    pub fn append_to_stroke(&mut self, point: Point) -> bool {
        match &mut self.current {
            Some(stroke) => {
                stroke.push(point);
                true
            }
            None => false,
        }
    }

    /// Commits the in-flight stroke to the drawing.
    ///
    /// Returns true if a stroke was committed. Calling this with no active
    /// stroke (for example a pointer-leave after pointer-up) does nothing.
    pub fn end_stroke(&mut self) -> bool {
        match self.current.take() {
            Some(stroke) if !stroke.is_empty() => {
                self.drawing.push(stroke);
                true
            }
            _ => false,
        }
    }

    /// Drops the drawing and any in-flight stroke.
    pub fn clear(&mut self) {
        self.drawing.clear();
        self.current = None;
    }

    /// Returns true while a drag is in progress.
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// Completed strokes.
    #[must_use]
    pub const fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// The stroke currently being drawn, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    /// Takes the completed drawing, leaving an empty one behind.
    ///
    /// The in-flight stroke, if any, stays active.
    pub fn take_drawing(&mut self) -> Drawing {
        mem::take(&mut self.drawing)
    }
}

/// Maps pointer positions on a displayed canvas into canvas pixels.
///
/// A canvas backing store of `canvas` pixels may be displayed at any size;
/// pointer events arrive in display coordinates relative to the page or
/// window. `CanvasScale` undoes the offset and the display scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasScale {
    /// Where the canvas is displayed, in pointer coordinates.
    pub display: Rect,
    /// Size of the canvas backing store in pixels.
    pub canvas: Size,
}

impl CanvasScale {
    /// Creates a mapping for a canvas of `canvas` pixels shown at `display`.
    #[must_use]
    pub const fn new(display: Rect, canvas: Size) -> Self {
        Self { display, canvas }
    }

    /// Converts a pointer position to canvas pixel space.
    ///
    /// A degenerate display rectangle maps every axis with zero extent to `0`.
    #[must_use]
    pub fn to_canvas(&self, pointer: Point) -> Point {
        let scale = |offset: f64, display: f64, canvas: f64| {
            if display > 0.0 {
                offset * (canvas / display)
            } else {
                0.0
            }
        };
        let display = self.display;
        let x = scale(pointer.x - display.x0, display.width(), self.canvas.width);
        let y = scale(pointer.y - display.y0, display.height(), self.canvas.height);
        Point::new(x, y)
    }
}
