// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Qalam Ink: the stroke capture surface of a practice canvas.
//!
//! A child's drawing is modeled as:
//!
//! - [`Stroke`] – the points of one continuous drag, pointer-down to
//!   pointer-up, in canvas pixel space.
//! - [`Drawing`] – every stroke since the last clear, in order.
//! - [`StrokeCapture`] – the small state machine hosts feed with pointer
//!   events: [`StrokeCapture::start_stroke`], [`StrokeCapture::append_to_stroke`],
//!   [`StrokeCapture::end_stroke`], and [`StrokeCapture::clear`].
//! - [`CanvasScale`] – maps pointer coordinates on the displayed canvas into
//!   canvas pixels. Hosts apply it before handing points to the capture.
//!
//! [`render_drawing`] rasterizes a drawing into a [`PixelBuffer`] with the
//! brush described by [`StrokeStyle`], producing the buffer a scorer compares
//! against a rendered reference glyph.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use qalam_ink::{StrokeCapture, StrokeStyle, render_drawing};
//!
//! let mut capture = StrokeCapture::new();
//! capture.start_stroke(Point::new(10.0, 10.0));
//! capture.append_to_stroke(Point::new(50.0, 10.0));
//! capture.end_stroke();
//!
//! let buffer = render_drawing(capture.drawing(), None, 64, 64, &StrokeStyle::default());
//! assert!(buffer.alpha_at(30, 10) > 50);
//! assert_eq!(buffer.alpha_at(30, 40), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod capture;
mod drawing;
mod render;

pub use capture::{CanvasScale, StrokeCapture};
pub use drawing::{Drawing, Stroke};
pub use render::{StrokeStyle, render_drawing, render_stroke};

pub use qalam_raster::PixelBuffer;
