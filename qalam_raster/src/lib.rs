// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Qalam Raster: alpha pixel buffers and the ink queries built on them.
//!
//! This crate is the pixel layer shared by the rest of the workspace. It knows
//! nothing about letters, strokes, or scoring; it only stores coverage and
//! answers questions about it.
//!
//! # Key types
//!
//! - [`PixelBuffer`] – a fixed-size grid of 8-bit alpha values, addressed by
//!   `(x, y)` coordinates. Row stride is internal.
//! - [`InkMask`] – the set of pixels whose alpha exceeds a threshold.
//! - [`NearInk`] – a summed-area table over an [`InkMask`] that answers
//!   "is there any ink within `r` pixels (per axis) of `(x, y)`?" in constant
//!   time. It agrees exactly with [`InkMask::any_within_brute`].
//! - [`fill_path`] and [`stamp_segment`] – small rasterizers for filled
//!   [`kurbo::BezPath`] outlines and round-capped line segments.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Line;
//! use qalam_raster::{InkMask, NearInk, PixelBuffer, stamp_segment};
//!
//! let mut buffer = PixelBuffer::new(64, 64);
//! stamp_segment(&mut buffer, Line::new((10.0, 10.0), (50.0, 10.0)), 3.0);
//!
//! let mask = InkMask::from_buffer(&buffer, 50);
//! assert!(mask.is_ink(30, 10));
//!
//! let near = NearInk::new(&mask);
//! assert!(near.any_within(30, 20, 10));
//! assert!(!near.any_within(30, 40, 10));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod buffer;
mod fill;
mod mask;

pub use buffer::PixelBuffer;
pub use fill::{FillRule, fill_path, stamp_segment};
pub use mask::{InkMask, NearInk};
