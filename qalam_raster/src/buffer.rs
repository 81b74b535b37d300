// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`PixelBuffer`] value type.

use alloc::vec;
use alloc::vec::Vec;

/// A fixed-size grid of 8-bit alpha (opacity) values.
///
/// Pixels are addressed by `(x, y)` with `x < width` and `y < height`. Reads
/// outside the buffer return `0` and writes outside it are ignored, so callers
/// can rasterize shapes that hang over the edge without clipping them first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    alpha: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a fully transparent buffer.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width * height],
        }
    }

    /// Wraps row-major alpha values.
    ///
    /// Returns `None` when `alpha.len() != width * height`.
    #[must_use]
    pub fn from_alpha(width: usize, height: usize, alpha: Vec<u8>) -> Option<Self> {
        (alpha.len() == width.checked_mul(height)?).then_some(Self {
            width,
            height,
            alpha,
        })
    }

    /// Extracts the alpha channel from interleaved RGBA bytes.
    ///
    /// Returns `None` when `rgba.len() != width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Option<Self> {
        let len = width.checked_mul(height)?;
        if rgba.len() != len.checked_mul(4)? {
            return None;
        }
        let alpha = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Some(Self {
            width,
            height,
            alpha,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[must_use]
    pub const fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns true if `other` has the same width and height.
    #[must_use]
    pub const fn same_size(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Returns true if the buffer has no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }

    /// Alpha at `(x, y)`, or `0` outside the buffer.
    #[inline]
    #[must_use]
    pub fn alpha_at(&self, x: usize, y: usize) -> u8 {
        self.index(x, y).map_or(0, |i| self.alpha[i])
    }

    /// Sets the alpha at `(x, y)`. Ignored outside the buffer.
    #[inline]
    pub fn set_alpha(&mut self, x: usize, y: usize, alpha: u8) {
        if let Some(i) = self.index(x, y) {
            self.alpha[i] = alpha;
        }
    }

    /// Raises the alpha at `(x, y)` to at least `alpha`. Ignored outside the buffer.
    ///
    /// Rasterizers composite with this so overlapping shapes never thin each
    /// other out.
    #[inline]
    pub fn blend_max(&mut self, x: usize, y: usize, alpha: u8) {
        if let Some(i) = self.index(x, y) {
            let a = &mut self.alpha[i];
            *a = (*a).max(alpha);
        }
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) {
        self.alpha.fill(0);
    }

    /// Row-major alpha values.
    #[must_use]
    pub fn alphas(&self) -> &[u8] {
        &self.alpha
    }

    /// Iterates `(x, y, alpha)` for every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let width = self.width.max(1);
        self.alpha
            .iter()
            .enumerate()
            .map(move |(i, &a)| (i % width, i / width, a))
    }

    /// Number of pixels whose alpha is strictly greater than `threshold`.
    #[must_use]
    pub fn count_above(&self, threshold: u8) -> usize {
        self.alpha.iter().filter(|&&a| a > threshold).count()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_are_transparent() {
        let mut b = PixelBuffer::new(4, 3);
        b.set_alpha(3, 2, 200);
        assert_eq!(b.alpha_at(3, 2), 200);
        assert_eq!(b.alpha_at(4, 2), 0);
        assert_eq!(b.alpha_at(3, 3), 0);

        // Writes outside the buffer are dropped, not wrapped into the next row.
        b.set_alpha(4, 0, 255);
        assert_eq!(b.alpha_at(0, 1), 0);
        assert_eq!(b.count_above(0), 1);
    }

    #[test]
    fn from_alpha_checks_length() {
        assert!(PixelBuffer::from_alpha(2, 2, vec![0; 4]).is_some());
        assert!(PixelBuffer::from_alpha(2, 2, vec![0; 5]).is_none());
    }

    #[test]
    fn from_rgba_keeps_alpha_channel() {
        let rgba = [10, 20, 30, 40, 0, 0, 0, 255];
        let b = PixelBuffer::from_rgba(2, 1, &rgba).expect("valid rgba");
        assert_eq!(b.alpha_at(0, 0), 40);
        assert_eq!(b.alpha_at(1, 0), 255);
        assert!(PixelBuffer::from_rgba(2, 1, &rgba[..7]).is_none());
    }

    #[test]
    fn blend_max_never_lowers() {
        let mut b = PixelBuffer::new(1, 1);
        b.blend_max(0, 0, 120);
        b.blend_max(0, 0, 60);
        assert_eq!(b.alpha_at(0, 0), 120);
        b.clear();
        assert_eq!(b.alpha_at(0, 0), 0);
    }

    #[test]
    fn pixels_are_row_major() {
        let mut b = PixelBuffer::new(3, 2);
        b.set_alpha(1, 1, 7);
        let hit: Vec<_> = b.pixels().filter(|p| p.2 > 0).collect();
        assert_eq!(hit, [(1, 1, 7)]);
    }
}
