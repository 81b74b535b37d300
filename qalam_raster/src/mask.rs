// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ink masks and neighbourhood queries over them.

use alloc::vec;
use alloc::vec::Vec;

use crate::PixelBuffer;

/// Pixels of a [`PixelBuffer`] whose alpha is strictly above a threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InkMask {
    width: usize,
    height: usize,
    ink: Vec<bool>,
    count: usize,
}

impl InkMask {
    /// Thresholds `buffer`: a pixel is ink when `alpha > threshold`.
    #[must_use]
    pub fn from_buffer(buffer: &PixelBuffer, threshold: u8) -> Self {
        let ink: Vec<bool> = buffer.alphas().iter().map(|&a| a > threshold).collect();
        let count = ink.iter().filter(|&&b| b).count();
        Self {
            width: buffer.width(),
            height: buffer.height(),
            ink,
            count,
        }
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

    /// Number of ink pixels.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns true if `(x, y)` is inside the mask and marked as ink.
    #[inline]
    #[must_use]
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.ink[y * self.width + x]
    }

    /// Brute-force form of [`NearInk::any_within`].
    ///
    /// Scans the square `[x - radius, x + radius] × [y - radius, y + radius]`,
    /// clamped to the mask, for any ink pixel. This is the reference
    /// definition; it costs O(radius²) per call.
    #[must_use]
    pub fn any_within_brute(&self, x: usize, y: usize, radius: usize) -> bool {
        let Some((x0, y0, x1, y1)) = clamp_window(self.width, self.height, x, y, radius) else {
            return false;
        };
        (y0..=y1).any(|ny| (x0..=x1).any(|nx| self.ink[ny * self.width + nx]))
    }
}

/// Summed-area table over an [`InkMask`].
///
/// After O(width × height) preprocessing, [`NearInk::any_within`] answers
/// whether any ink lies in an axis-aligned square window in O(1). Decisions
/// are identical to [`InkMask::any_within_brute`]; only the cost differs.
#[derive(Clone, Debug)]
pub struct NearInk {
    width: usize,
    height: usize,
    // (width + 1) × (height + 1); row 0 and column 0 are zero.
    sums: Vec<u32>,
}

impl NearInk {
    /// Builds the table for `mask`.
    #[must_use]
    pub fn new(mask: &InkMask) -> Self {
        let w = mask.width;
        let h = mask.height;
        let stride = w + 1;
        let mut sums = vec![0_u32; stride * (h + 1)];
        for y in 0..h {
            let mut row = 0_u32;
            for x in 0..w {
                row += u32::from(mask.ink[y * w + x]);
                sums[(y + 1) * stride + x + 1] = sums[y * stride + x + 1] + row;
            }
        }
        Self {
            width: w,
            height: h,
            sums,
        }
    }

    /// Number of ink pixels in the inclusive rectangle `[x0, x1] × [y0, y1]`.
    ///
    /// Coordinates must already be inside the mask.
    #[inline]
    fn count_in(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> u32 {
        let stride = self.width + 1;
        let at = |x: usize, y: usize| self.sums[y * stride + x];
        at(x1 + 1, y1 + 1) + at(x0, y0) - at(x0, y1 + 1) - at(x1 + 1, y0)
    }

    /// Returns true if any ink lies within `radius` pixels of `(x, y)` along
    /// both axes, with the window clamped to the mask.
    #[must_use]
    pub fn any_within(&self, x: usize, y: usize, radius: usize) -> bool {
        clamp_window(self.width, self.height, x, y, radius)
            .is_some_and(|(x0, y0, x1, y1)| self.count_in(x0, y0, x1, y1) > 0)
    }
}

/// Clamps the square window around `(x, y)` to `[0, width) × [0, height)`.
///
/// Returns `None` when the window misses the mask entirely.
fn clamp_window(
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    radius: usize,
) -> Option<(usize, usize, usize, usize)> {
    if width == 0 || height == 0 {
        return None;
    }
    let x0 = x.saturating_sub(radius);
    let y0 = y.saturating_sub(radius);
    if x0 >= width || y0 >= height {
        return None;
    }
    let x1 = x.saturating_add(radius).min(width - 1);
    let y1 = y.saturating_add(radius).min(height - 1);
    Some((x0, y0, x1, y1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from(width: usize, height: usize, ink: &[(usize, usize)]) -> InkMask {
        let mut b = PixelBuffer::new(width, height);
        for &(x, y) in ink {
            b.set_alpha(x, y, 255);
        }
        InkMask::from_buffer(&b, 50)
    }

    #[test]
    fn threshold_is_strict() {
        let mut b = PixelBuffer::new(3, 1);
        b.set_alpha(0, 0, 50);
        b.set_alpha(1, 0, 51);
        let m = InkMask::from_buffer(&b, 50);
        assert!(!m.is_ink(0, 0));
        assert!(m.is_ink(1, 0));
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn window_is_inclusive_of_radius() {
        let m = mask_from(100, 100, &[(50, 50)]);
        let near = NearInk::new(&m);
        assert!(near.any_within(90, 50, 40));
        assert!(!near.any_within(91, 50, 40));
        assert!(near.any_within(10, 10, 40));
        assert!(!near.any_within(9, 10, 40));
    }

    #[test]
    fn window_clamps_at_edges() {
        let m = mask_from(20, 20, &[(0, 0), (19, 19)]);
        let near = NearInk::new(&m);
        assert!(near.any_within(2, 2, 3));
        assert!(near.any_within(17, 17, 2));
        assert!(!near.any_within(10, 10, 5));
        // Far outside the mask: the clamped window is empty.
        assert!(!near.any_within(200, 200, 5));
        assert!(!m.any_within_brute(200, 200, 5));
    }

    #[test]
    fn summed_area_matches_brute_force() {
        let ink = [(3, 4), (17, 2), (9, 9), (0, 15), (12, 18)];
        let m = mask_from(20, 20, &ink);
        let near = NearInk::new(&m);
        for radius in [0, 1, 2, 4, 7] {
            for y in 0..20 {
                for x in 0..20 {
                    assert_eq!(
                        near.any_within(x, y, radius),
                        m.any_within_brute(x, y, radius),
                        "mismatch at ({x}, {y}) radius {radius}"
                    );
                }
            }
        }
    }

    #[test]
    fn empty_mask_has_no_ink_anywhere() {
        let m = mask_from(0, 0, &[]);
        let near = NearInk::new(&m);
        assert!(!near.any_within(0, 0, 10));
        assert_eq!(m.count(), 0);
    }
}
