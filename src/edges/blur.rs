//! Fixed 3×3 weighted-average smoothing (discrete Gaussian approximation).

use crate::image::{GrayBuffer, ImageView, ImageViewMut};

/// Smooth a grayscale buffer with the 3×3 kernel `[1,2,1,2,4,2,1,2,1] / 16`.
///
/// Output is written to a fresh buffer. Border rows and columns are not
/// computed and stay at 0; the gradient pass downstream skips the same frame,
/// so detected-edge geometry near the image border depends on this behaviour
/// staying as-is.
pub fn blur3x3(src: &GrayBuffer) -> GrayBuffer {
    let w = src.w;
    let h = src.h;
    let mut out = GrayBuffer::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let above = src.row(y - 1);
        let cur = src.row(y);
        let below = src.row(y + 1);
        let dst = out.row_mut(y);
        for x in 1..w - 1 {
            let sum = above[x - 1] as u32
                + 2 * above[x] as u32
                + above[x + 1] as u32
                + 2 * cur[x - 1] as u32
                + 4 * cur[x] as u32
                + 2 * cur[x + 1] as u32
                + below[x - 1] as u32
                + 2 * below[x] as u32
                + below[x + 1] as u32;
            dst[x] = (sum / 16) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(w: usize, h: usize, v: u8) -> GrayBuffer {
        let mut img = GrayBuffer::new(w, h);
        img.data.fill(v);
        img
    }

    #[test]
    fn uniform_interior_is_preserved() {
        let out = blur3x3(&uniform(8, 8, 100));
        for y in 1..7 {
            for x in 1..7 {
                assert_eq!(out.get(x, y), 100);
            }
        }
    }

    #[test]
    fn border_stays_zero() {
        let out = blur3x3(&uniform(8, 8, 200));
        for x in 0..8 {
            assert_eq!(out.get(x, 0), 0);
            assert_eq!(out.get(x, 7), 0);
        }
        for y in 0..8 {
            assert_eq!(out.get(0, y), 0);
            assert_eq!(out.get(7, y), 0);
        }
    }

    #[test]
    fn isolated_bright_pixel_spreads_with_kernel_weights() {
        let mut img = GrayBuffer::new(5, 5);
        img.set(2, 2, 160);
        let out = blur3x3(&img);
        assert_eq!(out.get(2, 2), 40); // 4/16
        assert_eq!(out.get(1, 2), 20); // 2/16
        assert_eq!(out.get(1, 1), 10); // 1/16
    }

    #[test]
    fn tiny_image_yields_all_zero() {
        let out = blur3x3(&uniform(2, 2, 255));
        assert!(out.data.iter().all(|&v| v == 0));
    }
}
