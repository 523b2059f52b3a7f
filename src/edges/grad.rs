//! Sobel gradient magnitude thresholding into a binary edge mask.
//!
//! Convolves the fixed 3×3 Sobel kernel pair over interior pixels and marks a
//! pixel as edge when `sqrt(gx^2 + gy^2)` strictly exceeds the threshold.
//! This is a single-threshold approximation of Canny (no hysteresis, no
//! non-maximum suppression); the candidate selector depends on its exact
//! over-generating behaviour.

use crate::image::{EdgeMask, GrayBuffer, ImageView};

type Kernel3 = [[i32; 3]; 3];

pub const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
pub const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Compute the thresholded Sobel edge mask of a (blurred) grayscale buffer.
///
/// Border rows and columns are excluded, matching the blur pass: the
/// outermost pixel frame is never marked.
pub fn sobel_edges(src: &GrayBuffer, threshold: f32) -> EdgeMask {
    let w = src.w;
    let h = src.h;
    let mut mask = EdgeMask::new(w, h);
    if w < 3 || h < 3 {
        return mask;
    }

    for y in 1..h - 1 {
        let rows = [src.row(y - 1), src.row(y), src.row(y + 1)];
        let mask_start = y * w;
        for x in 1..w - 1 {
            let mut gx = 0i32;
            let mut gy = 0i32;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                for kx in 0..3 {
                    let v = row[x + kx - 1] as i32;
                    gx += v * kx_row[kx];
                    gy += v * ky_row[kx];
                }
            }
            let magnitude = ((gx * gx + gy * gy) as f32).sqrt();
            if magnitude > threshold {
                mask.data[mask_start + x] = EdgeMask::EDGE;
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_image(w: usize, h: usize, split_x: usize) -> GrayBuffer {
        let mut img = GrayBuffer::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, if x < split_x { 0 } else { 200 });
            }
        }
        img
    }

    #[test]
    fn flat_image_produces_no_edges() {
        let mut img = GrayBuffer::new(16, 16);
        img.data.fill(128);
        let mask = sobel_edges(&img, 30.0);
        assert_eq!(mask.edge_count(), 0);
    }

    #[test]
    fn vertical_step_marks_edges_along_split() {
        let img = step_image(16, 16, 8);
        let mask = sobel_edges(&img, 30.0);
        assert!(mask.edge_count() > 0);
        // Edge responses concentrate on the two columns around the step.
        for y in 1..15 {
            assert!(mask.is_edge(7, y) || mask.is_edge(8, y));
            assert!(!mask.is_edge(2, y));
            assert!(!mask.is_edge(13, y));
        }
    }

    #[test]
    fn border_frame_is_never_marked() {
        let img = step_image(16, 16, 8);
        let mask = sobel_edges(&img, 1.0);
        for x in 0..16 {
            assert!(!mask.is_edge(x, 0));
            assert!(!mask.is_edge(x, 15));
        }
        for y in 0..16 {
            assert!(!mask.is_edge(0, y));
            assert!(!mask.is_edge(15, y));
        }
    }

    #[test]
    fn higher_threshold_marks_fewer_pixels() {
        let img = step_image(32, 32, 16);
        let low = sobel_edges(&img, 30.0).edge_count();
        let high = sobel_edges(&img, 700.0).edge_count();
        assert!(high <= low);
    }

    #[test]
    fn threshold_is_strict() {
        // A step of 64 gray levels yields |gx| = 256 on the step columns, so
        // the magnitude there is exactly 256.
        let mut img = GrayBuffer::new(8, 8);
        for y in 0..8 {
            for x in 4..8 {
                img.set(x, y, 64);
            }
        }
        let at = sobel_edges(&img, 256.0);
        let below = sobel_edges(&img, 255.9);
        assert!(
            !at.is_edge(4, 4),
            "magnitude equal to threshold is not an edge"
        );
        assert!(below.is_edge(4, 4));
    }
}
