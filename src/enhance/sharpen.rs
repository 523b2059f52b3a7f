//! Discrete 3×3 sharpen convolution over the colour channels.

use crate::image::RgbaBuffer;

pub const SHARPEN_KERNEL: [[i32; 3]; 3] = [[0, -1, 0], [-1, 5, -1], [0, -1, 0]];

/// Sharpen R, G and B independently; alpha is passed through untouched.
///
/// Kernel taps that fall outside the buffer are skipped rather than
/// zero-padded, and each channel sum is clamped to `[0, 255]`. The result is
/// computed into a fresh buffer from the unmodified input, so rows can be
/// processed in any order.
pub fn sharpen_rgb(src: &RgbaBuffer) -> RgbaBuffer {
    let mut out = RgbaBuffer::new(src.w, src.h);
    let stride = src.w * 4;
    if stride == 0 {
        return out;
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        out.data
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| sharpen_row(src, y, row));
    }

    #[cfg(not(feature = "parallel"))]
    for (y, row) in out.data.chunks_mut(stride).enumerate() {
        sharpen_row(src, y, row);
    }

    out
}

fn sharpen_row(src: &RgbaBuffer, y: usize, row_out: &mut [u8]) {
    let w = src.w as isize;
    let h = src.h as isize;
    for x in 0..src.w {
        let mut acc = [0i32; 3];
        for (ky, kernel_row) in SHARPEN_KERNEL.iter().enumerate() {
            let sy = y as isize + ky as isize - 1;
            if sy < 0 || sy >= h {
                continue;
            }
            for (kx, &k) in kernel_row.iter().enumerate() {
                if k == 0 {
                    continue;
                }
                let sx = x as isize + kx as isize - 1;
                if sx < 0 || sx >= w {
                    continue;
                }
                let i = src.idx(sx as usize, sy as usize);
                acc[0] += k * src.data[i] as i32;
                acc[1] += k * src.data[i + 1] as i32;
                acc[2] += k * src.data[i + 2] as i32;
            }
        }
        let o = x * 4;
        row_out[o] = acc[0].clamp(0, 255) as u8;
        row_out[o + 1] = acc[1].clamp(0, 255) as u8;
        row_out[o + 2] = acc[2].clamp(0, 255) as u8;
        row_out[o + 3] = src.data[src.idx(x, y) + 3];
    }
}
