//! Linear contrast/brightness correction.

use crate::image::RgbaBuffer;

/// Apply `out = clamp(gain * in + bias, 0, 255)` to R, G and B; alpha is
/// untouched. Produces a fresh buffer.
pub fn adjust_linear(src: &RgbaBuffer, gain: f32, bias: f32) -> RgbaBuffer {
    let mut out = RgbaBuffer::new(src.w, src.h);
    for (dst, px) in out
        .data
        .chunks_exact_mut(4)
        .zip(src.data.chunks_exact(4))
    {
        for c in 0..3 {
            dst[c] = (gain * px[c] as f32 + bias).clamp(0.0, 255.0) as u8;
        }
        dst[3] = px[3];
    }
    out
}
