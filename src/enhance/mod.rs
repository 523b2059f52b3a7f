//! Enhancement engine: adaptive upscale, sharpen, contrast/brightness.
//!
//! Independent of the detection pipeline; invoked on the user-finalized crop
//! region. The three stages run strictly in order and each operates on the
//! previous stage's complete output — no fusion, no partial reads:
//!
//! 1. Adaptive upscale: images under 512 px in either dimension are resampled
//!    to 2× with a smooth bicubic filter.
//! 2. Sharpen: fixed 3×3 convolution per colour channel.
//! 3. Linear correction: `clamp(1.05 * v + 10)` per colour channel.
//!
//! The whole pipeline is deterministic: the same input buffer produces a
//! byte-identical output buffer on every run.

pub mod adjust;
pub mod sharpen;

pub use adjust::adjust_linear;
pub use sharpen::{sharpen_rgb, SHARPEN_KERNEL};

use crate::error::Result;
use crate::image::io::{decode_rgba, encode_png, from_rgba_image, to_rgba_image};
use crate::image::RgbaBuffer;
use image::imageops::{self, FilterType};
use log::debug;

/// Parameters for the enhancement pipeline.
#[derive(Clone, Debug)]
pub struct EnhanceParams {
    /// Images narrower or shorter than this are upscaled before sharpening.
    pub upscale_min_dim: usize,
    /// Upscale multiplier applied to both dimensions.
    pub upscale_factor: usize,
    /// Linear gain applied to R, G and B.
    pub contrast_gain: f32,
    /// Additive bias applied to R, G and B.
    pub brightness_bias: f32,
}

impl Default for EnhanceParams {
    fn default() -> Self {
        Self {
            upscale_min_dim: 512,
            upscale_factor: 2,
            contrast_gain: 1.05,
            brightness_bias: 10.0,
        }
    }
}

/// Enhancement pipeline over RGBA buffers and encoded payloads.
pub struct Enhancer {
    params: EnhanceParams,
}

impl Enhancer {
    pub fn new(params: EnhanceParams) -> Self {
        Self { params }
    }

    /// Run upscale → sharpen → adjust on a pixel buffer, producing a fresh
    /// enhanced buffer.
    pub fn enhance(&self, src: &RgbaBuffer) -> Result<RgbaBuffer> {
        debug!("Enhancer::enhance start w={} h={}", src.w, src.h);
        let upscaled = self.upscale_if_small(src)?;
        let sharpened = sharpen_rgb(&upscaled);
        let adjusted = adjust_linear(
            &sharpened,
            self.params.contrast_gain,
            self.params.brightness_bias,
        );
        debug!("Enhancer::enhance done w={} h={}", adjusted.w, adjusted.h);
        Ok(adjusted)
    }

    /// Decode an image payload, enhance it, and re-encode as PNG bytes.
    pub fn enhance_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let decoded = decode_rgba(bytes)?;
        let enhanced = self.enhance(&decoded)?;
        encode_png(&enhanced)
    }

    fn upscale_if_small(&self, src: &RgbaBuffer) -> Result<RgbaBuffer> {
        if src.w == 0 || src.h == 0 {
            return Ok(src.clone());
        }
        if src.w >= self.params.upscale_min_dim && src.h >= self.params.upscale_min_dim {
            return Ok(src.clone());
        }
        let factor = self.params.upscale_factor as u32;
        let img = to_rgba_image(src)?;
        let resized = imageops::resize(
            &img,
            src.w as u32 * factor,
            src.h as u32 * factor,
            FilterType::CatmullRom,
        );
        Ok(from_rgba_image(resized))
    }
}
