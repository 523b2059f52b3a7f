//! I/O helpers for RGBA buffers.
//!
//! - `decode_rgba` / `encode_png`: byte-level decode/encode through the
//!   `image` crate. PNG is the single output format (lossless, so the
//!   maximum-quality requirement holds by construction).
//! - `load_rgba_image` / `save_png`: file-path conveniences.
//! - `crop_rgba`: region extraction with precondition checks.

use super::rgba::RgbaBuffer;
use crate::error::{CropError, Result};
use crate::types::CropBox;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Decode an encoded image payload (PNG/JPEG/etc.) into an RGBA buffer.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaBuffer> {
    let img = image::load_from_memory(bytes)
        .map_err(CropError::decode)?
        .into_rgba8();
    Ok(from_rgba_image(img))
}

/// Encode an RGBA buffer as PNG bytes.
pub fn encode_png(buffer: &RgbaBuffer) -> Result<Vec<u8>> {
    let img = to_rgba_image(buffer)?;
    let mut out = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(CropError::encode)?;
    Ok(out)
}

/// Load an image from disk and convert to RGBA8.
pub fn load_rgba_image(path: &Path) -> Result<RgbaBuffer> {
    let img = image::open(path).map_err(CropError::decode)?.into_rgba8();
    Ok(from_rgba_image(img))
}

/// Save an RGBA buffer to a PNG file.
pub fn save_png(buffer: &RgbaBuffer, path: &Path) -> Result<()> {
    let img = to_rgba_image(buffer)?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(CropError::encode)
}

/// Extract a rectangular region from `src` into a fresh buffer.
///
/// The region must have positive dimensions and lie fully inside the image;
/// anything else is a caller precondition violation and is rejected rather
/// than clamped.
pub fn crop_rgba(src: &RgbaBuffer, region: &CropBox) -> Result<RgbaBuffer> {
    let valid = region.w > 0
        && region.h > 0
        && region.x >= 0
        && region.y >= 0
        && region.right() as usize <= src.w
        && region.bottom() as usize <= src.h;
    if !valid {
        return Err(CropError::InvalidCropRegion {
            x: region.x,
            y: region.y,
            w: region.w,
            h: region.h,
            image_w: src.w,
            image_h: src.h,
        });
    }

    let (rx, ry) = (region.x as usize, region.y as usize);
    let (rw, rh) = (region.w as usize, region.h as usize);
    let mut out = RgbaBuffer::new(rw, rh);
    for y in 0..rh {
        let src_start = src.idx(rx, ry + y);
        let dst_start = out.idx(0, y);
        out.data[dst_start..dst_start + rw * 4]
            .copy_from_slice(&src.data[src_start..src_start + rw * 4]);
    }
    Ok(out)
}

pub(crate) fn from_rgba_image(img: RgbaImage) -> RgbaBuffer {
    let w = img.width() as usize;
    let h = img.height() as usize;
    RgbaBuffer {
        w,
        h,
        data: img.into_raw(),
    }
}

pub(crate) fn to_rgba_image(buffer: &RgbaBuffer) -> Result<RgbaImage> {
    RgbaImage::from_raw(buffer.w as u32, buffer.h as u32, buffer.data.clone()).ok_or(
        CropError::BufferSize {
            expected: buffer.w * buffer.h * 4,
            actual: buffer.data.len(),
        },
    )
}
