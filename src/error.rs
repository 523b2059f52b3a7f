//! Error types for detection and enhancement.

use thiserror::Error;

/// Result type alias for crop-detector operations.
pub type Result<T> = std::result::Result<T, CropError>;

/// Failures surfaced by the detection and enhancement engines.
///
/// A failed suggestion is *not* an error: the detector returns `None` when no
/// usable region is found. Errors cover unreadable inputs, unencodable
/// outputs, and caller precondition violations.
#[derive(Error, Debug)]
pub enum CropError {
    /// Source image bytes could not be decoded.
    #[error("failed to decode image: {source}")]
    Decode {
        #[source]
        source: image::ImageError,
    },

    /// Result buffer could not be encoded to the output format.
    #[error("failed to encode image: {source}")]
    Encode {
        #[source]
        source: image::ImageError,
    },

    /// Caller requested a crop region with non-positive dimensions or one
    /// extending outside the image. Rejected rather than clamped, so caller
    /// bugs stay visible.
    #[error("invalid crop region {x},{y} {w}x{h} for {image_w}x{image_h} image")]
    InvalidCropRegion {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        image_w: usize,
        image_h: usize,
    },

    /// A pixel buffer's byte length does not match its declared dimensions.
    #[error("pixel buffer layout mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

impl CropError {
    pub fn decode(source: image::ImageError) -> Self {
        Self::Decode { source }
    }

    pub fn encode(source: image::ImageError) -> Self {
        Self::Encode { source }
    }
}
