#![doc = include_str!("../README.md")]

pub mod contours;
pub mod detector;
pub mod edges;
pub mod enhance;
pub mod error;
pub mod geometry;
pub mod image;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + enhancer + results.
pub use crate::detector::{CropDetector, DetectionReport, DetectorParams};
pub use crate::enhance::{EnhanceParams, Enhancer};
pub use crate::error::{CropError, Result};
pub use crate::types::{CropBox, Point};

/// Small prelude for quick experiments.
///
/// ```
/// use crop_detector::prelude::*;
///
/// let buffer = RgbaBuffer::new(64, 64);
/// let detector = CropDetector::new(DetectorParams::default());
/// assert!(detector.suggest(&buffer).is_none());
/// ```
pub mod prelude {
    pub use crate::image::RgbaBuffer;
    pub use crate::{CropBox, CropDetector, DetectorParams, EnhanceParams, Enhancer};
}
