//! Parameter types configuring the crop detector.
//!
//! The two edge thresholds are a deliberate fixed scheme rather than a tuning
//! surface: both sensitivities always run and their contours are pooled. The
//! constants are named here so their effect is documented in one place.

/// Detector-wide parameters for the suggestion pipeline.
#[derive(Clone, Debug)]
pub struct DetectorParams {
    /// Low-sensitivity edge threshold: fewer, stronger edges.
    pub threshold_low: f32,
    /// High-sensitivity edge threshold: finer edge structure.
    pub threshold_high: f32,
    /// Candidate boxes must exceed this fraction of the image area.
    pub min_area_frac: f64,
    /// A winning box above this fraction of the image area is treated as a
    /// detection failure ("crop ≈ whole image" carries no information).
    pub max_area_frac: f64,
    /// Merge margin as a fraction of `min(image_w, image_h)`.
    pub merge_margin_frac: f32,
    /// Presentation padding as a fraction of the suggested box's `min(w, h)`,
    /// applied by [`suggest_or_full_frame`](super::CropDetector::suggest_or_full_frame).
    pub padding_frac: f32,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            threshold_low: 30.0,
            threshold_high: 70.0,
            min_area_frac: 0.015,
            max_area_frac: 0.95,
            merge_margin_frac: 0.05,
            padding_frac: 0.02,
        }
    }
}
