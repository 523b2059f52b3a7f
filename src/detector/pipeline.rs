//! Suggestion pipeline driving crop detection end-to-end.
//!
//! The [`CropDetector`] exposes a simple API: feed an RGBA buffer and get a
//! suggested crop box, or `None` when the image yields no usable region.
//! Internally it runs grayscale reduction and blur once, extracts edge masks
//! at the two fixed sensitivities, pools the contours of both, and reduces
//! the pool to one rectangle through area filtering, proximity merging and
//! largest-area selection.
//!
//! Typical usage:
//! ```no_run
//! use crop_detector::{CropDetector, DetectorParams};
//! use crop_detector::image::RgbaBuffer;
//!
//! # fn example(rgba: RgbaBuffer) {
//! let detector = CropDetector::new(DetectorParams::default());
//! if let Some(crop) = detector.suggest(&rgba) {
//!     println!("suggested {}x{} at {},{}", crop.w, crop.h, crop.x, crop.y);
//! }
//! # }
//! ```

use super::params::DetectorParams;
use super::report::{DetectionReport, PipelineTrace, RejectionReason};
use crate::contours::{extract_contours, Contour};
use crate::edges::{blur3x3, sobel_edges};
use crate::geometry::{bounding_rect, merge_nearby_boxes, pad_and_clamp};
use crate::image::{grayscale_mean, RgbaBuffer};
use crate::types::CropBox;
use log::debug;
use std::time::Instant;

/// Crop detector orchestrating grayscale, blur, dual-threshold edge
/// extraction, contour discovery and box merging.
pub struct CropDetector {
    params: DetectorParams,
}

impl CropDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    /// Run the detector, returning the suggested crop box if one was found.
    pub fn suggest(&self, image: &RgbaBuffer) -> Option<CropBox> {
        self.suggest_with_diagnostics(image).crop
    }

    /// Run the detector and return the suggestion together with a
    /// stage-by-stage trace.
    pub fn suggest_with_diagnostics(&self, image: &RgbaBuffer) -> DetectionReport {
        let (width, height) = (image.w, image.h);
        debug!("CropDetector::suggest start w={width} h={height}");
        let total_start = Instant::now();

        let mut trace = PipelineTrace {
            width,
            height,
            ..Default::default()
        };

        let stage_start = Instant::now();
        let gray = grayscale_mean(image);
        trace.grayscale_ms = stage_start.elapsed().as_secs_f64() * 1000.0;

        let stage_start = Instant::now();
        let blurred = blur3x3(&gray);
        trace.blur_ms = stage_start.elapsed().as_secs_f64() * 1000.0;

        // Both sensitivities run over the same blurred buffer and their
        // contours are pooled; redundancy is resolved by merging, not by
        // choosing between thresholds.
        let mut pool: Vec<Contour> = Vec::new();
        let mut counts = [0usize; 2];
        let thresholds = [self.params.threshold_low, self.params.threshold_high];
        for (pass, &threshold) in thresholds.iter().enumerate() {
            let stage_start = Instant::now();
            let mask = sobel_edges(&blurred, threshold);
            trace.edges_ms += stage_start.elapsed().as_secs_f64() * 1000.0;

            let stage_start = Instant::now();
            let contours = extract_contours(&mask);
            trace.contours_ms += stage_start.elapsed().as_secs_f64() * 1000.0;

            debug!(
                "threshold {threshold}: {} edge px, {} contours",
                mask.edge_count(),
                contours.len()
            );
            counts[pass] = contours.len();
            pool.extend(contours);
        }
        trace.contours_low = counts[0];
        trace.contours_high = counts[1];

        let stage_start = Instant::now();
        let outcome = self.select(&pool, width, height, &mut trace);
        trace.boxes_ms = stage_start.elapsed().as_secs_f64() * 1000.0;
        trace.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        let (crop, rejection) = match outcome {
            Ok(crop) => (Some(crop), None),
            Err(reason) => (None, Some(reason)),
        };
        debug!(
            "CropDetector::suggest done crop={crop:?} rejection={rejection:?} total_ms={:.3}",
            trace.total_ms
        );
        DetectionReport {
            crop,
            rejection,
            trace,
        }
    }

    /// The consuming-layer policy packaged as a convenience: on a suggestion,
    /// pad it by `padding_frac` of the box's shorter side and clamp to the
    /// image; on no-suggestion, fall back to the full-frame box.
    pub fn suggest_or_full_frame(&self, image: &RgbaBuffer) -> CropBox {
        match self.suggest(image) {
            Some(b) => {
                let padding = self.params.padding_frac * b.w.min(b.h) as f32;
                pad_and_clamp(&b, image.w, image.h, padding)
            }
            None => CropBox::full_frame(image.w, image.h),
        }
    }

    /// Reduce the contour pool to a final box, or a reason why not.
    fn select(
        &self,
        pool: &[Contour],
        width: usize,
        height: usize,
        trace: &mut PipelineTrace,
    ) -> Result<CropBox, RejectionReason> {
        if pool.is_empty() {
            return Err(RejectionReason::NoContours);
        }

        let image_area = (width * height) as f64;
        let min_area = self.params.min_area_frac * image_area;
        let candidates: Vec<CropBox> = pool
            .iter()
            .map(bounding_rect)
            .filter(|rect| rect.area() as f64 > min_area)
            .collect();
        trace.candidates = candidates.len();
        if candidates.is_empty() {
            return Err(RejectionReason::AllBelowMinArea);
        }

        let margin = self.params.merge_margin_frac * width.min(height) as f32;
        let merged = merge_nearby_boxes(candidates, margin);
        trace.merged = merged.len();

        // First maximal box wins ties.
        let Some(best) = merged
            .iter()
            .copied()
            .reduce(|best, b| if b.area() > best.area() { b } else { best })
        else {
            return Err(RejectionReason::NothingMerged);
        };

        if best.area() as f64 > self.params.max_area_frac * image_area {
            return Err(RejectionReason::CoversWholeImage);
        }
        Ok(best)
    }
}
