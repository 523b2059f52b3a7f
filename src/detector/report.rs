//! Structured diagnostics for a detector run.

use crate::types::CropBox;
use serde::Serialize;

/// Why a run ended with no suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectionReason {
    /// Neither threshold produced any contour.
    NoContours,
    /// Every candidate box fell at or under the minimum-area fraction.
    AllBelowMinArea,
    /// Merging left no boxes (defensive; unreachable when candidates exist).
    NothingMerged,
    /// The winning box covered nearly the whole image.
    CoversWholeImage,
}

/// Per-stage wall-clock timings and candidate counts for one run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub width: usize,
    pub height: usize,
    pub grayscale_ms: f64,
    pub blur_ms: f64,
    pub edges_ms: f64,
    pub contours_ms: f64,
    pub boxes_ms: f64,
    pub total_ms: f64,
    /// Contours found at the low-sensitivity threshold.
    pub contours_low: usize,
    /// Contours found at the high-sensitivity threshold.
    pub contours_high: usize,
    /// Boxes surviving the minimum-area filter.
    pub candidates: usize,
    /// Boxes remaining after proximity merging.
    pub merged: usize,
}

/// Result of [`suggest_with_diagnostics`](super::CropDetector::suggest_with_diagnostics):
/// the suggestion (if any), why it was withheld (if not), and the trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub crop: Option<CropBox>,
    pub rejection: Option<RejectionReason>,
    pub trace: PipelineTrace,
}
