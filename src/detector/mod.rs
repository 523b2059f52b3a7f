//! Crop detector orchestrating the suggestion pipeline.
//!
//! Overview
//! - Reduces the RGBA input to grayscale and smooths it once.
//! - Extracts binary edge masks at two fixed sensitivities and pools the
//!   contours of both; redundancy between the two passes is resolved later by
//!   box merging rather than by choosing a threshold.
//! - Maps contours to bounding boxes, drops boxes below the minimum-area
//!   fraction, merges boxes within the proximity margin, and picks the
//!   largest survivor.
//! - Declines to suggest when nothing survives or when the winner covers
//!   nearly the whole frame; `None` is an expected outcome, not an error.
//!
//! Modules
//! - [`params`] – configuration constants with documented effects.
//! - `pipeline` – the [`CropDetector`] implementation.
//! - [`report`] – serializable per-run diagnostics.

pub mod params;
mod pipeline;
pub mod report;

pub use params::DetectorParams;
pub use pipeline::CropDetector;
pub use report::{DetectionReport, PipelineTrace, RejectionReason};
