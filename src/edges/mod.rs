//! Edge processing: grayscale smoothing and gradient-based edge extraction.
//!
//! Building blocks for the crop detector:
//!
//! - A fixed 3×3 weighted-average blur (discrete Gaussian approximation).
//! - Sobel gradient magnitude + threshold, producing a binary edge mask.
//!
//! Both passes compute interior pixels only and leave the outermost row and
//! column frame untouched. This boundary simplification is part of the
//! pipeline's contract: the contour and box stages downstream are calibrated
//! against masks that never mark the border frame.

pub mod blur;
pub mod grad;

pub use blur::blur3x3;
pub use grad::{sobel_edges, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
