//! Rectangle computations over crop candidates: bounding boxes, unions, the
//! proximity predicate, and the iterative box merger.
//!
//! The merger rescans all pairs from scratch after every merge. That is
//! O(n³) in the number of boxes, which is fine here: the candidate count
//! after area filtering is typically single digits to low tens. A union-find
//! or spatial-index rewrite would only be acceptable if it provably produced
//! the identical final partition.

use crate::contours::Contour;
use crate::types::CropBox;

/// Bounding rectangle of a contour as min/max extents.
///
/// `w` and `h` are the coordinate spans (`max - min`), so a single-point
/// contour yields `w = 0, h = 0`. Such degenerate boxes never survive the
/// area filter downstream.
pub fn bounding_rect(contour: &Contour) -> CropBox {
    let first = contour.points[0];
    let mut min_x = first.x;
    let mut max_x = first.x;
    let mut min_y = first.y;
    let mut max_y = first.y;
    for p in &contour.points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    CropBox {
        x: min_x,
        y: min_y,
        w: max_x - min_x,
        h: max_y - min_y,
    }
}

/// Smallest rectangle containing both inputs.
pub fn merge_rects(a: &CropBox, b: &CropBox) -> CropBox {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    let right = a.right().max(b.right());
    let bottom = a.bottom().max(b.bottom());
    CropBox {
        x,
        y,
        w: right - x,
        h: bottom - y,
    }
}

/// Whether `a`, grown by `margin` on all sides, intersects or touches `b`.
///
/// Equivalent to requiring the axis gap between the rectangles to be at most
/// `margin` on both axes, so the result is symmetric in `a` and `b`.
pub fn should_merge(a: &CropBox, b: &CropBox, margin: f32) -> bool {
    let ax0 = a.x as f32 - margin;
    let ay0 = a.y as f32 - margin;
    let ax1 = a.right() as f32 + margin;
    let ay1 = a.bottom() as f32 + margin;
    ax0 <= b.right() as f32 && ax1 >= b.x as f32 && ay0 <= b.bottom() as f32 && ay1 >= b.y as f32
}

/// Collapse boxes that lie within `margin` of each other.
///
/// Repeatedly scans all unordered pairs; the first mergeable pair found is
/// replaced by its union and the scan restarts. Terminates when a full pass
/// finds no mergeable pair, so no two boxes in the result are within
/// `margin` of each other and re-running is a no-op.
pub fn merge_nearby_boxes(mut boxes: Vec<CropBox>, margin: f32) -> Vec<CropBox> {
    loop {
        let mut pair = None;
        'scan: for i in 0..boxes.len() {
            for j in (i + 1)..boxes.len() {
                if should_merge(&boxes[i], &boxes[j], margin) {
                    pair = Some((i, j));
                    break 'scan;
                }
            }
        }
        match pair {
            Some((i, j)) => {
                boxes[i] = merge_rects(&boxes[i], &boxes[j]);
                boxes.remove(j);
            }
            None => return boxes,
        }
    }
}

/// Expand a box by `padding` on all sides, then clamp it to the image.
///
/// `x`/`y` are clamped to ≥ 0 first, then `w`/`h` are limited so the box
/// stays inside `img_w × img_h`.
pub fn pad_and_clamp(b: &CropBox, img_w: usize, img_h: usize, padding: f32) -> CropBox {
    let pad = padding.max(0.0);
    let x = (b.x as f32 - pad).max(0.0).round() as i32;
    let y = (b.y as f32 - pad).max(0.0).round() as i32;
    let w = ((b.w as f32 + 2.0 * pad).round() as i32).min(img_w as i32 - x);
    let h = ((b.h as f32 + 2.0 * pad).round() as i32).min(img_h as i32 - y);
    CropBox { x, y, w, h }
}
