mod common;

use common::synthetic_image::{iou, rectangle_rgba, solid_rgba};
use crop_detector::geometry::pad_and_clamp;
use crop_detector::types::CropBox;
use crop_detector::{CropDetector, DetectorParams};

const BG: [u8; 4] = [230, 230, 230, 255];
const FG: [u8; 4] = [25, 25, 25, 255];

#[test]
fn flat_image_yields_no_suggestion() {
    let image = solid_rgba(320, 240, BG);
    let detector = CropDetector::new(DetectorParams::default());
    let report = detector.suggest_with_diagnostics(&image);
    assert!(report.crop.is_none());
    assert_eq!(report.trace.contours_low, 0);
    assert_eq!(report.trace.contours_high, 0);
}

#[test]
fn low_contrast_image_yields_no_suggestion() {
    // A two-gray-level step whose gradient magnitude stays under the low
    // threshold everywhere.
    let rect = CropBox::new(80, 60, 160, 120);
    let image = rectangle_rgba(320, 240, [128, 128, 128, 255], [130, 130, 130, 255], rect);
    let detector = CropDetector::new(DetectorParams::default());
    assert!(detector.suggest(&image).is_none());
}

#[test]
fn high_contrast_rectangle_is_found_with_good_iou() {
    let truth = CropBox::new(150, 100, 200, 150);
    let image = rectangle_rgba(512, 384, BG, FG, truth);
    let detector = CropDetector::new(DetectorParams::default());

    let crop = detector
        .suggest(&image)
        .expect("expected a suggestion for a high-contrast rectangle");
    let overlap = iou(&crop, &truth);
    assert!(
        overlap >= 0.8,
        "IoU too low: {overlap:.3} (crop {crop:?} vs truth {truth:?})"
    );
}

#[test]
fn suggestion_pools_both_thresholds() {
    let truth = CropBox::new(150, 100, 200, 150);
    let image = rectangle_rgba(512, 384, BG, FG, truth);
    let detector = CropDetector::new(DetectorParams::default());
    let report = detector.suggest_with_diagnostics(&image);
    assert!(report.trace.contours_low >= 1);
    assert!(report.trace.contours_high >= 1);
    assert!(report.trace.candidates >= 2, "both thresholds contribute");
    assert_eq!(report.trace.merged, 1, "overlapping candidates merge to one");
}

#[test]
fn tiny_rectangle_is_below_the_area_floor() {
    // 10x10 of a 512x384 image is ~0.05% of the area, far under 1.5%.
    let truth = CropBox::new(200, 150, 10, 10);
    let image = rectangle_rgba(512, 384, BG, FG, truth);
    let detector = CropDetector::new(DetectorParams::default());
    assert!(detector.suggest(&image).is_none());
}

#[test]
fn fallback_returns_the_full_frame() {
    let image = solid_rgba(300, 200, BG);
    let detector = CropDetector::new(DetectorParams::default());
    let crop = detector.suggest_or_full_frame(&image);
    assert_eq!(crop, CropBox::new(0, 0, 300, 200));
}

#[test]
fn accepted_suggestion_is_padded_and_stays_in_bounds() {
    let truth = CropBox::new(150, 100, 200, 150);
    let image = rectangle_rgba(512, 384, BG, FG, truth);
    let detector = CropDetector::new(DetectorParams::default());

    let raw = detector.suggest(&image).unwrap();
    let padded = detector.suggest_or_full_frame(&image);

    // The padding margin is 2% of the suggested box's shorter side (not of
    // the image dimensions), then clamped to the frame.
    let margin = 0.02 * raw.w.min(raw.h) as f32;
    assert_eq!(padded, pad_and_clamp(&raw, 512, 384, margin));

    // Padding grows the box on every side that is not clamped.
    assert!(padded.x <= raw.x);
    assert!(padded.y <= raw.y);
    assert!(padded.right() >= raw.right());
    assert!(padded.bottom() >= raw.bottom());
    assert!(padded.x >= 0 && padded.y >= 0);
    assert!(padded.right() <= 512 && padded.bottom() <= 384);
}

#[test]
fn detection_is_deterministic() {
    let truth = CropBox::new(60, 40, 120, 90);
    let image = rectangle_rgba(320, 240, BG, FG, truth);
    let detector = CropDetector::new(DetectorParams::default());
    assert_eq!(detector.suggest(&image), detector.suggest(&image));
}
