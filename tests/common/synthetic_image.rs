use crop_detector::image::RgbaBuffer;
use crop_detector::types::CropBox;

/// Generates a uniformly colored image.
pub fn solid_rgba(width: usize, height: usize, rgba: [u8; 4]) -> RgbaBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = RgbaBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set_pixel(x, y, rgba);
        }
    }
    img
}

/// Generates a solid rectangle on a uniform background.
pub fn rectangle_rgba(
    width: usize,
    height: usize,
    bg: [u8; 4],
    fg: [u8; 4],
    rect: CropBox,
) -> RgbaBuffer {
    let mut img = solid_rgba(width, height, bg);
    for y in rect.y.max(0)..rect.bottom().min(height as i32) {
        for x in rect.x.max(0)..rect.right().min(width as i32) {
            img.set_pixel(x as usize, y as usize, fg);
        }
    }
    img
}

/// Intersection-over-union of two boxes.
pub fn iou(a: &CropBox, b: &CropBox) -> f64 {
    let ix = (a.right().min(b.right()) - a.x.max(b.x)).max(0) as i64;
    let iy = (a.bottom().min(b.bottom()) - a.y.max(b.y)).max(0) as i64;
    let inter = ix * iy;
    let union = a.area() + b.area() - inter;
    if union == 0 {
        return 0.0;
    }
    inter as f64 / union as f64
}
