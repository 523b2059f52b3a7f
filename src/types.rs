use serde::{Deserialize, Serialize};

/// A pixel coordinate in source-image space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Axis-aligned rectangle in source-image pixel coordinates.
///
/// Boxes produced mid-pipeline may extend past the image bounds (padding is
/// applied before the final clamp), but `w` and `h` are never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl CropBox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Full-frame box for an image of the given dimensions.
    pub fn full_frame(width: usize, height: usize) -> Self {
        Self {
            x: 0,
            y: 0,
            w: width as i32,
            h: height as i32,
        }
    }

    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// X coordinate one past the right edge.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Y coordinate one past the bottom edge.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}
