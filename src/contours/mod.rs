//! Connected-region discovery over a binary edge mask.
//!
//! Scans the mask in row-major order; each unvisited edge pixel seeds a
//! breadth-first flood fill over its 8-connected edge neighbours. The fill
//! uses an explicit queue, so arbitrarily large connected regions cannot
//! overflow the call stack. Every edge pixel ends up in exactly one contour,
//! and for a given mask the contour count and membership are deterministic.
//!
//! Complexity is linear in the number of edge pixels; there is no size cap.

use crate::image::EdgeMask;
use crate::types::Point;
use std::collections::VecDeque;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// One maximal 8-connected set of edge pixels, in visitation order.
///
/// The order reflects the breadth-first fill and carries no geometric
/// meaning. A contour is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Extract all contours of `mask`, ordered by their row-major seed position.
pub fn extract_contours(mask: &EdgeMask) -> Vec<Contour> {
    let w = mask.w;
    let h = mask.h;
    let mut used = vec![0u8; w * h];
    let mut contours = Vec::new();
    let mut frontier: VecDeque<(usize, usize)> = VecDeque::new();

    for seed_y in 0..h {
        for seed_x in 0..w {
            let seed_idx = seed_y * w + seed_x;
            if used[seed_idx] != 0 || mask.data[seed_idx] != EdgeMask::EDGE {
                continue;
            }

            used[seed_idx] = 1;
            frontier.push_back((seed_x, seed_y));
            let mut points = Vec::new();

            while let Some((x, y)) = frontier.pop_front() {
                points.push(Point {
                    x: x as i32,
                    y: y as i32,
                });
                for (dx, dy) in NEIGH_OFFSETS {
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                        continue;
                    }
                    let nidx = ny as usize * w + nx as usize;
                    if used[nidx] != 0 || mask.data[nidx] != EdgeMask::EDGE {
                        continue;
                    }
                    used[nidx] = 1;
                    frontier.push_back((nx as usize, ny as usize));
                }
            }

            contours.push(Contour { points });
        }
    }
    contours
}
