//! Aim ray and segment-vs-rectangle intersection
//!
//! The laser is a segment from the fixed anchor through the pointer,
//! stretched `RAY_EXTENT` times past the pointer so it always crosses the
//! whole play area no matter where the pointer sits.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Rect;
use crate::consts::RAY_EXTENT;

/// The laser segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimRay {
    pub anchor: Vec2,
    pub end: Vec2,
}

impl AimRay {
    pub fn new(anchor: Vec2, pointer: Vec2) -> Self {
        let mut ray = Self { anchor, end: anchor };
        ray.aim_at(pointer);
        ray
    }

    /// Recompute the far endpoint for a new pointer position
    pub fn aim_at(&mut self, pointer: Vec2) {
        let direction = pointer - self.anchor;
        self.end = pointer + direction * RAY_EXTENT;
    }

    pub fn hits(&self, rect: &Rect) -> bool {
        segment_intersects_rect(self.anchor, self.end, rect)
    }
}

/// Does the segment `p0`-`p1` touch the closed rectangle?
///
/// Liang-Barsky clipping. Grazing an edge or corner counts as a hit, a
/// zero-length segment is a point-in-rect test and an empty rectangle never
/// intersects. Endpoints are put in a canonical order first so swapping them
/// gives a bit-identical answer.
pub fn segment_intersects_rect(p0: Vec2, p1: Vec2, rect: &Rect) -> bool {
    if rect.is_empty() {
        return false;
    }

    let (a, b) = if (p0.x, p0.y) <= (p1.x, p1.y) {
        (p0, p1)
    } else {
        (p1, p0)
    };

    let min = rect.min;
    let max = rect.max();

    // Both ends on the same outer side of a slab: trivial reject
    if (a.x < min.x && b.x < min.x)
        || (a.x > max.x && b.x > max.x)
        || (a.y < min.y && b.y < min.y)
        || (a.y > max.y && b.y > max.y)
    {
        return false;
    }
    if rect.contains(a) || rect.contains(b) {
        return true;
    }

    let d = b - a;
    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;

    for (p, q) in [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ] {
        if p == 0.0 {
            // Parallel to this edge and outside its slab
            if q < 0.0 {
                return false;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return false;
        }
    }

    true
}
