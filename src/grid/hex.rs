//! Hex coordinate system for sight maps (axial coordinates)
//!
//! Cells are flat-topped and laid out on a plane whose vertical axis points
//! "down" the map: `y = -(height * r + height * 0.5 * q)`. Every geometric
//! test in the crate uses this plane.

use std::f64::consts::PI;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::sight::constants::EDGE_COUNT;

/// Axial hex coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Cube coordinate S (derived from q and r)
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Hex steps between two coordinates
    pub fn distance(&self, other: &Self) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Does this coordinate lie inside a hexagonal map of the given radius?
    pub fn within_radius(&self, map_size: i32) -> bool {
        self.q.abs() <= map_size && self.r.abs() <= map_size && (self.q + self.r).abs() <= map_size
    }

    /// Get all 6 neighboring hex coordinates
    pub fn neighbors(&self) -> [HexCoord; 6] {
        [
            HexCoord::new(self.q + 1, self.r),
            HexCoord::new(self.q + 1, self.r - 1),
            HexCoord::new(self.q, self.r - 1),
            HexCoord::new(self.q - 1, self.r),
            HexCoord::new(self.q - 1, self.r + 1),
            HexCoord::new(self.q, self.r + 1),
        ]
    }

    /// All coordinates of a hexagonal map centered on the origin, q-major
    pub fn region(map_size: i32) -> Vec<HexCoord> {
        let mut results = Vec::new();
        for q in -map_size..=map_size {
            for r in -map_size..=map_size {
                let coord = HexCoord::new(q, r);
                if coord.within_radius(map_size) {
                    results.push(coord);
                }
            }
        }
        results
    }

    /// Center of this cell on the plane
    pub fn plane_center(&self, size: f64) -> DVec2 {
        let height = 3.0_f64.sqrt() * size;
        let x = 1.5 * size * self.q as f64;
        let y = height * self.r as f64 + height * 0.5 * self.q as f64;
        DVec2::new(x, -y)
    }

    /// One of the six sight anchors around this cell
    ///
    /// Edge `i` sits at angle `60° * i` from the +X axis, `size` away from the
    /// center. `index` wraps modulo six.
    pub fn edge_point(&self, index: usize, size: f64) -> DVec2 {
        let angle = PI / 180.0 * (60.0 * (index % EDGE_COUNT) as f64);
        self.plane_center(size) + size * DVec2::new(angle.cos(), angle.sin())
    }

    /// All six sight anchors, indexed by edge
    pub fn edge_points(&self, size: f64) -> [DVec2; EDGE_COUNT] {
        std::array::from_fn(|index| self.edge_point(index, size))
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
