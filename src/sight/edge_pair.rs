//! Obstruction test for a single pair of edge points
//!
//! A blocking cell stops the sight line `a -> b` when its center and at least
//! one of its edge points project onto the segment, and its edge points fall
//! on both sides of the line. A cell entirely on one side never blocks, even
//! when it touches the line.

use glam::DVec2;

use crate::grid::{Cell, HexCoord, HexGrid};
use crate::sight::constants::EDGE_COUNT;
use crate::sight::geometry::{coincident, within_span, Side};

/// How a candidate cell relates to one sight line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateVerdict {
    /// Center or every edge point projects outside the segment
    OutOfSpan,
    /// All classified edge points are on one side (or on the line)
    OneSided,
    /// Edge points on both sides
    Straddles,
}

impl CandidateVerdict {
    pub fn blocks(&self) -> bool {
        matches!(self, CandidateVerdict::Straddles)
    }
}

/// Classify a cell (given by center and edge points) against the line `a -> b`
///
/// Edge points coinciding with `a` or `b` are left out of the side tally.
pub fn classify_candidate(
    center: DVec2,
    edges: &[DVec2; EDGE_COUNT],
    a: DVec2,
    b: DVec2,
    epsilon: f64,
) -> CandidateVerdict {
    if !within_span(a, b, center) {
        return CandidateVerdict::OutOfSpan;
    }
    if !edges.iter().any(|&edge| within_span(a, b, edge)) {
        return CandidateVerdict::OutOfSpan;
    }

    let mut left = 0;
    let mut right = 0;
    for &edge in edges {
        if coincident(edge, a) || coincident(edge, b) {
            continue;
        }
        match Side::of(a, b, edge, epsilon) {
            Side::Left => left += 1,
            Side::Right => right += 1,
            Side::OnLine => {}
        }
    }

    if left > 0 && right > 0 {
        CandidateVerdict::Straddles
    } else {
        CandidateVerdict::OneSided
    }
}

/// Edge-pair obstruction tests between one origin and one destination
#[derive(Debug, Clone, Copy)]
pub struct EdgePairTest<'a> {
    grid: &'a HexGrid,
    origin: HexCoord,
    destination: HexCoord,
    epsilon: f64,
}

impl<'a> EdgePairTest<'a> {
    pub fn new(grid: &'a HexGrid, origin: HexCoord, destination: HexCoord, epsilon: f64) -> Self {
        Self {
            grid,
            origin,
            destination,
            epsilon,
        }
    }

    fn is_candidate(&self, cell: &Cell) -> bool {
        cell.coord != self.origin && cell.coord != self.destination && cell.blocks_sight()
    }

    fn endpoints(&self, origin_edge: usize, dest_edge: usize) -> (DVec2, DVec2) {
        (
            self.grid.edge_point(self.origin, origin_edge),
            self.grid.edge_point(self.destination, dest_edge),
        )
    }

    /// Is the line from `origin_edge` to `dest_edge` blocked by any cell?
    ///
    /// Stops at the first straddling cell.
    pub fn is_blocked(&self, origin_edge: usize, dest_edge: usize) -> bool {
        let (a, b) = self.endpoints(origin_edge, dest_edge);
        self.grid
            .cells()
            .filter(|cell| self.is_candidate(cell))
            .any(|cell| {
                let center = self.grid.plane_center(cell.coord);
                let edges = self.grid.edge_points(cell.coord);
                classify_candidate(center, &edges, a, b, self.epsilon).blocks()
            })
    }

    /// Every cell that blocks the line, sorted by coordinate
    pub fn blockers(&self, origin_edge: usize, dest_edge: usize) -> Vec<HexCoord> {
        let (a, b) = self.endpoints(origin_edge, dest_edge);
        let mut found: Vec<HexCoord> = self
            .grid
            .cells()
            .filter(|cell| self.is_candidate(cell))
            .filter(|cell| {
                let center = self.grid.plane_center(cell.coord);
                let edges = self.grid.edge_points(cell.coord);
                classify_candidate(center, &edges, a, b, self.epsilon).blocks()
            })
            .map(|cell| cell.coord)
            .collect();
        found.sort();
        found
    }
}

/// Is sight from `origin`'s `origin_edge` to `destination`'s `dest_edge` blocked?
pub fn is_edge_pair_blocked(
    grid: &HexGrid,
    origin: HexCoord,
    origin_edge: usize,
    destination: HexCoord,
    dest_edge: usize,
    epsilon: f64,
) -> bool {
    EdgePairTest::new(grid, origin, destination, epsilon).is_blocked(origin_edge, dest_edge)
}
