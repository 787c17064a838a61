//! Best sight line selection
//!
//! Runs the edge-pair test for all 36 combinations between two cells and
//! keeps the origin edge with the fewest blocked destination edges.

use serde::{Deserialize, Serialize};

use crate::core::error::{LosError, Result};
use crate::grid::{HexCoord, HexGrid};
use crate::sight::constants::{BLOCKED_MIN_BLOCKED, EDGE_COUNT, PARTIAL_MIN_BLOCKED};
use crate::sight::edge_pair::EdgePairTest;

/// `blocked[origin_edge][dest_edge]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockedMatrix(pub [[bool; EDGE_COUNT]; EDGE_COUNT]);

impl BlockedMatrix {
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = [[false; EDGE_COUNT]; EDGE_COUNT];
        for (origin_edge, row) in cells.iter_mut().enumerate() {
            for (dest_edge, blocked) in row.iter_mut().enumerate() {
                *blocked = f(origin_edge, dest_edge);
            }
        }
        Self(cells)
    }

    pub fn is_blocked(&self, origin_edge: usize, dest_edge: usize) -> bool {
        self.0[origin_edge][dest_edge]
    }

    pub fn row(&self, origin_edge: usize) -> &[bool; EDGE_COUNT] {
        &self.0[origin_edge]
    }

    /// Blocked destination edges seen from one origin edge
    pub fn row_count(&self, origin_edge: usize) -> usize {
        self.0[origin_edge].iter().filter(|&&b| b).count()
    }

    pub fn total(&self) -> usize {
        (0..EDGE_COUNT).map(|edge| self.row_count(edge)).sum()
    }
}

/// Outcome of picking the best origin edge from a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestEdge {
    pub edge: usize,
    pub blocked_count: usize,
    /// No edge beat the worst case; edge 0 was substituted
    pub fallback_used: bool,
}

/// Pick the origin edge with the fewest blocked pairs
///
/// Only a strictly smaller count replaces the current best, so ties keep the
/// lower edge. If every edge is fully blocked nothing ever improves on the
/// starting count, and edge 0 is used.
pub fn select_best_edge(matrix: &BlockedMatrix) -> BestEdge {
    let mut best: Option<usize> = None;
    let mut best_count = EDGE_COUNT;

    for origin_edge in 0..EDGE_COUNT {
        let count = matrix.row_count(origin_edge);
        if count < best_count {
            best_count = count;
            best = Some(origin_edge);
        }
    }

    match best {
        Some(edge) => BestEdge {
            edge,
            blocked_count: best_count,
            fallback_used: false,
        },
        None => {
            tracing::error!("No origin edge improved on a fully blocked line; using edge 0");
            BestEdge {
                edge: 0,
                blocked_count: best_count,
                fallback_used: true,
            }
        }
    }
}

/// How obstructed the best sight line is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SightGrade {
    /// No blocked pairs on the best edge
    Clear,
    Partial,
    /// Five or more of six pairs blocked
    Blocked,
}

impl SightGrade {
    pub fn from_blocked_count(count: usize) -> Self {
        if count >= BLOCKED_MIN_BLOCKED {
            SightGrade::Blocked
        } else if count >= PARTIAL_MIN_BLOCKED {
            SightGrade::Partial
        } else {
            SightGrade::Clear
        }
    }
}

/// Result of one full evaluation between two cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityResult {
    pub origin: HexCoord,
    pub destination: HexCoord,
    pub blocked: BlockedMatrix,
    pub best_edge: usize,
    pub best_blocked_count: usize,
    pub fallback_used: bool,
}

impl VisibilityResult {
    pub fn grade(&self) -> SightGrade {
        SightGrade::from_blocked_count(self.best_blocked_count)
    }

    /// Blocked flags from the best origin edge to each destination edge
    pub fn best_row(&self) -> &[bool; EDGE_COUNT] {
        self.blocked.row(self.best_edge)
    }
}

/// Evaluate sight between two cells, reporting why an evaluation was skipped
pub fn try_evaluate(
    grid: &HexGrid,
    origin: HexCoord,
    destination: HexCoord,
    epsilon: f64,
) -> Result<VisibilityResult> {
    for coord in [origin, destination] {
        let cell = grid.cell_at(coord)?;
        if !cell.is_valid_endpoint() {
            return Err(LosError::InvalidEndpoint {
                q: coord.q,
                r: coord.r,
                kind: cell.kind,
            });
        }
    }
    if origin == destination {
        return Err(LosError::SameEndpoint {
            q: origin.q,
            r: origin.r,
        });
    }

    let test = EdgePairTest::new(grid, origin, destination, epsilon);
    let blocked = BlockedMatrix::from_fn(|o, d| test.is_blocked(o, d));
    let best = select_best_edge(&blocked);

    tracing::debug!(
        %origin,
        %destination,
        best_edge = best.edge,
        blocked = best.blocked_count,
        total_blocked = blocked.total(),
        "Evaluated sight"
    );

    Ok(VisibilityResult {
        origin,
        destination,
        blocked,
        best_edge: best.edge,
        best_blocked_count: best.blocked_count,
        fallback_used: best.fallback_used,
    })
}

/// Evaluate sight between two cells; `None` when either endpoint is unusable
pub fn evaluate(
    grid: &HexGrid,
    origin: HexCoord,
    destination: HexCoord,
    epsilon: f64,
) -> Option<VisibilityResult> {
    match try_evaluate(grid, origin, destination, epsilon) {
        Ok(result) => Some(result),
        Err(err) => {
            tracing::warn!(%err, "Skipped sight evaluation");
            None
        }
    }
}
