//! Renderer-free line descriptions for presenting a result
//!
//! The host draws these however it likes; nothing here knows about colors or
//! draw calls.

use glam::DVec2;

use crate::grid::{HexCoord, HexGrid};
use crate::sight::constants::EDGE_COUNT;
use crate::sight::selector::{SightGrade, VisibilityResult};

/// A plane segment with a sight tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SightSegment {
    pub from: DVec2,
    pub to: DVec2,
    pub tone: SightGrade,
}

/// Lines to draw for a result
///
/// With `draw_all_lines`, one segment from the best origin edge to each
/// destination edge, toned `Blocked` or `Clear` per pair. Otherwise a single
/// center-to-center segment toned by the overall grade.
pub fn sight_lines(grid: &HexGrid, result: &VisibilityResult, draw_all_lines: bool) -> Vec<SightSegment> {
    if draw_all_lines {
        let from = grid.edge_point(result.origin, result.best_edge);
        result
            .best_row()
            .iter()
            .enumerate()
            .map(|(dest_edge, &blocked)| SightSegment {
                from,
                to: grid.edge_point(result.destination, dest_edge),
                tone: if blocked {
                    SightGrade::Blocked
                } else {
                    SightGrade::Clear
                },
            })
            .collect()
    } else {
        vec![SightSegment {
            from: grid.plane_center(result.origin),
            to: grid.plane_center(result.destination),
            tone: result.grade(),
        }]
    }
}

/// Outline of a cell through its six edge points, for debug drawing
///
/// Empty unless `debug_enabled`.
pub fn hex_outline(grid: &HexGrid, coord: HexCoord, debug_enabled: bool) -> Vec<(DVec2, DVec2)> {
    if !debug_enabled {
        return Vec::new();
    }
    let points = grid.edge_points(coord);
    (0..EDGE_COUNT)
        .map(|i| (points[i], points[(i + 1) % EDGE_COUNT]))
        .collect()
}
