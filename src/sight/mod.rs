//! Line of sight between hex cells
//!
//! Sight is sampled between the six edge points of two cells. Each of the 36
//! edge pairs is tested against every blocking cell, and the origin edge with
//! the fewest blocked pairs is reported as the best line.

pub mod constants;
pub mod display;
pub mod edge_pair;
pub mod geometry;
pub mod selector;

pub use constants::*;
pub use display::{hex_outline, sight_lines, SightSegment};
pub use edge_pair::{classify_candidate, is_edge_pair_blocked, CandidateVerdict, EdgePairTest};
pub use geometry::{coincident, signed_side, within_span, Side};
pub use selector::{
    evaluate, select_best_edge, try_evaluate, BestEdge, BlockedMatrix, SightGrade,
    VisibilityResult,
};
