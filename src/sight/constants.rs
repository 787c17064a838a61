//! Sight constants - all tunable defaults in one place

/// Sight anchors sampled around each cell
pub const EDGE_COUNT: usize = 6;

/// Dead zone of the signed-side test; smaller magnitudes count as on the line
pub const SIDE_EPSILON: f64 = 0.1;

/// Squared distance under which two edge points are the same point
pub const COINCIDENT_DIST_SQ: f64 = 1e-10;

// Grid defaults
pub const DEFAULT_HEX_SIZE: f64 = 1.0;
pub const DEFAULT_MAP_SIZE: i32 = 9;

// Grading by blocked pairs on the best origin edge
pub const PARTIAL_MIN_BLOCKED: usize = 1;
pub const BLOCKED_MIN_BLOCKED: usize = EDGE_COUNT - 1;
