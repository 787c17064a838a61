//! Hexsight - edge-sampled line of sight on hexagonal grids

pub mod core;
pub mod grid;
pub mod session;
pub mod sight;
