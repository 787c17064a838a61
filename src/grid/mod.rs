//! Hex grid - axial coordinates, cell kinds, and the sight map

pub mod cell;
pub mod hex;
pub mod map;

pub use cell::{Cell, CellKind};
pub use hex::HexCoord;
pub use map::{HexGrid, KindMatrix};
