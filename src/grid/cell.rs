//! Cell kinds and their effect on sight

use serde::{Deserialize, Serialize};

use crate::grid::hex::HexCoord;

/// What occupies a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Base,
    Character,
    Wall,
    Obstacle,
}

impl CellKind {
    /// Editing order; `next` wraps from the last entry back to the first
    pub const CYCLE: [CellKind; 5] = [
        CellKind::Empty,
        CellKind::Base,
        CellKind::Character,
        CellKind::Wall,
        CellKind::Obstacle,
    ];

    /// Does this kind stop a sight line?
    pub fn blocks_sight(&self) -> bool {
        matches!(self, CellKind::Wall | CellKind::Character)
    }

    /// Can a sight line start or end here?
    pub fn is_valid_endpoint(&self) -> bool {
        matches!(self, CellKind::Empty | CellKind::Base)
    }

    fn cycle_index(&self) -> usize {
        Self::CYCLE
            .iter()
            .position(|kind| kind == self)
            .unwrap_or(0)
    }

    /// The kind after this one in editing order
    pub fn next(&self) -> Self {
        Self::CYCLE[(self.cycle_index() + 1) % Self::CYCLE.len()]
    }
}

/// A single cell on the sight map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub coord: HexCoord,
    pub kind: CellKind,
    /// Kind to restore when a character leaves; ignored by sight
    pub prev_kind: CellKind,
}

impl Cell {
    pub fn new(coord: HexCoord, kind: CellKind) -> Self {
        Self {
            coord,
            kind,
            prev_kind: kind,
        }
    }

    pub fn blocks_sight(&self) -> bool {
        self.kind.blocks_sight()
    }

    pub fn is_valid_endpoint(&self) -> bool {
        self.kind.is_valid_endpoint()
    }

    /// Advance to the next kind in editing order
    pub fn cycle_kind(&mut self) -> CellKind {
        self.kind = self.kind.next();
        self.kind
    }

    /// Put a character on this cell, remembering what was underneath
    pub fn place_character(&mut self) {
        self.prev_kind = self.kind;
        self.kind = CellKind::Character;
    }

    pub fn restore_prev_kind(&mut self) {
        self.kind = self.prev_kind;
    }
}
