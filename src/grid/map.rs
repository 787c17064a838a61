//! Hexagonal sight map
//!
//! The map covers every coordinate within `map_size` steps of the origin.
//! Coordinates outside that region have no cell, and asking for one is an
//! error rather than a clamp.

use ahash::AHashMap;
use glam::DVec2;

use crate::core::error::{LosError, Result};
use crate::grid::cell::{Cell, CellKind};
use crate::grid::hex::HexCoord;
use crate::sight::constants::EDGE_COUNT;

/// Dense kind matrix indexed `[map_size + q][map_size + r]`
pub type KindMatrix = Vec<Vec<CellKind>>;

/// The full sight map
#[derive(Debug, Clone)]
pub struct HexGrid {
    cells: AHashMap<HexCoord, Cell>,
    map_size: i32,
    size: f64,
}

impl HexGrid {
    /// Create a map of empty cells
    pub fn new(map_size: i32, size: f64) -> Self {
        Self {
            cells: Self::build_cells(map_size, |_| CellKind::Empty),
            map_size,
            size,
        }
    }

    /// Build a map from a dense kind matrix
    ///
    /// The matrix must be `(2 * map_size + 1)` square. Entries whose
    /// coordinate falls outside the hexagonal region are ignored.
    pub fn load(map_size: i32, size: f64, kinds: &[Vec<CellKind>]) -> Result<Self> {
        Self::check_dimensions(map_size, kinds)?;
        let cells = Self::build_cells(map_size, |coord| Self::matrix_kind(map_size, kinds, coord));
        tracing::info!(map_size, cells = cells.len(), "Loaded sight map");
        Ok(Self {
            cells,
            map_size,
            size,
        })
    }

    /// Replace every cell from a new kind matrix
    ///
    /// The new cell set is built completely before it replaces the old one;
    /// on error the map is left untouched.
    pub fn rebuild(&mut self, kinds: &[Vec<CellKind>]) -> Result<()> {
        Self::check_dimensions(self.map_size, kinds)?;
        let map_size = self.map_size;
        let cells = Self::build_cells(map_size, |coord| Self::matrix_kind(map_size, kinds, coord));
        self.cells = cells;
        tracing::debug!(map_size, "Rebuilt sight map");
        Ok(())
    }

    fn check_dimensions(map_size: i32, kinds: &[Vec<CellKind>]) -> Result<()> {
        let expected = (2 * map_size.max(0) + 1) as usize;
        let rows = kinds.len();
        let cols = kinds.first().map(|row| row.len()).unwrap_or(0);
        if map_size < 0 || rows != expected || kinds.iter().any(|row| row.len() != expected) {
            return Err(LosError::MatrixDimensions {
                expected,
                rows,
                cols,
            });
        }
        Ok(())
    }

    fn matrix_kind(map_size: i32, kinds: &[Vec<CellKind>], coord: HexCoord) -> CellKind {
        kinds[(map_size + coord.q) as usize][(map_size + coord.r) as usize]
    }

    fn build_cells(
        map_size: i32,
        kind_at: impl Fn(HexCoord) -> CellKind,
    ) -> AHashMap<HexCoord, Cell> {
        HexCoord::region(map_size)
            .into_iter()
            .map(|coord| (coord, Cell::new(coord, kind_at(coord))))
            .collect()
    }

    pub fn map_size(&self) -> i32 {
        self.map_size
    }

    /// Distance from a cell center to its edge points
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if coordinate is within the hexagonal region
    pub fn in_bounds(&self, coord: HexCoord) -> bool {
        coord.within_radius(self.map_size)
    }

    fn out_of_bounds(&self, coord: HexCoord) -> LosError {
        LosError::OutOfBounds {
            q: coord.q,
            r: coord.r,
            map_size: self.map_size,
        }
    }

    pub fn cell_at(&self, coord: HexCoord) -> Result<&Cell> {
        self.cells.get(&coord).ok_or_else(|| self.out_of_bounds(coord))
    }

    pub fn cell_at_mut(&mut self, coord: HexCoord) -> Result<&mut Cell> {
        let err = self.out_of_bounds(coord);
        self.cells.get_mut(&coord).ok_or(err)
    }

    pub fn kind_at(&self, coord: HexCoord) -> Result<CellKind> {
        self.cell_at(coord).map(|cell| cell.kind)
    }

    /// Set the kind of a cell; the remembered previous kind follows it
    pub fn set_kind(&mut self, coord: HexCoord, kind: CellKind) -> Result<()> {
        let cell = self.cell_at_mut(coord)?;
        cell.kind = kind;
        cell.prev_kind = kind;
        Ok(())
    }

    /// Iterate over every cell (unordered)
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn plane_center(&self, coord: HexCoord) -> DVec2 {
        coord.plane_center(self.size)
    }

    pub fn edge_point(&self, coord: HexCoord, index: usize) -> DVec2 {
        coord.edge_point(index, self.size)
    }

    pub fn edge_points(&self, coord: HexCoord) -> [DVec2; EDGE_COUNT] {
        coord.edge_points(self.size)
    }

    /// Dense kind matrix, the inverse of [`HexGrid::load`]
    ///
    /// Entries outside the hexagonal region are `Empty`.
    pub fn kind_matrix(&self) -> KindMatrix {
        let side = (2 * self.map_size + 1) as usize;
        let mut kinds = vec![vec![CellKind::Empty; side]; side];
        for cell in self.cells.values() {
            let i = (self.map_size + cell.coord.q) as usize;
            let j = (self.map_size + cell.coord.r) as usize;
            kinds[i][j] = cell.kind;
        }
        kinds
    }

    /// Count cells of a given kind
    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.cells.values().filter(|cell| cell.kind == kind).count()
    }
}
