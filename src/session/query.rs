//! Origin/destination selection and the last sight result

use crate::core::error::Result;
use crate::grid::{HexCoord, HexGrid};
use crate::sight::selector::{self, VisibilityResult};

/// What a pick did to the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    OriginSelected(HexCoord),
    /// Destination chosen and the pair evaluated
    Evaluated(HexCoord),
    /// Same cell, third pick, unusable cell, or a pick off the map
    Reset,
}

/// Transient sight query between two picked cells
///
/// The result is replaced wholesale on every evaluation and dropped on every
/// reset; it is never patched.
#[derive(Debug, Clone, Default)]
pub struct LosQuery {
    origin: Option<HexCoord>,
    destination: Option<HexCoord>,
    result: Option<VisibilityResult>,
    unresolved_count: u64,
}

impl LosQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(&self) -> Option<HexCoord> {
        self.origin
    }

    pub fn destination(&self) -> Option<HexCoord> {
        self.destination
    }

    pub fn result(&self) -> Option<&VisibilityResult> {
        self.result.as_ref()
    }

    /// Evaluations that had to fall back to edge 0
    pub fn unresolved_count(&self) -> u64 {
        self.unresolved_count
    }

    /// Drop origin, destination, and the last result
    pub fn clear(&mut self) {
        self.origin = None;
        self.destination = None;
        self.result = None;
    }

    fn store(&mut self, result: VisibilityResult) -> &VisibilityResult {
        if result.fallback_used {
            self.unresolved_count += 1;
        }
        self.origin = Some(result.origin);
        self.destination = Some(result.destination);
        self.result.insert(result)
    }

    /// Evaluate a pair directly, reporting why it was rejected
    ///
    /// The query is cleared first, so a rejected pair leaves it empty.
    pub fn try_evaluate(
        &mut self,
        grid: &HexGrid,
        origin: HexCoord,
        destination: HexCoord,
        epsilon: f64,
    ) -> Result<&VisibilityResult> {
        self.clear();
        let result = selector::try_evaluate(grid, origin, destination, epsilon)?;
        Ok(self.store(result))
    }

    /// Evaluate a pair directly; `None` leaves the query cleared
    pub fn evaluate(
        &mut self,
        grid: &HexGrid,
        origin: HexCoord,
        destination: HexCoord,
        epsilon: f64,
    ) -> Option<&VisibilityResult> {
        self.clear();
        let result = selector::evaluate(grid, origin, destination, epsilon)?;
        Some(self.store(result))
    }

    /// Feed one picked cell into the two-step selection
    ///
    /// `None` is a pick that missed the map.
    pub fn select(&mut self, grid: &HexGrid, pick: Option<HexCoord>, epsilon: f64) -> SelectionOutcome {
        let valid = pick.filter(|&coord| {
            grid.cell_at(coord)
                .map(|cell| cell.is_valid_endpoint())
                .unwrap_or(false)
        });

        let Some(coord) = valid else {
            tracing::debug!(?pick, "Pick is not a sight endpoint; resetting query");
            self.clear();
            return SelectionOutcome::Reset;
        };

        match (self.origin, self.destination) {
            (None, _) => {
                self.origin = Some(coord);
                SelectionOutcome::OriginSelected(coord)
            }
            (Some(origin), None) if origin != coord => {
                if self.evaluate(grid, origin, coord, epsilon).is_some() {
                    SelectionOutcome::Evaluated(coord)
                } else {
                    SelectionOutcome::Reset
                }
            }
            _ => {
                self.clear();
                SelectionOutcome::Reset
            }
        }
    }
}
