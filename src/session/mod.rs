//! Session - the host-facing side of the sight map
//!
//! A host forwards "cell picked" events here; the session routes them by
//! mode, keeps the current query, and swaps scenario maps in and out.

pub mod mode;
pub mod query;
pub mod scenario;

use std::path::PathBuf;

use glam::DVec2;

use crate::core::config::SightConfig;
use crate::core::error::{LosError, Result};
use crate::grid::{CellKind, HexCoord, HexGrid};
use crate::sight::display::{hex_outline, sight_lines, SightSegment};
use crate::sight::selector::VisibilityResult;

pub use mode::Mode;
pub use query::{LosQuery, SelectionOutcome};
pub use scenario::{load_kind_matrix, parse_kind_matrix, save_kind_matrix, Scenario};

/// What a pick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Ignored,
    Selection(SelectionOutcome),
    KindChanged { coord: HexCoord, kind: CellKind },
}

/// Sight map, current query, and interaction state
#[derive(Debug, Clone)]
pub struct LosSession {
    grid: HexGrid,
    config: SightConfig,
    mode: Mode,
    scenario: Scenario,
    query: LosQuery,
}

impl LosSession {
    /// Start with an empty map sized by the config
    pub fn new(config: SightConfig) -> Result<Self> {
        config.validate()?;
        let grid = HexGrid::new(config.map_size, config.hex_size);
        Ok(Self::with_grid(config, grid))
    }

    pub fn with_grid(config: SightConfig, grid: HexGrid) -> Self {
        Self {
            grid,
            config,
            mode: Mode::default(),
            scenario: Scenario::None,
            query: LosQuery::new(),
        }
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn config(&self) -> &SightConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn query(&self) -> &LosQuery {
        &self.query
    }

    pub fn result(&self) -> Option<&VisibilityResult> {
        self.query.result()
    }

    /// Switch mode; choosing `Los` while already in it toggles line drawing
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == Mode::Los && self.mode == Mode::Los {
            self.config.draw_all_lines = !self.config.draw_all_lines;
            tracing::debug!(draw_all_lines = self.config.draw_all_lines, "Toggled sight lines");
        }
        self.mode = mode;
    }

    /// Cancel the current query
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Handle a pick from the host; `None` means the pick missed the map
    pub fn pick(&mut self, pick: Option<HexCoord>) -> PickOutcome {
        match self.mode {
            Mode::None => PickOutcome::Ignored,
            Mode::Los => {
                PickOutcome::Selection(self.query.select(&self.grid, pick, self.config.side_epsilon))
            }
            Mode::Edit => match pick.and_then(|coord| self.cycle_kind(coord).ok()) {
                Some(outcome) => outcome,
                None => PickOutcome::Ignored,
            },
            Mode::Character => match pick.and_then(|coord| self.toggle_character(coord).ok()) {
                Some(Some(outcome)) => outcome,
                _ => PickOutcome::Ignored,
            },
        }
    }

    /// Advance a cell to the next kind in editing order
    pub fn cycle_kind(&mut self, coord: HexCoord) -> Result<PickOutcome> {
        let kind = self.grid.cell_at_mut(coord)?.cycle_kind();
        self.query.clear();
        tracing::debug!(%coord, ?kind, "Cycled cell kind");
        Ok(PickOutcome::KindChanged { coord, kind })
    }

    /// Place a character on an open cell, or remove one
    ///
    /// `Ok(None)` when the cell holds neither an endpoint kind nor a character.
    pub fn toggle_character(&mut self, coord: HexCoord) -> Result<Option<PickOutcome>> {
        let cell = self.grid.cell_at_mut(coord)?;
        match cell.kind {
            CellKind::Empty | CellKind::Base => cell.place_character(),
            CellKind::Character => cell.restore_prev_kind(),
            CellKind::Wall | CellKind::Obstacle => return Ok(None),
        }
        let kind = cell.kind;
        self.query.clear();
        Ok(Some(PickOutcome::KindChanged { coord, kind }))
    }

    /// Set a cell's kind directly
    pub fn set_kind(&mut self, coord: HexCoord, kind: CellKind) -> Result<()> {
        self.grid.set_kind(coord, kind)?;
        self.query.clear();
        Ok(())
    }

    /// Evaluate a pair directly, bypassing pick handling
    pub fn evaluate(&mut self, origin: HexCoord, destination: HexCoord) -> Option<&VisibilityResult> {
        self.query
            .evaluate(&self.grid, origin, destination, self.config.side_epsilon)
    }

    pub fn try_evaluate(&mut self, origin: HexCoord, destination: HexCoord) -> Result<&VisibilityResult> {
        self.query
            .try_evaluate(&self.grid, origin, destination, self.config.side_epsilon)
    }

    /// Load a scenario's map, replacing the current one
    ///
    /// `Scenario::None` loads an empty map. The current map is kept if
    /// reading or validating the new one fails.
    pub fn load_scenario(&mut self, scenario: Scenario) -> Result<()> {
        match scenario.path(&self.config.scenario_dir) {
            Some(path) => {
                let kinds = load_kind_matrix(&path)?;
                self.grid.rebuild(&kinds)?;
                tracing::info!(scenario = scenario.name(), path = %path.display(), "Loaded scenario");
            }
            None => {
                self.grid = HexGrid::new(self.config.map_size, self.config.hex_size);
                tracing::info!("Cleared map");
            }
        }
        self.scenario = scenario;
        self.query.clear();
        Ok(())
    }

    /// Write the current map back to the active scenario's file
    pub fn save_scenario(&self) -> Result<PathBuf> {
        let path = self.scenario.path(&self.config.scenario_dir).ok_or_else(|| {
            LosError::Config("No scenario selected; nothing to save to".to_string())
        })?;
        save_kind_matrix(&path, &self.grid.kind_matrix())?;
        tracing::info!(scenario = self.scenario.name(), path = %path.display(), "Saved scenario");
        Ok(path)
    }

    /// Lines for the current result, if any
    pub fn sight_lines(&self) -> Vec<SightSegment> {
        self.query
            .result()
            .map(|result| sight_lines(&self.grid, result, self.config.draw_all_lines))
            .unwrap_or_default()
    }

    /// Cell outlines for debug drawing; empty unless debugging is enabled
    pub fn debug_outlines(&self) -> Vec<(DVec2, DVec2)> {
        let mut coords: Vec<HexCoord> = self.grid.cells().map(|cell| cell.coord).collect();
        coords.sort();
        coords
            .into_iter()
            .flat_map(|coord| hex_outline(&self.grid, coord, self.config.debug_enabled))
            .collect()
    }
}
