//! Sight configuration
//!
//! Every value has a default, so a partial TOML file (or none at all) is
//! enough to run the evaluator.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{LosError, Result};
use crate::sight::constants::{DEFAULT_HEX_SIZE, DEFAULT_MAP_SIZE, SIDE_EPSILON};

/// Configuration for grid geometry, the side test, and host display hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SightConfig {
    /// Distance from a cell center to each of its edge points (plane units)
    pub hex_size: f64,

    /// Radius of the hexagonal map in cells
    pub map_size: i32,

    /// Dead zone of the signed-side test
    ///
    /// Edge points whose cross product with the sight line falls within
    /// `[-side_epsilon, side_epsilon]` count toward neither side.
    pub side_epsilon: f64,

    /// Draw the six lines from the best origin edge instead of a single
    /// center-to-center line
    pub draw_all_lines: bool,

    /// Passed to the host's render step; the evaluator never reads it
    pub debug_enabled: bool,

    /// Directory holding the scenario kind matrices
    pub scenario_dir: PathBuf,
}

impl Default for SightConfig {
    fn default() -> Self {
        Self {
            hex_size: DEFAULT_HEX_SIZE,
            map_size: DEFAULT_MAP_SIZE,
            side_epsilon: SIDE_EPSILON,
            draw_all_lines: true,
            debug_enabled: false,
            scenario_dir: PathBuf::from("data/scenarios"),
        }
    }
}

impl SightConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.hex_size <= 0.0 || !self.hex_size.is_finite() {
            return Err(LosError::Config(format!(
                "hex_size ({}) must be a positive finite number",
                self.hex_size
            )));
        }

        if self.map_size < 0 {
            return Err(LosError::Config(format!(
                "map_size ({}) must not be negative",
                self.map_size
            )));
        }

        if self.side_epsilon < 0.0 || self.side_epsilon.is_nan() {
            return Err(LosError::Config(format!(
                "side_epsilon ({}) must not be negative",
                self.side_epsilon
            )));
        }

        Ok(())
    }
}

/// Parse and validate a config from TOML text
pub fn parse_config(content: &str) -> Result<SightConfig> {
    let config: SightConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load a config file from disk
pub fn load_config(path: impl AsRef<Path>) -> Result<SightConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::info!(path = %path.display(), "Loaded sight config");
    Ok(config)
}
