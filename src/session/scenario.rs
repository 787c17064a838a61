//! Named scenario maps
//!
//! Each scenario is a kind matrix stored as JSON under the configured
//! scenario directory, one file per scenario: `<dir>/<Name>.json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{LosError, Result};
use crate::grid::KindMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Scenario {
    /// No stored map; loads as an empty grid
    #[default]
    None,
    Assault,
    Conquest,
    KingOfTheHill,
    ScorchedEarth,
    Blitz,
    Carnage,
}

impl Scenario {
    pub fn all() -> [Scenario; 7] {
        [
            Scenario::None,
            Scenario::Assault,
            Scenario::Conquest,
            Scenario::KingOfTheHill,
            Scenario::ScorchedEarth,
            Scenario::Blitz,
            Scenario::Carnage,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::None => "None",
            Scenario::Assault => "Assault",
            Scenario::Conquest => "Conquest",
            Scenario::KingOfTheHill => "KingOfTheHill",
            Scenario::ScorchedEarth => "ScorchedEarth",
            Scenario::Blitz => "Blitz",
            Scenario::Carnage => "Carnage",
        }
    }

    /// Where this scenario's map lives, if it has one
    pub fn path(&self, dir: &Path) -> Option<PathBuf> {
        match self {
            Scenario::None => None,
            _ => Some(dir.join(format!("{}.json", self.name()))),
        }
    }
}

impl FromStr for Scenario {
    type Err = LosError;

    fn from_str(s: &str) -> Result<Self> {
        Scenario::all()
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LosError::Config(format!("Unknown scenario: {s}")))
    }
}

/// Parse a kind matrix from JSON text
pub fn parse_kind_matrix(content: &str) -> Result<KindMatrix> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_kind_matrix(path: impl AsRef<Path>) -> Result<KindMatrix> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_kind_matrix(&content)
}

pub fn save_kind_matrix(path: impl AsRef<Path>, kinds: &KindMatrix) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string(kinds)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellKind;

    #[test]
    fn test_scenario_paths() {
        let dir = Path::new("maps");
        assert_eq!(
            Scenario::KingOfTheHill.path(dir),
            Some(PathBuf::from("maps/KingOfTheHill.json"))
        );
        assert_eq!(Scenario::None.path(dir), None);
    }

    #[test]
    fn test_parse_scenario_name() {
        assert_eq!("blitz".parse::<Scenario>().unwrap(), Scenario::Blitz);
        assert_eq!("ScorchedEarth".parse::<Scenario>().unwrap(), Scenario::ScorchedEarth);
        assert!("Skirmish".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_parse_kind_matrix() {
        let kinds = parse_kind_matrix(r#"[["Empty","Wall"],["Base","Character"]]"#).unwrap();
        assert_eq!(kinds[0][1], CellKind::Wall);
        assert_eq!(kinds[1][0], CellKind::Base);
    }

    #[test]
    fn test_parse_kind_matrix_rejects_unknown_kind() {
        let result = parse_kind_matrix(r#"[["Lava"]]"#);
        assert!(matches!(result, Err(LosError::SerdeError(_))));
    }
}
