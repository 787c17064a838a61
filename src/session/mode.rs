//! Interaction modes for host pick events

use serde::{Deserialize, Serialize};

/// What a picked cell means to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Picks are ignored
    None,
    /// Picks cycle the cell's kind
    Edit,
    /// Picks choose the sight origin and destination
    #[default]
    Los,
    /// Picks place or remove a character
    Character,
}

impl Mode {
    pub fn all() -> [Mode; 4] {
        [Mode::None, Mode::Edit, Mode::Los, Mode::Character]
    }
}
