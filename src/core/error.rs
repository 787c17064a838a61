use thiserror::Error;

use crate::grid::CellKind;

#[derive(Error, Debug)]
pub enum LosError {
    #[error("Coordinate ({q}, {r}) is outside a map of radius {map_size}")]
    OutOfBounds { q: i32, r: i32, map_size: i32 },

    #[error("Kind matrix must be {expected}x{expected}, got {rows}x{cols}")]
    MatrixDimensions {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Cell ({q}, {r}) of kind {kind:?} cannot be a sight endpoint")]
    InvalidEndpoint { q: i32, r: i32, kind: CellKind },

    #[error("Origin and destination are the same cell ({q}, {r})")]
    SameEndpoint { q: i32, r: i32 },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LosError>;
