pub mod config;
pub mod error;

pub use config::SightConfig;
pub use error::{LosError, Result};
