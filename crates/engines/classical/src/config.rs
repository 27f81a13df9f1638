//! Engine configuration loaded from TOML.
//!
//! ```toml
//! [piece_values]
//! pawn = 100
//! queen = 900   # unspecified kinds keep their defaults
//! ```

use std::path::{Path, PathBuf};

use chess_core::PieceKind;
use serde::Deserialize;
use thiserror::Error;

use crate::eval::{PieceValues, Score};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("piece value for {kind:?} must be within 1..=10000, got {value}")]
    InvalidPieceValue { kind: PieceKind, value: Score },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub piece_values: PieceValues,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.piece_values.first_out_of_range() {
            Some((kind, value)) => Err(ConfigError::InvalidPieceValue { kind, value }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
