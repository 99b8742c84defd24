//! Engine configuration loaded from TOML.
//!
//! ```toml
//! level = 4          # difficulty table index, 1-8
//! depth_cap = 3      # upper bound on search depth, whatever the level declares
//! seed = 42          # optional: makes weakened play reproducible
//! log_filter = "heuristic_engine=debug,info"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::difficulty::DifficultyLevel;
use crate::error::{Result, TrainerError};

/// Default ceiling on search depth in plies below the root move.
pub const DEFAULT_DEPTH_CAP: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Difficulty level index (1-8) used until a client picks another
    pub level: u8,
    /// Search depth is `min(level depth, depth_cap)`
    pub depth_cap: u8,
    /// Seed for the move-selection RNG; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            level: 2,
            depth_cap: DEFAULT_DEPTH_CAP,
            seed: None,
            log_filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        DifficultyLevel::get(self.level)?;
        if self.depth_cap == 0 {
            return Err(TrainerError::Config("depth_cap must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The configured difficulty level.
    pub fn difficulty(&self) -> Result<&'static DifficultyLevel> {
        DifficultyLevel::get(self.level)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
