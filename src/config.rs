//! Tower configuration file handling
//!
//! Settings live in a small JSON document:
//!
//! ```json
//! { "difficulty": 3, "stacking_rule": "strict", "start_peg": true }
//! ```
//!
//! Missing fields fall back to [`TowerConfig::default`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{HanoiError, Result};
use crate::level::StackingRule;
use crate::tower::{MAX_DIFFICULTY, Tower};

/// Settings needed to build a tower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerConfig {
    pub difficulty: u8,
    pub stacking_rule: StackingRule,
    /// Populate the tower with every disk on creation
    pub start_peg: bool,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            difficulty: 3,
            stacking_rule: StackingRule::default(),
            start_peg: true,
        }
    }
}

impl TowerConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        debug!(path = ?path.as_ref(), "Saved tower configuration");
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;

        debug!(?config, "Loaded tower configuration");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.difficulty > MAX_DIFFICULTY {
            return Err(HanoiError::config(format!(
                "Difficulty must be between 0 and {} (got {})",
                MAX_DIFFICULTY, self.difficulty
            )));
        }

        Ok(())
    }

    /// Build the tower this configuration describes
    pub fn build(&self) -> Result<Tower> {
        let mut tower = Tower::with_rule(self.difficulty, self.stacking_rule)?;
        if self.start_peg {
            tower.initialize_as_start_peg()?;
        }
        Ok(tower)
    }
}
