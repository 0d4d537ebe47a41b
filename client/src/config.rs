use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use promptcast_battle::BattleConfig;
use serde::{Deserialize, Serialize};

/// Settings for a [`GameClient`](crate::GameClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub battle: BattleConfig,
    /// How long a projectile flies before its attack resolves
    pub flight_ms: u64,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            flight_ms: 1400,
            seed: None,
        }
    }
}

impl ClientConfig {
    /// Load a JSON config file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn flight_duration(&self) -> Duration {
        Duration::from_millis(self.flight_ms)
    }
}
