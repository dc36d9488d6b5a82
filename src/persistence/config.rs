use super::files::atomic_write;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the config inside the data directory
pub const CONFIG_FILE: &str = "config.json";

/// User preferences stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Minute presets offered on the choose screen
    #[serde(default = "default_quick_spins")]
    pub quick_spins: Vec<u32>,
    #[serde(default = "default_true")]
    pub use_emoji: bool,
    /// Desktop notification when a countdown runs out
    #[serde(default = "default_true")]
    pub notifications: bool,
}

fn default_quick_spins() -> Vec<u32> {
    vec![15, 30, 60]
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quick_spins: default_quick_spins(),
            use_emoji: true,
            notifications: true,
        }
    }
}

impl AppConfig {
    /// Presets with zero entries removed, at most nine (one per digit key)
    pub fn spin_presets(&self) -> Vec<u32> {
        self.quick_spins
            .iter()
            .copied()
            .filter(|m| *m > 0)
            .take(9)
            .collect()
    }
}

/// Load the config, defaults if the file doesn't exist
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

/// Save the config as pretty JSON
pub fn save_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    atomic_write(path, &json)?;
    Ok(())
}
