use anyhow::{ensure, Context, Result};
use reflex_game::GameConfig;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_ENV: &str = "REFLEX_CONFIG";

/// Terminal board settings layered over the game parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub game: GameConfig,
    /// Fixed seed for reproducible symbol sequences; OS entropy when absent.
    pub seed: Option<u64>,
    /// Emulated potentiometer position in `[0, 1]`.
    pub potentiometer: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            potentiometer: 0.5,
        }
    }
}

impl AppConfig {
    /// Reads the file named by `REFLEX_CONFIG`, or returns defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("parsing config")?;
        config.game.validate()?;
        ensure!(
            config.potentiometer.is_finite(),
            "potentiometer must be a number"
        );
        Ok(config)
    }
}
