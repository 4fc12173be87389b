use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::time::Duration;

/// Longest accepted duration setting, one day.
pub const MAX_DURATION_SECS: f64 = 86_400.0;

/// Game timing and display parameters. All durations are in seconds.
///
/// The number of trials per round is fixed at [`reflex_core::TRIAL_COUNT`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub penalty_secs: f64,
    pub max_pre_delay_secs: f64,
    pub countdown_from: u32,
    pub countdown_step_secs: f64,
    pub settle_secs: f64,
    pub marquee_step_secs: f64,
    pub display_columns: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            penalty_secs: 10.0,
            max_pre_delay_secs: 5.0,
            countdown_from: 3,
            countdown_step_secs: 1.0,
            settle_secs: 3.0,
            marquee_step_secs: 0.15,
            display_columns: 16,
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("parsing game config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, secs) in [
            ("penalty_secs", self.penalty_secs),
            ("max_pre_delay_secs", self.max_pre_delay_secs),
            ("countdown_step_secs", self.countdown_step_secs),
            ("settle_secs", self.settle_secs),
            ("marquee_step_secs", self.marquee_step_secs),
        ] {
            ensure!(
                (0.0..=MAX_DURATION_SECS).contains(&secs),
                "{name} must be between 0 and {MAX_DURATION_SECS} seconds, got {secs}"
            );
        }
        ensure!(self.display_columns > 0, "display_columns must be positive");
        Ok(())
    }

    pub fn penalty(&self) -> Duration {
        Duration::from_secs_f64(self.penalty_secs)
    }

    pub fn max_pre_delay(&self) -> Duration {
        Duration::from_secs_f64(self.max_pre_delay_secs)
    }

    pub fn countdown_step(&self) -> Duration {
        Duration::from_secs_f64(self.countdown_step_secs)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_secs_f64(self.settle_secs)
    }

    pub fn marquee_step(&self) -> Duration {
        Duration::from_secs_f64(self.marquee_step_secs)
    }
}
