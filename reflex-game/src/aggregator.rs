use anyhow::Result;
use reflex_core::{Indicator, IndicatorSet, PerformanceBand, Round, TRIAL_COUNT};
use serde::Serialize;
use std::time::Duration;

/// Outcome of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub average: Duration,
    pub band: PerformanceBand,
    pub correct: usize,
}

/// Mean score over the round and its band.
pub fn aggregate(round: &Round) -> RoundSummary {
    let total: Duration = round.iter().map(|r| r.score).sum();
    let average = total / TRIAL_COUNT as u32;
    RoundSummary {
        average,
        band: PerformanceBand::from_average(average),
        correct: round.iter().filter(|r| r.correct).count(),
    }
}

/// Lights the band's lamp. All three are cleared first since the outputs are independent.
pub fn signal_band(indicators: &mut dyn IndicatorSet, band: PerformanceBand) -> Result<()> {
    for lamp in Indicator::ALL {
        indicators.set(lamp, false)?;
    }
    indicators.set(band.indicator(), true)
}
