use serde::{Deserialize, Serialize};
use std::time::Duration;

const FAST_BELOW: Duration = Duration::from_secs(2);
const MEDIUM_BELOW: Duration = Duration::from_secs(4);

/// Discrete classification of a round average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceBand {
    Fast,
    Medium,
    Slow,
}

impl PerformanceBand {
    /// First match wins: below 2s is Fast, below 4s is Medium, anything else Slow.
    pub fn from_average(average: Duration) -> Self {
        if average < FAST_BELOW {
            PerformanceBand::Fast
        } else if average < MEDIUM_BELOW {
            PerformanceBand::Medium
        } else {
            PerformanceBand::Slow
        }
    }

    pub fn indicator(self) -> Indicator {
        match self {
            PerformanceBand::Fast => Indicator::Yellow,
            PerformanceBand::Medium => Indicator::Red,
            PerformanceBand::Slow => Indicator::White,
        }
    }
}

/// The three band lamps. Independent outputs; exclusivity is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Yellow,
    Red,
    White,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [Indicator::Yellow, Indicator::Red, Indicator::White];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        use PerformanceBand::*;
        assert_eq!(PerformanceBand::from_average(Duration::ZERO), Fast);
        assert_eq!(PerformanceBand::from_average(Duration::from_millis(1999)), Fast);
        assert_eq!(PerformanceBand::from_average(Duration::from_secs(2)), Medium);
        assert_eq!(PerformanceBand::from_average(Duration::from_millis(3999)), Medium);
        assert_eq!(PerformanceBand::from_average(Duration::from_secs(4)), Slow);
        assert_eq!(PerformanceBand::from_average(Duration::from_secs(11)), Slow);
    }

    #[test]
    fn band_serializes_by_name() {
        let json = serde_json::to_string(&PerformanceBand::Slow).unwrap();
        assert_eq!(json, r#""Slow""#);
        let band: PerformanceBand = serde_json::from_str(r#""Fast""#).unwrap();
        assert_eq!(band, PerformanceBand::Fast);
    }

    #[test]
    fn each_band_has_its_own_lamp() {
        assert_eq!(PerformanceBand::Fast.indicator(), Indicator::Yellow);
        assert_eq!(PerformanceBand::Medium.indicator(), Indicator::Red);
        assert_eq!(PerformanceBand::Slow.indicator(), Indicator::White);
    }
}
