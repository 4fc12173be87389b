use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::symbol::Symbol;

/// Trials per round. Aggregation only ever sees exactly this many results.
pub const TRIAL_COUNT: usize = 10;

/// Trial state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrialState {
    #[default]
    Idle,
    AwaitingPreDelay,
    Timing,
    Completed,
}

/// Recorded result per trial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialResult {
    pub target: Symbol,
    /// Normalized byte the operator entered; may lie outside the target alphabet.
    pub entered: u8,
    pub elapsed: Duration,
    pub correct: bool,
    pub score: Duration,
}

impl TrialResult {
    /// Scores a finished trial. An incorrect entry costs `penalty` on top of the elapsed time.
    pub fn scored(target: Symbol, entered: u8, elapsed: Duration, penalty: Duration) -> Self {
        let correct = target.matches(entered);
        let score = if correct { elapsed } else { elapsed + penalty };
        Self {
            target,
            entered,
            elapsed,
            correct,
            score,
        }
    }

    pub fn entered_char(&self) -> char {
        self.entered as char
    }
}

/// One complete round, in trial order.
pub type Round = [TrialResult; TRIAL_COUNT];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::to_upper;

    const PENALTY: Duration = Duration::from_secs(10);

    fn k() -> Symbol {
        Symbol::try_from('K').unwrap()
    }

    #[test]
    fn lowercase_entry_counts_after_normalization() {
        let elapsed = Duration::from_millis(830);
        let result = TrialResult::scored(k(), to_upper(b'k'), elapsed, PENALTY);
        assert!(result.correct);
        assert_eq!(result.score, elapsed);
    }

    #[test]
    fn wrong_entry_adds_penalty() {
        let elapsed = Duration::from_millis(1200);
        let result = TrialResult::scored(k(), b'L', elapsed, PENALTY);
        assert!(!result.correct);
        assert_eq!(result.score, elapsed + PENALTY);
        assert_eq!(result.entered_char(), 'L');
    }

    #[test]
    fn non_printable_entry_is_a_plain_mismatch() {
        let result = TrialResult::scored(k(), 0x1B, Duration::ZERO, PENALTY);
        assert!(!result.correct);
        assert_eq!(result.score, PENALTY);
    }

    #[test]
    fn score_never_below_elapsed() {
        for entered in [b'K', b'X', b'0'] {
            let elapsed = Duration::from_millis(42);
            let result = TrialResult::scored(k(), entered, elapsed, PENALTY);
            assert!(result.score >= result.elapsed);
        }
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = TrialResult::scored(k(), b'#', Duration::from_millis(640), PENALTY);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["target"], "K");
        assert_eq!(json["entered"], 35);
        assert_eq!(json["correct"], false);
        assert_eq!(json["score"]["secs"], 10);
        let back: TrialResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn default_state_is_idle() {
        assert_eq!(TrialState::default(), TrialState::Idle);
    }
}
