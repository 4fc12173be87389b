use anyhow::{Context, Result, anyhow};
use rand::Rng;
use reflex_core::{Round, TRIAL_COUNT, TrialResult, TrialState};
use std::time::Duration;

use crate::board::Board;
use crate::config::GameConfig;
use crate::generator::SymbolGenerator;

pub const FAILURE_MESSAGE: &str = "Nope :(";

/// Runs the trials of a round, one blocking state machine pass per trial.
pub struct TrialController<R: Rng> {
    generator: SymbolGenerator<R>,
    penalty: Duration,
    max_pre_delay: Duration,
    state: TrialState,
    trial_number: usize,
}

impl<R: Rng> TrialController<R> {
    pub fn new(config: &GameConfig, rng: R) -> Self {
        Self {
            generator: SymbolGenerator::new(rng),
            penalty: config.penalty(),
            max_pre_delay: config.max_pre_delay(),
            state: TrialState::Idle,
            trial_number: 0,
        }
    }

    pub fn state(&self) -> TrialState {
        self.state
    }

    /// Index of the trial in progress (or next to run) within the current round.
    pub fn trial_number(&self) -> usize {
        self.trial_number
    }

    /// Runs exactly [`TRIAL_COUNT`] trials.
    pub fn run_round(&mut self, board: &mut Board<'_>) -> Result<Round> {
        self.trial_number = 0;
        let mut results = Vec::with_capacity(TRIAL_COUNT);
        while self.trial_number < TRIAL_COUNT {
            results.push(self.run_trial(board)?);
            self.trial_number += 1;
        }
        results
            .try_into()
            .map_err(|r: Vec<TrialResult>| anyhow!("round finished with {} trials", r.len()))
    }

    /// Reveals one symbol after the pre-delay and times the operator's answer.
    ///
    /// The machine is back in [`TrialState::Idle`] once the result is returned.
    pub fn run_trial(&mut self, board: &mut Board<'_>) -> Result<TrialResult> {
        // Left mid-trial when a collaborator failed.
        if self.state != TrialState::Idle {
            self.transition(TrialState::Idle);
        }
        let target = self
            .generator
            .next()
            .context("symbol generator ran dry")?;

        board.display.clear()?;
        self.transition(TrialState::AwaitingPreDelay);
        let pre_delay = self.pre_delay(board.analog.read());
        board.delay.wait(pre_delay);

        board.display.show(&format!("Enter letter: {target}"), 0, 0)?;
        board.clock.reset();
        board.clock.start();
        self.transition(TrialState::Timing);

        let entered = board.read_key()?;
        board.clock.stop();
        let elapsed = board.clock.read();
        board.console.print(&format!("{}\n", entered as char))?;

        let result = TrialResult::scored(target, entered, elapsed, self.penalty);
        board.display.clear()?;
        board.display.show(&format_seconds(result.score), 0, 0)?;
        if !result.correct {
            board.display.show(FAILURE_MESSAGE, 1, 0)?;
        }
        self.transition(TrialState::Completed);

        tracing::debug!(
            trial = self.trial_number,
            symbol = %target,
            entered = %result.entered_char(),
            correct = result.correct,
            elapsed_ms = elapsed.as_millis() as u64,
            score_ms = result.score.as_millis() as u64,
            ?pre_delay,
            "trial complete"
        );
        self.transition(TrialState::Idle);
        Ok(result)
    }

    /// Scales an analog level into `[0, max_pre_delay]`. Out-of-range levels are clamped.
    pub fn pre_delay(&self, level: f32) -> Duration {
        let clamped = if level.is_finite() {
            level.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if clamped != level {
            tracing::warn!(level, clamped, "analog level outside [0, 1]");
        }
        self.max_pre_delay.mul_f32(clamped)
    }

    fn transition(&mut self, next: TrialState) {
        tracing::trace!(trial = self.trial_number, from = ?self.state, to = ?next, "trial state");
        self.state = next;
    }
}

/// Elapsed-time line for the display, e.g. `"1.23          s!"`.
pub fn format_seconds(d: Duration) -> String {
    format!("{:<14.2}s!", d.as_secs_f64())
}
