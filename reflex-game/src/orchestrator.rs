use anyhow::Result;
use rand::Rng;
use reflex_core::TRIAL_COUNT;
use std::convert::Infallible;

use crate::aggregator::{RoundSummary, aggregate, signal_band};
use crate::board::Board;
use crate::config::GameConfig;
use crate::controller::TrialController;

pub const CONGRATULATIONS: &str = "Congratulations! Press the blue PB to restart...";

/// Ties greeting, rounds, scoring and the restart screen together.
pub struct Orchestrator<'a, R: Rng> {
    board: Board<'a>,
    controller: TrialController<R>,
    config: GameConfig,
    rounds_played: usize,
}

impl<'a, R: Rng> Orchestrator<'a, R> {
    pub fn new(config: GameConfig, board: Board<'a>, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            controller: TrialController::new(&config, rng),
            board,
            config,
            rounds_played: 0,
        })
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Plays rounds until the process is stopped. Only returns when a peripheral fails.
    pub fn run(&mut self) -> Result<Infallible> {
        self.greet()?;
        loop {
            self.play_round()?;
            self.await_restart()?;
        }
    }

    /// One-time welcome; blocks until the operator answers `Y`.
    pub fn greet(&mut self) -> Result<()> {
        self.board
            .console
            .print("\nLet's play a game! (Press Y to continue):\n")?;
        self.board.wait_for_key(b'Y')?;
        self.board.console.print(&format!(
            "\nA letter will be displayed on the screen {TRIAL_COUNT} times.\n"
        ))?;
        self.board.console.print("\nWrite it in the terminal.\n")
    }

    /// Ready prompt, countdown, the trials, and the result screen.
    pub fn play_round(&mut self) -> Result<RoundSummary> {
        self.board
            .console
            .print("\nReady? (Press Y to continue):\n")?;
        self.board.wait_for_key(b'Y')?;
        self.countdown()?;

        let round = self.controller.run_round(&mut self.board)?;
        let summary = aggregate(&round);
        signal_band(&mut *self.board.indicators, summary.band)?;
        self.board.delay.wait(self.config.settle());

        let line = format!("END. Avg: {:6.2}", summary.average.as_secs_f64());
        self.board.display.clear()?;
        self.board.display.show(&line, 1, 0)?;
        self.board.console.print(&format!("\n{line}\n"))?;

        self.rounds_played += 1;
        tracing::info!(
            round = self.rounds_played,
            average_ms = summary.average.as_millis() as u64,
            band = ?summary.band,
            correct = summary.correct,
            "round complete"
        );
        Ok(summary)
    }

    /// Scrolls the congratulations banner until the restart signal fires, then clears the display.
    pub fn await_restart(&mut self) -> Result<()> {
        let width = self.config.display_columns;
        for (step, ch) in CONGRATULATIONS.chars().cycle().enumerate() {
            self.board.display.show(" ", 0, (step + 1) % width)?;
            self.board.display.show(ch.encode_utf8(&mut [0; 4]), 0, step % width)?;
            self.board.delay.wait(self.config.marquee_step());
            if self.board.restart.is_pressed()? {
                tracing::debug!(steps = step + 1, "restart requested");
                break;
            }
        }
        self.board.display.clear()
    }

    fn countdown(&mut self) -> Result<()> {
        for n in (1..=self.config.countdown_from).rev() {
            self.board.console.print(&format!("\n{n}\n"))?;
            self.board.delay.wait(self.config.countdown_step());
        }
        Ok(())
    }
}
