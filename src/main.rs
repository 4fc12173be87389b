use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reflex_game::{Board, Orchestrator};
use reflex_timing::{HighPrecisionTimer, Stopwatch};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

mod board;
mod config;
mod console;
mod lcd;

use board::{LedBank, Potentiometer};
use config::AppConfig;
use console::{ConsoleEcho, EnterButton, SerialConsole};
use lcd::LcdEmulator;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is the game console.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    tracing::info!(seed = ?config.seed, potentiometer = config.potentiometer, "starting");

    println!("=== REFLEX: REACTION TIME GAME ===");
    println!("Platform: {}", std::env::consts::OS);
    println!("Architecture: {}", std::env::consts::ARCH);
    println!("Type each letter you see and press Enter. Ctrl+C quits.");

    let lines = console::spawn_line_reader()?;
    let mut serial = SerialConsole::new(Rc::clone(&lines));
    let mut echo = ConsoleEcho::new(std::io::stdout());
    let mut lcd = LcdEmulator::new(config.game.display_columns, std::io::stdout());
    let mut leds = LedBank::new(std::io::stdout());
    let mut pot = Potentiometer::new(config.potentiometer);
    let mut button = EnterButton::new(lines);
    let mut stopwatch = Stopwatch::new(HighPrecisionTimer::new());
    let mut delay = HighPrecisionTimer::new();

    let board = Board {
        input: &mut serial,
        display: &mut lcd,
        console: &mut echo,
        analog: &mut pot,
        indicators: &mut leds,
        restart: &mut button,
        clock: &mut stopwatch,
        delay: &mut delay,
    };

    let mut game = Orchestrator::new(config.game.clone(), board, rng)?;
    match game.run().context("game stopped") {
        Ok(never) => match never {},
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "exiting");
            Err(e)
        }
    }
}
