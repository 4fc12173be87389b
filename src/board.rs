use anyhow::{Context, Result};
use reflex_core::{AnalogSource, Indicator, IndicatorSet};
use std::io::Write;

/// Three lamps printed as a status line whenever one changes.
pub struct LedBank<W: Write> {
    lit: [bool; 3],
    out: W,
}

impl<W: Write> LedBank<W> {
    pub fn new(out: W) -> Self {
        Self {
            lit: [false; 3],
            out,
        }
    }

    pub fn is_lit(&self, indicator: Indicator) -> bool {
        self.lit[slot(indicator)]
    }

    fn status_line(&self) -> String {
        let lamps: Vec<String> = Indicator::ALL
            .iter()
            .map(|&i| {
                let mark = if self.is_lit(i) { '*' } else { '.' };
                format!("{:?} {mark}", i).to_lowercase()
            })
            .collect();
        format!("\nLEDs: {}\n", lamps.join("  "))
    }
}

fn slot(indicator: Indicator) -> usize {
    match indicator {
        Indicator::Yellow => 0,
        Indicator::Red => 1,
        Indicator::White => 2,
    }
}

impl<W: Write> IndicatorSet for LedBank<W> {
    fn set(&mut self, indicator: Indicator, on: bool) -> Result<()> {
        let cell = &mut self.lit[slot(indicator)];
        if *cell == on {
            return Ok(());
        }
        *cell = on;
        // Only lamps turning on are announced.
        if on {
            let line = self.status_line();
            self.out
                .write_all(line.as_bytes())
                .and_then(|_| self.out.flush())
                .context("writing LED status")?;
        }
        Ok(())
    }
}

/// Potentiometer stand-in holding a fixed knob position.
pub struct Potentiometer {
    level: f32,
}

impl Potentiometer {
    pub fn new(level: f32) -> Self {
        Self { level }
    }
}

impl AnalogSource for Potentiometer {
    fn read(&mut self) -> f32 {
        self.level
    }
}
