//! Capabilities the game needs from its board.
//!
//! Every method that "waits" blocks the calling context until its condition
//! holds; none of them time out.

use anyhow::Result;

use crate::band::Indicator;

/// Character stream typed by the operator.
pub trait InputSource {
    /// Blocks for the next raw byte. `0` means nothing is available yet.
    fn read(&mut self) -> Result<u8>;
}

/// Character display addressed by row and column.
pub trait DisplaySink {
    fn show(&mut self, text: &str, row: usize, col: usize) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// One-way console echo.
pub trait TextSink {
    fn print(&mut self, text: &str) -> Result<()>;
}

/// Analog level, conventionally in `[0, 1]`.
pub trait AnalogSource {
    fn read(&mut self) -> f32;
}

/// Operator restart request, sampled by polling.
pub trait RestartSignal {
    fn is_pressed(&mut self) -> Result<bool>;
}

/// Independent on/off lamps.
pub trait IndicatorSet {
    fn set(&mut self, indicator: Indicator, on: bool) -> Result<()>;
}
