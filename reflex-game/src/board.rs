use anyhow::Result;
use reflex_core::{
    AnalogSource, DisplaySink, IndicatorSet, InputSource, RestartSignal, TextSink, is_printable,
    normalize_input,
};
use reflex_timing::{Clock, DelaySource};

/// Every capability the game drives, injected by the caller.
pub struct Board<'a> {
    pub input: &'a mut dyn InputSource,
    pub display: &'a mut dyn DisplaySink,
    pub console: &'a mut dyn TextSink,
    pub analog: &'a mut dyn AnalogSource,
    pub indicators: &'a mut dyn IndicatorSet,
    pub restart: &'a mut dyn RestartSignal,
    pub clock: &'a mut dyn Clock,
    pub delay: &'a mut dyn DelaySource,
}

impl Board<'_> {
    /// Blocks until the input yields a non-zero byte and returns it case-folded.
    pub fn read_key(&mut self) -> Result<u8> {
        loop {
            if let Some(key) = normalize_input(self.input.read()?) {
                if !is_printable(key) {
                    tracing::debug!(byte = key, "non-printable input passed through");
                }
                return Ok(key);
            }
        }
    }

    /// Blocks until `expected` is entered, discarding anything else.
    pub fn wait_for_key(&mut self, expected: u8) -> Result<()> {
        while self.read_key()? != expected {}
        Ok(())
    }
}
