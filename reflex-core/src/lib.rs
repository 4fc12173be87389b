pub mod band;
pub mod peripherals;
pub mod symbol;
pub mod trial;

pub use band::{Indicator, PerformanceBand};
pub use peripherals::{AnalogSource, DisplaySink, IndicatorSet, InputSource, RestartSignal, TextSink};
pub use symbol::{ALPHABET, ALPHABET_LEN, Symbol, is_printable, normalize_input, to_upper};
pub use trial::{Round, TRIAL_COUNT, TrialResult, TrialState};
