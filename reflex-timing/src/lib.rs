pub mod stopwatch;
pub mod timer;

pub use stopwatch::{Clock, Stopwatch};
pub use timer::{DelaySource, HighPrecisionTimer, Timer};
