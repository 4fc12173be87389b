use std::time::Duration;

use crate::timer::Timer;

/// Start/stop elapsed-time measurement.
///
/// Follows the semantics of a board timer peripheral: `read` while running
/// includes the running span, `stop` folds the span into the accumulated
/// total, `reset` zeroes the total without changing the running state.
pub trait Clock {
    fn reset(&mut self);
    fn start(&mut self);
    fn stop(&mut self);
    fn read(&self) -> Duration;
}

#[derive(Clone)]
pub struct Stopwatch<T: Timer> {
    timer: T,
    running_since: Option<T::Timestamp>,
    accumulated: Duration,
}

impl<T: Timer> Stopwatch<T> {
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            running_since: None,
            accumulated: Duration::ZERO,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }
}

impl<T: Timer> Clock for Stopwatch<T> {
    fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        if self.running_since.is_some() {
            self.running_since = Some(self.timer.now());
        }
    }

    fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(self.timer.now());
        }
    }

    fn stop(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += self.timer.elapsed(since);
        }
    }

    fn read(&self) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + self.timer.elapsed(since),
            None => self.accumulated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    /// Timer whose clock only moves when a test advances it.
    #[derive(Clone, Default)]
    struct ManualTimer {
        now_ns: Arc<AtomicU64>,
    }

    impl ManualTimer {
        fn advance(&self, d: Duration) {
            self.now_ns.fetch_add(d.as_nanos() as u64, Ordering::SeqCst);
        }
    }

    impl Timer for ManualTimer {
        type Timestamp = u64;
        fn now(&self) -> u64 {
            self.now_ns.load(Ordering::SeqCst)
        }
        fn elapsed(&self, ts: u64) -> Duration {
            Duration::from_nanos(self.now().saturating_sub(ts))
        }
        fn sleep(&self, d: Duration) {
            self.advance(d);
        }
    }

    #[test]
    fn measures_span_between_start_and_stop() {
        let timer = ManualTimer::default();
        let mut sw = Stopwatch::new(timer.clone());
        sw.reset();
        sw.start();
        timer.advance(Duration::from_millis(1500));
        sw.stop();
        timer.advance(Duration::from_secs(7));
        assert_eq!(sw.read(), Duration::from_millis(1500));
        assert!(!sw.is_running());
    }

    #[test]
    fn read_while_running_includes_current_span() {
        let timer = ManualTimer::default();
        let mut sw = Stopwatch::new(timer.clone());
        sw.start();
        timer.advance(Duration::from_millis(250));
        assert_eq!(sw.read(), Duration::from_millis(250));
        assert!(sw.is_running());
    }

    #[test]
    fn reset_discards_previous_measurement() {
        let timer = ManualTimer::default();
        let mut sw = Stopwatch::new(timer.clone());
        sw.start();
        timer.advance(Duration::from_secs(3));
        sw.stop();

        sw.reset();
        sw.start();
        timer.advance(Duration::from_millis(400));
        sw.stop();
        assert_eq!(sw.read(), Duration::from_millis(400));
    }

    #[test]
    fn stop_then_start_accumulates_without_reset() {
        let timer = ManualTimer::default();
        let mut sw = Stopwatch::new(timer.clone());
        sw.start();
        timer.advance(Duration::from_secs(1));
        sw.stop();
        timer.advance(Duration::from_secs(5));
        sw.start();
        timer.advance(Duration::from_secs(2));
        sw.stop();
        assert_eq!(sw.read(), Duration::from_secs(3));
    }

    #[test]
    fn reset_while_running_restarts_the_span() {
        let timer = ManualTimer::default();
        let mut sw = Stopwatch::new(timer.clone());
        sw.start();
        timer.advance(Duration::from_secs(4));
        sw.reset();
        timer.advance(Duration::from_millis(100));
        assert_eq!(sw.read(), Duration::from_millis(100));
    }
}
