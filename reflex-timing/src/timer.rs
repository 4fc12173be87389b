use std::time::{Duration, Instant};

/// Trait for monotonic high-precision timers
pub trait Timer: Clone + Send + Sync {
    type Timestamp: Copy + Clone + Send + Sync;
    fn now(&self) -> Self::Timestamp;
    fn elapsed(&self, ts: Self::Timestamp) -> Duration;
    fn sleep(&self, d: Duration);
}

/// Blocking delay capability. The calling context is suspended until `d` has passed.
pub trait DelaySource {
    fn wait(&mut self, d: Duration);
}

#[derive(Debug, Clone)]
pub struct HighPrecisionTimer {
    pub start: Instant,
}

impl Timer for HighPrecisionTimer {
    type Timestamp = u64;
    fn now(&self) -> u64 {
        self.start.elapsed().as_nanos() as u64
    }
    fn elapsed(&self, ts: u64) -> Duration {
        Duration::from_nanos(self.now().saturating_sub(ts))
    }
    fn sleep(&self, d: Duration) {
        self.high_precision_sleep(d)
    }
}

impl DelaySource for HighPrecisionTimer {
    fn wait(&mut self, d: Duration) {
        self.high_precision_sleep(d)
    }
}

impl HighPrecisionTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn high_precision_sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        #[cfg(target_os = "linux")]
        self.linux_sleep(duration);
        #[cfg(not(target_os = "linux"))]
        std::thread::sleep(duration);
    }

    #[cfg(target_os = "linux")]
    fn linux_sleep(&self, duration: Duration) {
        use libc::{clock_nanosleep, timespec, CLOCK_MONOTONIC, EINTR, TIMER_ABSTIME};

        // Absolute deadline so that a signal interruption resumes toward the same instant.
        let mut deadline = timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        unsafe {
            libc::clock_gettime(CLOCK_MONOTONIC, &mut deadline);
        }
        let total_nsec = deadline.tv_nsec as u64 + duration.subsec_nanos() as u64;
        deadline.tv_sec += duration.as_secs() as libc::time_t
            + (total_nsec / 1_000_000_000) as libc::time_t;
        deadline.tv_nsec = (total_nsec % 1_000_000_000) as libc::c_long;

        loop {
            let rc = unsafe {
                clock_nanosleep(CLOCK_MONOTONIC, TIMER_ABSTIME, &deadline, std::ptr::null_mut())
            };
            if rc != EINTR {
                break;
            }
        }
    }
}

impl Default for HighPrecisionTimer {
    fn default() -> Self {
        Self::new()
    }
}
