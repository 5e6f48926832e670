// Timing guard for the demo scenes
use std::time::{Duration, Instant};

use tracing::info;

/// Logs how long a scope took when it ends.
///
/// Call [`Timer::stop`] to read the duration out early; otherwise the drop
/// logs it.
pub struct Timer<'a> {
    name: &'a str,
    start: Instant,
    reported: bool,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Self {
        Timer {
            name,
            start: Instant::now(),
            reported: false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn stop(mut self) -> Duration {
        let elapsed = self.report();
        self.reported = true;
        elapsed
    }

    fn report(&self) -> Duration {
        let elapsed = self.start.elapsed();
        info!(timer = self.name, ?elapsed, "timer finished");
        elapsed
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        if !self.reported {
            self.report();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_stop_returns_at_least_elapsed_work() {
        let timer = Timer::new("sleep");
        thread::sleep(Duration::from_millis(5));
        let elapsed = timer.stop();
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let timer = Timer::new("monotonic");
        let first = timer.elapsed();
        let second = timer.elapsed();
        assert!(second >= first);
    }
}
