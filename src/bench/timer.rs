//! Scoped elapsed-time measurement
//!
//! A [`Timer`] wraps a monotonic high-resolution clock in the start/stop
//! protocol the benchmark loop needs: one reading per kernel invocation,
//! no accumulation across invocations.

use std::time::Instant;

/// Start/stop timer reporting fractional milliseconds
///
/// # Protocol
///
/// - `start()` resets the previous reading to zero and captures a
///   monotonic timestamp
/// - `stop()` records the duration since that timestamp as the
///   "most recent elapsed" value
///
/// Each start/stop pair is independent; a new pair overwrites the prior
/// reading. Calling `stop()` without a matching `start()` leaves the
/// reading unchanged.
///
/// # Example
///
/// ```rust
/// use lapbench_rs::bench::Timer;
///
/// let mut timer = Timer::new();
/// timer.start();
/// // ... timed work ...
/// timer.stop();
/// assert!(timer.most_recent_elapsed() >= 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer {
    start_time: Option<Instant>,
    most_recent_elapsed: f64,
}

impl Timer {
    /// Create a timer with no reading
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the previous reading and capture the start timestamp
    pub fn start(&mut self) {
        self.most_recent_elapsed = 0.0;
        self.start_time = Some(Instant::now());
    }

    /// Capture the stop timestamp and record the elapsed duration
    ///
    /// The duration is stored in fractional milliseconds.
    pub fn stop(&mut self) {
        if let Some(started) = self.start_time {
            self.most_recent_elapsed = started.elapsed().as_secs_f64() * 1_000.0;
        }
    }

    /// Most recent elapsed duration in milliseconds
    ///
    /// Zero until the first completed start/stop pair.
    pub fn most_recent_elapsed(&self) -> f64 {
        self.most_recent_elapsed
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_new_timer_reads_zero() {
        let timer = Timer::new();
        assert_eq!(timer.most_recent_elapsed(), 0.0);
    }

    #[test]
    fn test_measures_at_least_the_sleep() {
        let mut timer = Timer::new();
        timer.start();
        thread::sleep(Duration::from_millis(10));
        timer.stop();

        assert!(
            timer.most_recent_elapsed() >= 10.0,
            "Elapsed {} ms below the 10 ms sleep",
            timer.most_recent_elapsed()
        );
    }

    #[test]
    fn test_start_resets_previous_reading() {
        let mut timer = Timer::new();
        timer.start();
        thread::sleep(Duration::from_millis(5));
        timer.stop();
        assert!(timer.most_recent_elapsed() > 0.0);

        timer.start();
        assert_eq!(timer.most_recent_elapsed(), 0.0);
    }

    #[test]
    fn test_pairs_do_not_accumulate() {
        let mut timer = Timer::new();

        timer.start();
        thread::sleep(Duration::from_millis(50));
        timer.stop();
        let first = timer.most_recent_elapsed();

        timer.start();
        thread::sleep(Duration::from_millis(1));
        timer.stop();
        let second = timer.most_recent_elapsed();

        // The second reading stands alone; it must not include the first.
        assert!(second < first, "Second reading {} >= first {}", second, first);
    }

    #[test]
    fn test_stop_without_start_is_inert() {
        let mut timer = Timer::new();
        timer.stop();
        assert_eq!(timer.most_recent_elapsed(), 0.0);
    }
}
