//! Whole-second stopwatch.

use crate::datetime;

/// Source of the current epoch.
pub trait Clock {
    fn now(&self) -> i64;
}

/// Wall clock via [`datetime::now_epoch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        datetime::now_epoch()
    }
}

/// Start/stop timer with one-second resolution.
///
/// `stop` does not check that `start` was called: stopping a fresh or reset
/// stopwatch gives `elapsed() == stop - 0`.
#[derive(Debug, Default)]
pub struct Stopwatch<C: Clock = SystemClock> {
    start_secs: i64,
    stop_secs: i64,
    running: bool,
    clock: C,
}

impl Stopwatch<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            start_secs: 0,
            stop_secs: 0,
            running: false,
            clock,
        }
    }

    pub fn start(&mut self) {
        self.reset();
        self.start_secs = self.clock.now();
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.stop_secs = self.clock.now();
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.start_secs = 0;
        self.stop_secs = 0;
        self.running = false;
    }

    /// Seconds between the recorded start and stop.
    pub fn elapsed(&self) -> i64 {
        self.stop_secs - self.start_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
