//! Time-gated console progress for the lockstep walk

use std::time::{Duration, Instant};

use crate::cli::output;
use crate::domain::ProgressReporter;

/// Prints at most one progress line per `interval`.
#[derive(Debug)]
pub struct ConsoleProgress {
    interval: Duration,
    expected: Option<u64>,
    last: Instant,
}

impl ConsoleProgress {
    pub fn new(interval: Duration, expected: Option<u64>) -> Self {
        Self {
            interval,
            expected,
            last: Instant::now(),
        }
    }

    /// True (and the clock restarts) once the interval has passed since the last line.
    fn due(&mut self) -> bool {
        if self.last.elapsed() < self.interval {
            return false;
        }
        self.last = Instant::now();
        true
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&mut self, jumps: u64) {
        if self.due() {
            output::progress(jumps, self.expected);
        }
    }
}
