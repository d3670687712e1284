//! Tick pacing
//!
//! The loop sleeps a fixed delay after every tick. No elapsed-time measurement,
//! no catch-up: a slow tick just makes the game slower.

use std::time::Duration;

/// End-of-tick suspension point
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately and remembers what was asked for
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    pub calls: u64,
    pub total: Duration,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.calls += 1;
        self.total += duration;
    }
}
