//! Millisecond clocks feeding per-frame deltas

use std::cell::Cell;

use web_time::Instant;

/// Monotonic milliseconds since an arbitrary origin.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by `web_time::Instant`, usable on native and wasm.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

/// Converts clock readings into elapsed time between consecutive frames.
#[derive(Debug)]
pub struct FrameClock<C: Clock> {
    clock: C,
    last_frame: Option<u64>,
}

impl<C: Clock> FrameClock<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_frame: None,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Milliseconds since the previous call; the first frame reports zero.
    pub fn next_frame(&mut self) -> u64 {
        let now = self.clock.now_millis();
        let elapsed = self
            .last_frame
            .map(|last| now.saturating_sub(last))
            .unwrap_or(0);
        self.last_frame = Some(now);
        elapsed
    }

    /// Forgets the previous frame, e.g. after the animation loop was paused.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}
