// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Time sources.
//!
//! Anything time dependent reads the time through a [`Clock`] handed in by
//! the rendering layer, which polls egui's frame time once per update.

use std::cell::Cell;

/// Monotonic time source in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Clock backed by the egui frame time of the current update.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    time: f64,
}

impl FrameClock {
    /// Capture the time of the frame being rendered.
    pub fn from_context(ctx: &egui::Context) -> Self {
        Self {
            time: ctx.input(|i| i.time),
        }
    }
}

impl Clock for FrameClock {
    fn now(&self) -> f64 {
        self.time
    }
}

/// Manually advanced clock.
#[derive(Debug, Default)]
pub struct ManualClock {
    time: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            time: Cell::new(start),
        }
    }

    pub fn advance(&self, seconds: f64) {
        self.time.set(self.time.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.time.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(1.0);
        assert_eq!(clock.now(), 1.0);
        clock.advance(0.25);
        assert_eq!(clock.now(), 1.25);
    }
}
