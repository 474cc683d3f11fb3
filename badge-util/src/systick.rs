// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Seconds-since-start time reference.
//!
//! A repeating hardware timer calls a private handler once per second. That
//! handler is the only writer of the counter; everything else reads it via
//! [`seconds`]. With a single writer, a plain load/store increment is enough,
//! which also keeps this usable on cores without atomic read-modify-write.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::SYSTICK_PERIOD_MS;

/// Periodic timer peripheral that can call a handler forever.
pub trait RepeatingTimer {
    type Error;

    fn start_repeating(&mut self, period_ms: u32, handler: fn()) -> Result<(), Self::Error>;
}

/// Monotonic seconds counter.
struct SysTick {
    seconds: AtomicU32,
}

impl SysTick {
    const fn new() -> Self {
        Self {
            seconds: AtomicU32::new(0),
        }
    }

    fn seconds(&self) -> u32 {
        self.seconds.load(Ordering::Acquire)
    }

    fn reset(&self) {
        self.seconds.store(0, Ordering::Release);
    }

    fn tick(&self) {
        let now = self.seconds.load(Ordering::Relaxed);
        self.seconds.store(now.wrapping_add(1), Ordering::Release);
    }
}

static SYSTICK: SysTick = SysTick::new();

fn on_timer_tick() {
    SYSTICK.tick();
}

/// Reset the counter to zero and register the one-second tick handler.
pub fn start<T: RepeatingTimer>(timer: &mut T) -> Result<(), T::Error> {
    SYSTICK.reset();
    timer.start_repeating(SYSTICK_PERIOD_MS, on_timer_tick)
}

/// Seconds elapsed since [`start`].
pub fn seconds() -> u32 {
    SYSTICK.seconds()
}
