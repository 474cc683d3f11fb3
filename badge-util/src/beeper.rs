// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Piezo beeper driven by bit-banging one output pin.
//!
//! Busy-waits, so the tone is approximate and may sound uneven if the radio
//! stack preempts the core mid-beep.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

pub struct Beeper<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Beeper<P, D> {
    pub fn new(mut pin: P, delay: D) -> Self {
        pin.set_low().ok();
        Self { pin, delay }
    }

    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// Square wave at `frequency_hz` for about `duration_ms`; leaves the pin low.
    pub fn beep(&mut self, duration_ms: u32, frequency_hz: u32) {
        if duration_ms == 0 || frequency_hz == 0 {
            return;
        }

        let half_period_us = (500_000 / frequency_hz).max(1);
        let cycles = u64::from(duration_ms) * u64::from(frequency_hz) / 1000;

        for _ in 0..cycles {
            self.pin.set_high().ok();
            self.delay.delay_us(half_period_us);
            self.pin.set_low().ok();
            self.delay.delay_us(half_period_us);
        }
    }
}
