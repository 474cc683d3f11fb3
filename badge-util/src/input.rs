// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Polled, debounced button reading with optional long-press detection.
//!
//! Every call blocks on the injected delay. Worst case for
//! [`InputReader::read_button`] is roughly `debounce_ms + long_press_ms`, so
//! never call it from an interrupt handler.

use embedded_hal::delay::DelayNs;

use crate::button::{Button, ButtonPort, ButtonReading};
use crate::config::{InputTiming, BUTTON_POLL_MS};

/// Time a button has been held, saturating at `u32::MAX` ms.
#[derive(Debug, Default, Clone, Copy)]
struct HoldTimer {
    held_ms: u32,
}

impl HoldTimer {
    fn advance(&mut self, ms: u32) {
        self.held_ms = self.held_ms.saturating_add(ms);
    }

    fn exceeds(&self, threshold_ms: u32) -> bool {
        self.held_ms > threshold_ms
    }
}

/// Reads the button port, sleeping on `D` between samples.
pub struct InputReader<P, D> {
    port: P,
    delay: D,
    timing: InputTiming,
}

impl<P: ButtonPort, D: DelayNs> InputReader<P, D> {
    pub fn new(port: P, delay: D) -> Self {
        Self::with_timing(port, delay, InputTiming::default())
    }

    pub fn with_timing(port: P, delay: D, timing: InputTiming) -> Self {
        Self {
            port,
            delay,
            timing,
        }
    }

    pub fn timing(&self) -> InputTiming {
        self.timing
    }

    /// Give back the port and delay.
    pub fn release(self) -> (P, D) {
        (self.port, self.delay)
    }

    /// Scan the buttons in priority order and report the first debounced press.
    ///
    /// With `wait_for_long_press`, block while the winning button stays down
    /// and flag the reading once the hold exceeds `long_press_ms`.
    pub fn read_button(&mut self, wait_for_long_press: bool) -> ButtonReading {
        for button in Button::ALL {
            if !self.port.is_pressed(button) {
                continue;
            }

            self.delay.delay_ms(self.timing.debounce_ms);
            if !self.port.is_pressed(button) {
                continue;
            }

            if wait_for_long_press && self.hold_exceeds_threshold(button) {
                return ButtonReading::long(button);
            }
            return ButtonReading::pressed(button);
        }

        ButtonReading::NONE
    }

    fn hold_exceeds_threshold(&mut self, button: Button) -> bool {
        let mut hold = HoldTimer::default();
        while self.port.is_pressed(button) {
            self.delay.delay_ms(BUTTON_POLL_MS);
            hold.advance(BUTTON_POLL_MS);
            if hold.exceeds(self.timing.long_press_ms) {
                return true;
            }
        }
        false
    }

    /// Block until `button` is pressed (debounced) and then released.
    pub fn wait_for_press(&mut self, button: Button) {
        loop {
            if self.port.is_pressed(button) {
                self.delay.delay_ms(self.timing.debounce_ms);
                if self.port.is_pressed(button) {
                    while self.port.is_pressed(button) {
                        self.delay.delay_ms(BUTTON_POLL_MS);
                    }
                    return;
                }
            }
            self.delay.delay_ms(BUTTON_POLL_MS);
        }
    }

    /// Block until the reader stops reporting `button`.
    pub fn wait_release(&mut self, button: Button) {
        while self.read_button(false).button() == Some(button) {}
    }

    pub fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_timer_saturates() {
        let mut hold = HoldTimer {
            held_ms: u32::MAX - 1,
        };
        hold.advance(BUTTON_POLL_MS);
        hold.advance(BUTTON_POLL_MS);

        assert_eq!(hold.held_ms, u32::MAX);
        assert!(!hold.exceeds(u32::MAX));
        assert!(hold.exceeds(u32::MAX - 1));
    }

    #[test]
    fn test_hold_timer_strictly_exceeds() {
        let mut hold = HoldTimer::default();
        hold.advance(100);
        assert!(!hold.exceeds(100));
        hold.advance(1);
        assert!(hold.exceeds(100));
    }
}
