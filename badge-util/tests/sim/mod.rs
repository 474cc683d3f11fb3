// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Simulated clock, button lines and display shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::ops::Range;
use std::rc::Rc;

use badge_util::{Button, ButtonPort};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;

const NANOS_PER_MS: u64 = 1_000_000;

/// Ten simulated minutes; a test running longer is stuck in a wait loop.
const DEADLINE_MS: u64 = 10 * 60 * 1000;

/// Shared simulated time, advanced only by [`SimDelay`].
#[derive(Clone, Default)]
pub struct Clock(Rc<Cell<u64>>);

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ns(&self) -> u64 {
        self.0.get()
    }

    pub fn now_ms(&self) -> u64 {
        self.0.get() / NANOS_PER_MS
    }

    fn advance_ns(&self, ns: u64) {
        self.0.set(self.0.get() + ns);
        assert!(
            self.now_ms() < DEADLINE_MS,
            "simulation ran past its deadline"
        );
    }
}

/// Delay that moves the simulated clock instead of sleeping.
pub struct SimDelay {
    clock: Clock,
}

impl SimDelay {
    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
        }
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(u64::from(ns));
    }
}

/// Buttons asserted during scripted millisecond windows.
pub struct SimButtons {
    clock: Clock,
    presses: Vec<(Button, Range<u64>)>,
}

impl SimButtons {
    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
            presses: Vec::new(),
        }
    }

    /// Hold `button` from `from_ms` (inclusive) to `to_ms` (exclusive).
    pub fn hold(mut self, button: Button, from_ms: u64, to_ms: u64) -> Self {
        self.presses.push((button, from_ms..to_ms));
        self
    }

    /// A 50 ms press starting at `at_ms`.
    pub fn tap(self, button: Button, at_ms: u64) -> Self {
        self.hold(button, at_ms, at_ms + 50)
    }

    /// Tap each button in turn, 200 ms apart, starting at 10 ms.
    pub fn taps(self, buttons: &[Button]) -> Self {
        buttons
            .iter()
            .enumerate()
            .fold(self, |script, (i, &button)| {
                script.tap(button, 10 + 200 * i as u64)
            })
    }
}

impl ButtonPort for SimButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        let now = self.clock.now_ns();
        self.presses.iter().any(|(b, window)| {
            *b == button
                && now >= window.start * NANOS_PER_MS
                && now < window.end * NANOS_PER_MS
        })
    }
}

/// In-memory RGB565 display.
pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, fill: Rgb565) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![fill; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[(y as u32 * self.size.width + x as u32) as usize]
    }

    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.size.width
                && (point.y as u32) < self.size.height
            {
                let idx = (point.y as u32 * self.size.width + point.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}
