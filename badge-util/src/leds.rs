// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Thermometer-coded status LED bars (level and power-up indicators).

use embedded_hal::digital::OutputPin;

/// Lines in each indicator bar.
pub const INDICATOR_COUNT: usize = 4;

/// Light the lowest `n` lines. Out-of-range values light nothing.
pub fn thermometer(n: u8) -> [bool; INDICATOR_COUNT] {
    let lit = if (n as usize) <= INDICATOR_COUNT {
        n as usize
    } else {
        0
    };
    core::array::from_fn(|i| i < lit)
}

/// Player level shown on the level bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    L0,
    L1,
    L2,
    L3,
    L4,
}

impl Level {
    /// Unknown ordinals fall back to [`Level::L0`].
    pub fn from_ordinal(n: u8) -> Self {
        match n {
            1 => Level::L1,
            2 => Level::L2,
            3 => Level::L3,
            4 => Level::L4,
            _ => Level::L0,
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn pattern(self) -> [bool; INDICATOR_COUNT] {
        thermometer(self.ordinal())
    }
}

/// Active power-up strength shown on the power-up bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerUp {
    #[default]
    P0,
    P1,
    P2,
    P3,
    P4,
}

impl PowerUp {
    /// Unknown ordinals fall back to [`PowerUp::P0`].
    pub fn from_ordinal(n: u8) -> Self {
        match n {
            1 => PowerUp::P1,
            2 => PowerUp::P2,
            3 => PowerUp::P3,
            4 => PowerUp::P4,
            _ => PowerUp::P0,
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn pattern(self) -> [bool; INDICATOR_COUNT] {
        thermometer(self.ordinal())
    }
}

/// Four active-low LED lines, lowest ordinal first.
pub struct IndicatorBar<P> {
    pins: [P; INDICATOR_COUNT],
}

impl<P: OutputPin> IndicatorBar<P> {
    pub fn new(pins: [P; INDICATOR_COUNT]) -> Self {
        Self { pins }
    }

    pub fn release(self) -> [P; INDICATOR_COUNT] {
        self.pins
    }

    pub fn show(&mut self, pattern: [bool; INDICATOR_COUNT]) {
        for (pin, lit) in self.pins.iter_mut().zip(pattern) {
            if lit {
                pin.set_low().ok();
            } else {
                pin.set_high().ok();
            }
        }
    }

    pub fn show_level(&mut self, level: Level) {
        self.show(level.pattern());
    }

    pub fn show_power_up(&mut self, power_up: PowerUp) {
        self.show(power_up.pattern());
    }

    pub fn clear(&mut self) {
        self.show([false; INDICATOR_COUNT]);
    }
}
