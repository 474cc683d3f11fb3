// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Timing constants, limits and the runtime-tunable knobs built from them.

/// Time a button must stay asserted before it is trusted.
pub const BUTTON_DEBOUNCE_MS: u32 = 20;

/// Hold time beyond which a press is reported as a long press.
pub const BUTTON_LONG_PRESS_MS: u32 = 1000;

/// Sampling interval for every busy-wait on a button line.
pub const BUTTON_POLL_MS: u32 = 1;

/// Repeat-rate limiter after the editor changes a character.
pub const EDIT_SETTLE_MS: u32 = 100;

/// Capacity of an [`EditBuffer`](crate::editor::EditBuffer).
pub const MAX_EDIT_LEN: usize = 32;

pub const FIRST_ALLOWED_CHAR: u8 = b' ';
pub const LAST_ALLOWED_CHAR: u8 = b'~';

/// Period of the seconds counter callback.
pub const SYSTICK_PERIOD_MS: u32 = 1000;

/// Extension of the artwork files shown in the extras menu.
pub const EXTRAS_EXTENSION: &str = "RAW";

/// Base name length of an 8.3 file name.
pub const FILE_NAME_LEN: usize = 8;

const PRINTABLE_FIRST: u8 = 0x20;
const PRINTABLE_LAST: u8 = 0x7E;

/// Debounce and long-press timing used by the input reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputTiming {
    pub debounce_ms: u32,
    pub long_press_ms: u32,
}

impl Default for InputTiming {
    fn default() -> Self {
        Self {
            debounce_ms: BUTTON_DEBOUNCE_MS,
            long_press_ms: BUTTON_LONG_PRESS_MS,
        }
    }
}

/// Closed range of characters the string editor cycles through.
///
/// Bounds are clamped into printable ASCII so every edited buffer is valid
/// UTF-8 and renders with the ASCII mono fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CharRange {
    first: u8,
    last: u8,
}

impl CharRange {
    pub fn new(first: u8, last: u8) -> Self {
        let first = first.clamp(PRINTABLE_FIRST, PRINTABLE_LAST);
        let last = last.clamp(first, PRINTABLE_LAST);
        Self { first, last }
    }

    pub fn first(&self) -> u8 {
        self.first
    }

    pub fn last(&self) -> u8 {
        self.last
    }

    pub fn contains(&self, c: u8) -> bool {
        (self.first..=self.last).contains(&c)
    }

    /// The visible blank: a space when the range allows it, otherwise `first`.
    pub fn blank(&self) -> u8 {
        if self.contains(b' ') {
            b' '
        } else {
            self.first
        }
    }

    /// Map a stored byte into the range; empty sentinels and strays become blank.
    pub fn normalize(&self, c: u8) -> u8 {
        if self.contains(c) {
            c
        } else {
            self.blank()
        }
    }

    pub fn next(&self, c: u8) -> u8 {
        if c >= self.last {
            self.first
        } else {
            c + 1
        }
    }

    pub fn prev(&self, c: u8) -> u8 {
        if c <= self.first {
            self.last
        } else {
            c - 1
        }
    }
}

impl Default for CharRange {
    fn default() -> Self {
        Self::new(FIRST_ALLOWED_CHAR, LAST_ALLOWED_CHAR)
    }
}
