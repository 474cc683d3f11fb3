// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Button identifiers, readings and the pin-level capability behind them.

use embedded_hal::digital::InputPin;

/// Bit set in the byte form of a [`ButtonReading`] for a long press.
pub const LONG_PRESS_MASK: u8 = 0x80;

/// The six user buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Button {
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
    A = 5,
    B = 6,
}

impl Button {
    /// Scan priority order: the first asserted button wins.
    pub const ALL: [Button; 6] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::B,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Button::Up => "Up",
            Button::Down => "Down",
            Button::Left => "Left",
            Button::Right => "Right",
            Button::A => "A",
            Button::B => "B",
        }
    }
}

impl core::fmt::Display for Button {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one poll: at most one button, optionally flagged as a long press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonReading {
    button: Option<Button>,
    long_press: bool,
}

impl ButtonReading {
    pub const NONE: Self = Self {
        button: None,
        long_press: false,
    };

    pub const fn pressed(button: Button) -> Self {
        Self {
            button: Some(button),
            long_press: false,
        }
    }

    pub const fn long(button: Button) -> Self {
        Self {
            button: Some(button),
            long_press: true,
        }
    }

    pub fn button(&self) -> Option<Button> {
        self.button
    }

    pub fn is_long_press(&self) -> bool {
        self.long_press
    }

    pub fn is_none(&self) -> bool {
        self.button.is_none()
    }

    /// Pack into the single-byte form: button code plus [`LONG_PRESS_MASK`].
    pub fn to_byte(self) -> u8 {
        let code = self.button.map_or(0, Button::code);
        if self.long_press {
            code | LONG_PRESS_MASK
        } else {
            code
        }
    }

    /// Unpack a byte; unknown codes read as no button.
    pub fn from_byte(byte: u8) -> Self {
        match Button::from_code(byte & !LONG_PRESS_MASK) {
            Some(button) => Self {
                button: Some(button),
                long_press: byte & LONG_PRESS_MASK != 0,
            },
            None => Self::NONE,
        }
    }
}

/// "Is this button asserted right now?"
///
/// Implemented by the board wiring; tests substitute scripted pin states.
pub trait ButtonPort {
    fn is_pressed(&mut self, button: Button) -> bool;
}

/// Six active-low button lines (button connects to GND, pull-up enabled).
pub struct GpioButtons<P> {
    pub up: P,
    pub down: P,
    pub left: P,
    pub right: P,
    pub a: P,
    pub b: P,
}

impl<P: InputPin> GpioButtons<P> {
    pub fn new(up: P, down: P, left: P, right: P, a: P, b: P) -> Self {
        Self {
            up,
            down,
            left,
            right,
            a,
            b,
        }
    }

    fn pin(&mut self, button: Button) -> &mut P {
        match button {
            Button::Up => &mut self.up,
            Button::Down => &mut self.down,
            Button::Left => &mut self.left,
            Button::Right => &mut self.right,
            Button::A => &mut self.a,
            Button::B => &mut self.b,
        }
    }
}

impl<P: InputPin> ButtonPort for GpioButtons<P> {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.pin(button).is_low().unwrap_or(false)
    }
}
