// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Utility routines for the badge firmware.
//!
//! This crate supports both `no_std` (embedded) and `std` (host) environments:
//! - Default: `no_std` mode for embedded targets
//! - `std` feature: Enables `std` support for host tools
//! - `defmt` feature: Emits diagnostics and derives `defmt::Format`
//!
//! Hardware is reached only through `embedded-hal` pins and delays,
//! `embedded-graphics` draw targets, and the [`files::Directory`] and
//! [`systick::RepeatingTimer`] traits.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod beeper;
pub mod button;
pub mod checksum;
pub mod config;
pub mod editor;
pub mod files;
pub mod input;
pub mod leds;
pub mod systick;

// Re-export commonly used types
pub use beeper::Beeper;
pub use button::{Button, ButtonPort, ButtonReading, GpioButtons, LONG_PRESS_MASK};
pub use editor::{edit_string, EditAction, EditBuffer, EditSession, StringEditor};
pub use files::{list_files, try_list_files, DirEntry, Directory, FileName, ListError};
pub use input::InputReader;
pub use leds::{thermometer, IndicatorBar, Level, PowerUp, INDICATOR_COUNT};

pub use config::{CharRange, InputTiming};
pub use config::{BUTTON_DEBOUNCE_MS, BUTTON_LONG_PRESS_MS, BUTTON_POLL_MS, EDIT_SETTLE_MS};
pub use config::{EXTRAS_EXTENSION, FILE_NAME_LEN, FIRST_ALLOWED_CHAR, LAST_ALLOWED_CHAR};
pub use config::{MAX_EDIT_LEN, SYSTICK_PERIOD_MS};
