// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tests for the thermometer LED encoders.

use badge_util::{thermometer, IndicatorBar, Level, PowerUp, INDICATOR_COUNT};
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

#[test]
fn test_thermometer_lights_lowest_lines() {
    for n in 0..=INDICATOR_COUNT as u8 {
        let pattern = thermometer(n);
        let lit = pattern.iter().filter(|&&on| on).count();
        assert_eq!(lit, n as usize);
        // Lit lines are a prefix.
        assert!(pattern.windows(2).all(|w| w[0] || !w[1]));
    }
}

#[test]
fn test_thermometer_out_of_range_lights_nothing() {
    assert_eq!(thermometer(5), [false; INDICATOR_COUNT]);
    assert_eq!(thermometer(u8::MAX), [false; INDICATOR_COUNT]);
}

#[test]
fn test_level_patterns() {
    assert_eq!(Level::L0.pattern(), [false, false, false, false]);
    assert_eq!(Level::L2.pattern(), [true, true, false, false]);
    assert_eq!(Level::L4.pattern(), [true, true, true, true]);
    assert_eq!(Level::default(), Level::L0);
}

#[test]
fn test_power_up_patterns_match_level_encoding() {
    for n in 0..=4 {
        assert_eq!(PowerUp::from_ordinal(n).pattern(), Level::from_ordinal(n).pattern());
        assert_eq!(PowerUp::from_ordinal(n).ordinal(), n);
    }
}

#[test]
fn test_unknown_ordinal_falls_back_to_zero() {
    assert_eq!(Level::from_ordinal(9), Level::L0);
    assert_eq!(PowerUp::from_ordinal(200), PowerUp::P0);
}

fn pins(expectations: [&[Transaction]; INDICATOR_COUNT]) -> [PinMock; INDICATOR_COUNT] {
    expectations.map(|expected| PinMock::new(expected))
}

fn done(mut pins: [PinMock; INDICATOR_COUNT]) {
    for pin in pins.iter_mut() {
        pin.done();
    }
}

#[test]
fn test_indicator_bar_is_active_low() {
    let lit = [Transaction::set(State::Low)];
    let dark = [Transaction::set(State::High)];
    let mocks = pins([&lit, &lit, &lit, &dark]);

    let mut bar = IndicatorBar::new(mocks.clone());
    bar.show_level(Level::L3);

    done(mocks);
}

#[test]
fn test_indicator_bar_power_up_then_clear() {
    let first = [Transaction::set(State::Low), Transaction::set(State::High)];
    let rest = [Transaction::set(State::High), Transaction::set(State::High)];
    let mocks = pins([&first, &rest, &rest, &rest]);

    let mut bar = IndicatorBar::new(mocks.clone());
    bar.show_power_up(PowerUp::P1);
    bar.clear();

    done(mocks);
}
