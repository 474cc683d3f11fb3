// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tests for the CRC-16 checksum.

use badge_util::checksum::{checksum, update};

#[test]
fn test_check_value() {
    assert_eq!(checksum(b"123456789"), 0x31C3);
}

#[test]
fn test_empty_input_is_zero() {
    assert_eq!(checksum(&[]), 0);
}

#[test]
fn test_deterministic() {
    let data = b"Level 3, score 04210";
    assert_eq!(checksum(data), checksum(data));
}

#[test]
fn test_single_byte_change_is_detected() {
    let original = *b"player:ALICE";
    for i in 0..original.len() {
        let mut corrupted = original;
        corrupted[i] ^= 0x01;
        assert_ne!(checksum(&corrupted), checksum(&original), "flip at {}", i);
    }
}

#[test]
fn test_bytewise_update_matches_checksum() {
    let data: Vec<u8> = (0..=255u8).collect();
    let folded = data.iter().fold(0u16, |crc, &b| update(crc, b));
    assert_eq!(folded, checksum(&data));

    let folded = b"123456789".iter().fold(0u16, |crc, &b| update(crc, b));
    assert_eq!(folded, 0x31C3);
}
