// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! CRC-16 used to protect user data records.
//!
//! Polynomial 0x1021, MSB first, zero seed, no reflection and no final XOR
//! (CRC-16/XMODEM).

use crc::{Crc, CRC_16_XMODEM};

pub const POLYNOMIAL: u16 = 0x1021;

pub const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// CRC-16 of `data`, seeded with zero.
pub fn checksum(data: &[u8]) -> u16 {
    CRC16.checksum(data)
}

/// Fold one byte into a running CRC, bit by bit.
pub fn update(mut crc: u16, byte: u8) -> u16 {
    let mut byte = byte;
    for _ in 0..8 {
        let feedback = ((crc >> 8) as u8 ^ byte) & 0x80 != 0;
        crc <<= 1;
        if feedback {
            crc ^= POLYNOMIAL;
        }
        byte <<= 1;
    }
    crc
}
