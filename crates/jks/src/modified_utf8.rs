// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Java's "modified UTF-8", as used by `DataOutput::writeUTF`.
//!
//! Strings are encoded per UTF-16 code unit, so supplementary characters take two
//! three-byte sequences, and NUL is written as `C0 80`.

use crate::KeyStoreError;

pub(crate) fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for unit in s.encode_utf16() {
        match unit {
            0x0001..=0x007F => out.push(unit as u8),
            0x0000 | 0x0080..=0x07FF => {
                out.push(0xC0 | ((unit >> 6) & 0x1F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
            _ => {
                out.push(0xE0 | ((unit >> 12) & 0x0F) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
        }
    }
    out
}

pub(crate) fn decode(bytes: &[u8]) -> Result<String, KeyStoreError> {
    let mut units = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().copied();
    while let Some(b) = iter.next() {
        let unit = match b {
            0x00..=0x7F => u16::from(b),
            0xC0..=0xDF => {
                let b2 = continuation(iter.next())?;
                (u16::from(b & 0x1F) << 6) | b2
            }
            0xE0..=0xEF => {
                let b2 = continuation(iter.next())?;
                let b3 = continuation(iter.next())?;
                (u16::from(b & 0x0F) << 12) | (b2 << 6) | b3
            }
            _ => return Err(KeyStoreError::InvalidModifiedUtf8),
        };
        units.push(unit);
    }
    String::from_utf16(&units).map_err(|_| KeyStoreError::InvalidModifiedUtf8)
}

fn continuation(b: Option<u8>) -> Result<u16, KeyStoreError> {
    match b {
        Some(b) if b & 0xC0 == 0x80 => Ok(u16::from(b & 0x3F)),
        _ => Err(KeyStoreError::InvalidModifiedUtf8),
    }
}
