// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Stellar strkey (`G...`) account address encoding
//!
//! ```text
//! base32( VERSION_BYTE | ED25519_KEY (32-byte) | CRC16_XMODEM (LE, 2-byte) )
//! ```

use crc::{Crc, CRC_16_XMODEM};
use heapless::String;

use crate::engine::Error;

/// Version byte for ED25519 account identifiers (`G...`)
pub const VERSION_ACCOUNT_ID: u8 = 6 << 3;

/// Encoded strkey length for 32-byte keys
pub const STRKEY_LEN: usize = 56;

const RAW_LEN: usize = 35;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Decode a `G...` account address to the raw ED25519 public key
pub fn decode_account(s: &str) -> Result<[u8; 32], Error> {
    let b = s.as_bytes();
    if b.len() != STRKEY_LEN {
        return Err(Error::InvalidAccount);
    }

    // 56 characters carry exactly 280 bits / 35 bytes, no padding
    let mut raw = [0u8; RAW_LEN];
    let (mut acc, mut bits, mut n) = (0u32, 0u32, 0usize);

    for c in b {
        let v = ALPHABET
            .iter()
            .position(|a| a == c)
            .ok_or(Error::InvalidAccount)?;

        acc = (acc << 5) | v as u32;
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            raw[n] = (acc >> bits) as u8;
            acc &= (1 << bits) - 1;
            n += 1;
        }
    }

    if raw[0] != VERSION_ACCOUNT_ID {
        return Err(Error::InvalidAccount);
    }

    let crc = CRC16.checksum(&raw[..33]);
    if raw[33..] != crc.to_le_bytes() {
        return Err(Error::InvalidAccount);
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(&raw[1..33]);

    Ok(key)
}

/// Encode a raw ED25519 public key as a `G...` account address
pub fn encode_account(key: &[u8; 32]) -> String<STRKEY_LEN> {
    let mut raw = [0u8; RAW_LEN];
    raw[0] = VERSION_ACCOUNT_ID;
    raw[1..33].copy_from_slice(key);

    let crc = CRC16.checksum(&raw[..33]);
    raw[33..].copy_from_slice(&crc.to_le_bytes());

    let mut s = String::new();
    let (mut acc, mut bits) = (0u32, 0u32);

    for b in raw {
        acc = (acc << 8) | b as u32;
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            let i = (acc >> bits) & 0x1f;
            // Capacity is exact for 35 byte inputs
            let _ = s.push(ALPHABET[i as usize] as char);
        }
        acc &= (1 << bits) - 1;
    }

    s
}
