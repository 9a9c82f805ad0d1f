// Copyright (c) 2022-2023 The MobileCoin Foundation

use core::str::from_utf8;

use emstr::{helpers::Fractional, EncodeStr};

/// Stroops per lumen / asset unit
pub const SCALAR_STROOPS: i64 = 10_000_000;

/// Maximum characters for a displayed amount before truncation
const AMOUNT_MAX_SF: usize = 14;

/// Public network passphrase
pub const NETWORK_PUBLIC: &str = "Public Global Stellar Network ; September 2015";

/// Testnet passphrase
pub const NETWORK_TESTNET: &str = "Test SDF Network ; September 2015";

/// Short network name for display
pub fn network_name(passphrase: &str) -> &'static str {
    match passphrase {
        NETWORK_PUBLIC => "public",
        NETWORK_TESTNET => "testnet",
        _ => "private",
    }
}

// Format helper for amounts (in stroops) and asset codes
pub fn fmt_amount<'a>(value: i64, code: &str, buff: &'a mut [u8]) -> &'a str {
    let mut n = match emstr::write!(&mut buff[..], Fractional::<i64>::new(value, SCALAR_STROOPS))
    {
        Ok(v) => v,
        Err(_) => return "ENCODE_ERR",
    };

    // Backtrack and truncate values if max chars is exceeded
    if n > AMOUNT_MAX_SF {
        n = AMOUNT_MAX_SF;
        buff[n] = b'.';
        buff[n + 1] = b'.';
        n += 2;
    }

    match emstr::write!(&mut buff[n..], ' ', code) {
        Ok(v) => n += v,
        Err(_) => return "ENCODE_ERR",
    }

    match from_utf8(&buff[..n]) {
        Ok(v) => v,
        Err(_) => "INVALID_UTF8",
    }
}
