// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Transaction signing
//!
//! Signatures are computed over a domain-separated hash binding the
//! network and envelope type to the canonical transaction bytes:
//!
//! ```text
//! network_id = SHA256(network_passphrase)
//! hash       = SHA256(network_id | ENVELOPE_TYPE_TX (u32 BE) | tx_xdr)
//! signature  = ED25519(derive(path), hash)
//! ```

use core::fmt;

use ed25519_dalek::{Signer, SigningKey};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use super::{Driver, Error};
use crate::tx::xdr::ENVELOPE_TYPE_TX;

/// SLIP-0010 derived ED25519 private key
///
/// Not [Clone], key material is zeroed when the key is dropped.
pub struct Slip10Key([u8; 32]);

impl Slip10Key {
    pub fn from_raw(b: [u8; 32]) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Drop for Slip10Key {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Slip10Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Slip10Key(..)")
    }
}

/// Signing output, the public key for the derivation path and the transaction signature
#[derive(Clone, PartialEq)]
pub struct SignedResult {
    pub public_key: [u8; 32],
    pub signature: [u8; 64],
}

impl fmt::Debug for SignedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedResult")
            .field("public_key", &format_args!("{:02x?}", &self.public_key))
            .field("signature", &format_args!("{:02x?}", &self.signature))
            .finish()
    }
}

/// Compute the network identifier for a passphrase
pub fn network_id(passphrase: &str) -> [u8; 32] {
    Sha256::digest(passphrase.as_bytes()).into()
}

/// Compute the signature payload hash for an encoded transaction
pub fn signature_hash(passphrase: &str, tx: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(network_id(passphrase));
    h.update(ENVELOPE_TYPE_TX.to_be_bytes());
    h.update(tx);
    h.finalize().into()
}

/// Sign an encoded transaction with the key derived for `path`
///
/// Derived key material is confined to this call.
#[cfg_attr(feature = "noinline", inline(never))]
pub fn sign<DRV: Driver>(
    drv: &DRV,
    path: &[u32],
    passphrase: &str,
    tx: &[u8],
) -> Result<SignedResult, Error> {
    let hash = signature_hash(passphrase, tx);

    #[cfg(feature = "log")]
    log::debug!("signing hash: {:02x?}", hash);

    let key = drv.derive_ed25519(path)?;

    // SigningKey zeroizes on drop
    let signing_key = SigningKey::from_bytes(key.as_bytes());
    drop(key);

    let signature = signing_key.sign(&hash);

    Ok(SignedResult {
        public_key: signing_key.verifying_key().to_bytes(),
        signature: signature.to_bytes(),
    })
}
