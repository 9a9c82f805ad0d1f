// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Transaction signing tests

use std::future::Future;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bip39::{Language, Mnemonic, Seed};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use log::{debug, info, trace};
use sha2::{Digest, Sha256};

use stellar_hw_proto::prelude::*;

use crate::{recv, request, vectors::Vector, Error, Exchange};

/// Envelope type prefix for transaction signature payloads
const ENVELOPE_TYPE_TX: [u8; 4] = [0, 0, 0, 2];

/// Expected signer, resolved host side from the shared mnemonic
#[derive(Clone, Debug)]
pub struct Expectation {
    /// Account public key
    pub public_key: [u8; 32],
    /// Network passphrase, when this differs from the vectors only the
    /// signature validity is checked
    pub network_passphrase: String,
    /// Require signatures match the reference vectors
    pub exact: bool,
}

impl Expectation {
    /// Build an expectation from a mnemonic and derivation path
    pub fn new(mnemonic: &str, path: &[u32], network_passphrase: &str) -> anyhow::Result<Self> {
        let public_key = public_key(mnemonic, path)?;

        let exact = mnemonic == crate::vectors::MNEMONIC
            && path == crate::vectors::ADDRESS_N
            && network_passphrase == crate::vectors::NETWORK_PASSPHRASE;

        Ok(Self {
            public_key,
            network_passphrase: network_passphrase.to_string(),
            exact,
        })
    }
}

/// Derive the account public key for a mnemonic and path
pub fn public_key(mnemonic: &str, path: &[u32]) -> anyhow::Result<[u8; 32]> {
    let m = Mnemonic::from_phrase(mnemonic, Language::English)?;
    let seed = Seed::new(&m, "");

    let k = slip10_ed25519::derive_ed25519_private_key(seed.as_bytes(), path);
    let k = ed25519_dalek::SigningKey::from_bytes(&k);

    Ok(k.verifying_key().to_bytes())
}

/// Compute the signature payload hash for an encoded transaction
pub fn signature_hash(network_passphrase: &str, tx: &[u8]) -> [u8; 32] {
    let network_id = Sha256::digest(network_passphrase.as_bytes());

    let mut h = Sha256::new();
    h.update(network_id);
    h.update(ENVELOPE_TYPE_TX);
    h.update(tx);
    h.finalize().into()
}

/// Fetch the transaction from an unsigned (base64) envelope
pub fn envelope_tx(envelope: &str) -> anyhow::Result<Vec<u8>> {
    let e = STANDARD.decode(envelope)?;

    // Envelope type prefix and empty signature vector
    anyhow::ensure!(
        e.len() > 8 && e[..4] == ENVELOPE_TYPE_TX && e[e.len() - 4..] == [0u8; 4],
        "invalid unsigned envelope"
    );

    Ok(e[4..e.len() - 4].to_vec())
}

/// Execute the host side of the signing flow, returning the signed transaction
///
/// `approve` is called after each `ButtonAck` to resolve the displayed prompt.
pub async fn sign_tx<T, F>(
    t: &T,
    approve: impl Fn() -> F,
    tx: &StellarSignTx,
    operations: &[Message],
) -> anyhow::Result<StellarSignedTx>
where
    T: Exchange + Send + Sync,
    F: Future<Output = ()>,
{
    let mut ops = operations.iter();
    let mut index = 0;

    debug!("Starting transaction ({} operations)", operations.len());

    let mut resp = request(t, &tx.to_message()).await?;

    loop {
        trace!("Response: {:?}", resp);

        let id = MessageId::try_from(resp.type_id)
            .map_err(|_| Error::UnexpectedResponse(resp.type_id))?;

        resp = match id {
            MessageId::ButtonRequest => {
                let b = ButtonRequest::from_message(&resp)?;
                debug!("Button request: {:?}", b.code);

                t.send(&ButtonAck {}.encode_frame()).await?;
                approve().await;

                recv(t).await?
            }
            MessageId::StellarTxOpRequest => {
                let op = ops
                    .next()
                    .ok_or(Error::OperationOverrun(index, operations.len()))?;
                index += 1;

                debug!("Sending operation {index}/{}", operations.len());

                request(t, op).await?
            }
            MessageId::StellarSignedTx => {
                let s = StellarSignedTx::from_message(&resp)?;
                return Ok(s);
            }
            MessageId::Failure => {
                let f = Failure::from_message(&resp)?;
                return Err(Error::Failure {
                    code: f.code,
                    message: f.message.unwrap_or_default(),
                }
                .into());
            }
            _ => return Err(Error::UnexpectedResponse(resp.type_id).into()),
        };
    }
}

/// Sign a reference vector, checking the result against the expected signer
pub async fn test<T, F>(
    t: &T,
    approve: impl Fn() -> F,
    v: &Vector,
    expect: &Expectation,
) -> anyhow::Result<()>
where
    T: Exchange + Send + Sync,
    F: Future<Output = ()>,
{
    info!("Signing vector '{}'", v.name);

    let mut req = v.request.clone();
    req.network_passphrase = expect.network_passphrase.clone();

    let signed = sign_tx(t, approve, &req, &v.operations).await?;

    anyhow::ensure!(
        signed.public_key == expect.public_key,
        "public key mismatch (expected {}, received {})",
        hex::encode(expect.public_key),
        hex::encode(&signed.public_key)
    );

    // Check the signature covers the reference envelope
    let tx = envelope_tx(v.envelope)?;
    let hash = signature_hash(&expect.network_passphrase, &tx);

    let k = VerifyingKey::from_bytes(&expect.public_key)?;
    let s = Signature::from_slice(&signed.signature)?;
    k.verify(&hash, &s)?;

    if expect.exact {
        let s = STANDARD.encode(&signed.signature);
        anyhow::ensure!(
            s == v.signature,
            "signature mismatch (expected {}, received {s})",
            v.signature
        );
    }

    info!("Vector '{}' OK", v.name);

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vectors;

    #[test]
    fn reference_public_key() {
        let k = public_key(vectors::MNEMONIC, &vectors::ADDRESS_N).unwrap();
        assert_eq!(hex::encode(k), vectors::PUBLIC_KEY);
    }

    #[test]
    fn reference_signatures() {
        let k = hex::decode(vectors::PUBLIC_KEY).unwrap();
        let k = VerifyingKey::from_bytes(&k.try_into().unwrap()).unwrap();

        for v in vectors::all() {
            let tx = envelope_tx(v.envelope).unwrap();
            let hash = signature_hash(vectors::NETWORK_PASSPHRASE, &tx);

            let s = STANDARD.decode(v.signature).unwrap();
            let s = Signature::from_slice(&s).unwrap();

            assert!(k.verify(&hash, &s).is_ok(), "vector {} failed", v.name);
        }
    }

    #[test]
    fn exact_expectation() {
        let e = Expectation::new(
            vectors::MNEMONIC,
            &vectors::ADDRESS_N,
            vectors::NETWORK_PASSPHRASE,
        )
        .unwrap();
        assert!(e.exact);

        let e = Expectation::new(
            vectors::MNEMONIC,
            &vectors::ADDRESS_N,
            "Public Global Stellar Network ; September 2015",
        )
        .unwrap();
        assert!(!e.exact);
    }
}
