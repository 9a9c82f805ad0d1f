// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Canonical Stellar XDR encoding for transaction objects
//!
//! XDR values are big-endian and 4-byte aligned, variable length data is
//! prefixed with a u32 length and zero-padded. [Encode::encode_len] is a pure function
//! of the value shape, allowing buffers to be allocated exactly once.

use alloc::vec::Vec as AllocVec;

use byteorder::{BigEndian, ByteOrder};
use encdec::Encode;

use super::*;

/// Envelope type discriminant for v1 transactions
pub const ENVELOPE_TYPE_TX: u32 = 2;

/// Public key / muxed account type for ED25519 keys
const KEY_TYPE_ED25519: u32 = 0;

/// Round a length up to XDR alignment
const fn pad(n: usize) -> usize {
    (n + 3) & !3
}

/// Length of variable length opaque / string data
const fn opaque_len(n: usize) -> usize {
    4 + pad(n)
}

/// XDR output cursor
pub(crate) struct Writer<'a> {
    buff: &'a mut [u8],
    index: usize,
}

impl<'a> Writer<'a> {
    pub fn new(buff: &'a mut [u8]) -> Self {
        Self { buff, index: 0 }
    }

    fn reserve(&mut self, n: usize) -> Result<&mut [u8], Error> {
        if self.buff.len() < self.index + n {
            return Err(Error::EncodingFailed);
        }

        let b = &mut self.buff[self.index..][..n];
        self.index += n;
        Ok(b)
    }

    pub fn u32(&mut self, v: u32) -> Result<(), Error> {
        BigEndian::write_u32(self.reserve(4)?, v);
        Ok(())
    }

    pub fn u64(&mut self, v: u64) -> Result<(), Error> {
        BigEndian::write_u64(self.reserve(8)?, v);
        Ok(())
    }

    pub fn i64(&mut self, v: i64) -> Result<(), Error> {
        BigEndian::write_i64(self.reserve(8)?, v);
        Ok(())
    }

    pub fn bool(&mut self, v: bool) -> Result<(), Error> {
        self.u32(v as u32)
    }

    /// Fixed length data, zero-padded to `width`
    pub fn fixed(&mut self, d: &[u8], width: usize) -> Result<(), Error> {
        if d.len() > width {
            return Err(Error::InvalidLength);
        }

        let b = self.reserve(pad(width))?;
        b[..d.len()].copy_from_slice(d);
        b[d.len()..].fill(0);
        Ok(())
    }

    /// Variable length opaque data / string
    pub fn opaque(&mut self, d: &[u8]) -> Result<(), Error> {
        self.u32(d.len() as u32)?;
        self.fixed(d, d.len())
    }

    pub fn item<T: Encode<Error = Error>>(&mut self, v: &T) -> Result<(), Error> {
        let n = v.encode(&mut self.buff[self.index..])?;
        self.index += n;
        Ok(())
    }

    /// Optional value, presence flag followed by the value
    pub fn optional<T: Encode<Error = Error>>(&mut self, v: Option<&T>) -> Result<(), Error> {
        self.bool(v.is_some())?;
        match v {
            Some(v) => self.item(v),
            None => Ok(()),
        }
    }

    pub fn optional_u32(&mut self, v: Option<u32>) -> Result<(), Error> {
        self.bool(v.is_some())?;
        match v {
            Some(v) => self.u32(v),
            None => Ok(()),
        }
    }

    pub fn finish(self) -> usize {
        self.index
    }
}

fn optional_len<T: Encode<Error = Error>>(v: Option<&T>) -> Result<usize, Error> {
    match v {
        Some(v) => Ok(4 + v.encode_len()?),
        None => Ok(4),
    }
}

fn optional_u32_len(v: Option<u32>) -> usize {
    match v {
        Some(_) => 8,
        None => 4,
    }
}

/// [AccountId] encodes as `MuxedAccount` / `AccountID` with the ED25519 key type
impl Encode for AccountId {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        Ok(4 + 32)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        let mut w = Writer::new(buff);
        w.u32(KEY_TYPE_ED25519)?;
        w.fixed(&self.0, 32)?;
        Ok(w.finish())
    }
}

impl Encode for TimeBounds {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        Ok(16)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        let mut w = Writer::new(buff);
        w.u64(self.min_time)?;
        w.u64(self.max_time)?;
        Ok(w.finish())
    }
}

impl Encode for Memo {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        let n = match self {
            Memo::None => 0,
            Memo::Text(t) => opaque_len(t.len()),
            Memo::Id(_) => 8,
            Memo::Hash(_) | Memo::Return(_) => 32,
        };
        Ok(4 + n)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        let mut w = Writer::new(buff);
        match self {
            Memo::None => w.u32(0)?,
            Memo::Text(t) => {
                w.u32(1)?;
                w.opaque(t.as_bytes())?;
            }
            Memo::Id(id) => {
                w.u32(2)?;
                w.u64(*id)?;
            }
            Memo::Hash(h) => {
                w.u32(3)?;
                w.fixed(h, 32)?;
            }
            Memo::Return(h) => {
                w.u32(4)?;
                w.fixed(h, 32)?;
            }
        }
        Ok(w.finish())
    }
}

/// [AssetCode] encodes as the asset type followed by the zero-padded code
impl Encode for AssetCode {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        match self {
            AssetCode::AlphaNum4(_) => Ok(4 + 4),
            AssetCode::AlphaNum12(_) => Ok(4 + 12),
        }
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        let mut w = Writer::new(buff);
        match self {
            AssetCode::AlphaNum4(c) => {
                w.u32(1)?;
                w.fixed(c.as_bytes(), 4)?;
            }
            AssetCode::AlphaNum12(c) => {
                w.u32(2)?;
                w.fixed(c.as_bytes(), 12)?;
            }
        }
        Ok(w.finish())
    }
}

impl Encode for Asset {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        match self {
            Asset::Native => Ok(4),
            Asset::AlphaNum4(_) => Ok(4 + 4 + 36),
            Asset::AlphaNum12(_) => Ok(4 + 12 + 36),
        }
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        let mut w = Writer::new(buff);
        match self {
            Asset::Native => w.u32(0)?,
            Asset::AlphaNum4(a) => {
                w.u32(1)?;
                w.fixed(a.code.as_bytes(), 4)?;
                w.item(&a.issuer)?;
            }
            Asset::AlphaNum12(a) => {
                w.u32(2)?;
                w.fixed(a.code.as_bytes(), 12)?;
                w.item(&a.issuer)?;
            }
        }
        Ok(w.finish())
    }
}

impl Encode for Price {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        Ok(8)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        let mut w = Writer::new(buff);
        w.u32(self.n)?;
        w.u32(self.d)?;
        Ok(w.finish())
    }
}

impl Encode for Signer {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        Ok(4 + 32 + 4)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        let (kind, key) = match &self.key {
            SignerKey::Ed25519(k) => (0, k),
            SignerKey::PreAuthTx(k) => (1, k),
            SignerKey::HashX(k) => (2, k),
        };

        let mut w = Writer::new(buff);
        w.u32(kind)?;
        w.fixed(key, 32)?;
        w.u32(self.weight)?;
        Ok(w.finish())
    }
}

impl Encode for SetOptions {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        let home_domain = match &self.home_domain {
            Some(d) => 4 + opaque_len(d.len()),
            None => 4,
        };

        Ok(optional_len(self.inflation_dest.as_ref())?
            + optional_u32_len(self.clear_flags)
            + optional_u32_len(self.set_flags)
            + optional_u32_len(self.master_weight)
            + optional_u32_len(self.low_threshold)
            + optional_u32_len(self.med_threshold)
            + optional_u32_len(self.high_threshold)
            + home_domain
            + optional_len(self.signer.as_ref())?)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        let mut w = Writer::new(buff);

        w.optional(self.inflation_dest.as_ref())?;
        w.optional_u32(self.clear_flags)?;
        w.optional_u32(self.set_flags)?;
        w.optional_u32(self.master_weight)?;
        w.optional_u32(self.low_threshold)?;
        w.optional_u32(self.med_threshold)?;
        w.optional_u32(self.high_threshold)?;

        w.bool(self.home_domain.is_some())?;
        if let Some(d) = &self.home_domain {
            w.opaque(d.as_bytes())?;
        }

        w.optional(self.signer.as_ref())?;

        Ok(w.finish())
    }
}

impl Encode for OperationBody {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        use OperationBody::*;

        let n = match self {
            CreateAccount { .. } => 36 + 8,
            Payment { asset, .. } => 36 + asset.encode_len()? + 8,
            PathPayment {
                send_asset,
                dest_asset,
                path,
                ..
            } => {
                let mut n = send_asset.encode_len()? + 8 + 36 + dest_asset.encode_len()? + 8 + 4;
                for a in path {
                    n += a.encode_len()?;
                }
                n
            }
            ManageOffer {
                selling, buying, ..
            } => selling.encode_len()? + buying.encode_len()? + 8 + 8 + 8,
            CreatePassiveOffer {
                selling, buying, ..
            } => selling.encode_len()? + buying.encode_len()? + 8 + 8,
            SetOptions(o) => o.encode_len()?,
            ChangeTrust { asset, .. } => asset.encode_len()? + 8,
            AllowTrust { asset, .. } => 36 + asset.encode_len()? + 4,
            AccountMerge { .. } => 36,
            ManageData { name, value } => {
                opaque_len(name.len())
                    + match value {
                        Some(v) => 4 + opaque_len(v.len()),
                        None => 4,
                    }
            }
            BumpSequence { .. } => 8,
        };

        // Discriminant
        Ok(4 + n)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        use OperationBody::*;

        let mut w = Writer::new(buff);
        w.u32(self.kind())?;

        match self {
            CreateAccount {
                destination,
                starting_balance,
            } => {
                w.item(destination)?;
                w.i64(*starting_balance)?;
            }
            Payment {
                destination,
                asset,
                amount,
            } => {
                w.item(destination)?;
                w.item(asset)?;
                w.i64(*amount)?;
            }
            PathPayment {
                send_asset,
                send_max,
                destination,
                dest_asset,
                dest_amount,
                path,
            } => {
                w.item(send_asset)?;
                w.i64(*send_max)?;
                w.item(destination)?;
                w.item(dest_asset)?;
                w.i64(*dest_amount)?;
                w.u32(path.len() as u32)?;
                for a in path {
                    w.item(a)?;
                }
            }
            ManageOffer {
                selling,
                buying,
                amount,
                price,
                offer_id,
            } => {
                w.item(selling)?;
                w.item(buying)?;
                w.i64(*amount)?;
                w.item(price)?;
                w.u64(*offer_id)?;
            }
            CreatePassiveOffer {
                selling,
                buying,
                amount,
                price,
            } => {
                w.item(selling)?;
                w.item(buying)?;
                w.i64(*amount)?;
                w.item(price)?;
            }
            SetOptions(o) => w.item(o)?,
            ChangeTrust { asset, limit } => {
                w.item(asset)?;
                w.u64(*limit)?;
            }
            AllowTrust {
                trustor,
                asset,
                authorize,
            } => {
                w.item(trustor)?;
                w.item(asset)?;
                w.bool(*authorize)?;
            }
            AccountMerge { destination } => w.item(destination)?,
            ManageData { name, value } => {
                w.opaque(name.as_bytes())?;
                w.bool(value.is_some())?;
                if let Some(v) = value {
                    w.opaque(v)?;
                }
            }
            BumpSequence { bump_to } => w.u64(*bump_to)?,
        }

        Ok(w.finish())
    }
}

impl Encode for Operation {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        Ok(optional_len(self.source_account.as_ref())? + self.body.encode_len()?)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        let mut w = Writer::new(buff);
        w.optional(self.source_account.as_ref())?;
        w.item(&self.body)?;
        Ok(w.finish())
    }
}

impl Encode for Transaction {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        let mut n = 36 + 4 + 8;
        n += optional_len(self.time_bounds.as_ref())?;
        n += self.memo.encode_len()?;
        n += 4;
        for op in &self.operations {
            n += op.encode_len()?;
        }
        // Reserved extension
        n += 4;

        Ok(n)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        if self.operations.is_empty() || self.operations.len() > MAX_OPERATIONS {
            return Err(Error::InvalidOperationCount);
        }

        let mut w = Writer::new(buff);

        w.item(&self.source_account)?;
        w.u32(self.fee)?;
        w.u64(self.seq_num)?;
        w.optional(self.time_bounds.as_ref())?;
        w.item(&self.memo)?;

        w.u32(self.operations.len() as u32)?;
        for op in &self.operations {
            w.item(op)?;
        }

        w.u32(0)?;

        Ok(w.finish())
    }
}

impl Transaction {
    /// Encode the transaction to XDR
    pub fn to_xdr(&self) -> Result<AllocVec<u8>, Error> {
        encode_vec(self)
    }
}

/// Signature with the last four bytes of the signing public key as a hint
#[derive(Clone, PartialEq, Debug)]
pub struct DecoratedSignature {
    pub hint: [u8; 4],
    pub signature: [u8; 64],
}

impl DecoratedSignature {
    pub fn new(public_key: &[u8; 32], signature: [u8; 64]) -> Self {
        let mut hint = [0u8; 4];
        hint.copy_from_slice(&public_key[28..]);
        Self { hint, signature }
    }
}

impl Encode for DecoratedSignature {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        Ok(4 + opaque_len(64))
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        let mut w = Writer::new(buff);
        w.fixed(&self.hint, 4)?;
        w.opaque(&self.signature)?;
        Ok(w.finish())
    }
}

/// Transaction envelope, the unit submitted to the network
#[derive(Clone, PartialEq, Debug)]
pub struct TxEnvelope {
    pub tx: Transaction,
    pub signatures: AllocVec<DecoratedSignature>,
}

impl TxEnvelope {
    /// Create an unsigned envelope
    pub fn new(tx: Transaction) -> Self {
        Self {
            tx,
            signatures: AllocVec::new(),
        }
    }

    pub fn to_xdr(&self) -> Result<AllocVec<u8>, Error> {
        encode_vec(self)
    }
}

impl Encode for TxEnvelope {
    type Error = Error;

    fn encode_len(&self) -> Result<usize, Error> {
        let mut n = 4 + self.tx.encode_len()? + 4;
        for s in &self.signatures {
            n += s.encode_len()?;
        }
        Ok(n)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Error> {
        let mut w = Writer::new(buff);
        w.u32(ENVELOPE_TYPE_TX)?;
        w.item(&self.tx)?;
        w.u32(self.signatures.len() as u32)?;
        for s in &self.signatures {
            w.item(s)?;
        }
        Ok(w.finish())
    }
}

/// Encode an object into a buffer allocated from [Encode::encode_len]
fn encode_vec<T: Encode<Error = Error>>(v: &T) -> Result<AllocVec<u8>, Error> {
    let n = v.encode_len()?;
    let mut buff = alloc::vec![0u8; n];

    if v.encode(&mut buff)? != n {
        return Err(Error::EncodingFailed);
    }

    Ok(buff)
}
