// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Stellar signing messages
//!
//! A signing session is started with [StellarSignTx], the device then requests each
//! operation in turn with [StellarTxOpRequest] and finally responds with [StellarSignedTx].
//! Account and asset issuer fields carry strkey (`G...`) encoded addresses, amounts are
//! signed 64-bit stroop values.

use alloc::{string::String, vec::Vec};

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::Display;

use crate::{
    common::empty_message,
    schema::{FieldDef, FieldKind, Schema},
    DecodeError, Fields, MessageId, MessageType, Record, Value,
};

/// Memo type
#[derive(Copy, Clone, PartialEq, Debug, Display, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum StellarMemoType {
    None = 0,
    Text = 1,
    Id = 2,
    Hash = 3,
    Return = 4,
}

impl StellarMemoType {
    pub const VALUES: &'static [u32] = &[0, 1, 2, 3, 4];
}

impl Default for StellarMemoType {
    fn default() -> Self {
        Self::None
    }
}

/// Asset type
#[derive(Copy, Clone, PartialEq, Debug, Display, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum StellarAssetType {
    Native = 0,
    Alphanum4 = 1,
    Alphanum12 = 2,
}

impl StellarAssetType {
    pub const VALUES: &'static [u32] = &[0, 1, 2];
}

impl Default for StellarAssetType {
    fn default() -> Self {
        Self::Native
    }
}

/// Signer key type for [StellarSetOptionsOp]
#[derive(Copy, Clone, PartialEq, Debug, Display, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum StellarSignerType {
    Account = 0,
    PreAuth = 1,
    Hash = 2,
}

impl StellarSignerType {
    pub const VALUES: &'static [u32] = &[0, 1, 2];
}

const SOURCE: FieldDef = FieldDef::new(1, "source_account", FieldKind::Text);
const ASSET: FieldKind = FieldKind::Message(&ASSET_SCHEMA);

pub const ASSET_SCHEMA: Schema = Schema {
    name: "StellarAsset",
    type_id: None,
    fields: &[
        FieldDef::new(1, "type", FieldKind::Enum(StellarAssetType::VALUES)),
        FieldDef::new(2, "code", FieldKind::Text),
        FieldDef::new(3, "issuer", FieldKind::Text),
    ],
};

pub static SIGN_TX: Schema = Schema {
    name: "StellarSignTx",
    type_id: Some(MessageId::StellarSignTx as u16),
    fields: &[
        FieldDef::repeated(1, "address_n", FieldKind::UInt32),
        FieldDef::new(2, "network_passphrase", FieldKind::Text),
        FieldDef::new(3, "source_account", FieldKind::Text),
        FieldDef::new(4, "fee", FieldKind::UInt32),
        FieldDef::new(5, "sequence_number", FieldKind::UInt64),
        FieldDef::new(8, "timebounds_start", FieldKind::UInt32),
        FieldDef::new(9, "timebounds_end", FieldKind::UInt32),
        FieldDef::new(10, "memo_type", FieldKind::Enum(StellarMemoType::VALUES)),
        FieldDef::new(11, "memo_text", FieldKind::Text),
        FieldDef::new(12, "memo_id", FieldKind::UInt64),
        FieldDef::new(13, "memo_hash", FieldKind::Bytes),
        FieldDef::new(14, "num_operations", FieldKind::UInt32),
    ],
};

pub static TX_OP_REQUEST: Schema = Schema {
    name: "StellarTxOpRequest",
    type_id: Some(MessageId::StellarTxOpRequest as u16),
    fields: &[],
};

pub static CREATE_ACCOUNT_OP: Schema = Schema {
    name: "StellarCreateAccountOp",
    type_id: Some(MessageId::StellarCreateAccountOp as u16),
    fields: &[
        SOURCE,
        FieldDef::new(2, "new_account", FieldKind::Text),
        FieldDef::new(3, "starting_balance", FieldKind::SInt64),
    ],
};

pub static PAYMENT_OP: Schema = Schema {
    name: "StellarPaymentOp",
    type_id: Some(MessageId::StellarPaymentOp as u16),
    fields: &[
        SOURCE,
        FieldDef::new(2, "destination_account", FieldKind::Text),
        FieldDef::new(3, "asset", ASSET),
        FieldDef::new(4, "amount", FieldKind::SInt64),
    ],
};

pub static PATH_PAYMENT_OP: Schema = Schema {
    name: "StellarPathPaymentOp",
    type_id: Some(MessageId::StellarPathPaymentOp as u16),
    fields: &[
        SOURCE,
        FieldDef::new(2, "send_asset", ASSET),
        FieldDef::new(3, "send_max", FieldKind::SInt64),
        FieldDef::new(4, "destination_account", FieldKind::Text),
        FieldDef::new(5, "destination_asset", ASSET),
        FieldDef::new(6, "destination_amount", FieldKind::SInt64),
        FieldDef::repeated(7, "paths", ASSET),
    ],
};

pub static MANAGE_OFFER_OP: Schema = Schema {
    name: "StellarManageOfferOp",
    type_id: Some(MessageId::StellarManageOfferOp as u16),
    fields: &[
        SOURCE,
        FieldDef::new(2, "selling_asset", ASSET),
        FieldDef::new(3, "buying_asset", ASSET),
        FieldDef::new(4, "amount", FieldKind::SInt64),
        FieldDef::new(5, "price_n", FieldKind::UInt32),
        FieldDef::new(6, "price_d", FieldKind::UInt32),
        FieldDef::new(7, "offer_id", FieldKind::UInt64),
    ],
};

pub static CREATE_PASSIVE_OFFER_OP: Schema = Schema {
    name: "StellarCreatePassiveOfferOp",
    type_id: Some(MessageId::StellarCreatePassiveOfferOp as u16),
    fields: &[
        SOURCE,
        FieldDef::new(2, "selling_asset", ASSET),
        FieldDef::new(3, "buying_asset", ASSET),
        FieldDef::new(4, "amount", FieldKind::SInt64),
        FieldDef::new(5, "price_n", FieldKind::UInt32),
        FieldDef::new(6, "price_d", FieldKind::UInt32),
    ],
};

pub static SET_OPTIONS_OP: Schema = Schema {
    name: "StellarSetOptionsOp",
    type_id: Some(MessageId::StellarSetOptionsOp as u16),
    fields: &[
        SOURCE,
        FieldDef::new(2, "inflation_destination_account", FieldKind::Text),
        FieldDef::new(3, "clear_flags", FieldKind::UInt32),
        FieldDef::new(4, "set_flags", FieldKind::UInt32),
        FieldDef::new(5, "master_weight", FieldKind::UInt32),
        FieldDef::new(6, "low_threshold", FieldKind::UInt32),
        FieldDef::new(7, "medium_threshold", FieldKind::UInt32),
        FieldDef::new(8, "high_threshold", FieldKind::UInt32),
        FieldDef::new(9, "home_domain", FieldKind::Text),
        FieldDef::new(10, "signer_type", FieldKind::Enum(StellarSignerType::VALUES)),
        FieldDef::new(11, "signer_key", FieldKind::Bytes),
        FieldDef::new(12, "signer_weight", FieldKind::UInt32),
    ],
};

pub static CHANGE_TRUST_OP: Schema = Schema {
    name: "StellarChangeTrustOp",
    type_id: Some(MessageId::StellarChangeTrustOp as u16),
    fields: &[
        SOURCE,
        FieldDef::new(2, "asset", ASSET),
        FieldDef::new(3, "limit", FieldKind::UInt64),
    ],
};

pub static ALLOW_TRUST_OP: Schema = Schema {
    name: "StellarAllowTrustOp",
    type_id: Some(MessageId::StellarAllowTrustOp as u16),
    fields: &[
        SOURCE,
        FieldDef::new(2, "trusted_account", FieldKind::Text),
        FieldDef::new(3, "asset_type", FieldKind::Enum(StellarAssetType::VALUES)),
        FieldDef::new(4, "asset_code", FieldKind::Text),
        FieldDef::new(5, "is_authorized", FieldKind::Bool),
    ],
};

pub static ACCOUNT_MERGE_OP: Schema = Schema {
    name: "StellarAccountMergeOp",
    type_id: Some(MessageId::StellarAccountMergeOp as u16),
    fields: &[
        SOURCE,
        FieldDef::new(2, "destination_account", FieldKind::Text),
    ],
};

pub static MANAGE_DATA_OP: Schema = Schema {
    name: "StellarManageDataOp",
    type_id: Some(MessageId::StellarManageDataOp as u16),
    fields: &[
        SOURCE,
        FieldDef::new(2, "key", FieldKind::Text),
        FieldDef::new(3, "value", FieldKind::Bytes),
    ],
};

pub static BUMP_SEQUENCE_OP: Schema = Schema {
    name: "StellarBumpSequenceOp",
    type_id: Some(MessageId::StellarBumpSequenceOp as u16),
    fields: &[SOURCE, FieldDef::new(2, "bump_to", FieldKind::UInt64)],
};

pub static SIGNED_TX: Schema = Schema {
    name: "StellarSignedTx",
    type_id: Some(MessageId::StellarSignedTx as u16),
    fields: &[
        FieldDef::new(1, "public_key", FieldKind::Bytes),
        FieldDef::new(2, "signature", FieldKind::Bytes),
    ],
};

/// Unwrap a required field
fn required<T>(v: Option<T>) -> Result<T, DecodeError> {
    v.ok_or(DecodeError::MissingField)
}

/// Asset description
#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarAsset {
    pub asset_type: StellarAssetType,
    pub code: Option<String>,
    pub issuer: Option<String>,
}

impl StellarAsset {
    /// Native (XLM) asset
    pub fn native() -> Self {
        Self::default()
    }

    /// Issued asset, type selected by code length
    pub fn issued(code: &str, issuer: &str) -> Self {
        let asset_type = match code.len() {
            0..=4 => StellarAssetType::Alphanum4,
            _ => StellarAssetType::Alphanum12,
        };

        Self {
            asset_type,
            code: Some(code.into()),
            issuer: Some(issuer.into()),
        }
    }

    fn field(fields: &Fields, number: u32) -> Result<Option<Self>, DecodeError> {
        fields.message(number)?.map(Self::from_fields).transpose()
    }
}

impl Record for StellarAsset {
    fn schema() -> &'static Schema {
        &ASSET_SCHEMA
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_enum(1, self.asset_type)
            .set_opt(2, self.code.clone())
            .set_opt(3, self.issuer.clone());
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            asset_type: required(fields.enumeration(1)?)?,
            code: fields.text(2)?,
            issuer: fields.text(3)?,
        })
    }
}

/// Start a signing session with the transaction header
#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarSignTx {
    /// SLIP-10 derivation path
    pub address_n: Vec<u32>,
    pub network_passphrase: String,
    pub source_account: String,
    pub fee: u32,
    pub sequence_number: u64,
    pub timebounds_start: Option<u32>,
    pub timebounds_end: Option<u32>,
    pub memo_type: StellarMemoType,
    pub memo_text: Option<String>,
    pub memo_id: Option<u64>,
    pub memo_hash: Option<Vec<u8>>,
    pub num_operations: u32,
}

impl Record for StellarSignTx {
    fn schema() -> &'static Schema {
        &SIGN_TX
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_repeated(1, self.address_n.iter().map(|i| Value::from(*i)).collect())
            .set(2, self.network_passphrase.as_str())
            .set(3, self.source_account.as_str())
            .set(4, self.fee)
            .set(5, self.sequence_number)
            .set_opt(8, self.timebounds_start)
            .set_opt(9, self.timebounds_end)
            .set_enum(10, self.memo_type)
            .set_opt(11, self.memo_text.clone())
            .set_opt(12, self.memo_id)
            .set_opt(13, self.memo_hash.clone())
            .set(14, self.num_operations);
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        let mut address_n = Vec::new();
        for v in fields.repeated(1)? {
            match v {
                Value::UInt(i) => {
                    address_n.push(u32::try_from(*i).map_err(|_| DecodeError::OutOfRange)?)
                }
                _ => return Err(DecodeError::InvalidType),
            }
        }

        Ok(Self {
            address_n,
            network_passphrase: required(fields.text(2)?)?,
            source_account: required(fields.text(3)?)?,
            fee: required(fields.u32(4)?)?,
            sequence_number: required(fields.u64(5)?)?,
            timebounds_start: fields.u32(8)?,
            timebounds_end: fields.u32(9)?,
            memo_type: fields.enumeration(10)?.unwrap_or_default(),
            memo_text: fields.text(11)?,
            memo_id: fields.u64(12)?,
            memo_hash: fields.bytes(13)?,
            num_operations: required(fields.u32(14)?)?,
        })
    }
}

impl MessageType for StellarSignTx {
    const ID: MessageId = MessageId::StellarSignTx;
}

empty_message!(StellarTxOpRequest, TX_OP_REQUEST);

/// Signing result
#[derive(Clone, PartialEq, Debug)]
pub struct StellarSignedTx {
    /// ED25519 public key of the signing account
    pub public_key: Vec<u8>,
    /// ED25519 signature over the transaction hash
    pub signature: Vec<u8>,
}

impl Record for StellarSignedTx {
    fn schema() -> &'static Schema {
        &SIGNED_TX
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set(1, self.public_key.clone())
            .set(2, self.signature.clone());
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            public_key: required(fields.bytes(1)?)?,
            signature: required(fields.bytes(2)?)?,
        })
    }
}

impl MessageType for StellarSignedTx {
    const ID: MessageId = MessageId::StellarSignedTx;
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarCreateAccountOp {
    pub source_account: Option<String>,
    pub new_account: String,
    pub starting_balance: i64,
}

impl Record for StellarCreateAccountOp {
    fn schema() -> &'static Schema {
        &CREATE_ACCOUNT_OP
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.source_account.clone())
            .set(2, self.new_account.as_str())
            .set(3, self.starting_balance);
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            source_account: fields.text(1)?,
            new_account: required(fields.text(2)?)?,
            starting_balance: required(fields.i64(3)?)?,
        })
    }
}

impl MessageType for StellarCreateAccountOp {
    const ID: MessageId = MessageId::StellarCreateAccountOp;
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarPaymentOp {
    pub source_account: Option<String>,
    pub destination_account: String,
    pub asset: StellarAsset,
    pub amount: i64,
}

impl Record for StellarPaymentOp {
    fn schema() -> &'static Schema {
        &PAYMENT_OP
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.source_account.clone())
            .set(2, self.destination_account.as_str())
            .set(3, self.asset.to_fields())
            .set(4, self.amount);
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            source_account: fields.text(1)?,
            destination_account: required(fields.text(2)?)?,
            asset: required(StellarAsset::field(fields, 3)?)?,
            amount: required(fields.i64(4)?)?,
        })
    }
}

impl MessageType for StellarPaymentOp {
    const ID: MessageId = MessageId::StellarPaymentOp;
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarPathPaymentOp {
    pub source_account: Option<String>,
    pub send_asset: StellarAsset,
    pub send_max: i64,
    pub destination_account: String,
    pub destination_asset: StellarAsset,
    pub destination_amount: i64,
    pub paths: Vec<StellarAsset>,
}

impl Record for StellarPathPaymentOp {
    fn schema() -> &'static Schema {
        &PATH_PAYMENT_OP
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.source_account.clone())
            .set(2, self.send_asset.to_fields())
            .set(3, self.send_max)
            .set(4, self.destination_account.as_str())
            .set(5, self.destination_asset.to_fields())
            .set(6, self.destination_amount)
            .set_repeated(
                7,
                self.paths.iter().map(|a| Value::from(a.to_fields())).collect(),
            );
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        let mut paths = Vec::new();
        for v in fields.repeated(7)? {
            match v {
                Value::Message(a) => paths.push(StellarAsset::from_fields(a)?),
                _ => return Err(DecodeError::InvalidType),
            }
        }

        Ok(Self {
            source_account: fields.text(1)?,
            send_asset: required(StellarAsset::field(fields, 2)?)?,
            send_max: required(fields.i64(3)?)?,
            destination_account: required(fields.text(4)?)?,
            destination_asset: required(StellarAsset::field(fields, 5)?)?,
            destination_amount: required(fields.i64(6)?)?,
            paths,
        })
    }
}

impl MessageType for StellarPathPaymentOp {
    const ID: MessageId = MessageId::StellarPathPaymentOp;
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarManageOfferOp {
    pub source_account: Option<String>,
    pub selling_asset: StellarAsset,
    pub buying_asset: StellarAsset,
    pub amount: i64,
    pub price_n: u32,
    pub price_d: u32,
    /// Offer to modify, 0 creates a new offer
    pub offer_id: u64,
}

impl Record for StellarManageOfferOp {
    fn schema() -> &'static Schema {
        &MANAGE_OFFER_OP
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.source_account.clone())
            .set(2, self.selling_asset.to_fields())
            .set(3, self.buying_asset.to_fields())
            .set(4, self.amount)
            .set(5, self.price_n)
            .set(6, self.price_d)
            .set(7, self.offer_id);
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            source_account: fields.text(1)?,
            selling_asset: required(StellarAsset::field(fields, 2)?)?,
            buying_asset: required(StellarAsset::field(fields, 3)?)?,
            amount: required(fields.i64(4)?)?,
            price_n: required(fields.u32(5)?)?,
            price_d: required(fields.u32(6)?)?,
            offer_id: fields.u64(7)?.unwrap_or_default(),
        })
    }
}

impl MessageType for StellarManageOfferOp {
    const ID: MessageId = MessageId::StellarManageOfferOp;
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarCreatePassiveOfferOp {
    pub source_account: Option<String>,
    pub selling_asset: StellarAsset,
    pub buying_asset: StellarAsset,
    pub amount: i64,
    pub price_n: u32,
    pub price_d: u32,
}

impl Record for StellarCreatePassiveOfferOp {
    fn schema() -> &'static Schema {
        &CREATE_PASSIVE_OFFER_OP
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.source_account.clone())
            .set(2, self.selling_asset.to_fields())
            .set(3, self.buying_asset.to_fields())
            .set(4, self.amount)
            .set(5, self.price_n)
            .set(6, self.price_d);
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            source_account: fields.text(1)?,
            selling_asset: required(StellarAsset::field(fields, 2)?)?,
            buying_asset: required(StellarAsset::field(fields, 3)?)?,
            amount: required(fields.i64(4)?)?,
            price_n: required(fields.u32(5)?)?,
            price_d: required(fields.u32(6)?)?,
        })
    }
}

impl MessageType for StellarCreatePassiveOfferOp {
    const ID: MessageId = MessageId::StellarCreatePassiveOfferOp;
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarSetOptionsOp {
    pub source_account: Option<String>,
    pub inflation_destination_account: Option<String>,
    pub clear_flags: Option<u32>,
    pub set_flags: Option<u32>,
    pub master_weight: Option<u32>,
    pub low_threshold: Option<u32>,
    pub medium_threshold: Option<u32>,
    pub high_threshold: Option<u32>,
    pub home_domain: Option<String>,
    pub signer_type: Option<StellarSignerType>,
    pub signer_key: Option<Vec<u8>>,
    pub signer_weight: Option<u32>,
}

impl Record for StellarSetOptionsOp {
    fn schema() -> &'static Schema {
        &SET_OPTIONS_OP
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.source_account.clone())
            .set_opt(2, self.inflation_destination_account.clone())
            .set_opt(3, self.clear_flags)
            .set_opt(4, self.set_flags)
            .set_opt(5, self.master_weight)
            .set_opt(6, self.low_threshold)
            .set_opt(7, self.medium_threshold)
            .set_opt(8, self.high_threshold)
            .set_opt(9, self.home_domain.clone())
            .set_opt(11, self.signer_key.clone())
            .set_opt(12, self.signer_weight);
        if let Some(t) = self.signer_type {
            f.set_enum(10, t);
        }
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            source_account: fields.text(1)?,
            inflation_destination_account: fields.text(2)?,
            clear_flags: fields.u32(3)?,
            set_flags: fields.u32(4)?,
            master_weight: fields.u32(5)?,
            low_threshold: fields.u32(6)?,
            medium_threshold: fields.u32(7)?,
            high_threshold: fields.u32(8)?,
            home_domain: fields.text(9)?,
            signer_type: fields.enumeration(10)?,
            signer_key: fields.bytes(11)?,
            signer_weight: fields.u32(12)?,
        })
    }
}

impl MessageType for StellarSetOptionsOp {
    const ID: MessageId = MessageId::StellarSetOptionsOp;
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarChangeTrustOp {
    pub source_account: Option<String>,
    pub asset: StellarAsset,
    /// Trust limit, 0 removes the trust line
    pub limit: u64,
}

impl Record for StellarChangeTrustOp {
    fn schema() -> &'static Schema {
        &CHANGE_TRUST_OP
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.source_account.clone())
            .set(2, self.asset.to_fields())
            .set(3, self.limit);
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            source_account: fields.text(1)?,
            asset: required(StellarAsset::field(fields, 2)?)?,
            limit: required(fields.u64(3)?)?,
        })
    }
}

impl MessageType for StellarChangeTrustOp {
    const ID: MessageId = MessageId::StellarChangeTrustOp;
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarAllowTrustOp {
    pub source_account: Option<String>,
    pub trusted_account: String,
    pub asset_type: StellarAssetType,
    pub asset_code: Option<String>,
    pub is_authorized: bool,
}

impl Record for StellarAllowTrustOp {
    fn schema() -> &'static Schema {
        &ALLOW_TRUST_OP
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.source_account.clone())
            .set(2, self.trusted_account.as_str())
            .set_enum(3, self.asset_type)
            .set_opt(4, self.asset_code.clone())
            .set(5, self.is_authorized);
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            source_account: fields.text(1)?,
            trusted_account: required(fields.text(2)?)?,
            asset_type: required(fields.enumeration(3)?)?,
            asset_code: fields.text(4)?,
            is_authorized: fields.bool(5)?.unwrap_or_default(),
        })
    }
}

impl MessageType for StellarAllowTrustOp {
    const ID: MessageId = MessageId::StellarAllowTrustOp;
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarAccountMergeOp {
    pub source_account: Option<String>,
    pub destination_account: String,
}

impl Record for StellarAccountMergeOp {
    fn schema() -> &'static Schema {
        &ACCOUNT_MERGE_OP
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.source_account.clone())
            .set(2, self.destination_account.as_str());
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            source_account: fields.text(1)?,
            destination_account: required(fields.text(2)?)?,
        })
    }
}

impl MessageType for StellarAccountMergeOp {
    const ID: MessageId = MessageId::StellarAccountMergeOp;
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarManageDataOp {
    pub source_account: Option<String>,
    pub key: String,
    /// Entry value, `None` deletes the entry
    pub value: Option<Vec<u8>>,
}

impl Record for StellarManageDataOp {
    fn schema() -> &'static Schema {
        &MANAGE_DATA_OP
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.source_account.clone())
            .set(2, self.key.as_str())
            .set_opt(3, self.value.clone());
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            source_account: fields.text(1)?,
            key: required(fields.text(2)?)?,
            value: fields.bytes(3)?,
        })
    }
}

impl MessageType for StellarManageDataOp {
    const ID: MessageId = MessageId::StellarManageDataOp;
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StellarBumpSequenceOp {
    pub source_account: Option<String>,
    pub bump_to: u64,
}

impl Record for StellarBumpSequenceOp {
    fn schema() -> &'static Schema {
        &BUMP_SEQUENCE_OP
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.source_account.clone())
            .set(2, self.bump_to);
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            source_account: fields.text(1)?,
            bump_to: required(fields.u64(2)?)?,
        })
    }
}

impl MessageType for StellarBumpSequenceOp {
    const ID: MessageId = MessageId::StellarBumpSequenceOp;
}
