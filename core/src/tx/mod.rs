// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Stellar transaction model
//!
//! Objects here are validated on construction (see [parse]) so that anything reaching
//! the [Engine][crate::engine::Engine] is guaranteed to have a canonical XDR encoding.

use alloc::{string::String as AllocString, vec::Vec as AllocVec};
use core::fmt;

use heapless::{String, Vec};

use crate::{engine::Error, strkey};

mod parse;

pub mod xdr;
pub use xdr::{DecoratedSignature, TxEnvelope};

/// Maximum operations per transaction
pub const MAX_OPERATIONS: usize = 100;

/// Maximum derivation path depth
pub const MAX_PATH_LEN: usize = 10;

/// Maximum memo text length (bytes)
pub const MEMO_TEXT_MAX: usize = 28;

/// Maximum home domain length (bytes)
pub const HOME_DOMAIN_MAX: usize = 32;

/// Maximum data entry name / value length (bytes)
pub const DATA_MAX: usize = 64;

/// Maximum intermediate assets in a path payment
pub const PATH_PAYMENT_MAX: usize = 5;

/// ED25519 account identifier
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// Parse a strkey (`G...`) encoded account
    pub fn from_strkey(s: &str) -> Result<Self, Error> {
        strkey::decode_account(s).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Display [AccountId] in strkey form
impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(strkey::encode_account(&self.0).as_str())
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({self})")
    }
}

/// Transaction validity window (unix seconds, 0 for unbounded)
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct TimeBounds {
    pub min_time: u64,
    pub max_time: u64,
}

/// Transaction memo
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Memo {
    #[default]
    None,
    Text(String<MEMO_TEXT_MAX>),
    Id(u64),
    Hash([u8; 32]),
    Return([u8; 32]),
}

/// Alphanumeric asset code, 1-4 or 5-12 characters depending on asset type
#[derive(Clone, PartialEq, Debug)]
pub enum AssetCode {
    AlphaNum4(String<4>),
    AlphaNum12(String<12>),
}

impl AssetCode {
    pub fn as_str(&self) -> &str {
        match self {
            AssetCode::AlphaNum4(c) => c.as_str(),
            AssetCode::AlphaNum12(c) => c.as_str(),
        }
    }
}

/// Issued asset
#[derive(Clone, PartialEq, Debug)]
pub struct AlphaNum<const N: usize> {
    pub code: String<N>,
    pub issuer: AccountId,
}

/// Stellar asset
#[derive(Clone, PartialEq, Debug)]
pub enum Asset {
    /// Lumens (XLM)
    Native,
    AlphaNum4(AlphaNum<4>),
    AlphaNum12(AlphaNum<12>),
}

impl Asset {
    /// Asset code for display
    pub fn code(&self) -> &str {
        match self {
            Asset::Native => "XLM",
            Asset::AlphaNum4(a) => a.code.as_str(),
            Asset::AlphaNum12(a) => a.code.as_str(),
        }
    }

    pub fn issuer(&self) -> Option<&AccountId> {
        match self {
            Asset::Native => None,
            Asset::AlphaNum4(a) => Some(&a.issuer),
            Asset::AlphaNum12(a) => Some(&a.issuer),
        }
    }
}

/// Offer price as a rational `n / d`
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Price {
    pub n: u32,
    pub d: u32,
}

/// Signer key for [SetOptions]
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum SignerKey {
    Ed25519([u8; 32]),
    PreAuthTx([u8; 32]),
    HashX([u8; 32]),
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Signer {
    pub key: SignerKey,
    pub weight: u32,
}

/// Account option updates, unset fields are left unchanged
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SetOptions {
    pub inflation_dest: Option<AccountId>,
    pub clear_flags: Option<u32>,
    pub set_flags: Option<u32>,
    pub master_weight: Option<u32>,
    pub low_threshold: Option<u32>,
    pub med_threshold: Option<u32>,
    pub high_threshold: Option<u32>,
    pub home_domain: Option<String<HOME_DOMAIN_MAX>>,
    pub signer: Option<Signer>,
}

/// Operation bodies, amounts are in stroops (1e-7)
#[derive(Clone, PartialEq, Debug)]
pub enum OperationBody {
    CreateAccount {
        destination: AccountId,
        starting_balance: i64,
    },
    Payment {
        destination: AccountId,
        asset: Asset,
        amount: i64,
    },
    PathPayment {
        send_asset: Asset,
        send_max: i64,
        destination: AccountId,
        dest_asset: Asset,
        dest_amount: i64,
        path: Vec<Asset, PATH_PAYMENT_MAX>,
    },
    ManageOffer {
        selling: Asset,
        buying: Asset,
        amount: i64,
        price: Price,
        offer_id: u64,
    },
    CreatePassiveOffer {
        selling: Asset,
        buying: Asset,
        amount: i64,
        price: Price,
    },
    SetOptions(SetOptions),
    ChangeTrust {
        asset: Asset,
        limit: u64,
    },
    AllowTrust {
        trustor: AccountId,
        asset: AssetCode,
        authorize: bool,
    },
    AccountMerge {
        destination: AccountId,
    },
    ManageData {
        name: String<DATA_MAX>,
        value: Option<Vec<u8, DATA_MAX>>,
    },
    BumpSequence {
        bump_to: u64,
    },
}

impl OperationBody {
    /// XDR operation type discriminant
    pub fn kind(&self) -> u32 {
        match self {
            OperationBody::CreateAccount { .. } => 0,
            OperationBody::Payment { .. } => 1,
            OperationBody::PathPayment { .. } => 2,
            OperationBody::ManageOffer { .. } => 3,
            OperationBody::CreatePassiveOffer { .. } => 4,
            OperationBody::SetOptions(_) => 5,
            OperationBody::ChangeTrust { .. } => 6,
            OperationBody::AllowTrust { .. } => 7,
            OperationBody::AccountMerge { .. } => 8,
            OperationBody::ManageData { .. } => 10,
            OperationBody::BumpSequence { .. } => 11,
        }
    }

    /// Operation name for display
    pub fn name(&self) -> &'static str {
        match self {
            OperationBody::CreateAccount { .. } => "Create Account",
            OperationBody::Payment { .. } => "Payment",
            OperationBody::PathPayment { .. } => "Path Payment",
            OperationBody::ManageOffer { .. } => "Manage Offer",
            OperationBody::CreatePassiveOffer { .. } => "Passive Offer",
            OperationBody::SetOptions(_) => "Set Options",
            OperationBody::ChangeTrust { .. } => "Change Trust",
            OperationBody::AllowTrust { .. } => "Allow Trust",
            OperationBody::AccountMerge { .. } => "Account Merge",
            OperationBody::ManageData { .. } => "Manage Data",
            OperationBody::BumpSequence { .. } => "Bump Sequence",
        }
    }

    /// Whether the operation moves value or changes account authority,
    /// and so must be shown to the user before signing
    pub fn requires_confirmation(&self) -> bool {
        !matches!(
            self,
            OperationBody::ManageData { .. } | OperationBody::BumpSequence { .. }
        )
    }
}

/// Transaction operation
#[derive(Clone, PartialEq, Debug)]
pub struct Operation {
    /// Operation source, defaults to the transaction source when unset
    pub source_account: Option<AccountId>,
    pub body: OperationBody,
}

/// Signing request header, from which a [Transaction] is assembled
#[derive(Clone, PartialEq, Debug)]
pub struct SigningRequest {
    /// SLIP-10 derivation path (hardened indices)
    pub address_n: Vec<u32, MAX_PATH_LEN>,
    pub network_passphrase: AllocString,
    pub source_account: AccountId,
    pub fee: u32,
    pub sequence_number: u64,
    pub time_bounds: Option<TimeBounds>,
    pub memo: Memo,
    /// Declared operation count
    pub num_operations: usize,
}

/// Assembled transaction
#[derive(Clone, PartialEq, Debug)]
pub struct Transaction {
    pub source_account: AccountId,
    pub fee: u32,
    pub seq_num: u64,
    pub time_bounds: Option<TimeBounds>,
    pub memo: Memo,
    pub operations: AllocVec<Operation>,
}

impl Transaction {
    /// Build a transaction from a request header and the collected operations
    pub fn new(req: &SigningRequest, operations: AllocVec<Operation>) -> Result<Self, Error> {
        if operations.len() != req.num_operations {
            return Err(Error::OperationCountMismatch);
        }

        Ok(Self {
            source_account: req.source_account,
            fee: req.fee,
            seq_num: req.sequence_number,
            time_bounds: req.time_bounds,
            memo: req.memo.clone(),
            operations,
        })
    }
}
