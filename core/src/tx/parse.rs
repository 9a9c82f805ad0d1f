// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Validated conversions from wire messages to the transaction model

use heapless::{String, Vec};

use stellar_hw_proto::prelude::*;

use super::*;

/// Limit for XDR `int64` backed values carried as unsigned on the wire
const I64_MAX: u64 = i64::MAX as u64;

/// Limit for XDR `int32` backed values carried as unsigned on the wire
const I32_MAX: u32 = i32::MAX as u32;

/// Signer weights and thresholds are single bytes
const WEIGHT_MAX: u32 = 0xff;

fn account(s: &str) -> Result<AccountId, Error> {
    AccountId::from_strkey(s)
}

fn source(s: &Option<AllocString>) -> Result<Option<AccountId>, Error> {
    s.as_deref().map(account).transpose()
}

fn amount(v: i64) -> Result<i64, Error> {
    match v {
        v if v < 0 => Err(Error::InvalidAmount),
        v => Ok(v),
    }
}

fn weight(v: Option<u32>) -> Result<Option<u32>, Error> {
    match v {
        Some(w) if w > WEIGHT_MAX => Err(Error::InvalidAmount),
        w => Ok(w),
    }
}

fn bounded<const N: usize>(s: &str) -> Result<String<N>, Error> {
    String::try_from(s).map_err(|_| Error::InvalidLength)
}

fn asset_code<const N: usize>(code: Option<&str>) -> Result<String<N>, Error> {
    let code = code.ok_or(Error::InvalidAssetCode)?;

    if code.is_empty() || !code.bytes().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidAssetCode);
    }

    String::try_from(code).map_err(|_| Error::InvalidAssetCode)
}

fn key32(d: &[u8]) -> Result<[u8; 32], Error> {
    d.try_into().map_err(|_| Error::InvalidLength)
}

impl TryFrom<&StellarAsset> for Asset {
    type Error = Error;

    fn try_from(a: &StellarAsset) -> Result<Self, Self::Error> {
        let issuer = || -> Result<AccountId, Error> {
            account(a.issuer.as_deref().ok_or(Error::InvalidAccount)?)
        };

        let asset = match a.asset_type {
            StellarAssetType::Native => Asset::Native,
            StellarAssetType::Alphanum4 => Asset::AlphaNum4(AlphaNum {
                code: asset_code(a.code.as_deref())?,
                issuer: issuer()?,
            }),
            StellarAssetType::Alphanum12 => Asset::AlphaNum12(AlphaNum {
                code: asset_code(a.code.as_deref())?,
                issuer: issuer()?,
            }),
        };

        Ok(asset)
    }
}

impl TryFrom<&StellarSignTx> for SigningRequest {
    type Error = Error;

    fn try_from(tx: &StellarSignTx) -> Result<Self, Self::Error> {
        let address_n = Vec::from_slice(&tx.address_n).map_err(|_| Error::InvalidPath)?;

        let num_operations = tx.num_operations as usize;
        if num_operations == 0 || num_operations > MAX_OPERATIONS {
            return Err(Error::InvalidOperationCount);
        }

        if tx.sequence_number > I64_MAX {
            return Err(Error::InvalidAmount);
        }

        let time_bounds = match (tx.timebounds_start, tx.timebounds_end) {
            (None, None) => None,
            (start, end) => Some(TimeBounds {
                min_time: start.unwrap_or(0) as u64,
                max_time: end.unwrap_or(0) as u64,
            }),
        };

        let memo_hash = || -> Result<[u8; 32], Error> {
            tx.memo_hash
                .as_deref()
                .ok_or(Error::InvalidMemo)
                .and_then(key32)
        };

        let memo = match tx.memo_type {
            StellarMemoType::None => Memo::None,
            StellarMemoType::Text => {
                let t = tx.memo_text.as_deref().ok_or(Error::InvalidMemo)?;
                Memo::Text(String::try_from(t).map_err(|_| Error::InvalidMemo)?)
            }
            StellarMemoType::Id => Memo::Id(tx.memo_id.ok_or(Error::InvalidMemo)?),
            StellarMemoType::Hash => Memo::Hash(memo_hash()?),
            StellarMemoType::Return => Memo::Return(memo_hash()?),
        };

        Ok(Self {
            address_n,
            network_passphrase: tx.network_passphrase.clone(),
            source_account: account(&tx.source_account)?,
            fee: tx.fee,
            sequence_number: tx.sequence_number,
            time_bounds,
            memo,
            num_operations,
        })
    }
}

impl TryFrom<&StellarCreateAccountOp> for Operation {
    type Error = Error;

    fn try_from(op: &StellarCreateAccountOp) -> Result<Self, Self::Error> {
        Ok(Self {
            source_account: source(&op.source_account)?,
            body: OperationBody::CreateAccount {
                destination: account(&op.new_account)?,
                starting_balance: amount(op.starting_balance)?,
            },
        })
    }
}

impl TryFrom<&StellarPaymentOp> for Operation {
    type Error = Error;

    fn try_from(op: &StellarPaymentOp) -> Result<Self, Self::Error> {
        Ok(Self {
            source_account: source(&op.source_account)?,
            body: OperationBody::Payment {
                destination: account(&op.destination_account)?,
                asset: Asset::try_from(&op.asset)?,
                amount: amount(op.amount)?,
            },
        })
    }
}

impl TryFrom<&StellarPathPaymentOp> for Operation {
    type Error = Error;

    fn try_from(op: &StellarPathPaymentOp) -> Result<Self, Self::Error> {
        let mut path = Vec::new();
        for a in &op.paths {
            path.push(Asset::try_from(a)?)
                .map_err(|_| Error::InvalidLength)?;
        }

        Ok(Self {
            source_account: source(&op.source_account)?,
            body: OperationBody::PathPayment {
                send_asset: Asset::try_from(&op.send_asset)?,
                send_max: amount(op.send_max)?,
                destination: account(&op.destination_account)?,
                dest_asset: Asset::try_from(&op.destination_asset)?,
                dest_amount: amount(op.destination_amount)?,
                path,
            },
        })
    }
}

fn price(n: u32, d: u32) -> Result<Price, Error> {
    if n > I32_MAX || d > I32_MAX || d == 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(Price { n, d })
}

impl TryFrom<&StellarManageOfferOp> for Operation {
    type Error = Error;

    fn try_from(op: &StellarManageOfferOp) -> Result<Self, Self::Error> {
        if op.offer_id > I64_MAX {
            return Err(Error::InvalidAmount);
        }

        Ok(Self {
            source_account: source(&op.source_account)?,
            body: OperationBody::ManageOffer {
                selling: Asset::try_from(&op.selling_asset)?,
                buying: Asset::try_from(&op.buying_asset)?,
                amount: amount(op.amount)?,
                price: price(op.price_n, op.price_d)?,
                offer_id: op.offer_id,
            },
        })
    }
}

impl TryFrom<&StellarCreatePassiveOfferOp> for Operation {
    type Error = Error;

    fn try_from(op: &StellarCreatePassiveOfferOp) -> Result<Self, Self::Error> {
        Ok(Self {
            source_account: source(&op.source_account)?,
            body: OperationBody::CreatePassiveOffer {
                selling: Asset::try_from(&op.selling_asset)?,
                buying: Asset::try_from(&op.buying_asset)?,
                amount: amount(op.amount)?,
                price: price(op.price_n, op.price_d)?,
            },
        })
    }
}

impl TryFrom<&StellarSetOptionsOp> for Operation {
    type Error = Error;

    fn try_from(op: &StellarSetOptionsOp) -> Result<Self, Self::Error> {
        let signer = match (op.signer_type, &op.signer_key, op.signer_weight) {
            (None, None, None) => None,
            (Some(t), Some(k), Some(weight)) => {
                if weight > WEIGHT_MAX {
                    return Err(Error::InvalidAmount);
                }

                let k = key32(k)?;
                let key = match t {
                    StellarSignerType::Account => SignerKey::Ed25519(k),
                    StellarSignerType::PreAuth => SignerKey::PreAuthTx(k),
                    StellarSignerType::Hash => SignerKey::HashX(k),
                };

                Some(Signer { key, weight })
            }
            // Partial signer description
            _ => return Err(Error::InvalidSigner),
        };

        let options = SetOptions {
            inflation_dest: source(&op.inflation_destination_account)?,
            clear_flags: op.clear_flags,
            set_flags: op.set_flags,
            master_weight: weight(op.master_weight)?,
            low_threshold: weight(op.low_threshold)?,
            med_threshold: weight(op.medium_threshold)?,
            high_threshold: weight(op.high_threshold)?,
            home_domain: op.home_domain.as_deref().map(bounded).transpose()?,
            signer,
        };

        Ok(Self {
            source_account: source(&op.source_account)?,
            body: OperationBody::SetOptions(options),
        })
    }
}

impl TryFrom<&StellarChangeTrustOp> for Operation {
    type Error = Error;

    fn try_from(op: &StellarChangeTrustOp) -> Result<Self, Self::Error> {
        if op.limit > I64_MAX {
            return Err(Error::InvalidAmount);
        }

        Ok(Self {
            source_account: source(&op.source_account)?,
            body: OperationBody::ChangeTrust {
                asset: Asset::try_from(&op.asset)?,
                limit: op.limit,
            },
        })
    }
}

impl TryFrom<&StellarAllowTrustOp> for Operation {
    type Error = Error;

    fn try_from(op: &StellarAllowTrustOp) -> Result<Self, Self::Error> {
        let code = op.asset_code.as_deref();
        let asset = match op.asset_type {
            StellarAssetType::Alphanum4 => AssetCode::AlphaNum4(asset_code(code)?),
            StellarAssetType::Alphanum12 => AssetCode::AlphaNum12(asset_code(code)?),
            StellarAssetType::Native => return Err(Error::InvalidAssetCode),
        };

        Ok(Self {
            source_account: source(&op.source_account)?,
            body: OperationBody::AllowTrust {
                trustor: account(&op.trusted_account)?,
                asset,
                authorize: op.is_authorized,
            },
        })
    }
}

impl TryFrom<&StellarAccountMergeOp> for Operation {
    type Error = Error;

    fn try_from(op: &StellarAccountMergeOp) -> Result<Self, Self::Error> {
        Ok(Self {
            source_account: source(&op.source_account)?,
            body: OperationBody::AccountMerge {
                destination: account(&op.destination_account)?,
            },
        })
    }
}

impl TryFrom<&StellarManageDataOp> for Operation {
    type Error = Error;

    fn try_from(op: &StellarManageDataOp) -> Result<Self, Self::Error> {
        if op.key.is_empty() {
            return Err(Error::InvalidLength);
        }

        let value = match &op.value {
            Some(v) => Some(Vec::from_slice(v).map_err(|_| Error::InvalidLength)?),
            None => None,
        };

        Ok(Self {
            source_account: source(&op.source_account)?,
            body: OperationBody::ManageData {
                name: bounded(&op.key)?,
                value,
            },
        })
    }
}

impl TryFrom<&StellarBumpSequenceOp> for Operation {
    type Error = Error;

    fn try_from(op: &StellarBumpSequenceOp) -> Result<Self, Self::Error> {
        if op.bump_to > I64_MAX {
            return Err(Error::InvalidAmount);
        }

        Ok(Self {
            source_account: source(&op.source_account)?,
            body: OperationBody::BumpSequence {
                bump_to: op.bump_to,
            },
        })
    }
}
