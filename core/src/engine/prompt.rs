// Copyright (c) 2022-2023 The MobileCoin Foundation

use core::fmt;

use crate::{
    helpers::{fmt_amount, network_name},
    tx::{AccountId, Asset, Memo, Operation, OperationBody, Signer, SignerKey, TimeBounds},
};

/// Structured confirmation prompt, rendered by the [Driver][super::Driver]
#[derive(Clone, PartialEq, Debug)]
pub enum Prompt<'a> {
    /// Transaction network and source account
    Header {
        network_passphrase: &'a str,
        source_account: &'a AccountId,
    },
    /// Transaction validity window
    TimeBounds(&'a TimeBounds),
    /// Operation `index` of `count`
    Operation {
        index: usize,
        count: usize,
        operation: &'a Operation,
    },
    /// Final fee / memo confirmation prior to signing
    Final {
        fee: u32,
        memo: &'a Memo,
        num_operations: usize,
    },
}

impl<'a> Prompt<'a> {
    /// Prompt title
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::Header { .. } => "Sign Stellar Tx",
            Prompt::TimeBounds(_) => "Time Bounds",
            Prompt::Operation { operation, .. } => operation.body.name(),
            Prompt::Final { .. } => "Confirm Tx",
        }
    }
}

/// Line-based rendering for text displays and logs
impl<'a> fmt::Display for Prompt<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buff = [0u8; 32];

        match self {
            Prompt::Header {
                network_passphrase,
                source_account,
            } => {
                writeln!(f, "{}", self.title())?;
                writeln!(f, "network: {}", network_name(network_passphrase))?;
                write!(f, "source: {source_account}")
            }
            Prompt::TimeBounds(t) => {
                writeln!(f, "{}", self.title())?;
                match t.min_time {
                    0 => writeln!(f, "from: any")?,
                    v => writeln!(f, "from: {v}")?,
                }
                match t.max_time {
                    0 => write!(f, "until: any"),
                    v => write!(f, "until: {v}"),
                }
            }
            Prompt::Operation {
                index,
                count,
                operation,
            } => {
                writeln!(f, "{}/{} {}", index + 1, count, self.title())?;
                if let Some(s) = &operation.source_account {
                    writeln!(f, "source: {s}")?;
                }
                fmt_operation(f, &operation.body, &mut buff)
            }
            Prompt::Final {
                fee,
                memo,
                num_operations,
            } => {
                writeln!(f, "{}", self.title())?;
                writeln!(f, "fee: {}", fmt_amount(*fee as i64, "XLM", &mut buff))?;
                match memo {
                    Memo::None => writeln!(f, "memo: none")?,
                    Memo::Text(t) => writeln!(f, "memo: {t}")?,
                    Memo::Id(id) => writeln!(f, "memo id: {id}")?,
                    Memo::Hash(h) => writeln!(f, "memo hash: {}", Hex(h))?,
                    Memo::Return(h) => writeln!(f, "memo return: {}", Hex(h))?,
                }
                write!(f, "operations: {num_operations}")
            }
        }
    }
}

fn fmt_asset(f: &mut fmt::Formatter<'_>, label: &str, asset: &Asset) -> fmt::Result {
    match asset.issuer() {
        Some(i) => writeln!(f, "{label}: {} ({i})", asset.code()),
        None => writeln!(f, "{label}: {}", asset.code()),
    }
}

fn fmt_signer(f: &mut fmt::Formatter<'_>, s: &Signer) -> fmt::Result {
    match s.weight {
        0 => writeln!(f, "remove signer")?,
        w => writeln!(f, "add signer, weight: {w}")?,
    }

    match &s.key {
        SignerKey::Ed25519(k) => write!(f, "account: {}", AccountId(*k)),
        SignerKey::PreAuthTx(h) => write!(f, "pre-auth tx: {}", Hex(h)),
        SignerKey::HashX(h) => write!(f, "hash(x): {}", Hex(h)),
    }
}

fn fmt_operation(f: &mut fmt::Formatter<'_>, op: &OperationBody, buff: &mut [u8]) -> fmt::Result {
    use OperationBody::*;

    match op {
        CreateAccount {
            destination,
            starting_balance,
        } => {
            writeln!(f, "account: {destination}")?;
            write!(f, "balance: {}", fmt_amount(*starting_balance, "XLM", buff))
        }
        Payment {
            destination,
            asset,
            amount,
        } => {
            writeln!(f, "to: {destination}")?;
            fmt_asset(f, "asset", asset)?;
            write!(f, "amount: {}", fmt_amount(*amount, asset.code(), buff))
        }
        PathPayment {
            send_asset,
            send_max,
            destination,
            dest_asset,
            dest_amount,
            path,
        } => {
            writeln!(f, "to: {destination}")?;
            writeln!(f, "send max: {}", fmt_amount(*send_max, send_asset.code(), buff))?;
            fmt_asset(f, "send", send_asset)?;
            writeln!(f, "receive: {}", fmt_amount(*dest_amount, dest_asset.code(), buff))?;
            fmt_asset(f, "receive", dest_asset)?;
            match path.is_empty() {
                true => write!(f, "path: direct"),
                false => {
                    write!(f, "path:")?;
                    for a in path.iter() {
                        write!(f, " {}", a.code())?;
                    }
                    Ok(())
                }
            }
        }
        ManageOffer {
            selling,
            buying,
            amount,
            price,
            offer_id,
        } => {
            match (*offer_id, *amount) {
                (0, _) => writeln!(f, "new offer")?,
                (id, 0) => writeln!(f, "delete offer {id}")?,
                (id, _) => writeln!(f, "update offer {id}")?,
            }
            writeln!(f, "sell: {}", fmt_amount(*amount, selling.code(), buff))?;
            fmt_asset(f, "buy", buying)?;
            write!(f, "price: {}/{}", price.n, price.d)
        }
        CreatePassiveOffer {
            selling,
            buying,
            amount,
            price,
        } => {
            writeln!(f, "sell: {}", fmt_amount(*amount, selling.code(), buff))?;
            fmt_asset(f, "buy", buying)?;
            write!(f, "price: {}/{}", price.n, price.d)
        }
        SetOptions(o) => {
            if let Some(d) = &o.inflation_dest {
                writeln!(f, "inflation: {d}")?;
            }
            if let Some(v) = o.clear_flags {
                writeln!(f, "clear flags: {v:#x}")?;
            }
            if let Some(v) = o.set_flags {
                writeln!(f, "set flags: {v:#x}")?;
            }
            if let Some(v) = o.master_weight {
                writeln!(f, "master weight: {v}")?;
            }
            if let Some(v) = o.low_threshold {
                writeln!(f, "low threshold: {v}")?;
            }
            if let Some(v) = o.med_threshold {
                writeln!(f, "medium threshold: {v}")?;
            }
            if let Some(v) = o.high_threshold {
                writeln!(f, "high threshold: {v}")?;
            }
            if let Some(d) = &o.home_domain {
                writeln!(f, "home domain: {d}")?;
            }
            match &o.signer {
                Some(s) => fmt_signer(f, s),
                None => Ok(()),
            }
        }
        ChangeTrust { asset, limit } => {
            match limit {
                0 => writeln!(f, "remove trust")?,
                _ => writeln!(f, "add trust")?,
            }
            fmt_asset(f, "asset", asset)?;
            let limit = i64::try_from(*limit).unwrap_or(i64::MAX);
            write!(f, "limit: {}", fmt_amount(limit, asset.code(), buff))
        }
        AllowTrust {
            trustor,
            asset,
            authorize,
        } => {
            match authorize {
                true => writeln!(f, "allow trust")?,
                false => writeln!(f, "revoke trust")?,
            }
            writeln!(f, "asset: {}", asset.as_str())?;
            write!(f, "trustor: {trustor}")
        }
        AccountMerge { destination } => write!(f, "into: {destination}"),
        ManageData { name, value } => match value {
            Some(_) => write!(f, "set data: {name}"),
            None => write!(f, "clear data: {name}"),
        },
        BumpSequence { bump_to } => write!(f, "bump to: {bump_to}"),
    }
}

/// Hex formatting helper for fixed size hashes
struct Hex<'a>(&'a [u8]);

impl<'a> fmt::Display for Hex<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
