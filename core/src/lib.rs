// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Stellar hardware wallet core
//!
//! This provides a common [Engine][engine] supporting Stellar transaction
//! assembly, user confirmation and signing for execution on hardware wallets.
//!
//! Interactions with the [Engine][engine] are performed via [Event][engine::Event]s and
//! [Output][engine::Output]s, see [stellar_hw_proto] for message objects and wire encodings.
//!
//! ## Signing a transaction
//!
//! Transactions are streamed to the device one message at a time, with every
//! security relevant step confirmed by the user before signing.
//!
//! 1. Issue [`StellarSignTx`][stellar_hw_proto::stellar::StellarSignTx] with the
//!    transaction header and declared operation count
//! 2. Respond to each [`ButtonRequest`][stellar_hw_proto::common::ButtonRequest] with a
//!    [`ButtonAck`][stellar_hw_proto::common::ButtonAck], the prompt is then displayed
//!    and the device waits for a user decision
//! 3. Respond to each [`StellarTxOpRequest`][stellar_hw_proto::stellar::StellarTxOpRequest]
//!    with the next operation message
//! 4. Following the final confirmation the device returns a
//!    [`StellarSignedTx`][stellar_hw_proto::stellar::StellarSignedTx] containing the
//!    account public key and transaction signature
//!
//! Failures are returned as [`Failure`][stellar_hw_proto::common::Failure] messages and
//! end the signing session, with the exception of requests received while a
//! session is active.
//!
//! The transaction is encoded to XDR ([tx::xdr]) and signed over the
//! network id and envelope type (see [engine::signer]).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use stellar_hw_proto::{self as proto};

pub mod engine;

pub mod helpers;

pub mod strkey;

pub mod tx;
