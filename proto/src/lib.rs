// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Protocol / wire message definitions for Stellar hardware wallet communication
//!
//! This module provides a protocol specification and reference implementation for
//! communication between a host and a Stellar signing device.
//!
//! Messages are carried in length-prefixed frames:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |     MAGIC ("##", 2-byte)      |     MESSAGE_TYPE (u16, BE)    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                    PAYLOAD_LENGTH (u32, BE)                   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! /                      PAYLOAD (protobuf)                       /
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Payloads use the protobuf wire format, described by a static [Schema] per
//! message type so that decoding validates field widths and enum ranges
//! before anything reaches the signing engine.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod codec;
pub mod common;
#[cfg(feature = "debug-link")]
pub mod debug;
pub mod prelude;
pub mod schema;
pub mod stellar;

mod error;
pub use error::DecodeError;

pub use codec::{Fields, Message, Value};
pub use schema::{FieldDef, FieldKind, Schema};

/// Wire message type identifiers
#[derive(Copy, Clone, Debug, PartialEq, strum::Display, num_enum::TryFromPrimitive)]
#[repr(u16)]
pub enum MessageId {
    /// Failure report from the device
    Failure = 3,
    /// Abort the active session
    Cancel = 20,
    /// Device requests a user interaction
    ButtonRequest = 26,
    /// Host acknowledges a [MessageId::ButtonRequest]
    ButtonAck = 27,

    /// Debug-link injected user decision
    DebugLinkDecision = 100,

    /// Start a Stellar signing session
    StellarSignTx = 202,
    /// Device requests the next operation
    StellarTxOpRequest = 203,

    StellarCreateAccountOp = 210,
    StellarPaymentOp = 211,
    StellarPathPaymentOp = 212,
    StellarManageOfferOp = 213,
    StellarCreatePassiveOfferOp = 214,
    StellarSetOptionsOp = 215,
    StellarChangeTrustOp = 216,
    StellarAllowTrustOp = 217,
    StellarAccountMergeOp = 218,
    StellarManageDataOp = 220,
    StellarBumpSequenceOp = 221,

    /// Signed transaction result
    StellarSignedTx = 230,
}

/// Nested protobuf record with a static schema
pub trait Record: Sized {
    /// Schema describing this record's fields
    fn schema() -> &'static Schema;

    /// Convert into generic [Fields]
    fn to_fields(&self) -> Fields;

    /// Parse from (schema validated) [Fields]
    fn from_fields(fields: &Fields) -> Result<Self, DecodeError>;
}

/// Top-level message with a fixed wire type identifier
pub trait MessageType: Record {
    const ID: MessageId;

    /// Build a generic [Message] from this object
    fn to_message(&self) -> Message {
        Message::new(Self::ID as u16, self.to_fields())
    }

    /// Parse an object of this type from a generic [Message]
    fn from_message(m: &Message) -> Result<Self, DecodeError> {
        if m.type_id != Self::ID as u16 {
            return Err(DecodeError::UnexpectedType);
        }
        Self::from_fields(&m.fields)
    }

    /// Encode this message into a wire frame
    fn encode_frame(&self) -> alloc::vec::Vec<u8> {
        self.to_message().encode()
    }
}
