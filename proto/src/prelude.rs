// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Prelude to simplify downstream use of protocol objects
//!

pub use crate::{
    codec::{Fields, Message, Value},
    common::*,
    stellar::*,
    DecodeError, MessageId, MessageType, Record,
};

#[cfg(feature = "debug-link")]
pub use crate::debug::*;
