// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Static message schemas, used to validate decoded payloads

use prost::encoding::WireType;

use crate::{common, stellar};

/// Field value kind
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum FieldKind {
    Bool,
    UInt32,
    UInt64,
    /// Zig-zag encoded signed integer
    SInt64,
    /// Enumeration limited to the listed values
    Enum(&'static [u32]),
    Bytes,
    Text,
    /// Nested record
    Message(&'static Schema),
}

impl FieldKind {
    /// Protobuf wire type for this field kind
    pub fn wire_type(&self) -> WireType {
        match self {
            FieldKind::Bool
            | FieldKind::UInt32
            | FieldKind::UInt64
            | FieldKind::SInt64
            | FieldKind::Enum(_) => WireType::Varint,
            FieldKind::Bytes | FieldKind::Text | FieldKind::Message(_) => {
                WireType::LengthDelimited
            }
        }
    }
}

/// Field definition
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FieldDef {
    pub number: u32,
    pub name: &'static str,
    pub kind: FieldKind,
    pub repeated: bool,
}

impl FieldDef {
    /// Define a singular field
    pub const fn new(number: u32, name: &'static str, kind: FieldKind) -> Self {
        Self {
            number,
            name,
            kind,
            repeated: false,
        }
    }

    /// Define a repeated field
    pub const fn repeated(number: u32, name: &'static str, kind: FieldKind) -> Self {
        Self {
            number,
            name,
            kind,
            repeated: true,
        }
    }
}

/// Message (or nested record) schema
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Schema {
    pub name: &'static str,
    /// Wire type identifier, `None` for nested records
    pub type_id: Option<u16>,
    pub fields: &'static [FieldDef],
}

impl Schema {
    /// Find a field definition by number
    pub fn field(&self, number: u32) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.number == number)
    }
}

static SCHEMAS: &[&Schema] = &[
    &common::FAILURE,
    &common::CANCEL,
    &common::BUTTON_REQUEST,
    &common::BUTTON_ACK,
    #[cfg(feature = "debug-link")]
    &crate::debug::DEBUG_LINK_DECISION,
    &stellar::SIGN_TX,
    &stellar::TX_OP_REQUEST,
    &stellar::CREATE_ACCOUNT_OP,
    &stellar::PAYMENT_OP,
    &stellar::PATH_PAYMENT_OP,
    &stellar::MANAGE_OFFER_OP,
    &stellar::CREATE_PASSIVE_OFFER_OP,
    &stellar::SET_OPTIONS_OP,
    &stellar::CHANGE_TRUST_OP,
    &stellar::ALLOW_TRUST_OP,
    &stellar::ACCOUNT_MERGE_OP,
    &stellar::MANAGE_DATA_OP,
    &stellar::BUMP_SEQUENCE_OP,
    &stellar::SIGNED_TX,
];

/// Look up the schema for a wire message type
pub fn lookup(type_id: u16) -> Option<&'static Schema> {
    SCHEMAS
        .iter()
        .copied()
        .find(|s| s.type_id == Some(type_id))
}
