// Copyright (c) 2022-2023 The MobileCoin Foundation

/// Wire decoding errors
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[repr(u8)]
pub enum DecodeError {
    /// Frame or field shorter than declared
    #[cfg_attr(feature = "thiserror", error("truncated frame or field"))]
    Truncated = 0x01,

    /// Frame does not start with the expected magic
    #[cfg_attr(feature = "thiserror", error("invalid frame magic"))]
    InvalidMagic = 0x02,

    /// No schema for this message type
    #[cfg_attr(feature = "thiserror", error("unknown message type"))]
    UnknownType = 0x03,

    /// Message type does not match the requested object
    #[cfg_attr(feature = "thiserror", error("unexpected message type"))]
    UnexpectedType = 0x04,

    /// Malformed field key
    #[cfg_attr(feature = "thiserror", error("invalid field key"))]
    InvalidKey = 0x05,

    /// Field wire type does not match schema
    #[cfg_attr(feature = "thiserror", error("field wire type mismatch"))]
    WireTypeMismatch = 0x06,

    /// Groups are not supported
    #[cfg_attr(feature = "thiserror", error("unsupported wire type"))]
    UnsupportedWireType = 0x07,

    /// Value out of range for field (u32 overflow, bool > 1, unknown enum value)
    #[cfg_attr(feature = "thiserror", error("field value out of range"))]
    OutOfRange = 0x08,

    /// String field is not valid UTF-8
    #[cfg_attr(feature = "thiserror", error("invalid utf-8 string"))]
    InvalidUtf8 = 0x09,

    /// Required field not present
    #[cfg_attr(feature = "thiserror", error("missing required field"))]
    MissingField = 0x0a,

    /// Field value does not match the accessor type
    #[cfg_attr(feature = "thiserror", error("invalid field type"))]
    InvalidType = 0x0b,
}
