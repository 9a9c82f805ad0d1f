// Copyright (c) 2022-2023 The MobileCoin Foundation

use stellar_hw_proto::{common::FailureType, DecodeError};

/// [Engine][super::Engine] errors
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[repr(u8)]
pub enum Error {
    /// Invalid argument length
    #[cfg_attr(feature = "thiserror", error("Invalid argument length"))]
    InvalidLength = 0x00,

    /// Unexpected message for the current state
    #[cfg_attr(feature = "thiserror", error("Unexpected message"))]
    UnexpectedMessage = 0x01,

    /// Message decoding failed
    #[cfg_attr(feature = "thiserror", error("Invalid message"))]
    InvalidMessage = 0x02,

    /// Declared operation count out of range
    #[cfg_attr(feature = "thiserror", error("Invalid operation count"))]
    InvalidOperationCount = 0x03,

    /// Session ended with fewer operations than declared
    #[cfg_attr(feature = "thiserror", error("Operation count mismatch"))]
    OperationCountMismatch = 0x04,

    /// Debug decision with no outcome
    #[cfg_attr(feature = "thiserror", error("Invalid decision"))]
    InvalidDecision = 0x05,

    /// Signing session already active
    #[cfg_attr(feature = "thiserror", error("Signing session busy"))]
    SessionBusy = 0x06,

    /// Action rejected by the user
    #[cfg_attr(feature = "thiserror", error("Action cancelled by user"))]
    UserRejected = 0x07,

    /// Key storage locked
    #[cfg_attr(feature = "thiserror", error("Key unavailable"))]
    KeyUnavailable = 0x08,

    /// Invalid account address
    #[cfg_attr(feature = "thiserror", error("Invalid account"))]
    InvalidAccount = 0x09,

    /// Invalid asset code
    #[cfg_attr(feature = "thiserror", error("Invalid asset code"))]
    InvalidAssetCode = 0x0a,

    /// Amount or weight out of range
    #[cfg_attr(feature = "thiserror", error("Invalid amount"))]
    InvalidAmount = 0x0b,

    /// Invalid memo
    #[cfg_attr(feature = "thiserror", error("Invalid memo"))]
    InvalidMemo = 0x0c,

    /// Invalid payment path
    #[cfg_attr(feature = "thiserror", error("Invalid path"))]
    InvalidPath = 0x0d,

    /// Incomplete signer description
    #[cfg_attr(feature = "thiserror", error("Invalid signer"))]
    InvalidSigner = 0x0e,

    /// Invalid engine state
    #[cfg_attr(feature = "thiserror", error("invalid engine state"))]
    InvalidState = 0x20,

    /// Message encoding failed
    #[cfg_attr(feature = "thiserror", error("encoding failed"))]
    EncodingFailed = 0x21,
}

/// Error classes, determining how a failure is reported to the host
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ErrorKind {
    /// Malformed or unexpected message, wrong operation count
    Protocol,
    /// Expected outcome of a rejected prompt
    UserRejected,
    /// Request arrived during an active session
    SessionBusy,
    /// Device locked
    KeyUnavailable,
    /// Transaction cannot be canonically encoded
    Encoding,
    /// Firmware fault
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use Error::*;

        match self {
            UnexpectedMessage | InvalidMessage | InvalidOperationCount
            | OperationCountMismatch | InvalidDecision => ErrorKind::Protocol,
            SessionBusy => ErrorKind::SessionBusy,
            UserRejected => ErrorKind::UserRejected,
            KeyUnavailable => ErrorKind::KeyUnavailable,
            InvalidLength | InvalidAccount | InvalidAssetCode | InvalidAmount | InvalidMemo
            | InvalidPath | InvalidSigner => ErrorKind::Encoding,
            InvalidState | EncodingFailed => ErrorKind::Internal,
        }
    }

    /// Failure code reported to the host
    pub fn failure_type(&self) -> FailureType {
        match (self.kind(), self) {
            (ErrorKind::Protocol, Error::UnexpectedMessage | Error::OperationCountMismatch) => {
                FailureType::UnexpectedMessage
            }
            (ErrorKind::Protocol, _) => FailureType::DataError,
            (ErrorKind::UserRejected, _) => FailureType::ActionCancelled,
            (ErrorKind::SessionBusy, _) => FailureType::Busy,
            (ErrorKind::KeyUnavailable, _) => FailureType::PinExpected,
            (ErrorKind::Encoding, _) => FailureType::DataError,
            (ErrorKind::Internal, _) => FailureType::FirmwareError,
        }
    }

    /// Whether the error ends the active session
    pub fn is_terminal(&self) -> bool {
        self.kind() != ErrorKind::SessionBusy
    }

    pub fn as_str(&self) -> &'static str {
        use Error::*;

        match self {
            InvalidLength => "Invalid length",
            UnexpectedMessage => "Unexpected message",
            InvalidMessage => "Invalid message",
            InvalidOperationCount => "Invalid operation count",
            OperationCountMismatch => "Operation count mismatch",
            InvalidDecision => "Invalid decision",
            SessionBusy => "Device busy",
            UserRejected => "Action cancelled by user",
            KeyUnavailable => "Device locked",
            InvalidAccount => "Invalid account",
            InvalidAssetCode => "Invalid asset code",
            InvalidAmount => "Invalid amount",
            InvalidMemo => "Invalid memo",
            InvalidPath => "Invalid path",
            InvalidSigner => "Invalid signer",
            InvalidState => "Invalid state",
            EncodingFailed => "Encoding failed",
        }
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::UnknownType | DecodeError::UnexpectedType => Error::UnexpectedMessage,
            _ => Error::InvalidMessage,
        }
    }
}

impl From<encdec::Error> for Error {
    fn from(_: encdec::Error) -> Self {
        Error::EncodingFailed
    }
}
