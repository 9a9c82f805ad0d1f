// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Common (non-Stellar) session messages

use alloc::string::String;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::Display;

use crate::{
    schema::{FieldDef, FieldKind, Schema},
    DecodeError, Fields, MessageId, MessageType, Record,
};

/// Failure codes reported to the host
#[derive(Copy, Clone, PartialEq, Debug, Display, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum FailureType {
    UnexpectedMessage = 1,
    ButtonExpected = 2,
    DataError = 3,
    ActionCancelled = 4,
    PinExpected = 5,
    ProcessError = 9,
    NotInitialized = 11,
    Busy = 15,
    FirmwareError = 99,
}

impl FailureType {
    pub const VALUES: &'static [u32] = &[1, 2, 3, 4, 5, 9, 11, 15, 99];
}

/// Reason codes attached to a [ButtonRequest]
#[derive(Copy, Clone, PartialEq, Debug, Display, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum ButtonRequestType {
    Other = 1,
    ConfirmOutput = 3,
    ProtectCall = 7,
    SignTx = 8,
}

impl ButtonRequestType {
    pub const VALUES: &'static [u32] = &[1, 3, 7, 8];
}

pub static FAILURE: Schema = Schema {
    name: "Failure",
    type_id: Some(MessageId::Failure as u16),
    fields: &[
        FieldDef::new(1, "code", FieldKind::Enum(FailureType::VALUES)),
        FieldDef::new(2, "message", FieldKind::Text),
    ],
};

pub static CANCEL: Schema = Schema {
    name: "Cancel",
    type_id: Some(MessageId::Cancel as u16),
    fields: &[],
};

pub static BUTTON_REQUEST: Schema = Schema {
    name: "ButtonRequest",
    type_id: Some(MessageId::ButtonRequest as u16),
    fields: &[FieldDef::new(
        1,
        "code",
        FieldKind::Enum(ButtonRequestType::VALUES),
    )],
};

pub static BUTTON_ACK: Schema = Schema {
    name: "ButtonAck",
    type_id: Some(MessageId::ButtonAck as u16),
    fields: &[],
};

/// Failure response
#[derive(Clone, PartialEq, Debug)]
pub struct Failure {
    pub code: Option<FailureType>,
    pub message: Option<String>,
}

impl Failure {
    pub fn new(code: FailureType, message: &str) -> Self {
        Self {
            code: Some(code),
            message: Some(message.into()),
        }
    }
}

impl Record for Failure {
    fn schema() -> &'static Schema {
        &FAILURE
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        if let Some(c) = self.code {
            f.set_enum(1, c);
        }
        f.set_opt(2, self.message.clone());
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            code: fields.enumeration(1)?,
            message: fields.text(2)?,
        })
    }
}

impl MessageType for Failure {
    const ID: MessageId = MessageId::Failure;
}

/// Device requests a user interaction, host should reply with [ButtonAck]
#[derive(Clone, PartialEq, Debug)]
pub struct ButtonRequest {
    pub code: Option<ButtonRequestType>,
}

impl Record for ButtonRequest {
    fn schema() -> &'static Schema {
        &BUTTON_REQUEST
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        if let Some(c) = self.code {
            f.set_enum(1, c);
        }
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            code: fields.enumeration(1)?,
        })
    }
}

impl MessageType for ButtonRequest {
    const ID: MessageId = MessageId::ButtonRequest;
}

/// Define an empty message type
macro_rules! empty_message {
    ($t:ident, $schema:ident) => {
        #[derive(Clone, PartialEq, Debug, Default)]
        pub struct $t {}

        impl Record for $t {
            fn schema() -> &'static Schema {
                &$schema
            }

            fn to_fields(&self) -> Fields {
                Fields::new()
            }

            fn from_fields(_fields: &Fields) -> Result<Self, DecodeError> {
                Ok(Self {})
            }
        }

        impl MessageType for $t {
            const ID: MessageId = MessageId::$t;
        }
    };
}

empty_message!(ButtonAck, BUTTON_ACK);
empty_message!(Cancel, CANCEL);

pub(crate) use empty_message;
