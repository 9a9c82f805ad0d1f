// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Debug-link messages, used by test harnesses to inject user decisions
//!
//! Only available with the `debug-link` feature, production builds do not
//! carry a schema for these messages and will reject them as unknown.

use alloc::string::String;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::Display;

use crate::{
    schema::{FieldDef, FieldKind, Schema},
    DecodeError, Fields, MessageId, MessageType, Record,
};

/// Swipe direction for touch based confirmation
#[derive(Copy, Clone, PartialEq, Debug, Display, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum DebugSwipeDirection {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl DebugSwipeDirection {
    pub const VALUES: &'static [u32] = &[0, 1, 2, 3];
}

pub static DEBUG_LINK_DECISION: Schema = Schema {
    name: "DebugLinkDecision",
    type_id: Some(MessageId::DebugLinkDecision as u16),
    fields: &[
        FieldDef::new(1, "yes_no", FieldKind::Bool),
        FieldDef::new(2, "swipe", FieldKind::Enum(DebugSwipeDirection::VALUES)),
        FieldDef::new(3, "input", FieldKind::Text),
    ],
};

/// Inject a decision for the currently displayed prompt
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DebugLinkDecision {
    /// Explicit confirm (`true`) or reject (`false`)
    pub yes_no: Option<bool>,
    pub swipe: Option<DebugSwipeDirection>,
    /// Text input for prompts expecting an entry
    pub input: Option<String>,
}

impl DebugLinkDecision {
    /// Decision with an explicit yes / no answer
    pub fn yes_no(yes: bool) -> Self {
        Self {
            yes_no: Some(yes),
            ..Default::default()
        }
    }
}

impl Record for DebugLinkDecision {
    fn schema() -> &'static Schema {
        &DEBUG_LINK_DECISION
    }

    fn to_fields(&self) -> Fields {
        let mut f = Fields::new();
        f.set_opt(1, self.yes_no).set_opt(3, self.input.clone());
        if let Some(s) = self.swipe {
            f.set_enum(2, s);
        }
        f
    }

    fn from_fields(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            yes_no: fields.bool(1)?,
            swipe: fields.enumeration(2)?,
            input: fields.text(3)?,
        })
    }
}

impl MessageType for DebugLinkDecision {
    const ID: MessageId = MessageId::DebugLinkDecision;
}
