// Copyright (c) 2022-2023 The MobileCoin Foundation

use stellar_hw_proto::prelude::*;

use super::Error;

/// [`Engine`][super::Engine] outputs (in response to events), encoded to response [Message]s
#[derive(Clone, PartialEq, Debug)]
pub enum Output {
    /// No response, engine state unchanged
    None,

    /// Prompt displayed, awaiting a user decision
    Pending,

    /// Request the host acknowledge a user interaction
    ButtonRequest(ButtonRequestType),

    /// Request the next transaction operation
    TxOpRequest,

    /// Signed transaction
    SignedTx {
        public_key: [u8; 32],
        signature: [u8; 64],
    },
}

impl Output {
    /// Convert an [`Output`] to a response [Message], if one is to be sent
    pub fn to_message(&self) -> Option<Message> {
        let m = match self {
            Output::None | Output::Pending => return None,
            Output::ButtonRequest(code) => ButtonRequest { code: Some(*code) }.to_message(),
            Output::TxOpRequest => StellarTxOpRequest {}.to_message(),
            Output::SignedTx {
                public_key,
                signature,
            } => StellarSignedTx {
                public_key: public_key.to_vec(),
                signature: signature.to_vec(),
            }
            .to_message(),
        };

        Some(m)
    }
}

/// Build a [Failure] response for an engine error
pub fn failure(e: &Error) -> Message {
    Failure::new(e.failure_type(), e.as_str()).to_message()
}
