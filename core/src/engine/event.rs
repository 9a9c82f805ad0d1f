// Copyright (c) 2022-2023 The MobileCoin Foundation

use stellar_hw_proto::prelude::*;

#[cfg(feature = "debug-link")]
use super::confirm::Decision;
use super::Error;
use crate::tx::{Operation, SigningRequest};

/// [`Engine`][super::Engine] input events, decoded from host [Message]s
#[derive(Clone, PartialEq, Debug)]
pub enum Event {
    /// Start a signing session
    SignTx(SigningRequest),

    /// Next transaction operation
    Operation(Operation),

    /// Host acknowledged a button request
    ButtonAck,

    /// Host aborted the session
    Cancel,

    /// Injected user decision
    #[cfg(feature = "debug-link")]
    Decision(Decision),
}

/// Helper for decoding operation messages to events
fn decode_op<T>(m: &Message) -> Result<Event, Error>
where
    T: MessageType,
    for<'a> Operation: TryFrom<&'a T, Error = Error>,
{
    let v = T::from_message(m)?;
    Operation::try_from(&v).map(Event::Operation)
}

impl Event {
    /// Parse an incoming [Message] to an engine event
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn parse(m: &Message) -> Result<Self, Error> {
        let id = MessageId::try_from(m.type_id).map_err(|_| Error::UnexpectedMessage)?;

        match id {
            MessageId::StellarSignTx => {
                let v = StellarSignTx::from_message(m)?;
                SigningRequest::try_from(&v).map(Event::SignTx)
            }

            MessageId::StellarCreateAccountOp => decode_op::<StellarCreateAccountOp>(m),
            MessageId::StellarPaymentOp => decode_op::<StellarPaymentOp>(m),
            MessageId::StellarPathPaymentOp => decode_op::<StellarPathPaymentOp>(m),
            MessageId::StellarManageOfferOp => decode_op::<StellarManageOfferOp>(m),
            MessageId::StellarCreatePassiveOfferOp => decode_op::<StellarCreatePassiveOfferOp>(m),
            MessageId::StellarSetOptionsOp => decode_op::<StellarSetOptionsOp>(m),
            MessageId::StellarChangeTrustOp => decode_op::<StellarChangeTrustOp>(m),
            MessageId::StellarAllowTrustOp => decode_op::<StellarAllowTrustOp>(m),
            MessageId::StellarAccountMergeOp => decode_op::<StellarAccountMergeOp>(m),
            MessageId::StellarManageDataOp => decode_op::<StellarManageDataOp>(m),
            MessageId::StellarBumpSequenceOp => decode_op::<StellarBumpSequenceOp>(m),

            MessageId::ButtonAck => {
                ButtonAck::from_message(m)?;
                Ok(Event::ButtonAck)
            }
            MessageId::Cancel => {
                Cancel::from_message(m)?;
                Ok(Event::Cancel)
            }

            #[cfg(feature = "debug-link")]
            MessageId::DebugLinkDecision => {
                let v = DebugLinkDecision::from_message(m)?;
                Decision::try_from(&v).map(Event::Decision)
            }

            // Device-originated or unsupported messages
            _ => Err(Error::UnexpectedMessage),
        }
    }
}
