// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Message dispatch
//!
//! Maps decoded message type identifiers to handlers, converting handler
//! and decoding errors to `Failure` responses so every request that
//! expects a response receives a well formed frame.

use alloc::vec::Vec as AllocVec;

use heapless::Vec;
use stellar_hw_proto::Message;

use super::{output::failure, Error};

/// Maximum registered handlers
pub const MAX_HANDLERS: usize = 24;

/// Message handler, returning an optional response
pub type Handler<C> = fn(&mut C, &Message) -> Result<Option<Message>, Error>;

/// Dispatch context, notified of failures occurring outside of handlers
pub trait Context {
    /// Abort any active session following a protocol error
    fn abort(&mut self, err: &Error);
}

/// Type-id keyed message dispatcher
pub struct Dispatcher<C> {
    handlers: Vec<(u16, Handler<C>), MAX_HANDLERS>,
}

impl<C> Default for Dispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Dispatcher<C> {
    pub const fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler for a message type, replacing any existing handler
    pub fn register(&mut self, type_id: u16, handler: Handler<C>) -> Result<(), Error> {
        if let Some(h) = self.handlers.iter_mut().find(|(t, _)| *t == type_id) {
            h.1 = handler;
            return Ok(());
        }

        self.handlers
            .push((type_id, handler))
            .map_err(|_| Error::InvalidState)
    }

    /// Fetch the handler for a given message type
    pub fn handler(&self, type_id: u16) -> Option<Handler<C>> {
        self.handlers
            .iter()
            .find(|(t, _)| *t == type_id)
            .map(|(_, h)| *h)
    }

    pub fn is_registered(&self, type_id: u16) -> bool {
        self.handler(type_id).is_some()
    }
}

impl<C: Context> Dispatcher<C> {
    /// Dispatch a decoded message, returning a response message if one is due
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn dispatch(&self, ctx: &mut C, m: &Message) -> Option<Message> {
        let h = match self.handler(m.type_id) {
            Some(h) => h,
            None => {
                #[cfg(feature = "log")]
                log::error!("No handler for message type {}", m.type_id);

                let e = Error::UnexpectedMessage;
                ctx.abort(&e);
                return Some(failure(&e));
            }
        };

        match h(ctx, m) {
            Ok(r) => r,
            Err(e) => {
                #[cfg(feature = "log")]
                log::debug!("Handler for message type {} failed: {}", m.type_id, e.as_str());

                Some(failure(&e))
            }
        }
    }

    /// Decode and dispatch a frame, returning an encoded response frame if one is due
    pub fn dispatch_frame(&self, ctx: &mut C, buff: &[u8]) -> Option<AllocVec<u8>> {
        let m = match Message::decode(buff) {
            Ok(v) => v,
            Err(e) => {
                #[cfg(feature = "log")]
                log::error!("Frame decode failed: {:?}", e);

                let e = Error::from(e);
                ctx.abort(&e);
                return Some(failure(&e).encode());
            }
        };

        self.dispatch(ctx, &m).map(|r| r.encode())
    }
}
