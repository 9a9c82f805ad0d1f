// Copyright (c) 2022-2023 The MobileCoin Foundation

//! The [Engine] implements the Stellar transaction signing workflow.
//!
//! This handles [Event] inputs and returns [Output] responses to the caller,
//! gating each security relevant step on a user decision via the
//! [Confirmation] multiplexer. Messages may be fed directly via
//! [Engine::handle_message] or routed through a [Dispatcher] from
//! [Engine::dispatcher].
//!
//! Each step requiring confirmation is announced with a `ButtonRequest`,
//! the prompt is rendered once the host responds with `ButtonAck`, and the
//! engine then waits for a [Decision] before continuing.

use alloc::vec::Vec as AllocVec;

use strum::Display;

use stellar_hw_proto::{common::ButtonRequestType, Message, MessageId};

use crate::tx::{Operation, SigningRequest, Transaction};

mod confirm;
pub use confirm::{
    Approver, ApproverState, Aux, ButtonEvent, Confirmation, Decision, Outcome, PromptState,
    Source, SwipeDirection,
};

mod dispatch;
pub use dispatch::{Context, Dispatcher, Handler, MAX_HANDLERS};

mod error;
pub use error::{Error, ErrorKind};

mod event;
pub use event::Event;

mod output;
pub use output::{failure, Output};

mod prompt;
pub use prompt::Prompt;

pub mod signer;
pub use signer::{SignedResult, Slip10Key};

/// Engine internal state enumeration
#[derive(Copy, Clone, PartialEq, Debug, Display)]
pub enum State {
    /// Idle state, no transaction running
    Idle,
    /// Waiting for the host to acknowledge a button request
    AwaitButtonAck(Step),
    /// Prompt shown, waiting for a user decision
    Confirm(Step),
    /// Waiting for the operation with the provided index
    AwaitOperation(usize),
    /// Transaction signed
    Complete,
    /// Transaction denied / cancelled
    Deny,
    /// Transaction failed
    Error,
}

impl State {
    /// Check whether a signing session is in progress
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            State::AwaitButtonAck(_) | State::Confirm(_) | State::AwaitOperation(_)
        )
    }
}

/// Confirmation steps within a signing session
#[derive(Copy, Clone, PartialEq, Debug, Display)]
pub enum Step {
    /// Network and source account
    Header,
    /// Transaction validity window
    TimeBounds,
    /// Operation with the provided index
    Operation(usize),
    /// Fee and memo, prior to signing
    Final,
}

impl Step {
    fn button_request(&self) -> ButtonRequestType {
        match self {
            Step::Header | Step::TimeBounds => ButtonRequestType::Other,
            Step::Operation(_) => ButtonRequestType::ConfirmOutput,
            Step::Final => ButtonRequestType::SignTx,
        }
    }
}

/// Messages accepted by the engine
const ACCEPTED: &[MessageId] = &[
    MessageId::StellarSignTx,
    MessageId::StellarCreateAccountOp,
    MessageId::StellarPaymentOp,
    MessageId::StellarPathPaymentOp,
    MessageId::StellarManageOfferOp,
    MessageId::StellarCreatePassiveOfferOp,
    MessageId::StellarSetOptionsOp,
    MessageId::StellarChangeTrustOp,
    MessageId::StellarAllowTrustOp,
    MessageId::StellarAccountMergeOp,
    MessageId::StellarManageDataOp,
    MessageId::StellarBumpSequenceOp,
    MessageId::ButtonAck,
    MessageId::Cancel,
    #[cfg(feature = "debug-link")]
    MessageId::DebugLinkDecision,
];

static_assertions::const_assert!(ACCEPTED.len() <= MAX_HANDLERS);

/// In-progress signing session
#[derive(Clone, PartialEq, Debug)]
struct Session {
    request: SigningRequest,
    operations: AllocVec<Operation>,
}

/// [Engine] provides hardware-independent support for Stellar transaction signing
pub struct Engine<DRV: Driver> {
    state: State,
    session: Option<Session>,
    confirm: Confirmation,
    drv: DRV,
}

/// [`Driver`] trait provides platform support for [`Engine`] instances
pub trait Driver {
    /// SLIP-0010 derivation for ed25519 keys, failing with
    /// [Error::KeyUnavailable] while the device is locked
    fn derive_ed25519(&self, path: &[u32]) -> Result<Slip10Key, Error>;

    /// Render a confirmation prompt
    fn render_prompt(&mut self, prompt: &Prompt);
}

impl<T: Driver> Driver for &mut T {
    fn derive_ed25519(&self, path: &[u32]) -> Result<Slip10Key, Error> {
        T::derive_ed25519(self, path)
    }

    fn render_prompt(&mut self, prompt: &Prompt) {
        T::render_prompt(self, prompt)
    }
}

impl<DRV: Driver> Engine<DRV> {
    /// Create a new signing engine instance with the provided driver
    pub const fn new(drv: DRV) -> Self {
        Self {
            state: State::Idle,
            session: None,
            confirm: Confirmation::new(),
            drv,
        }
    }

    /// Handle incoming events
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn update(&mut self, evt: &Event) -> Result<Output, Error> {
        #[cfg(feature = "log")]
        log::debug!("event: {:02x?}", evt);

        let r = self.handle(evt);
        self.check(r)
    }

    /// Parse and handle an incoming message
    pub fn handle_message(&mut self, m: &Message) -> Result<Output, Error> {
        // Reject new sessions prior to parsing so a malformed request
        // can not abort the active session
        if m.type_id == MessageId::StellarSignTx as u16 && self.state.is_active() {
            return Err(Error::SessionBusy);
        }

        match Event::parse(m) {
            Ok(evt) => self.update(&evt),
            Err(e) => self.check(Err(e)),
        }
    }

    /// Build a [Dispatcher] routing accepted messages to this engine
    pub fn dispatcher() -> Dispatcher<Self> {
        let mut d = Dispatcher::new();

        for id in ACCEPTED {
            // Capacity is checked at compile time
            let r = d.register(*id as u16, handle_message::<DRV>);
            debug_assert!(r.is_ok(), "dispatcher full registering {id:?}");
        }

        d
    }

    /// Handle a physical button event for the displayed prompt
    pub fn input(&mut self, btn: ButtonEvent) -> Result<Output, Error> {
        let step = match self.state {
            State::Confirm(s) => s,
            _ => return Ok(Output::None),
        };

        let r = match self.confirm.input(btn) {
            Some(d) => self.decided(step, d),
            None => return Ok(Output::None),
        };

        self.check(r)
    }

    /// Apply a physical (touch) decision to the displayed prompt
    pub fn decide(&mut self, decision: Decision) -> Result<Output, Error> {
        let r = self.resolve(Source::Physical, decision);
        self.check(r)
    }

    /// Handle transport disconnection, tearing down any active session
    pub fn disconnect(&mut self) -> Result<(), Error> {
        let e = match self.state {
            State::AwaitOperation(_) => Error::OperationCountMismatch,
            State::AwaitButtonAck(_) | State::Confirm(_) => {
                self.confirm.cancel();
                Error::UserRejected
            }
            _ => {
                self.reset();
                return Ok(());
            }
        };

        #[cfg(feature = "log")]
        log::warn!("Disconnect in state {}: {}", self.state, e.as_str());

        self.fail(&e);

        Err(e)
    }

    /// Reset engine, dropping any active session
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.session = None;
        self.confirm.reset();
    }

    /// Fetch current engine state
    pub fn state(&self) -> State {
        self.state
    }

    /// Fetch current prompt state
    pub fn prompt_state(&self) -> PromptState {
        self.confirm.state()
    }

    /// Fetch operations received in the active session
    pub fn operations(&self) -> &[Operation] {
        match &self.session {
            Some(s) => &s.operations,
            None => &[],
        }
    }

    /// Fetch a reference to the platform driver
    pub fn driver(&self) -> &DRV {
        &self.drv
    }

    /// Fetch a mutable reference to the platform driver
    pub fn driver_mut(&mut self) -> &mut DRV {
        &mut self.drv
    }

    fn handle(&mut self, evt: &Event) -> Result<Output, Error> {
        match (self.state, evt) {
            // Single session at a time
            (s, Event::SignTx(_)) if s.is_active() => Err(Error::SessionBusy),

            (_, Event::SignTx(req)) => {
                self.session = Some(Session {
                    request: req.clone(),
                    operations: AllocVec::with_capacity(req.num_operations),
                });

                Ok(self.request(Step::Header))
            }

            (State::AwaitButtonAck(step), Event::ButtonAck) => self.show(step),

            (State::AwaitOperation(i), Event::Operation(op)) => self.add_operation(i, op),

            (_, Event::Cancel) => {
                self.confirm.cancel();
                Err(Error::UserRejected)
            }

            #[cfg(feature = "debug-link")]
            (_, Event::Decision(d)) => self.resolve(Source::DebugLink, d.clone()),

            _e => {
                #[cfg(feature = "log")]
                log::error!("Unexpected event in state {:?}: {:02x?}", self.state, _e);

                Err(Error::UnexpectedMessage)
            }
        }
    }

    /// Announce a confirmation step, awaiting `ButtonAck`
    fn request(&mut self, step: Step) -> Output {
        self.confirm.reset();
        self.state = State::AwaitButtonAck(step);

        Output::ButtonRequest(step.button_request())
    }

    /// Render the prompt for a step and wait for a decision
    fn show(&mut self, step: Step) -> Result<Output, Error> {
        let s = self.session.as_ref().ok_or(Error::InvalidState)?;
        let r = &s.request;

        let prompt = match step {
            Step::Header => Prompt::Header {
                network_passphrase: &r.network_passphrase,
                source_account: &r.source_account,
            },
            Step::TimeBounds => {
                Prompt::TimeBounds(r.time_bounds.as_ref().ok_or(Error::InvalidState)?)
            }
            Step::Operation(i) => Prompt::Operation {
                index: i,
                count: r.num_operations,
                operation: s.operations.get(i).ok_or(Error::InvalidState)?,
            },
            Step::Final => Prompt::Final {
                fee: r.fee,
                memo: &r.memo,
                num_operations: r.num_operations,
            },
        };

        self.drv.render_prompt(&prompt);

        self.confirm.show();
        self.state = State::Confirm(step);

        Ok(Output::Pending)
    }

    fn resolve(&mut self, source: Source, decision: Decision) -> Result<Output, Error> {
        let step = match self.state {
            State::Confirm(s) => s,
            _ => {
                #[cfg(feature = "log")]
                log::warn!("Ignoring {} decision in state {}", source, self.state);

                return Ok(Output::None);
            }
        };

        match self.confirm.resolve(source, decision) {
            Some(d) => self.decided(step, d),
            None => Ok(Output::None),
        }
    }

    fn decided(&mut self, step: Step, decision: Decision) -> Result<Output, Error> {
        #[cfg(feature = "log")]
        log::debug!("{} {}", step, decision.outcome);

        match decision.outcome {
            Outcome::Rejected => Err(Error::UserRejected),
            Outcome::Confirmed => self.advance(step),
        }
    }

    /// Move to the step following a confirmation
    fn advance(&mut self, step: Step) -> Result<Output, Error> {
        let s = self.session.as_ref().ok_or(Error::InvalidState)?;
        let time_bounds = s.request.time_bounds.is_some();

        match step {
            Step::Header if time_bounds => Ok(self.request(Step::TimeBounds)),
            Step::Header | Step::TimeBounds => Ok(self.next_operation(0)),
            Step::Operation(i) => Ok(self.next_operation(i + 1)),
            Step::Final => self.finalize(),
        }
    }

    /// Request operation `i`, or final confirmation once all operations are received
    fn next_operation(&mut self, i: usize) -> Output {
        let n = match &self.session {
            Some(s) => s.request.num_operations,
            None => 0,
        };

        if i < n {
            self.confirm.reset();
            self.state = State::AwaitOperation(i);
            Output::TxOpRequest
        } else {
            self.request(Step::Final)
        }
    }

    fn add_operation(&mut self, i: usize, op: &Operation) -> Result<Output, Error> {
        let s = self.session.as_mut().ok_or(Error::InvalidState)?;
        if s.operations.len() != i {
            return Err(Error::InvalidState);
        }

        s.operations.push(op.clone());

        match op.body.requires_confirmation() {
            true => Ok(self.request(Step::Operation(i))),
            false => Ok(self.next_operation(i + 1)),
        }
    }

    /// Encode and sign the assembled transaction, ending the session
    #[cfg_attr(feature = "noinline", inline(never))]
    fn finalize(&mut self) -> Result<Output, Error> {
        let Session {
            request,
            operations,
        } = self.session.take().ok_or(Error::InvalidState)?;

        let tx = Transaction::new(&request, operations)?;
        let xdr = tx.to_xdr()?;

        #[cfg(feature = "log")]
        log::debug!("tx xdr ({} bytes): {:02x?}", xdr.len(), xdr);

        let r = signer::sign(
            &self.drv,
            &request.address_n,
            &request.network_passphrase,
            &xdr,
        )?;

        self.confirm.reset();
        self.state = State::Complete;

        Ok(Output::SignedTx {
            public_key: r.public_key,
            signature: r.signature,
        })
    }

    /// Apply session teardown on failure
    fn check(&mut self, r: Result<Output, Error>) -> Result<Output, Error> {
        if let Err(e) = &r {
            self.fail(e);
        }
        r
    }

    /// Drop the active session following an error, busy errors leave state unchanged
    fn fail(&mut self, e: &Error) {
        if !e.is_terminal() {
            return;
        }

        #[cfg(feature = "log")]
        log::debug!("Session aborted in state {}: {}", self.state, e.as_str());

        self.session = None;
        self.confirm.reset();

        self.state = match e {
            Error::UserRejected => State::Deny,
            _ => State::Error,
        };
    }
}

impl<DRV: Driver> Context for Engine<DRV> {
    fn abort(&mut self, err: &Error) {
        self.fail(err)
    }
}

/// [Dispatcher] handler for engine messages
fn handle_message<DRV: Driver>(
    e: &mut Engine<DRV>,
    m: &Message,
) -> Result<Option<Message>, Error> {
    e.handle_message(m).map(|o| o.to_message())
}
