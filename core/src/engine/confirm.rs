// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Confirmation multiplexer
//!
//! Each security relevant step is gated on a single prompt, moving
//! `Idle -> Shown -> Resolved`. Decisions are accepted from physical input
//! ([ButtonEvent]s via the [Approver], or touch [Decision]s) and, with the
//! `debug-link` feature, from injected `DebugLinkDecision` messages. All
//! sources resolve through [Confirmation::resolve].
//!
//! Decisions arriving while no prompt is shown are ignored.

use alloc::string::String;

use strum::Display;

#[cfg(feature = "debug-link")]
use stellar_hw_proto::debug::{DebugLinkDecision, DebugSwipeDirection};

#[cfg(feature = "debug-link")]
use super::Error;

/// Physical button events from the input layer
#[derive(Copy, Clone, PartialEq, Debug, Display)]
pub enum ButtonEvent {
    LeftButtonPress,
    RightButtonPress,
    LeftButtonRelease,
    RightButtonRelease,
    BothButtonsPress,
    BothButtonsRelease,
}

/// Decision source
#[derive(Copy, Clone, PartialEq, Debug, Display)]
pub enum Source {
    /// Buttons or touch screen
    Physical,
    /// Injected via debug link
    #[cfg(feature = "debug-link")]
    DebugLink,
}

#[derive(Copy, Clone, PartialEq, Debug, Display)]
pub enum Outcome {
    Confirmed,
    Rejected,
}

#[derive(Copy, Clone, PartialEq, Debug, Display)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Auxiliary decision payload for prompts needing more than yes / no
#[derive(Clone, PartialEq, Debug)]
pub enum Aux {
    Swipe(SwipeDirection),
    Input(String),
}

/// User decision for a displayed prompt, consumed once on resolution
#[derive(Clone, PartialEq, Debug)]
pub struct Decision {
    pub outcome: Outcome,
    pub aux: Option<Aux>,
}

impl Decision {
    pub const fn confirmed() -> Self {
        Self {
            outcome: Outcome::Confirmed,
            aux: None,
        }
    }

    pub const fn rejected() -> Self {
        Self {
            outcome: Outcome::Rejected,
            aux: None,
        }
    }

    /// Decision from a touch swipe, up / right confirm and down / left reject
    pub fn swipe(dir: SwipeDirection) -> Self {
        let outcome = match dir {
            SwipeDirection::Up | SwipeDirection::Right => Outcome::Confirmed,
            SwipeDirection::Down | SwipeDirection::Left => Outcome::Rejected,
        };

        Self {
            outcome,
            aux: Some(Aux::Swipe(dir)),
        }
    }
}

/// Map debug link decisions, `yes_no` takes precedence over `input`, then `swipe`
#[cfg(feature = "debug-link")]
impl TryFrom<&DebugLinkDecision> for Decision {
    type Error = Error;

    fn try_from(d: &DebugLinkDecision) -> Result<Self, Self::Error> {
        if let Some(yes) = d.yes_no {
            return match yes {
                true => Ok(Decision::confirmed()),
                false => Ok(Decision::rejected()),
            };
        }

        if let Some(text) = &d.input {
            return Ok(Decision {
                outcome: Outcome::Confirmed,
                aux: Some(Aux::Input(text.clone())),
            });
        }

        match d.swipe {
            Some(DebugSwipeDirection::Up) => Ok(Decision::swipe(SwipeDirection::Up)),
            Some(DebugSwipeDirection::Down) => Ok(Decision::swipe(SwipeDirection::Down)),
            Some(DebugSwipeDirection::Left) => Ok(Decision::swipe(SwipeDirection::Left)),
            Some(DebugSwipeDirection::Right) => Ok(Decision::swipe(SwipeDirection::Right)),
            None => Err(Error::InvalidDecision),
        }
    }
}

/// Prompt lifecycle
#[derive(Copy, Clone, PartialEq, Debug, Display)]
pub enum PromptState {
    /// No prompt displayed
    Idle,
    /// Prompt rendered, awaiting a decision
    Shown,
    /// Decision received
    Resolved(Outcome),
}

/// Button driven approval element
///
/// Right selects approve, left selects reject, releasing both buttons commits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Approver {
    state: ApproverState,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ApproverState {
    Deny,
    Allow,
}

impl Approver {
    /// Create a new [Approver], defaulting to reject
    pub const fn new() -> Self {
        Self {
            state: ApproverState::Deny,
        }
    }

    pub fn state(&self) -> ApproverState {
        self.state
    }

    /// Update [Approver] state, handling button events and returning the
    /// outcome once committed
    pub fn update(&mut self, btn: ButtonEvent) -> Option<Outcome> {
        match (self.state, btn) {
            (ApproverState::Deny, ButtonEvent::BothButtonsRelease) => Some(Outcome::Rejected),
            (ApproverState::Deny, ButtonEvent::RightButtonRelease) => {
                self.state = ApproverState::Allow;
                None
            }
            (ApproverState::Allow, ButtonEvent::BothButtonsRelease) => Some(Outcome::Confirmed),
            (ApproverState::Allow, ButtonEvent::LeftButtonRelease) => {
                self.state = ApproverState::Deny;
                None
            }
            _ => None,
        }
    }
}

impl Default for Approver {
    fn default() -> Self {
        Self::new()
    }
}

/// Single prompt confirmation state
#[derive(Clone, PartialEq, Debug)]
pub struct Confirmation {
    state: PromptState,
    approver: Approver,
}

impl Default for Confirmation {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmation {
    pub const fn new() -> Self {
        Self {
            state: PromptState::Idle,
            approver: Approver::new(),
        }
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    pub fn approver(&self) -> &Approver {
        &self.approver
    }

    /// Mark a prompt as rendered, ready to accept a decision
    pub fn show(&mut self) {
        self.state = PromptState::Shown;
        self.approver = Approver::new();
    }

    /// Resolve the shown prompt
    ///
    /// Returns the accepted [Decision], or `None` if no prompt is shown
    /// (the decision is dropped and state is unchanged).
    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    pub fn resolve(&mut self, source: Source, decision: Decision) -> Option<Decision> {
        if self.state != PromptState::Shown {
            #[cfg(feature = "log")]
            log::warn!(
                "Ignoring {} decision in prompt state {}",
                source,
                self.state
            );

            return None;
        }

        #[cfg(feature = "log")]
        log::debug!("{} decision: {:?}", source, decision);

        self.state = PromptState::Resolved(decision.outcome);

        Some(decision)
    }

    /// Feed a physical button event, resolving the prompt on commit
    pub fn input(&mut self, btn: ButtonEvent) -> Option<Decision> {
        if self.state != PromptState::Shown {
            return None;
        }

        match self.approver.update(btn)? {
            Outcome::Confirmed => self.resolve(Source::Physical, Decision::confirmed()),
            Outcome::Rejected => self.resolve(Source::Physical, Decision::rejected()),
        }
    }

    /// Force rejection, used on cancel / disconnect
    pub fn cancel(&mut self) {
        self.state = PromptState::Resolved(Outcome::Rejected);
    }

    /// Return to idle for the next prompt
    pub fn reset(&mut self) {
        self.state = PromptState::Idle;
        self.approver = Approver::new();
    }
}
