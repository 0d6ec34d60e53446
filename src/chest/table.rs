//! The chest transition table.
//!
//! [`transition`] is a pure function of `(state, action)`. It never fails:
//! an action that cannot take effect in the current state yields an
//! [`Outcome`] carrying a [`NoOpReason`] and the unchanged state.

use super::state::{ChestAction, ChestState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an action left the chest as it was.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum NoOpReason {
    /// Open on an open chest.
    AlreadyOpen,
    /// Open on a locked chest.
    LockedShut,
    /// Close on a closed or locked chest.
    AlreadyClosed,
    /// Lock on a locked chest.
    AlreadyLocked,
    /// Lock on an open chest; the lid has to be shut first.
    MustCloseFirst,
    /// Unlock on a chest that is not locked.
    AlreadyUnlocked,
}

impl NoOpReason {
    /// The line shown to the player for this reason.
    pub fn message(&self) -> &'static str {
        match self {
            Self::AlreadyOpen => "The chest is already open!",
            Self::LockedShut => "The chest cannot be opened because it is locked.",
            Self::AlreadyClosed => "The chest is already closed.",
            Self::AlreadyLocked => "The chest is already locked.",
            Self::MustCloseFirst => "The chest must be closed before it can be locked.",
            Self::AlreadyUnlocked => "The chest is already unlocked.",
        }
    }
}

impl fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of applying one action to one state.
///
/// `to == from` exactly when `no_op` is set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Outcome {
    pub action: ChestAction,
    pub from: ChestState,
    pub to: ChestState,
    pub no_op: Option<NoOpReason>,
}

impl Outcome {
    /// Whether the action moved the chest to a different state.
    pub fn changed(&self) -> bool {
        self.no_op.is_none()
    }

    /// Whether the action was refused.
    pub fn is_no_op(&self) -> bool {
        self.no_op.is_some()
    }

    /// Human-readable description of what happened.
    pub fn message(&self) -> &'static str {
        match self.no_op {
            Some(reason) => reason.message(),
            None => match self.to {
                ChestState::Open => "The chest is now open.",
                ChestState::Closed if self.action == ChestAction::Unlock => {
                    "The chest is now unlocked."
                }
                ChestState::Closed => "The chest is now closed.",
                ChestState::Locked => "The chest is now locked.",
            },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Apply `action` to `state`.
///
/// | state  | action | result |
/// |--------|--------|--------|
/// | Locked | Unlock | Closed |
/// | Closed | Lock   | Locked |
/// | Closed | Open   | Open   |
/// | Open   | Close  | Closed |
///
/// Every other pair is a no-op.
///
/// # Example
///
/// ```
/// use treasure_chest::chest::{transition, ChestAction, ChestState, NoOpReason};
///
/// let outcome = transition(ChestState::Locked, ChestAction::Unlock);
/// assert_eq!(outcome.to, ChestState::Closed);
/// assert!(outcome.changed());
///
/// let outcome = transition(ChestState::Open, ChestAction::Lock);
/// assert_eq!(outcome.to, ChestState::Open);
/// assert_eq!(outcome.no_op, Some(NoOpReason::MustCloseFirst));
/// ```
pub fn transition(state: ChestState, action: ChestAction) -> Outcome {
    match guard(state, action) {
        Ok(to) => Outcome {
            action,
            from: state,
            to,
            no_op: None,
        },
        Err(reason) => Outcome {
            action,
            from: state,
            to: state,
            no_op: Some(reason),
        },
    }
}

/// The target state if `action` is permitted from `state`, otherwise the
/// reason it is refused.
fn guard(state: ChestState, action: ChestAction) -> Result<ChestState, NoOpReason> {
    use ChestAction as A;
    use ChestState as S;

    match (state, action) {
        (S::Locked, A::Unlock) => Ok(S::Closed),
        (S::Closed, A::Lock) => Ok(S::Locked),
        (S::Closed, A::Open) => Ok(S::Open),
        (S::Open, A::Close) => Ok(S::Closed),

        (S::Locked, A::Lock) => Err(NoOpReason::AlreadyLocked),
        (S::Locked, A::Open) => Err(NoOpReason::LockedShut),
        (S::Locked | S::Closed, A::Close) => Err(NoOpReason::AlreadyClosed),
        (S::Closed | S::Open, A::Unlock) => Err(NoOpReason::AlreadyUnlocked),
        (S::Open, A::Open) => Err(NoOpReason::AlreadyOpen),
        (S::Open, A::Lock) => Err(NoOpReason::MustCloseFirst),
    }
}
