//! State transition history tracking.
//!
//! History records only transitions that changed state. [`StateHistory::record`]
//! returns a new history and leaves the original untouched;
//! [`StateHistory::push`] appends in place.

use super::state::{Action, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use treasure_chest::chest::{ChestAction, ChestState};
/// use treasure_chest::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ChestState::Locked,
///     to: ChestState::Closed,
///     action: ChestAction::Unlock,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, ChestState::Closed);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, A: Action> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The action that caused the transition
    pub action: A,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use treasure_chest::chest::{ChestAction, ChestState};
/// use treasure_chest::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: ChestState::Locked,
///         to: ChestState::Closed,
///         action: ChestAction::Unlock,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: ChestState::Closed,
///         to: ChestState::Open,
///         action: ChestAction::Open,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&ChestState::Locked, &ChestState::Closed, &ChestState::Open]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, A: Action> {
    transitions: Vec<StateTransition<S, A>>,
}

impl<S: State, A: Action> Default for StateHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> StateHistory<S, A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is not modified.
    pub fn record(&self, transition: StateTransition<S, A>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place.
    ///
    /// Owners that already hold the history mutably use this instead of
    /// [`record`](Self::record), which copies every earlier transition.
    pub fn push(&mut self, transition: StateTransition<S, A>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` when the history is empty or the timestamps run backwards.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S, A>] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
