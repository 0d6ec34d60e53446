//! Interactive driver around a single chest.
//!
//! The chest itself only holds its state. A [`ChestSession`] is the boundary
//! layer that feeds it actions, keeps a timestamped history of the moves that
//! actually happened, and turns raw text into actions.

use crate::chest::{ChestAction, ChestState, Outcome, TreasureChest};
use crate::core::{ParseLabelError, StateHistory, StateTransition};
use chrono::Utc;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// History of chest state changes.
pub type ChestHistory = StateHistory<ChestState, ChestAction>;

/// A chest plus the record of what has been done to it.
#[derive(Clone, Debug, Default)]
pub struct ChestSession {
    chest: TreasureChest,
    history: ChestHistory,
    no_ops: usize,
}

/// Serializable snapshot of a session.
#[derive(Debug, Serialize)]
pub struct SessionReport<'a> {
    pub chest: &'a TreasureChest,
    pub description: String,
    pub history: &'a ChestHistory,
    /// First to last recorded transition; `None` before any transition.
    pub duration: Option<Duration>,
    pub no_ops: usize,
}

impl ChestSession {
    /// Start a session around `chest` with an empty history.
    pub fn new(chest: TreasureChest) -> Self {
        Self {
            chest,
            history: ChestHistory::new(),
            no_ops: 0,
        }
    }

    /// The chest being driven.
    pub fn chest(&self) -> &TreasureChest {
        &self.chest
    }

    /// Current state of the chest.
    pub fn state(&self) -> ChestState {
        self.chest.state()
    }

    /// Transitions that changed the chest's state, oldest first.
    pub fn history(&self) -> &ChestHistory {
        &self.history
    }

    /// Number of applied actions that had no effect.
    pub fn no_op_count(&self) -> usize {
        self.no_ops
    }

    /// Apply one action, recording it if it changed the state.
    pub fn apply(&mut self, action: ChestAction) -> Outcome {
        let outcome = self.chest.apply_outcome(action);
        if outcome.changed() {
            self.history.push(StateTransition {
                from: outcome.from,
                to: outcome.to,
                action,
                timestamp: Utc::now(),
            });
        } else {
            self.no_ops += 1;
        }
        info!(action = %action, state = %outcome.to, "{}", outcome.message());
        outcome
    }

    /// Parse `input` as an action and apply it.
    ///
    /// Text that names no action is rejected without touching the chest, so
    /// callers can tell bad input apart from a valid action that did nothing.
    pub fn apply_input(&mut self, input: &str) -> Result<Outcome, ParseLabelError> {
        let action = input
            .trim()
            .parse::<ChestAction>()
            .inspect_err(|err| debug!(input = %input, error = %err, "rejected chest input"))?;
        Ok(self.apply(action))
    }

    /// Apply every action in order.
    pub fn apply_all<I>(&mut self, actions: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = ChestAction>,
    {
        actions.into_iter().map(|action| self.apply(action)).collect()
    }

    /// Snapshot of the chest, its history and the no-op count.
    pub fn report(&self) -> SessionReport<'_> {
        SessionReport {
            chest: &self.chest,
            description: self.chest.describe(),
            history: &self.history,
            duration: self.history.duration(),
            no_ops: self.no_ops,
        }
    }

    /// End the session and keep the chest.
    pub fn into_chest(self) -> TreasureChest {
        self.chest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chest::NoOpReason;

    #[test]
    fn records_only_real_transitions() {
        let mut session = ChestSession::default();
        session.apply(ChestAction::Open);
        session.apply(ChestAction::Unlock);
        session.apply(ChestAction::Unlock);
        session.apply(ChestAction::Open);

        assert_eq!(session.state(), ChestState::Open);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.no_op_count(), 2);
        assert_eq!(
            session.history().get_path(),
            vec![&ChestState::Locked, &ChestState::Closed, &ChestState::Open]
        );
    }

    #[test]
    fn apply_input_parses_actions() {
        let mut session = ChestSession::default();
        let outcome = session.apply_input("  unlock\n").unwrap();
        assert_eq!(outcome.to, ChestState::Closed);
        assert_eq!(session.history().transitions()[0].action, ChestAction::Unlock);
    }

    #[test]
    fn invalid_input_is_distinct_from_no_op() {
        let mut session = ChestSession::default();

        let err = session.apply_input("smash").unwrap_err();
        assert_eq!(err.input(), "smash");
        assert_eq!(session.no_op_count(), 0);
        assert_eq!(session.state(), ChestState::Locked);

        let outcome = session.apply_input("open").unwrap();
        assert_eq!(outcome.no_op, Some(NoOpReason::LockedShut));
        assert_eq!(session.no_op_count(), 1);
    }

    #[test]
    fn apply_all_returns_outcome_per_action() {
        let mut session = ChestSession::new(TreasureChest::with_state(ChestState::Closed));
        let outcomes = session.apply_all([ChestAction::Open, ChestAction::Lock, ChestAction::Close]);

        let states: Vec<_> = outcomes.iter().map(|o| o.to).collect();
        assert_eq!(
            states,
            vec![ChestState::Open, ChestState::Open, ChestState::Closed]
        );
        assert_eq!(session.into_chest().state(), ChestState::Closed);
    }

    #[test]
    fn report_serializes_chest_and_history() {
        let mut session = ChestSession::default();
        session.apply(ChestAction::Unlock);

        let json = serde_json::to_value(session.report()).unwrap();
        assert_eq!(json["chest"]["state"], "Closed");
        assert_eq!(json["chest"]["descriptor"]["material"], "Iron");
        assert_eq!(json["no_ops"], 0);
        assert_eq!(json["history"]["transitions"][0]["from"], "Locked");
        assert!(json["description"]
            .as_str()
            .unwrap()
            .starts_with("A Closed chest"));
    }

    #[test]
    fn report_duration_follows_history() {
        let mut session = ChestSession::default();
        session.apply(ChestAction::Open);

        let json = serde_json::to_value(session.report()).unwrap();
        assert!(json["duration"].is_null());
        assert!(session.report().duration.is_none());

        session.apply(ChestAction::Unlock);
        let report = session.report();
        assert_eq!(report.duration, Some(Duration::ZERO));
        assert!(!serde_json::to_value(&report).unwrap()["duration"].is_null());
    }

    #[test]
    fn long_sessions_keep_every_transition() {
        const ROUNDS: usize = 10_000;

        let mut session = ChestSession::default();
        for _ in 0..ROUNDS {
            session.apply(ChestAction::Unlock);
            session.apply(ChestAction::Unlock);
            session.apply(ChestAction::Lock);
        }

        assert_eq!(session.state(), ChestState::Locked);
        assert_eq!(session.history().len(), 2 * ROUNDS);
        assert_eq!(session.no_op_count(), ROUNDS);

        let transitions = session.history().transitions();
        assert!(transitions.windows(2).all(|pair| pair[0].to == pair[1].from));
        assert_eq!(transitions[2 * ROUNDS - 1].action, ChestAction::Lock);
    }
}
