//! The treasure chest.
//!
//! A [`TreasureChest`] pairs an immutable [`ChestDescriptor`] with a single
//! mutable [`ChestState`]. State only changes through [`TreasureChest::apply`]
//! and friends, which run the pure [`transition`] table.

mod descriptor;
mod state;
mod table;

pub use descriptor::{ChestDescriptor, LockType, LootQuality, Material};
pub use state::{ChestAction, ChestState};
pub use table::{transition, NoOpReason, Outcome};

use crate::builder::ChestBuilder;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// A lockable chest.
///
/// Chests are independent values: cloning one gives a second chest with its
/// own state. A chest has no interior mutability; sharing one across threads
/// requires the caller's own lock around [`apply`](Self::apply).
///
/// # Example
///
/// ```
/// use treasure_chest::chest::{ChestAction, ChestState, TreasureChest};
///
/// let mut chest = TreasureChest::default();
/// assert_eq!(chest.state(), ChestState::Locked);
///
/// assert_eq!(chest.apply(ChestAction::Open), ChestState::Locked);
/// assert_eq!(chest.apply(ChestAction::Unlock), ChestState::Closed);
/// assert_eq!(chest.apply(ChestAction::Open), ChestState::Open);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub struct TreasureChest {
    state: ChestState,
    descriptor: ChestDescriptor,
}

impl TreasureChest {
    /// A locked chest with the given properties.
    pub fn new(descriptor: ChestDescriptor) -> Self {
        Self::with_descriptor_and_state(descriptor, ChestState::Locked)
    }

    /// A stock chest (iron, expert lock, green loot) starting in `state`.
    pub fn with_state(state: ChestState) -> Self {
        Self::with_descriptor_and_state(ChestDescriptor::default(), state)
    }

    /// A chest with the given properties starting in `state`.
    pub fn with_descriptor_and_state(descriptor: ChestDescriptor, state: ChestState) -> Self {
        Self { state, descriptor }
    }

    /// Start a fluent [`ChestBuilder`].
    pub fn builder() -> ChestBuilder {
        ChestBuilder::new()
    }

    /// Current state.
    pub fn state(&self) -> ChestState {
        self.state
    }

    /// The fixed properties set at construction.
    pub fn descriptor(&self) -> ChestDescriptor {
        self.descriptor
    }

    /// What the chest is built from.
    pub fn material(&self) -> Material {
        self.descriptor.material
    }

    /// Difficulty of the lock.
    pub fn lock_type(&self) -> LockType {
        self.descriptor.lock_type
    }

    /// Rarity of the loot inside.
    pub fn loot_quality(&self) -> LootQuality {
        self.descriptor.loot_quality
    }

    /// Apply `action` and return the resulting state.
    ///
    /// Actions that cannot take effect leave the state unchanged; compare
    /// the result with [`state`](Self::state) beforehand to detect them, or
    /// use [`apply_outcome`](Self::apply_outcome) for the reason.
    pub fn apply(&mut self, action: ChestAction) -> ChestState {
        self.apply_outcome(action).to
    }

    /// Apply `action` and return the full [`Outcome`].
    pub fn apply_outcome(&mut self, action: ChestAction) -> Outcome {
        let outcome = transition(self.state, action);
        match outcome.no_op {
            None => debug!(
                action = %action,
                from = %outcome.from,
                to = %outcome.to,
                "chest transitioned"
            ),
            Some(reason) => trace!(
                action = %action,
                state = %outcome.from,
                reason = ?reason,
                "chest action had no effect"
            ),
        }
        self.state = outcome.to;
        outcome
    }

    /// Open the lid. Only a closed chest opens.
    pub fn open(&mut self) -> Outcome {
        self.apply_outcome(ChestAction::Open)
    }

    /// Close the lid. Only an open chest closes.
    pub fn close(&mut self) -> Outcome {
        self.apply_outcome(ChestAction::Close)
    }

    /// Lock the chest. The lid has to be closed first.
    pub fn lock(&mut self) -> Outcome {
        self.apply_outcome(ChestAction::Lock)
    }

    /// Unlock the chest, leaving it closed.
    pub fn unlock(&mut self) -> Outcome {
        self.apply_outcome(ChestAction::Unlock)
    }

    /// Multi-line summary of state and properties for display.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl From<ChestDescriptor> for TreasureChest {
    fn from(descriptor: ChestDescriptor) -> Self {
        Self::new(descriptor)
    }
}

impl fmt::Display for TreasureChest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A {} chest with the following properties:\nMaterial: {}\nLock Type: {}\nLoot Quality: {}",
            self.state,
            self.descriptor.material,
            self.descriptor.lock_type,
            self.descriptor.loot_quality
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mahogany() -> ChestDescriptor {
        ChestDescriptor::new(Material::RichMahogany, LockType::Novice, LootQuality::Purple)
    }

    #[test]
    fn default_chest_is_locked_stock_chest() {
        let chest = TreasureChest::default();
        assert_eq!(chest.state(), ChestState::Locked);
        assert_eq!(chest.material(), Material::Iron);
        assert_eq!(chest.lock_type(), LockType::Expert);
        assert_eq!(chest.loot_quality(), LootQuality::Green);
    }

    #[test]
    fn explicit_descriptor_starts_locked() {
        let chest = TreasureChest::new(mahogany());
        assert_eq!(chest.state(), ChestState::Locked);
        assert_eq!(chest.descriptor(), mahogany());
        assert_eq!(TreasureChest::from(mahogany()), chest);
    }

    #[test]
    fn explicit_state_keeps_stock_descriptor() {
        let chest = TreasureChest::with_state(ChestState::Open);
        assert_eq!(chest.state(), ChestState::Open);
        assert_eq!(chest.descriptor(), ChestDescriptor::default());
    }

    #[test]
    fn unlock_twice_stays_closed() {
        let mut chest = TreasureChest::default();
        assert_eq!(chest.apply(ChestAction::Unlock), ChestState::Closed);
        assert_eq!(chest.apply(ChestAction::Unlock), ChestState::Closed);
        assert_eq!(chest.state(), ChestState::Closed);
    }

    #[test]
    fn cannot_lock_an_open_chest() {
        let mut chest = TreasureChest::with_state(ChestState::Open);
        let outcome = chest.apply_outcome(ChestAction::Lock);
        assert_eq!(outcome.no_op, Some(NoOpReason::MustCloseFirst));
        assert_eq!(chest.state(), ChestState::Open);

        assert_eq!(chest.apply(ChestAction::Close), ChestState::Closed);
        assert_eq!(chest.apply(ChestAction::Lock), ChestState::Locked);
    }

    #[test]
    fn round_trips_return_to_start() {
        let mut chest = TreasureChest::default();
        chest.apply(ChestAction::Unlock);
        assert_eq!(chest.apply(ChestAction::Lock), ChestState::Locked);

        let mut chest = TreasureChest::with_state(ChestState::Closed);
        chest.apply(ChestAction::Open);
        assert_eq!(chest.apply(ChestAction::Close), ChestState::Closed);
    }

    #[test]
    fn describe_formats_state_and_properties() {
        let chest = TreasureChest::new(mahogany());
        assert_eq!(
            chest.describe(),
            "A Locked chest with the following properties:\n\
             Material: RichMahogany\n\
             Lock Type: Novice\n\
             Loot Quality: Purple"
        );
    }

    #[test]
    fn describe_tracks_state_only() {
        let mut chest = TreasureChest::new(mahogany());
        chest.apply(ChestAction::Unlock);
        chest.apply(ChestAction::Open);

        let description = chest.describe();
        assert!(description.starts_with("A Open chest"));
        assert!(description
            .ends_with("Material: RichMahogany\nLock Type: Novice\nLoot Quality: Purple"));
    }

    #[test]
    fn named_actions_match_apply_outcome() {
        for start in ChestState::ALL.iter().copied() {
            let named: [fn(&mut TreasureChest) -> Outcome; 4] = [
                TreasureChest::open,
                TreasureChest::close,
                TreasureChest::lock,
                TreasureChest::unlock,
            ];
            for (method, action) in named.into_iter().zip(ChestAction::ALL.iter().copied()) {
                let mut by_name = TreasureChest::with_state(start);
                let mut by_action = TreasureChest::with_state(start);
                assert_eq!(method(&mut by_name), by_action.apply_outcome(action));
                assert_eq!(by_name, by_action);
            }
        }
    }

    #[test]
    fn named_actions_walk_the_full_cycle() {
        let mut chest = TreasureChest::default();

        assert_eq!(chest.open().no_op, Some(NoOpReason::LockedShut));
        assert_eq!(chest.unlock().to, ChestState::Closed);
        assert_eq!(chest.open().to, ChestState::Open);
        assert_eq!(chest.lock().no_op, Some(NoOpReason::MustCloseFirst));
        assert_eq!(chest.close().to, ChestState::Closed);
        assert_eq!(chest.lock().to, ChestState::Locked);
        assert_eq!(chest.state(), ChestState::Locked);
    }

    #[test]
    fn chests_are_independent() {
        let mut first = TreasureChest::default();
        let second = first;
        first.apply(ChestAction::Unlock);
        assert_eq!(first.state(), ChestState::Closed);
        assert_eq!(second.state(), ChestState::Locked);
    }
}
