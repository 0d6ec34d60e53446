//! Treasure chest: a small, pure finite-state machine
//!
//! A chest has three fixed properties (material, lock type, loot quality) and
//! one mutable state: open, closed or locked. Four actions move it around:
//!
//! ```text
//!            Unlock            Open
//!   Locked ---------> Closed -------> Open
//!          <---------        <-------
//!             Lock             Close
//! ```
//!
//! Any other action is a no-op. It leaves the state unchanged and reports
//! why, but it is never an error.
//!
//! # Core Concepts
//!
//! - **Chest**: [`TreasureChest`] owns the state and applies actions
//! - **Transitions**: [`chest::transition`] is the pure transition table
//! - **Sessions**: [`ChestSession`] drives a chest from user input and keeps
//!   a timestamped history
//!
//! # Example
//!
//! ```rust
//! use treasure_chest::chest::{ChestAction, ChestState, NoOpReason, TreasureChest};
//!
//! let mut chest = TreasureChest::default();
//!
//! let outcome = chest.apply_outcome(ChestAction::Open);
//! assert_eq!(outcome.no_op, Some(NoOpReason::LockedShut));
//!
//! chest.apply(ChestAction::Unlock);
//! chest.apply(ChestAction::Open);
//! assert_eq!(chest.state(), ChestState::Open);
//!
//! println!("{}", chest.describe());
//! ```

pub mod builder;
pub mod chest;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use builder::ChestBuilder;
pub use chest::{
    ChestAction, ChestDescriptor, ChestState, LockType, LootQuality, Material, NoOpReason,
    Outcome, TreasureChest,
};
pub use crate::core::{Action, ParseLabelError, State, StateHistory, StateTransition};
pub use session::ChestSession;
