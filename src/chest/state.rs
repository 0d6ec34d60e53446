//! Chest states and the actions that move between them.

use crate::core::{Action, State};

crate::label_enum! {
    /// The lid and lock position of a chest.
    ///
    /// Exactly one state is active at any time. Every state can be left and
    /// revisited. New chests start out locked.
    #[derive(Default)]
    pub enum ChestState {
        Open,
        Closed,
        #[default]
        Locked,
    }
}

impl State for ChestState {
    fn name(&self) -> &str {
        self.as_str()
    }
}

crate::label_enum! {
    /// Something a player tries to do to a chest.
    pub enum ChestAction {
        Open,
        Close,
        Lock,
        Unlock,
    }
}

impl Action for ChestAction {
    fn name(&self) -> &str {
        self.as_str()
    }
}
