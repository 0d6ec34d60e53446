//! Core state machine types.
//!
//! This module contains the domain-independent pieces:
//! - State and action definitions via the `State` and `Action` traits
//! - Label enumerations via the `label_enum!` macro
//! - Immutable history tracking
//!
//! Nothing here performs I/O or logging.

mod history;
mod label;
mod state;

pub use history::{StateHistory, StateTransition};
#[doc(hidden)]
pub use label::normalize_label;
pub use label::ParseLabelError;
pub use state::{Action, State};
