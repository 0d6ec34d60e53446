//! State and action traits.
//!
//! States and actions are plain values: comparing, cloning and naming them
//! never has side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into history records
/// - `PartialEq`: States are compared to detect no-op transitions
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States appear in serialized reports
///
/// # Example
///
/// ```rust
/// use treasure_chest::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Shut,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Shut => "Shut",
///         }
///     }
/// }
///
/// assert_eq!(Door::Shut.name(), "Shut");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for the inputs that drive a state machine.
///
/// Actions represent intent. Applying one may or may not change the state.
pub trait Action:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the action's name for display/logging.
    fn name(&self) -> &str;
}
