//! Script data model for *Echoes of the Forgotten Tower*.
//!
//! This crate defines the branching narrative as data: a directed graph of
//! labeled nodes (linear prose, choices, endings), the characters who speak,
//! and the guards and effects attached to choices. It is independent of any
//! runtime — you can construct a [`Script`] programmatically, validate its
//! structure, and collect content statistics without ever playing it.

/// Character identifiers and definitions.
pub mod character;
/// Trait and trust mutations applied when a choice is selected.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// Guard predicates controlling choice visibility.
pub mod guard;
/// Node definitions: lines, choices, endings.
pub mod node;
/// The assembled script graph.
pub mod script;
/// Content statistics over a script.
pub mod stats;
/// Structural validation of a script graph.
pub mod validate;

/// Re-export character types.
pub use character::{Character, CharacterId};
/// Re-export effect types.
pub use effect::{Companion, Effect, Trait};
/// Re-export error types.
pub use error::{ScriptError, ScriptResult};
/// Re-export guard types.
pub use guard::Guard;
/// Re-export node types.
pub use node::{ChoiceOption, Ending, Line, Node, NodeBody, NodeId};
/// Re-export the script graph.
pub use script::Script;
/// Re-export statistics types.
pub use stats::ScriptStats;
/// Re-export validation types.
pub use validate::{Issue, validate};
