//! Narrative state engine for *Echoes of the Forgotten Tower*.
//!
//! Owns per-session state (trait and trust accumulators, the true-route
//! flag fixed at session start) and the cross-session ending flags, and
//! advances a session through a [`Script`](echoes_script::Script): listing
//! guarded options, applying choice effects, and committing ending unlocks.
//!
//! Rendering, input, and save-file UI are the caller's concern; the engine
//! only produces interpolated lines and filtered option lists.

/// The engine and its operations over a script.
pub mod engine;
/// Error types for engine operations.
pub mod error;
/// Cross-session persistent ending flags.
pub mod persist;
/// Per-session player state.
pub mod session;

/// Re-export the engine and its output types.
pub use engine::{EndingOutcome, Engine, RenderedLine};
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export persistence types.
pub use persist::{EndingFlags, PersistError};
/// Re-export session state.
pub use session::SessionState;
