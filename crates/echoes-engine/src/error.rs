//! Error types for engine operations.

use echoes_script::NodeId;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while advancing a session.
///
/// All rejections happen before any state mutation; a failed operation
/// never partially applies effects.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The referenced node identifier does not exist in the script.
    /// Fatal to the session.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// The selected option index is out of range of the filtered option
    /// list. The caller should re-prompt.
    #[error("invalid choice {index} at {node}: {available} options available")]
    InvalidChoice {
        /// The node the choice was made at.
        node: NodeId,
        /// The selected index.
        index: usize,
        /// How many options were actually available.
        available: usize,
    },

    /// An ending commit was attempted on a non-terminal node.
    #[error("not an ending node: {0}")]
    NotAnEnding(NodeId),
}
