use crate::node::NodeId;

/// Alias for `Result<T, ScriptError>`.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors that can occur when building or querying a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The referenced node identifier does not exist in the script.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// A node with the same identifier was already added.
    #[error("duplicate node: {0}")]
    DuplicateNode(NodeId),
}
