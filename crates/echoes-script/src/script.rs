//! The assembled script graph.

use std::collections::HashMap;

use crate::character::{Character, CharacterId};
use crate::error::{ScriptError, ScriptResult};
use crate::node::{Node, NodeId};

/// A complete branching script: a start node, a node table, and the
/// characters who speak.
///
/// The graph is represented as data rather than control flow so that it can
/// be validated and tested independent of any rendering runtime.
#[derive(Debug, Clone)]
pub struct Script {
    /// Title of the story.
    pub title: String,
    start: NodeId,
    nodes: HashMap<NodeId, Node>,
    characters: HashMap<CharacterId, Character>,
}

impl Script {
    /// Create an empty script with the given title and start node id.
    ///
    /// The start node itself must still be added; validation reports a
    /// missing start node as an error.
    pub fn new(title: impl Into<String>, start: impl Into<NodeId>) -> Self {
        Self {
            title: title.into(),
            start: start.into(),
            nodes: HashMap::new(),
            characters: HashMap::new(),
        }
    }

    /// The start node identifier.
    pub fn start(&self) -> &NodeId {
        &self.start
    }

    /// Add a node under the given identifier.
    pub fn add_node(&mut self, id: impl Into<NodeId>, node: Node) -> ScriptResult<()> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(ScriptError::DuplicateNode(id));
        }
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Define a character.
    pub fn add_character(&mut self, id: CharacterId, character: Character) {
        self.characters.insert(id, character);
    }

    /// Look up a node.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Look up a node, failing with [`ScriptError::UnknownNode`].
    pub fn get(&self, id: &NodeId) -> ScriptResult<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| ScriptError::UnknownNode(id.clone()))
    }

    /// Look up a character definition.
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(&id)
    }

    /// Number of nodes in the script.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of defined characters.
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &Node)> {
        self.nodes.iter()
    }

    /// Iterate over all character definitions.
    pub fn characters(&self) -> impl Iterator<Item = (&CharacterId, &Character)> {
        self.characters.iter()
    }
}
