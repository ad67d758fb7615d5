//! The engine: listing options, applying choices, committing endings.

use echoes_script::{CharacterId, ChoiceOption, Ending, NodeId, Script};

use crate::error::{EngineError, EngineResult};
use crate::persist::EndingFlags;
use crate::session::SessionState;

/// Placeholder interpolated with the session's player name.
const PLAYER_NAME_SLOT: &str = "[player_name]";

/// A display line ready for presentation: speaker name resolved, player
/// name interpolated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// The speaker's display name, or `None` for bare narration.
    pub speaker: Option<String>,
    /// The speaker's highlight color (hex), if defined.
    pub color: Option<String>,
    /// The interpolated text.
    pub text: String,
}

/// The result of committing an ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndingOutcome {
    /// The ending that was reached.
    pub ending: Ending,
    /// Whether the flag was newly set (false on a re-run).
    pub newly_unlocked: bool,
    /// Whether this commit made the true route reachable for the first
    /// time. A signal for the presentation layer; the engine does not
    /// restart or branch on it.
    pub true_route_opened: bool,
}

/// The narrative state engine, borrowing a script.
///
/// The engine itself is stateless: session and persistent state are passed
/// into each operation, so one engine can serve any number of sequential
/// sessions.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    script: &'a Script,
}

impl<'a> Engine<'a> {
    /// Create an engine over a script.
    pub fn new(script: &'a Script) -> Self {
        Self { script }
    }

    /// The script this engine walks.
    pub fn script(&self) -> &'a Script {
        self.script
    }

    /// Start a fresh session. Counters are zeroed and the true-route flag
    /// is fixed from the persistent store. No error conditions.
    pub fn start_session(
        &self,
        player_name: impl Into<String>,
        flags: &EndingFlags,
    ) -> SessionState {
        SessionState::new(player_name, flags)
    }

    /// The options available at a node, in declared order, with
    /// guard-filtered options removed.
    ///
    /// Returns an empty list for linear and ending nodes. Listing options
    /// never mutates session or persistent state.
    pub fn available_options(
        &self,
        node: &NodeId,
        session: &SessionState,
    ) -> EngineResult<Vec<&'a ChoiceOption>> {
        let node_def = self
            .script
            .node(node)
            .ok_or_else(|| EngineError::UnknownNode(node.clone()))?;

        Ok(node_def
            .options()
            .unwrap_or(&[])
            .iter()
            .filter(|o| session.allows(o.guard))
            .collect())
    }

    /// Select an option by index into the filtered option list.
    ///
    /// Validates the index first; only then applies the option's effects
    /// and returns the destination node. A rejected choice mutates
    /// nothing.
    pub fn choose(
        &self,
        node: &NodeId,
        index: usize,
        session: &mut SessionState,
    ) -> EngineResult<&'a NodeId> {
        let options = self.available_options(node, session)?;
        let option = options.get(index).ok_or_else(|| EngineError::InvalidChoice {
            node: node.clone(),
            index,
            available: options.len(),
        })?;

        for effect in &option.effects {
            session.apply(*effect);
        }
        Ok(&option.goto)
    }

    /// Commit the ending owned by a terminal node.
    ///
    /// Sets exactly that node's flag (idempotently) and reports whether
    /// the true route just became reachable. The session simply ends;
    /// restarting is the caller's decision.
    pub fn enter_ending(
        &self,
        node: &NodeId,
        flags: &mut EndingFlags,
    ) -> EngineResult<EndingOutcome> {
        let node_def = self
            .script
            .node(node)
            .ok_or_else(|| EngineError::UnknownNode(node.clone()))?;
        let ending = node_def
            .ending_of()
            .ok_or_else(|| EngineError::NotAnEnding(node.clone()))?;

        let reachable_before = flags.true_route_reachable();
        let newly_unlocked = flags.unlock(ending);
        let true_route_opened = !reachable_before && flags.true_route_reachable();

        Ok(EndingOutcome {
            ending,
            newly_unlocked,
            true_route_opened,
        })
    }

    /// A node's display lines with the player name interpolated and
    /// speaker display names resolved.
    pub fn render_lines(
        &self,
        node: &NodeId,
        session: &SessionState,
    ) -> EngineResult<Vec<RenderedLine>> {
        let node_def = self
            .script
            .node(node)
            .ok_or_else(|| EngineError::UnknownNode(node.clone()))?;

        Ok(node_def
            .lines
            .iter()
            .map(|line| RenderedLine {
                speaker: line.speaker.map(|id| self.speaker_name(id, session)),
                color: line
                    .speaker
                    .and_then(|id| self.script.character(id))
                    .and_then(|c| c.color.clone()),
                text: interpolate(&line.text, &session.player_name),
            })
            .collect())
    }

    /// Resolve a speaker id to a display name. The player speaker renders
    /// as the session's player name; an undefined character falls back to
    /// its id.
    fn speaker_name(&self, id: CharacterId, session: &SessionState) -> String {
        if id == CharacterId::Player {
            return session.player_name.clone();
        }
        self.script
            .character(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

/// Substitute the player name placeholder in display text.
fn interpolate(text: &str, player_name: &str) -> String {
    text.replace(PLAYER_NAME_SLOT, player_name)
}
