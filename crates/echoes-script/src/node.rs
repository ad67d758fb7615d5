//! Node definitions: the labeled units of narrative content.

use std::fmt;

use crate::character::CharacterId;
use crate::effect::Effect;
use crate::guard::Guard;

/// Identifier of a labeled script node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A single line of display text, optionally spoken by a character.
///
/// Text may contain the `[player_name]` placeholder, which the engine
/// interpolates at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The speaking character, or `None` for bare narration.
    pub speaker: Option<CharacterId>,
    /// The text to display.
    pub text: String,
}

impl Line {
    /// A line spoken by a character.
    pub fn said(speaker: CharacterId, text: impl Into<String>) -> Self {
        Self {
            speaker: Some(speaker),
            text: text.into(),
        }
    }

    /// A narration line with no attributed speaker.
    pub fn narration(text: impl Into<String>) -> Self {
        Self {
            speaker: None,
            text: text.into(),
        }
    }
}

/// A terminal ending of the story. Each ending owns exactly one
/// persistent unlock flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ending {
    /// The Scholar ending, reached through the path of knowledge.
    Scholar,
    /// The Guardian ending, reached through the path of duty.
    Guardian,
    /// The Liberator ending, reached through the path of freedom.
    Liberator,
    /// The Shadow ending, reached through the path of power.
    Shadow,
    /// The true ending, reachable only after all four base endings.
    True,
}

impl Ending {
    /// The four base endings, in display order.
    pub const BASE: [Ending; 4] = [
        Ending::Scholar,
        Ending::Guardian,
        Ending::Liberator,
        Ending::Shadow,
    ];

    /// All five endings, in display order.
    pub const ALL: [Ending; 5] = [
        Ending::Scholar,
        Ending::Guardian,
        Ending::Liberator,
        Ending::Shadow,
        Ending::True,
    ];

    /// Whether this is one of the four base endings.
    pub fn is_base(&self) -> bool {
        !matches!(self, Ending::True)
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ending::Scholar => "the Scholar",
            Ending::Guardian => "the Guardian",
            Ending::Liberator => "the Liberator",
            Ending::Shadow => "the Shadow",
            Ending::True => "the Forgotten Tower",
        };
        write!(f, "{s}")
    }
}

/// A single option in a choice node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// The text shown to the player.
    pub label: String,
    /// Guard controlling whether the option is listed.
    pub guard: Guard,
    /// Effects applied when the option is selected.
    pub effects: Vec<Effect>,
    /// Destination node.
    pub goto: NodeId,
}

impl ChoiceOption {
    /// Create an unguarded option with no effects.
    pub fn new(label: impl Into<String>, goto: impl Into<NodeId>) -> Self {
        Self {
            label: label.into(),
            guard: Guard::Always,
            effects: Vec::new(),
            goto: goto.into(),
        }
    }

    /// Set the guard.
    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// What happens after a node's lines have been displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    /// A single outgoing edge.
    Linear {
        /// The next node.
        next: NodeId,
    },
    /// A list of options presented to the player.
    Choice {
        /// The options, in declared order.
        options: Vec<ChoiceOption>,
    },
    /// A terminal node that unlocks an ending. No outgoing edge.
    Ending {
        /// The ending this node unlocks.
        ending: Ending,
    },
}

/// A labeled unit of narrative content: display lines plus what follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The lines displayed when the node is entered, in order.
    pub lines: Vec<Line>,
    /// What happens after the lines.
    pub body: NodeBody,
}

impl Node {
    /// Create a linear node with a single outgoing edge.
    pub fn linear(next: impl Into<NodeId>) -> Self {
        Self {
            lines: Vec::new(),
            body: NodeBody::Linear { next: next.into() },
        }
    }

    /// Create a choice node with no options yet.
    pub fn choice() -> Self {
        Self {
            lines: Vec::new(),
            body: NodeBody::Choice {
                options: Vec::new(),
            },
        }
    }

    /// Create a terminal ending node.
    pub fn ending(ending: Ending) -> Self {
        Self {
            lines: Vec::new(),
            body: NodeBody::Ending { ending },
        }
    }

    /// Append a display line.
    pub fn with_line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    /// Append a spoken line.
    pub fn say(self, speaker: CharacterId, text: impl Into<String>) -> Self {
        self.with_line(Line::said(speaker, text))
    }

    /// Append a narration line.
    pub fn narrate(self, text: impl Into<String>) -> Self {
        self.with_line(Line::narration(text))
    }

    /// Append an option. Has no effect on non-choice nodes; structural
    /// validation reports choice nodes with too few options.
    pub fn with_option(mut self, option: ChoiceOption) -> Self {
        if let NodeBody::Choice { options } = &mut self.body {
            options.push(option);
        }
        self
    }

    /// The node's options, if it is a choice node.
    pub fn options(&self) -> Option<&[ChoiceOption]> {
        match &self.body {
            NodeBody::Choice { options } => Some(options),
            _ => None,
        }
    }

    /// The ending this node unlocks, if it is terminal.
    pub fn ending_of(&self) -> Option<Ending> {
        match &self.body {
            NodeBody::Ending { ending } => Some(*ending),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Trait;

    #[test]
    fn node_id_display() {
        let id = NodeId::new("chapter_1");
        assert_eq!(id.to_string(), "chapter_1");
        assert_eq!(id.as_str(), "chapter_1");
    }

    #[test]
    fn linear_builder() {
        let node = Node::linear("chapter_1")
            .narrate("The tower waits.")
            .say(CharacterId::Elara, "We should not be here.");

        assert_eq!(node.lines.len(), 2);
        assert_eq!(node.body, NodeBody::Linear {
            next: NodeId::new("chapter_1")
        });
        assert!(node.options().is_none());
    }

    #[test]
    fn choice_builder() {
        let node = Node::choice()
            .with_option(
                ChoiceOption::new("Enter the library", "ch1_library")
                    .with_effect(Effect::AddTrait(Trait::Knowledge, 1)),
            )
            .with_option(ChoiceOption::new("Descend", "ch1_underground"));

        let options = node.options().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].effects.len(), 1);
        assert_eq!(options[1].guard, Guard::Always);
    }

    #[test]
    fn option_ignored_on_linear_node() {
        let node = Node::linear("next").with_option(ChoiceOption::new("x", "y"));
        assert!(node.options().is_none());
    }

    #[test]
    fn ending_node() {
        let node = Node::ending(Ending::Scholar);
        assert_eq!(node.ending_of(), Some(Ending::Scholar));
        assert!(Ending::Scholar.is_base());
        assert!(!Ending::True.is_base());
    }

    #[test]
    fn guarded_option() {
        let opt = ChoiceOption::new("The fifth door", "path_true")
            .with_guard(Guard::TrueRouteUnlocked);
        assert_eq!(opt.guard, Guard::TrueRouteUnlocked);
    }
}
