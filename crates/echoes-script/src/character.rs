//! Characters who speak lines in the script.

use std::fmt;

/// Identifier for a speaking character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterId {
    /// The player character. Rendered with the session's player name.
    Player,
    /// Elara, the scholar of the tower archives.
    Elara,
    /// Kael, sworn warden of the tower.
    Kael,
    /// Sirin, the wanderer who answers to no one.
    Sirin,
    /// Vesper, voice of the tower's oldest ambition.
    Vesper,
    /// The narrator.
    Narrator,
    /// A voice the player cannot yet identify.
    Unknown,
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CharacterId::Player => "player",
            CharacterId::Elara => "elara",
            CharacterId::Kael => "kael",
            CharacterId::Sirin => "sirin",
            CharacterId::Vesper => "vesper",
            CharacterId::Narrator => "narrator",
            CharacterId::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// A character definition: display name and optional highlight color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    /// Name shown next to the character's dialogue.
    pub name: String,
    /// Hex color used to tint the name, if any.
    pub color: Option<String>,
}

impl Character {
    /// Create a character with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    /// Set the name highlight color (hex string, e.g. `#c8ffc8`).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_builder() {
        let c = Character::new("Elara").with_color("#c8ffc8");
        assert_eq!(c.name, "Elara");
        assert_eq!(c.color.as_deref(), Some("#c8ffc8"));
    }

    #[test]
    fn display_ids() {
        assert_eq!(CharacterId::Elara.to_string(), "elara");
        assert_eq!(CharacterId::Unknown.to_string(), "unknown");
    }
}
