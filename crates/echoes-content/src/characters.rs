//! Character definitions.

use echoes_script::{Character, CharacterId, Script};

pub(crate) fn install(script: &mut Script) {
    // The player's line prefix is replaced with the session name at render
    // time; the placeholder here is never shown.
    script.add_character(CharacterId::Player, Character::new("[player_name]"));
    script.add_character(
        CharacterId::Elara,
        Character::new("Elara").with_color("#c8ffc8"),
    );
    script.add_character(
        CharacterId::Kael,
        Character::new("Kael").with_color("#c8c8ff"),
    );
    script.add_character(
        CharacterId::Sirin,
        Character::new("Sirin").with_color("#ffc8a8"),
    );
    script.add_character(
        CharacterId::Vesper,
        Character::new("Vesper").with_color("#d8b4e8"),
    );
    script.add_character(CharacterId::Narrator, Character::new("Narrator"));
    script.add_character(
        CharacterId::Unknown,
        Character::new("???").with_color("#888888"),
    );
}
