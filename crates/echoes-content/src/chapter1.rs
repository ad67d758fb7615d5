//! Chapter 1: the first landing, and the first fork.

use echoes_script::CharacterId::{Elara, Kael, Narrator, Player, Sirin, Vesper};
use echoes_script::Effect::{AddTrait, AddTrust};
use echoes_script::{ChoiceOption, Companion, Node, Script, ScriptResult, Trait};

pub(crate) fn install(script: &mut Script) -> ScriptResult<()> {
    script.add_node(
        "chapter_1",
        Node::choice()
            .narrate("Chapter One — The First Landing")
            .say(
                Narrator,
                "Inside, the tower is wider than its walls. The first landing \
                 splits: a gallery of shelves climbing into the dark, and a \
                 stairwell spiraling down below the foundations.",
            )
            .say(
                Elara,
                "The archive is up there. Four centuries of records nobody has \
                 read. If there's an explanation for last night, it's written.",
            )
            .say(
                Kael,
                "Or it's below. The old wards were anchored under the \
                 foundations. If they failed, I want to see what broke them.",
            )
            .say(Sirin, "Split the difference and pick fast. The tower is listening.")
            .with_option(
                ChoiceOption::new("Climb to the archive with Elara", "ch1_library")
                    .with_effect(AddTrait(Trait::Knowledge, 1))
                    .with_effect(AddTrust(Companion::Elara, 1)),
            )
            .with_option(
                ChoiceOption::new("Descend below the foundations with Kael", "ch1_underground")
                    .with_effect(AddTrait(Trait::Duty, 1))
                    .with_effect(AddTrust(Companion::Kael, 1)),
            ),
    )?;

    script.add_node(
        "ch1_library",
        Node::linear("ch1_convergence")
            .say(
                Narrator,
                "The shelves are not shelved with books. They hold hourglasses, \
                 each one labeled in a thin, patient hand, each one still \
                 running.",
            )
            .say(Elara, "Don't touch the sand. Whatever you do, don't touch the sand.")
            .say(Player, "These labels. Elara, this one has my name on it.")
            .say(
                Elara,
                "They all do, [player_name]. Look again. Every glass in this \
                 room is measuring you.",
            )
            .say(
                Narrator,
                "At the end of the gallery a ledger lies open, its last entry \
                 dated tonight, its ink still wet.",
            )
            .say(
                Elara,
                "\"The visitor returns.\" Returns. You've never been here — and \
                 the tower disagrees.",
            ),
    )?;

    script.add_node(
        "ch1_underground",
        Node::linear("ch1_convergence")
            .say(
                Narrator,
                "The stairs go down further than the moor goes deep. At the \
                 bottom, seven stone anchors stand in a ring, and six of them \
                 are cracked clean through.",
            )
            .say(Kael, "Six. In one night. These held through the Sundering War.")
            .say(Player, "And the seventh?")
            .say(
                Kael,
                "Untouched. Which is worse. A flood breaks everything or \
                 nothing, [player_name]. Something walked past six wards and \
                 chose to leave one standing.",
            )
            .say(
                Narrator,
                "Scratched into the seventh anchor, fresh through four hundred \
                 years of dust: an arrow, pointing up.",
            )
            .say(Kael, "It wanted us to find this. It wants us climbing."),
    )?;

    script.add_node(
        "ch1_convergence",
        Node::linear("chapter_2")
            .say(
                Narrator,
                "The paths meet again at the second landing, where the others \
                 are waiting. Above, the stairwell narrows into a dark that the \
                 lanterns refuse to enter.",
            )
            .say(Sirin, "Whatever you two found, wear a different face. You're scaring me.")
            .say(
                Vesper,
                "Guests on the stair at last. Four hundred years, and the bell \
                 of this tower finally has something to ring for.",
            )
            .say(Kael, "Show yourself.")
            .say(
                Vesper,
                "I never stopped. You've been standing inside me since the \
                 door. Climb, little flames. The tower will show you what it \
                 was for.",
            )
            .narrate("The dark above exhales, and the climb begins."),
    )?;

    Ok(())
}
