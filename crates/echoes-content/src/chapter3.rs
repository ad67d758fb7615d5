//! Chapter 3: the summit, the five doors, and the paths beyond them.

use echoes_script::CharacterId::{Elara, Kael, Narrator, Player, Sirin, Vesper};
use echoes_script::Effect::AddTrait;
use echoes_script::{ChoiceOption, Guard, Node, Script, ScriptResult, Trait};

pub(crate) fn install(script: &mut Script) -> ScriptResult<()> {
    script.add_node(
        "chapter_3",
        Node::choice()
            .narrate("Chapter Three — The Summit")
            .say(
                Narrator,
                "The top of the tower is a single round chamber, open to a sky \
                 with too many stars. Four doors stand in the walls, freestanding, \
                 leading nowhere a door could lead.",
            )
            .say(
                Vesper,
                "I was the first warden, [player_name]. I built this tower to \
                 hold what I found at the bottom of the world, and then I held \
                 it so long I became the holding. I am very tired.",
            )
            .say(Vesper, "Four doors. Four ways for this to end. Choose how the tower is remembered.")
            .say(Elara, "The archive door. If we understand it, no one has to guard it again.")
            .say(Kael, "The warden's door. Some things aren't for understanding. They're for keeping.")
            .say(Sirin, "The open door. Tear the tower down and let whatever's inside take its chances with the sky.")
            .say(Vesper, "And the fourth door is mine to offer and yours to regret. The tower can be yours.")
            .with_option(
                ChoiceOption::new("The Door of Knowledge — understand the tower", "path_knowledge")
                    .with_effect(AddTrait(Trait::Knowledge, 2)),
            )
            .with_option(
                ChoiceOption::new("The Door of Duty — take up the watch", "path_duty")
                    .with_effect(AddTrait(Trait::Duty, 2)),
            )
            .with_option(
                ChoiceOption::new("The Door of Freedom — unmake the tower", "path_freedom")
                    .with_effect(AddTrait(Trait::Freedom, 2)),
            )
            .with_option(
                ChoiceOption::new("The Door of Power — claim the tower", "path_power")
                    .with_effect(AddTrait(Trait::Power, 2)),
            )
            .with_option(
                ChoiceOption::new("The fifth door — the one that was always there", "path_true")
                    .with_guard(Guard::TrueRouteUnlocked),
            ),
    )?;

    script.add_node(
        "path_knowledge",
        Node::linear("ending_scholar")
            .say(
                Narrator,
                "The Door of Knowledge opens onto the archive — but the archive \
                 as the tower sees it, every hourglass a sentence, every shelf a \
                 century.",
            )
            .say(
                Elara,
                "Then we read it. All of it. However long it takes, \
                 [player_name] — we stay until the tower makes sense.",
            )
            .say(
                Vesper,
                "No one has ever asked to understand me before. They sealed, or \
                 they stole, or they fled. Sit, then, scholars. I will tell you \
                 everything slowly.",
            ),
    )?;

    script.add_node(
        "path_duty",
        Node::linear("ending_guardian")
            .say(
                Narrator,
                "The Door of Duty opens onto the foundations, where the seventh \
                 anchor still stands, patient as the warden who cut it.",
            )
            .say(Kael, "You don't have to do this with me. It isn't your oath.")
            .say(Player, "It is now. Somebody has to relieve the watch, Kael.")
            .say(
                Vesper,
                "Two wardens, where I managed alone for an age. Perhaps the \
                 watch will be kinder to you than it was to me.",
            ),
    )?;

    script.add_node(
        "path_freedom",
        Node::linear("ending_liberator")
            .say(
                Narrator,
                "The Door of Freedom opens onto the moor, and through it the \
                 tower looks small for the first time — a thing that could \
                 simply stop.",
            )
            .say(Sirin, "Say the word and it's over. No more tower. No more locks.")
            .say(
                Player,
                "Everything the tower holds gets its chance, Sirin. Including \
                 the parts that frighten me. That's what the word means.",
            )
            .say(Vesper, "Yes. It does. Say it anyway, if you mean it."),
    )?;

    script.add_node(
        "path_power",
        Node::linear("ending_shadow")
            .say(
                Narrator,
                "The Door of Power does not open. It was never closed. Beyond \
                 it the tower's heart turns over, slow and enormous, like a \
                 sleeper making room in the bed.",
            )
            .say(Vesper, "Take it, then. Take the holding and the height and the long sight.")
            .say(Elara, "[player_name], don't. Look at what holding it made of Vesper.")
            .say(Player, "I am looking. I think I can hold it better.")
            .say(Vesper, "So did I. Exactly those words, once. Welcome to the tower."),
    )?;

    script.add_node(
        "path_true",
        Node::linear("ending_true")
            .say(
                Narrator,
                "Between the fourth door and the first, where the wall has \
                 always been blank, there is a fifth door. It is plain wood, \
                 weathered, with a farmhouse latch. It has been here every time.",
            )
            .say(
                Vesper,
                "You've ended this story four ways, [player_name]. Scholar, \
                 guardian, liberator, shadow — I remember each of you. Only \
                 someone who has been all four can see the door I came in by.",
            )
            .say(Elara, "It's just... a door. A kitchen door.")
            .say(
                Vesper,
                "The bottom of the world, where I found what I found, was a \
                 house. My house. The tower is only the lock I built around a \
                 homesick thing. Open it. Let us both go home.",
            )
            .say(Player, "Then this was never a tower that needed guarding. It was a door that needed opening.")
            .narrate("The latch lifts with a sound like a held breath, released."),
    )?;

    Ok(())
}
