//! The five terminal nodes. Each unlocks exactly one persistent flag.

use echoes_script::CharacterId::{Elara, Kael, Narrator, Player, Sirin, Vesper};
use echoes_script::{Ending, Node, Script, ScriptResult};

pub(crate) fn install(script: &mut Script) -> ScriptResult<()> {
    script.add_node(
        "ending_scholar",
        Node::ending(Ending::Scholar)
            .narrate("ENDING ONE — The Scholar")
            .say(
                Narrator,
                "Years later, travelers on the moor road speak of a tower with \
                 lit windows and an open reading room, where a patient archivist \
                 and her colleague answer any question except one.",
            )
            .say(
                Elara,
                "We're still on the second shelf, [player_name]. Four hundred \
                 years of patience, and it turns out the tower just wanted to be \
                 read.",
            )
            .narrate("You understood the tower. The tower, at last, is understood."),
    )?;

    script.add_node(
        "ending_guardian",
        Node::ending(Ending::Guardian)
            .narrate("ENDING TWO — The Guardian")
            .say(
                Narrator,
                "The wardens' order has two names on its rolls again. The moor \
                 people leave bread at the boundary stone, the way their \
                 grandmothers did, and sleep well without knowing why.",
            )
            .say(
                Kael,
                "Quiet watch tonight, [player_name]. They're all quiet now. \
                 That's the reward, if you were wondering. That's the whole \
                 reward.",
            )
            .narrate("You kept the watch. The watch, in its way, kept you."),
    )?;

    script.add_node(
        "ending_liberator",
        Node::ending(Ending::Liberator)
            .narrate("ENDING THREE — The Liberator")
            .say(
                Narrator,
                "There is no tower on the moor. There is a ring of foundation \
                 stones, a great deal of sky, and things moving out across the \
                 world that have not moved in four hundred years — most of them \
                 harmless, none of them asked.",
            )
            .say(
                Sirin,
                "No locks left on the whole moor, [player_name]. Whatever \
                 happens next, it happens free. I can live with that. Can you?",
            )
            .narrate("You opened every lock. Now the world gets to find out what it was holding."),
    )?;

    script.add_node(
        "ending_shadow",
        Node::ending(Ending::Shadow)
            .narrate("ENDING FOUR — The Shadow")
            .say(
                Narrator,
                "The tower stands. It has always stood. The locals do not \
                 remember a time when the light at its summit was any other \
                 color, and the one who holds it no longer corrects them.",
            )
            .say(
                Player,
                "The holding is heavier than Vesper said. But the sight — oh, \
                 the sight is long. I can see everyone I used to be from up \
                 here.",
            )
            .narrate("You claimed the tower. Ask again in a hundred years who claimed whom."),
    )?;

    script.add_node(
        "ending_true",
        Node::ending(Ending::True)
            .narrate("TRUE ENDING — The Forgotten Tower")
            .say(
                Narrator,
                "The fifth door opens on a kitchen, a hearth long cold, and a \
                 table set for someone who left in a hurry four hundred years \
                 ago. Vesper steps through and is, briefly, only a person.",
            )
            .say(Vesper, "Thank you. All four of you that you have been. Close the latch behind me.")
            .say(
                Narrator,
                "The tower comes down gently, stone by stone, like a held \
                 breath released. Where it stood there is a house on the moor, \
                 windows lit, and the door — the only door — stands open.",
            )
            .say(Elara, "Every ending was true. This one just came last.")
            .say(Player, "The tower isn't forgotten anymore. That was all it wanted.")
            .narrate("THE END — and this time, the word means it."),
    )?;

    Ok(())
}
