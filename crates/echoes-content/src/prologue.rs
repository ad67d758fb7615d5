//! The prologue: arrival at the tower.

use echoes_script::CharacterId::{Elara, Kael, Narrator, Player, Sirin, Unknown};
use echoes_script::{Node, Script, ScriptResult};

pub(crate) fn install(script: &mut Script) -> ScriptResult<()> {
    script.add_node(
        "start",
        Node::linear("chapter_1")
            .narrate("The road ends where the maps do.")
            .say(
                Narrator,
                "Beyond the last milestone, the moor rises toward a shape the \
                 locals will not name: a tower with no door on its sunward side, \
                 older than the kingdom that forgot it.",
            )
            .say(
                Player,
                "Three weeks of walking. And there it is, exactly where the \
                 letter said it would be.",
            )
            .say(
                Narrator,
                "Two figures wait at the foot of the tower. A third watches from \
                 the rocks above, pretending not to.",
            )
            .say(
                Elara,
                "You must be [player_name]. I'm Elara. I sent the letter — or \
                 rather, I copied it. The original wrote itself.",
            )
            .say(Kael, "Kael. Warden of this ground, for what that's worth now.")
            .say(
                Sirin,
                "And I'm Sirin. I'm not with them. I'm with whoever opens that \
                 door first.",
            )
            .say(
                Elara,
                "The tower has been sealed for four hundred years. Last night, \
                 every lock in it opened at once. We heard them. Like rain.",
            )
            .say(
                Kael,
                "My order swore to keep people out, [player_name]. I am the last \
                 of it, and tonight I can't even keep the tower shut.",
            )
            .say(Unknown, "Come up, then. The stairs remember you.")
            .say(Player, "...Did anyone else hear that?")
            .narrate("Nobody answers. The door stands open."),
    )?;
    Ok(())
}
