//! Chapter 2: the hall of echoes and the three visions.

use echoes_script::CharacterId::{Elara, Kael, Narrator, Player, Sirin, Vesper};
use echoes_script::Effect::{AddTrait, AddTrust};
use echoes_script::{ChoiceOption, Companion, Node, Script, ScriptResult, Trait};

pub(crate) fn install(script: &mut Script) -> ScriptResult<()> {
    script.add_node(
        "chapter_2",
        Node::choice()
            .narrate("Chapter Two — The Hall of Echoes")
            .say(
                Narrator,
                "Halfway up, the stairs open into a round hall lined with \
                 mirrors that do not reflect the room. Each pane shows a \
                 different somewhere, and three of them are lit.",
            )
            .say(
                Vesper,
                "Every guest leaves an echo on my walls. Your companions left \
                 theirs the moment they stepped inside. Choose one, \
                 [player_name]. Watch what they carry.",
            )
            .say(Elara, "Don't. It's prying open someone's ribs and calling it a window.")
            .say(Sirin, "Or it's the only honest thing in this tower. Pick mine. I've got nothing I'd hide.")
            .say(Kael, "Everyone has something. Choose, and be quick about it.")
            .with_option(
                ChoiceOption::new("Step into Elara's echo", "ch2_elara")
                    .with_effect(AddTrait(Trait::Knowledge, 1))
                    .with_effect(AddTrust(Companion::Elara, 1)),
            )
            .with_option(
                ChoiceOption::new("Step into Kael's echo", "ch2_kael")
                    .with_effect(AddTrait(Trait::Duty, 1))
                    .with_effect(AddTrust(Companion::Kael, 1)),
            )
            .with_option(
                ChoiceOption::new("Step into Sirin's echo", "ch2_sirin")
                    .with_effect(AddTrait(Trait::Freedom, 1))
                    .with_effect(AddTrust(Companion::Sirin, 1)),
            ),
    )?;

    script.add_node(
        "ch2_elara",
        Node::linear("ch2_convergence")
            .say(
                Narrator,
                "The mirror swallows the hall. You stand in a burning library — \
                 not this tower's — and a younger Elara is carrying armfuls of \
                 books into the fire, not out of it.",
            )
            .say(Player, "She's feeding the flames. Why would she—")
            .say(
                Elara,
                "Because some pages are worse than burning. I found my city's \
                 true founding charter. Who we drowned to build the harbor. I \
                 chose the fire, and I've been reading other people's secrets \
                 ever since so I'd never be surprised like that again.",
            )
            .say(
                Elara,
                "Now you know the shape of me, [player_name]. I don't gather \
                 knowledge because I love it. I gather it because I'm afraid of \
                 what I haven't read.",
            ),
    )?;

    script.add_node(
        "ch2_kael",
        Node::linear("ch2_convergence")
            .say(
                Narrator,
                "The mirror swallows the hall. A windswept pass, a broken \
                 gate, and a line of wardens holding it — thinning, year after \
                 year, until only one figure is left standing the watch.",
            )
            .say(Player, "The others. They didn't fall in battle, did they?")
            .say(
                Kael,
                "They left. One by one. Married, farmed, grew old, forgot. \
                 Nothing ever came through the gate, so they decided nothing \
                 ever would.",
            )
            .say(
                Kael,
                "An oath isn't a wager on being right, [player_name]. It's the \
                 standing, whether or not anything comes. Last night, for the \
                 first time in my life, something came.",
            ),
    )?;

    script.add_node(
        "ch2_sirin",
        Node::linear("ch2_convergence")
            .say(
                Narrator,
                "The mirror swallows the hall. A gilded room, a child's wrist \
                 ringed with a bracelet that is unmistakably a shackle, and a \
                 window left open exactly once.",
            )
            .say(Player, "Sirin... whose house was that?")
            .say(
                Sirin,
                "Mine, by birthright. Heir to a chair I never sat in. They \
                 called the bracelet a blessing. It had a lock, [player_name]. \
                 Blessings don't have locks.",
            )
            .say(
                Sirin,
                "I went out that window at eleven and I've been climbing \
                 through other people's windows ever since. So no — I don't \
                 trust a tower that only has one door.",
            ),
    )?;

    script.add_node(
        "ch2_convergence",
        Node::linear("chapter_3")
            .say(
                Narrator,
                "The hall releases you. The mirrors go dark one by one, \
                 politely, like hosts seeing guests to the door.",
            )
            .say(
                Vesper,
                "Good. You've seen what your companions are made of. Now come \
                 and see what I am made of. The top of the tower is only one \
                 flight away — it always is, once you're ready.",
            )
            .say(Elara, "That staircase was half a mile of dark an hour ago.")
            .say(Vesper, "An hour ago you weren't ready.")
            .narrate("The last flight of stairs unwinds before you, short and bright."),
    )?;

    Ok(())
}
