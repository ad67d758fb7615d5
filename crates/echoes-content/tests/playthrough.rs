//! Full playthroughs of the shipped story, driven by the engine.

use echoes_content::{DEFAULT_PLAYER_NAME, script};
use echoes_engine::{EndingFlags, EndingOutcome, Engine};
use echoes_script::{Companion, Ending, NodeBody, NodeId, Script, Trait};

/// Walk one complete session, selecting the given option index at each
/// choice node, and commit the ending reached.
fn play(
    script: &Script,
    flags: &mut EndingFlags,
    choices: &[usize],
) -> (EndingOutcome, echoes_engine::SessionState) {
    let engine = Engine::new(script);
    let mut session = engine.start_session(DEFAULT_PLAYER_NAME, flags);
    let mut current = script.start().clone();
    let mut picks = choices.iter().copied();

    loop {
        // Rendering must never fail mid-walk.
        engine.render_lines(&current, &session).unwrap();

        let node = script.get(&current).unwrap();
        match &node.body {
            NodeBody::Linear { next } => current = next.clone(),
            NodeBody::Choice { .. } => {
                let index = picks.next().expect("ran out of scripted choices");
                current = engine.choose(&current, index, &mut session).unwrap().clone();
            }
            NodeBody::Ending { .. } => {
                let outcome = engine.enter_ending(&current, flags).unwrap();
                return (outcome, session);
            }
        }
    }
}

#[test]
fn knowledge_path_on_fresh_store_unlocks_only_scholar() {
    let script = script().unwrap();
    let mut flags = EndingFlags::default();

    // library, Elara's echo, Door of Knowledge
    let (outcome, session) = play(&script, &mut flags, &[0, 0, 0]);

    assert_eq!(outcome.ending, Ending::Scholar);
    assert!(outcome.newly_unlocked);
    assert!(!outcome.true_route_opened);

    assert!(flags.is_unlocked(Ending::Scholar));
    for e in [Ending::Guardian, Ending::Liberator, Ending::Shadow, Ending::True] {
        assert!(!flags.is_unlocked(e), "{e} should still be locked");
    }
    assert!(!flags.true_route_reachable());

    // Effects along the way: chapter 1 library (+1), Elara's echo (+1),
    // Door of Knowledge (+2).
    assert_eq!(session.trait_value(Trait::Knowledge), 4);
    assert_eq!(session.trust(Companion::Elara), 2);
    assert_eq!(session.trust(Companion::Kael), 0);
}

#[test]
fn chapter_3_has_four_options_until_all_base_endings() {
    let script = script().unwrap();
    let engine = Engine::new(&script);

    let mut flags = EndingFlags::default();
    flags.unlock(Ending::Scholar);
    flags.unlock(Ending::Guardian);
    flags.unlock(Ending::Liberator);

    let session = engine.start_session(DEFAULT_PLAYER_NAME, &flags);
    let options = engine
        .available_options(&NodeId::new("chapter_3"), &session)
        .unwrap();
    assert_eq!(options.len(), 4);
    assert!(options.iter().all(|o| o.goto != NodeId::new("path_true")));
}

#[test]
fn chapter_3_has_five_options_once_true_route_is_open() {
    let script = script().unwrap();
    let engine = Engine::new(&script);

    let mut flags = EndingFlags::default();
    for e in Ending::BASE {
        flags.unlock(e);
    }

    let session = engine.start_session(DEFAULT_PLAYER_NAME, &flags);
    let options = engine
        .available_options(&NodeId::new("chapter_3"), &session)
        .unwrap();
    assert_eq!(options.len(), 5);
    assert_eq!(options[4].goto, NodeId::new("path_true"));
}

#[test]
fn four_playthroughs_open_the_true_route_and_the_fifth_completes_it() {
    let script = script().unwrap();
    let mut flags = EndingFlags::default();

    let base_runs = [
        (&[0usize, 0, 0][..], Ending::Scholar),
        (&[1, 1, 1][..], Ending::Guardian),
        (&[0, 2, 2][..], Ending::Liberator),
        (&[1, 1, 3][..], Ending::Shadow),
    ];

    for (i, (choices, expected)) in base_runs.iter().enumerate() {
        let (outcome, _) = play(&script, &mut flags, choices);
        assert_eq!(outcome.ending, *expected);
        assert!(outcome.newly_unlocked);
        // Only the fourth base ending opens the true route.
        assert_eq!(outcome.true_route_opened, i == 3);
    }
    assert!(flags.true_route_reachable());

    // Fifth session: the guarded option is index 4 at chapter_3.
    let (outcome, _) = play(&script, &mut flags, &[0, 0, 4]);
    assert_eq!(outcome.ending, Ending::True);
    assert!(outcome.newly_unlocked);
    assert_eq!(flags.unlocked_count(), 5);
}

#[test]
fn mid_session_unlocks_do_not_reveal_the_fifth_door() {
    let script = script().unwrap();
    let engine = Engine::new(&script);

    let mut flags = EndingFlags::default();
    flags.unlock(Ending::Scholar);
    flags.unlock(Ending::Guardian);
    flags.unlock(Ending::Liberator);

    // The session starts with three base endings; the fourth is unlocked
    // while the session is in flight.
    let session = engine.start_session(DEFAULT_PLAYER_NAME, &flags);
    flags.unlock(Ending::Shadow);
    assert!(flags.true_route_reachable());

    // The option list still uses the flag fixed at session start.
    let options = engine
        .available_options(&NodeId::new("chapter_3"), &session)
        .unwrap();
    assert_eq!(options.len(), 4);
}

#[test]
fn player_name_is_interpolated_into_the_prologue() {
    let script = script().unwrap();
    let engine = Engine::new(&script);
    let session = engine.start_session("Rell", &EndingFlags::default());

    let lines = engine
        .render_lines(&NodeId::new("start"), &session)
        .unwrap();
    assert!(lines.iter().any(|l| l.text.contains("Rell")));
    assert!(lines.iter().all(|l| !l.text.contains("[player_name]")));
}
