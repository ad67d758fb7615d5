//! The full story of *Echoes of the Forgotten Tower*, expressed as data.
//!
//! The graph is fixed: a prologue, three chapters with branching choices
//! that reconverge, four base paths into four endings, and a guarded fifth
//! path that only opens once all four base endings have been reached.
//!
//! ```text
//! start → chapter_1 → {ch1_library | ch1_underground} → ch1_convergence
//!       → chapter_2 → {ch2_elara | ch2_kael | ch2_sirin} → ch2_convergence
//!       → chapter_3 → {path_knowledge | path_duty | path_freedom |
//!                      path_power | path_true*} → one ending each
//! ```
//!
//! `*` guarded on the true route.

use echoes_script::{Script, ScriptResult};

mod chapter1;
mod chapter2;
mod chapter3;
mod characters;
mod endings;
mod prologue;

/// The player name used when none is given.
pub const DEFAULT_PLAYER_NAME: &str = "Aiden";

/// Title of the story.
pub const TITLE: &str = "Echoes of the Forgotten Tower";

/// Build the complete script.
pub fn script() -> ScriptResult<Script> {
    let mut script = Script::new(TITLE, "start");
    characters::install(&mut script);
    prologue::install(&mut script)?;
    chapter1::install(&mut script)?;
    chapter2::install(&mut script)?;
    chapter3::install(&mut script)?;
    endings::install(&mut script)?;
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use echoes_script::{Ending, NodeId, validate};

    #[test]
    fn script_builds() {
        let script = script().unwrap();
        assert_eq!(script.title, TITLE);
        assert_eq!(script.node_count(), 21);
        assert_eq!(script.character_count(), 7);
    }

    #[test]
    fn script_validates_cleanly() {
        let script = script().unwrap();
        let issues = validate(&script);
        assert!(issues.is_empty(), "issues: {issues:#?}");
    }

    #[test]
    fn every_path_reaches_its_ending() {
        let script = script().unwrap();
        let paths = [
            ("path_knowledge", Ending::Scholar),
            ("path_duty", Ending::Guardian),
            ("path_freedom", Ending::Liberator),
            ("path_power", Ending::Shadow),
            ("path_true", Ending::True),
        ];
        for (path, expected) in paths {
            let mut current = NodeId::new(path);
            // Follow linear edges until the terminal node.
            let ending = loop {
                match &script.get(&current).unwrap().body {
                    echoes_script::NodeBody::Linear { next } => current = next.clone(),
                    echoes_script::NodeBody::Ending { ending } => break *ending,
                    echoes_script::NodeBody::Choice { .. } => {
                        panic!("{path} runs into a choice node")
                    }
                }
            };
            assert_eq!(ending, expected, "{path}");
        }
    }
}
