//! Content statistics over a script.

use std::collections::HashSet;

use crate::guard::Guard;
use crate::node::{Ending, NodeBody};
use crate::script::Script;

/// Aggregate content statistics for a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptStats {
    /// Number of linear nodes.
    pub linear_nodes: usize,
    /// Number of choice nodes.
    pub choice_nodes: usize,
    /// Number of terminal ending nodes.
    pub ending_nodes: usize,
    /// Total display lines across all nodes.
    pub lines: usize,
    /// Total words across all display lines.
    pub words: usize,
    /// Total choice options.
    pub options: usize,
    /// Options hidden behind a guard.
    pub guarded_options: usize,
    /// Defined characters.
    pub characters: usize,
    /// Endings that have an owning terminal node.
    pub endings_present: Vec<Ending>,
}

impl ScriptStats {
    /// Collect statistics from a script.
    pub fn collect(script: &Script) -> Self {
        let mut stats = ScriptStats {
            characters: script.character_count(),
            ..ScriptStats::default()
        };

        let mut present: HashSet<Ending> = HashSet::new();

        for (_, node) in script.nodes() {
            stats.lines += node.lines.len();
            stats.words += node
                .lines
                .iter()
                .map(|l| l.text.split_whitespace().count())
                .sum::<usize>();

            match &node.body {
                NodeBody::Linear { .. } => stats.linear_nodes += 1,
                NodeBody::Choice { options } => {
                    stats.choice_nodes += 1;
                    stats.options += options.len();
                    stats.guarded_options +=
                        options.iter().filter(|o| o.guard != Guard::Always).count();
                }
                NodeBody::Ending { ending } => {
                    stats.ending_nodes += 1;
                    present.insert(*ending);
                }
            }
        }

        stats.endings_present = Ending::ALL
            .into_iter()
            .filter(|e| present.contains(e))
            .collect();
        stats
    }

    /// Total node count.
    pub fn total_nodes(&self) -> usize {
        self.linear_nodes + self.choice_nodes + self.ending_nodes
    }
}
