//! Structural validation of a script graph.
//!
//! Checks that every referenced node exists, every choice has at least one
//! option reachable in a fresh session, every ending is owned by exactly
//! one terminal node, and that endings behind the true route are guarded.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use crate::guard::Guard;
use crate::node::{Ending, NodeBody, NodeId};
use crate::script::Script;

/// A problem found during structural validation.
#[derive(Debug, Clone)]
pub struct Issue {
    /// The node where the issue was found, if attributable to one.
    pub node: Option<NodeId>,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl Issue {
    fn error(node: Option<NodeId>, message: impl Into<String>) -> Self {
        Self {
            node,
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(node: Option<NodeId>, message: impl Into<String>) -> Self {
        Self {
            node,
            message: message.into(),
            is_error: false,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        match &self.node {
            Some(node) => write!(f, "{level}: {node}: {}", self.message),
            None => write!(f, "{level}: {}", self.message),
        }
    }
}

/// Validate the structure of a script.
///
/// Returns every issue found; the script is structurally sound iff no
/// returned issue has `is_error` set.
pub fn validate(script: &Script) -> Vec<Issue> {
    let mut issues = Vec::new();

    if script.node(script.start()).is_none() {
        issues.push(Issue::error(
            None,
            format!("start node '{}' does not exist", script.start()),
        ));
    }

    check_edges(script, &mut issues);
    check_choices(script, &mut issues);
    check_endings(script, &mut issues);
    check_speakers(script, &mut issues);
    check_reachability(script, &mut issues);
    check_true_route_guard(script, &mut issues);

    issues
}

/// Every speaker used in a line must have a character definition.
fn check_speakers(script: &Script, issues: &mut Vec<Issue>) {
    for (id, node) in script.nodes() {
        for line in &node.lines {
            if let Some(speaker) = line.speaker
                && script.character(speaker).is_none()
            {
                issues.push(Issue::error(
                    Some(id.clone()),
                    format!("speaker '{speaker}' has no character definition"),
                ));
            }
        }
    }
}

/// Every edge destination must name an existing node.
fn check_edges(script: &Script, issues: &mut Vec<Issue>) {
    for (id, node) in script.nodes() {
        match &node.body {
            NodeBody::Linear { next } => {
                if script.node(next).is_none() {
                    issues.push(Issue::error(
                        Some(id.clone()),
                        format!("jumps to undefined node '{next}'"),
                    ));
                }
            }
            NodeBody::Choice { options } => {
                for option in options {
                    if script.node(&option.goto).is_none() {
                        issues.push(Issue::error(
                            Some(id.clone()),
                            format!("option '{}' jumps to undefined node '{}'", option.label, option.goto),
                        ));
                    }
                }
            }
            NodeBody::Ending { .. } => {}
        }
    }
}

/// Choice nodes carry 2..=5 options and at least one unguarded option,
/// so a fresh session always has something to select.
fn check_choices(script: &Script, issues: &mut Vec<Issue>) {
    for (id, node) in script.nodes() {
        let Some(options) = node.options() else {
            continue;
        };

        if options.len() < 2 || options.len() > 5 {
            issues.push(Issue::error(
                Some(id.clone()),
                format!("has {} options, expected 2 to 5", options.len()),
            ));
        }

        if !options.iter().any(|o| o.guard == Guard::Always) {
            issues.push(Issue::error(
                Some(id.clone()),
                "every option is guarded; a fresh session has no reachable option",
            ));
        }
    }
}

/// Each of the five endings must be owned by exactly one terminal node.
fn check_endings(script: &Script, issues: &mut Vec<Issue>) {
    let mut owners: HashMap<Ending, Vec<NodeId>> = HashMap::new();
    for (id, node) in script.nodes() {
        if let Some(ending) = node.ending_of() {
            owners.entry(ending).or_default().push(id.clone());
        }
    }

    for ending in Ending::ALL {
        match owners.get(&ending).map(Vec::as_slice) {
            None | Some([]) => issues.push(Issue::error(
                None,
                format!("no terminal node unlocks {ending}"),
            )),
            Some([_]) => {}
            Some(many) => {
                let mut ids: Vec<String> = many.iter().map(NodeId::to_string).collect();
                ids.sort();
                issues.push(Issue::error(
                    None,
                    format!("{ending} is unlocked by {} nodes: {}", many.len(), ids.join(", ")),
                ));
            }
        }
    }
}

/// Every node should be reachable from the start node.
fn check_reachability(script: &Script, issues: &mut Vec<Issue>) {
    if script.node(script.start()).is_none() {
        return;
    }

    let mut seen: HashSet<&NodeId> = HashSet::new();
    let mut queue: VecDeque<&NodeId> = VecDeque::new();
    queue.push_back(script.start());

    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        let Some(node) = script.node(id) else {
            continue;
        };
        match &node.body {
            NodeBody::Linear { next } => queue.push_back(next),
            NodeBody::Choice { options } => {
                for option in options {
                    queue.push_back(&option.goto);
                }
            }
            NodeBody::Ending { .. } => {}
        }
    }

    let mut unreachable: Vec<&NodeId> = script
        .nodes()
        .map(|(id, _)| id)
        .filter(|id| !seen.contains(*id))
        .collect();
    unreachable.sort();

    for id in unreachable {
        issues.push(Issue::warning(
            Some(id.clone()),
            "not reachable from the start node",
        ));
    }
}

/// Any option whose linear continuation lands on the true ending must be
/// guarded on the true route; otherwise the bonus path leaks into a fresh
/// playthrough.
fn check_true_route_guard(script: &Script, issues: &mut Vec<Issue>) {
    for (id, node) in script.nodes() {
        let Some(options) = node.options() else {
            continue;
        };
        for option in options {
            if linear_terminal(script, &option.goto) == Some(Ending::True)
                && option.guard != Guard::TrueRouteUnlocked
            {
                issues.push(Issue::error(
                    Some(id.clone()),
                    format!("option '{}' reaches the true ending without a guard", option.label),
                ));
            }
        }
    }
}

/// Follow linear edges from `id` until a non-linear node, returning the
/// ending if the chain terminates at one.
fn linear_terminal(script: &Script, id: &NodeId) -> Option<Ending> {
    let mut seen = HashSet::new();
    let mut current = id;
    loop {
        if !seen.insert(current.clone()) {
            return None; // cycle
        }
        match &script.node(current)?.body {
            NodeBody::Linear { next } => current = next,
            NodeBody::Choice { .. } => return None,
            NodeBody::Ending { ending } => return Some(*ending),
        }
    }
}
