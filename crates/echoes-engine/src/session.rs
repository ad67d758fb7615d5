//! Per-session player state.

use std::collections::HashMap;

use echoes_script::{Companion, Effect, Guard, Trait};

use crate::persist::EndingFlags;

/// The player's state for a single playthrough.
///
/// Created at session start and discarded when the session ends. Counters
/// only grow; nothing in the current content reads the trait accumulators
/// for branching.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// The player's chosen name, interpolated into display text.
    pub player_name: String,
    traits: HashMap<Trait, u32>,
    trust: HashMap<Companion, u32>,
    true_route_unlocked: bool,
}

impl SessionState {
    /// Start a fresh session.
    ///
    /// All counters start at zero. The true-route flag is computed here,
    /// once, from the persistent ending flags, and stays fixed for the
    /// whole session.
    pub fn new(player_name: impl Into<String>, flags: &EndingFlags) -> Self {
        Self {
            player_name: player_name.into(),
            traits: HashMap::new(),
            trust: HashMap::new(),
            true_route_unlocked: flags.true_route_reachable(),
        }
    }

    /// Current value of a trait accumulator.
    pub fn trait_value(&self, which: Trait) -> u32 {
        self.traits.get(&which).copied().unwrap_or(0)
    }

    /// Current trust with a companion.
    pub fn trust(&self, companion: Companion) -> u32 {
        self.trust.get(&companion).copied().unwrap_or(0)
    }

    /// Whether the true route was unlocked when this session started.
    pub fn true_route_unlocked(&self) -> bool {
        self.true_route_unlocked
    }

    /// Whether a guard lets its option be listed in this session.
    pub fn allows(&self, guard: Guard) -> bool {
        guard.is_met(self.true_route_unlocked)
    }

    /// Apply a choice effect. Pure addition, no clamping, no upper bound.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::AddTrait(which, amount) => {
                *self.traits.entry(which).or_insert(0) += amount;
            }
            Effect::AddTrust(companion, amount) => {
                *self.trust.entry(companion).or_insert(0) += amount;
            }
        }
    }
}
