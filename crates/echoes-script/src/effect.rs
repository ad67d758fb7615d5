//! Effects applied to session state when a choice is selected.

use std::fmt;

/// A trait accumulator incremented by narrative choices.
///
/// The current content increments these but never reads them for branching;
/// they are reserved for future gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trait {
    /// Curiosity about the tower's history.
    Knowledge,
    /// Loyalty to the old oaths.
    Duty,
    /// The urge to break the tower's hold.
    Freedom,
    /// Hunger for what the tower guards.
    Power,
}

impl Trait {
    /// All trait accumulators, in display order.
    pub const ALL: [Trait; 4] = [Trait::Knowledge, Trait::Duty, Trait::Freedom, Trait::Power];
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trait::Knowledge => "knowledge",
            Trait::Duty => "duty",
            Trait::Freedom => "freedom",
            Trait::Power => "power",
        };
        write!(f, "{s}")
    }
}

/// A companion whose trust the player can earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Companion {
    /// Elara, the scholar.
    Elara,
    /// Kael, the warden.
    Kael,
    /// Sirin, the wanderer.
    Sirin,
}

impl Companion {
    /// All companions, in display order.
    pub const ALL: [Companion; 3] = [Companion::Elara, Companion::Kael, Companion::Sirin];
}

impl fmt::Display for Companion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Companion::Elara => "Elara",
            Companion::Kael => "Kael",
            Companion::Sirin => "Sirin",
        };
        write!(f, "{s}")
    }
}

/// A mutation applied to session state when a choice is selected.
///
/// Effects are pure additions: counters only grow, with no clamping and
/// no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Add to a trait accumulator.
    AddTrait(Trait, u32),
    /// Add to a companion's trust counter.
    AddTrust(Companion, u32),
}
