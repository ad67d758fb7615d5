//! Guard predicates attached to choice options.
//!
//! A guard is evaluated at option-listing time, not during graph traversal.
//! A filtered option is invisible to the player and cannot be selected.

/// A predicate controlling whether a choice option is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Guard {
    /// The option is always visible.
    #[default]
    Always,
    /// Visible only if the true route was unlocked at session start.
    TrueRouteUnlocked,
}

impl Guard {
    /// Evaluate the guard against the session's true-route flag.
    ///
    /// The flag is fixed at session start; unlocking endings mid-session
    /// does not retroactively reveal guarded options.
    pub fn is_met(&self, true_route_unlocked: bool) -> bool {
        match self {
            Guard::Always => true,
            Guard::TrueRouteUnlocked => true_route_unlocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_is_met() {
        assert!(Guard::Always.is_met(false));
        assert!(Guard::Always.is_met(true));
    }

    #[test]
    fn true_route_follows_flag() {
        assert!(!Guard::TrueRouteUnlocked.is_met(false));
        assert!(Guard::TrueRouteUnlocked.is_met(true));
    }

    #[test]
    fn default_is_always() {
        assert_eq!(Guard::default(), Guard::Always);
    }
}
