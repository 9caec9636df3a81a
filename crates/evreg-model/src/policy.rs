//! Team participation policy for a single event.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Smallest team size offered when a policy leaves the lower bound open.
pub const DEFAULT_MIN_TEAM_SIZE: u32 = 1;

/// Largest team size offered when a policy leaves the upper bound open.
pub const DEFAULT_MAX_TEAM_SIZE: u32 = 5;

/// Derived team-participation rules for one event.
///
/// Policies are never stored; they are recomputed from the event title
/// whenever the event context changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTeamPolicy {
    /// Team participation is mandatory.
    pub require_team: bool,
    /// The participant may switch between individual and team entry.
    pub allow_toggle: bool,
    /// Minimum team size including the leader.
    pub min_size: Option<u32>,
    /// Maximum team size including the leader.
    pub max_size: Option<u32>,
}

impl Default for EventTeamPolicy {
    fn default() -> Self {
        Self::open()
    }
}

impl EventTeamPolicy {
    /// Individual or team entry, no enforced size.
    pub const fn open() -> Self {
        Self {
            require_team: false,
            allow_toggle: true,
            min_size: None,
            max_size: None,
        }
    }

    /// Mandatory team entry with a size range.
    pub const fn team(min_size: u32, max_size: u32) -> Self {
        Self {
            require_team: true,
            allow_toggle: false,
            min_size: Some(min_size),
            max_size: Some(max_size),
        }
    }

    /// Individual entry only.
    pub const fn solo() -> Self {
        Self {
            require_team: false,
            allow_toggle: false,
            min_size: Some(1),
            max_size: Some(1),
        }
    }

    /// Team participation is disallowed when the upper bound is one,
    /// whatever `require_team` says.
    pub fn is_solo_only(&self) -> bool {
        self.max_size == Some(1)
    }

    /// Lower bound, falling back to the documented default.
    pub fn effective_min(&self) -> u32 {
        self.min_size.unwrap_or(DEFAULT_MIN_TEAM_SIZE)
    }

    /// Upper bound, falling back to the documented default.
    pub fn effective_max(&self) -> u32 {
        self.max_size.unwrap_or(DEFAULT_MAX_TEAM_SIZE)
    }

    /// Clamp a requested team size into the effective bounds.
    pub fn clamp_size(&self, size: u32) -> u32 {
        let min = self.effective_min();
        let max = self.effective_max().max(min);
        size.clamp(min, max)
    }

    /// Sizes a participant may pick, from the default `1..=5` choices.
    pub fn selectable_sizes(&self) -> RangeInclusive<u32> {
        let min = self.effective_min().max(DEFAULT_MIN_TEAM_SIZE);
        let max = self.effective_max().min(DEFAULT_MAX_TEAM_SIZE);
        min..=max
    }

    /// The size selector is fixed when both bounds are set and equal.
    pub fn size_locked(&self) -> bool {
        matches!((self.min_size, self.max_size), (Some(min), Some(max)) if min == max)
    }

    /// Check the `min_size <= max_size` invariant.
    pub fn is_consistent(&self) -> bool {
        match (self.min_size, self.max_size) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_policy_uses_default_bounds() {
        let policy = EventTeamPolicy::open();
        assert_eq!(policy.effective_min(), 1);
        assert_eq!(policy.effective_max(), 5);
        assert_eq!(policy.selectable_sizes(), 1..=5);
        assert!(!policy.size_locked());
    }

    #[test]
    fn solo_policy_is_locked() {
        let policy = EventTeamPolicy::solo();
        assert!(policy.is_solo_only());
        assert!(policy.size_locked());
        assert_eq!(policy.clamp_size(4), 1);
    }

    #[test]
    fn team_policy_clamps() {
        let policy = EventTeamPolicy::team(2, 5);
        assert_eq!(policy.clamp_size(0), 2);
        assert_eq!(policy.clamp_size(9), 5);
        assert_eq!(policy.selectable_sizes().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
        assert!(policy.is_consistent());
    }
}
