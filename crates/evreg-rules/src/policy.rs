//! Team-rule resolution from an event's display name.
//!
//! Rules are ordered data: the first keyword group found in the
//! lower-cased title decides the policy. Titles can loosely overlap, so
//! the order of [`TEAM_RULES`] is significant.

use evreg_model::EventTeamPolicy;

/// A keyword group and the policy it selects.
#[derive(Debug, Clone, Copy)]
pub struct TeamRule {
    pub keywords: &'static [&'static str],
    pub policy: EventTeamPolicy,
}

/// Ordered team rules, first match wins.
pub const TEAM_RULES: &[TeamRule] = &[
    // Battleclipse: squads of exactly five
    TeamRule {
        keywords: &["battleclipse", "esports"],
        policy: EventTeamPolicy::team(5, 5),
    },
    // SparkX: founding teams of two to five
    TeamRule {
        keywords: &["sparkx", "startup"],
        policy: EventTeamPolicy::team(2, 5),
    },
    // Infinity Lab: hands-on seats are individual
    TeamRule {
        keywords: &["infinity", "workshop"],
        policy: EventTeamPolicy::solo(),
    },
];

/// True when the lower-cased title contains any keyword.
pub(crate) fn title_matches(title_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| title_lower.contains(keyword))
}

/// Find the team rule that applies to a title, if any.
pub fn matching_rule(event_title: &str) -> Option<&'static TeamRule> {
    let title = event_title.to_lowercase();
    TEAM_RULES
        .iter()
        .find(|rule| title_matches(&title, rule.keywords))
}

/// Derive the team policy for an event title.
///
/// Never fails: titles matching no keyword group get the open policy.
pub fn resolve_policy(event_title: &str) -> EventTeamPolicy {
    let policy = matching_rule(event_title)
        .map(|rule| rule.policy)
        .unwrap_or_else(EventTeamPolicy::open);
    tracing::debug!(
        event_title,
        require_team = policy.require_team,
        min_size = ?policy.min_size,
        max_size = ?policy.max_size,
        "resolved team policy"
    );
    policy
}
