//! Keep a form draft consistent with the active team policy.

use evreg_model::{EventTeamPolicy, TeamDraft, TeamMemberRecord};

/// Team size the draft must have under `policy`.
///
/// Forced policies pin the size to their lower bound; otherwise the
/// chosen size is clamped into the policy bounds (1..=5 when open).
pub fn effective_size(policy: &EventTeamPolicy, chosen: u32) -> u32 {
    if policy.is_solo_only() {
        return 1;
    }
    match policy.min_size {
        Some(min) if policy.require_team => min,
        _ => policy.clamp_size(chosen),
    }
}

/// Normalize the team portion of a draft after the policy changed.
///
/// Idempotent: a second call under the same policy leaves the draft as is.
pub fn reconcile(policy: &EventTeamPolicy, team: &mut TeamDraft) {
    if policy.require_team {
        team.is_team = true;
    }
    if policy.is_solo_only() {
        team.is_team = false;
    }
    team.team_size = effective_size(policy, team.team_size);
    resize_members(&mut team.team_members, team.team_size);
    tracing::trace!(
        is_team = team.is_team,
        team_size = team.team_size,
        "reconciled team draft"
    );
}

/// Apply a user's team-size choice, clamped into the policy bounds.
///
/// Returns the size actually applied.
pub fn select_team_size(policy: &EventTeamPolicy, team: &mut TeamDraft, requested: u32) -> u32 {
    let size = if policy.is_solo_only() {
        1
    } else {
        policy.clamp_size(requested)
    };
    team.team_size = size;
    resize_members(&mut team.team_members, size);
    size
}

/// Flip between individual and team entry when the policy allows it.
///
/// Returns `false` and leaves the draft untouched when the toggle is locked.
pub fn set_team_participation(
    policy: &EventTeamPolicy,
    team: &mut TeamDraft,
    is_team: bool,
) -> bool {
    if !policy.allow_toggle {
        return false;
    }
    team.is_team = is_team;
    true
}

/// Resize to exactly `team_size - 1` members, truncating from the tail or
/// appending blank members.
fn resize_members(members: &mut Vec<TeamMemberRecord>, team_size: u32) {
    let required = team_size.saturating_sub(1) as usize;
    members.resize_with(required, TeamMemberRecord::default);
}
