//! Submit-time validation of a registration draft.

use evreg_model::{EventTeamPolicy, RegistrationDraft, TeamDraft};

use crate::error::{PolicyViolation, ValidationError};
use crate::policy::resolve_policy;
use crate::schema::{FieldKind, FormField, fields_for_event};

/// Check the team portion of a draft against the policy.
///
/// Solo-only policies reject any team claim. Mandatory-team policies
/// check participation, size bounds and the member count. Open policies
/// enforce no size, but a team entry must still carry `team_size - 1`
/// members so the stored record stays consistent.
pub fn validate_team(policy: &EventTeamPolicy, team: &TeamDraft) -> Result<(), PolicyViolation> {
    if policy.is_solo_only() {
        if team.is_team || team.team_size != 1 {
            return Err(PolicyViolation::SoloOnly);
        }
        return Ok(());
    }
    if policy.require_team {
        if !team.is_team {
            return Err(PolicyViolation::TeamMandatory);
        }
        let min = policy.effective_min();
        let max = policy.effective_max();
        if team.team_size < min || team.team_size > max {
            return Err(PolicyViolation::SizeOutOfRange {
                size: team.team_size,
                min,
                max,
            });
        }
    }
    if team.is_team {
        let expected = team.team_size.saturating_sub(1) as usize;
        if team.team_members.len() != expected {
            return Err(PolicyViolation::MemberCountMismatch {
                expected,
                actual: team.team_members.len(),
            });
        }
    }
    Ok(())
}

/// Validate a draft for an event title, resolving policy and form schema.
pub fn validate_submission(
    event_title: &str,
    draft: &RegistrationDraft,
) -> Result<(), ValidationError> {
    let policy = resolve_policy(event_title);
    validate_draft(&policy, fields_for_event(event_title), draft)
}

/// Validate a draft against an explicit policy and form fields.
///
/// Returns the first problem found: rule agreement, then team rules, then
/// required applicant, team and event fields.
pub fn validate_draft(
    policy: &EventTeamPolicy,
    fields: &[FormField],
    draft: &RegistrationDraft,
) -> Result<(), ValidationError> {
    if !draft.agree_to_rules {
        return Err(PolicyViolation::RulesNotAccepted.into());
    }
    validate_team(policy, &draft.team)?;
    check_applicant(draft)?;
    if draft.team.is_team {
        check_team(&draft.team)?;
    }
    check_event_fields(fields, draft)
}

fn require(label: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(label));
    }
    Ok(())
}

fn check_applicant(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    let applicant = &draft.applicant;
    require("Full Name", &applicant.full_name)?;
    require("Gender", &applicant.gender)?;
    require("Contact Number", &applicant.contact_number)?;
    require("Email ID", &applicant.email_id)?;
    require("College Name", &applicant.college_name)?;
    require("City", &applicant.city)?;
    require("Program/Branch", &applicant.program_branch)?;
    require("Current Year", &applicant.current_year)
}

fn check_team(team: &TeamDraft) -> Result<(), ValidationError> {
    require("Team Name", &team.team_name)?;
    for (idx, member) in team.team_members.iter().enumerate() {
        for (label, value) in member.labeled_fields() {
            require(&format!("Team Member {} {label}", idx + 1), value)?;
        }
    }
    Ok(())
}

fn check_event_fields(
    fields: &[FormField],
    draft: &RegistrationDraft,
) -> Result<(), ValidationError> {
    for field in fields {
        if field.kind == FieldKind::Checkbox {
            continue;
        }
        let value = draft.event_fields.text(field.key).unwrap_or_default().trim();
        if value.is_empty() {
            if field.required {
                return Err(ValidationError::missing(field.label));
            }
            continue;
        }
        if let FieldKind::Choice(options) = field.kind
            && !options.contains(&value)
        {
            return Err(ValidationError::InvalidChoice {
                field: field.label.to_string(),
                value: value.to_string(),
            });
        }
        if let Some(max_len) = field.max_len
            && value.chars().count() > max_len
        {
            return Err(ValidationError::TooLong {
                field: field.label.to_string(),
                max_len,
            });
        }
    }
    Ok(())
}
