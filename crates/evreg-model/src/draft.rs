//! In-progress registration form state.
//!
//! A draft is owned by a single form session and passed by reference
//! through reconciliation and validation before it is turned into a
//! [`RegistrationRecord`](crate::RegistrationRecord).

use serde::{Deserialize, Serialize};

use crate::fields::EventSpecificData;
use crate::record::TeamMemberRecord;

/// Personal details of the registrant (the team leader for team entries).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Applicant {
    pub full_name: String,
    pub gender: String,
    pub contact_number: String,
    pub email_id: String,
    pub college_name: String,
    pub city: String,
    pub program_branch: String,
    pub current_year: String,
}

/// Team portion of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamDraft {
    pub is_team: bool,
    pub team_name: String,
    /// Size including the leader.
    pub team_size: u32,
    pub team_members: Vec<TeamMemberRecord>,
}

impl Default for TeamDraft {
    fn default() -> Self {
        Self {
            is_team: false,
            team_name: String::new(),
            team_size: 1,
            team_members: Vec::new(),
        }
    }
}

/// Full form draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    #[serde(flatten)]
    pub applicant: Applicant,
    #[serde(flatten)]
    pub team: TeamDraft,
    /// Event-specific answers keyed like the stored bag.
    pub event_fields: EventSpecificData,
    pub agree_to_rules: bool,
}
