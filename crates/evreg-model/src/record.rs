use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::EventSpecificData;

/// One additional team member (the leader is the registrant).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMemberRecord {
    pub name: String,
    pub gender: String,
    pub contact_number: String,
    pub email_id: String,
    pub college: String,
    pub city: String,
    pub program_branch: String,
    pub current_year: String,
}

impl TeamMemberRecord {
    /// Fields paired with their form labels, in form order.
    pub fn labeled_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("Name", &self.name),
            ("Gender", &self.gender),
            ("Contact Number", &self.contact_number),
            ("Email ID", &self.email_id),
            ("College", &self.college),
            ("City", &self.city),
            ("Program/Branch", &self.program_branch),
            ("Current Year", &self.current_year),
        ]
    }
}

/// A stored registration, one per participant or team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub full_name: String,
    pub email_id: String,
    pub contact_number: String,
    pub college_university: String,
    pub department_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    pub team_size: u32,
    pub role_in_team: String,
    pub agree_to_rules: bool,
    /// Milliseconds since the Unix epoch.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub registered_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_specific_data: Option<EventSpecificData>,
    #[serde(default)]
    pub team_members: Vec<TeamMemberRecord>,
}

impl RegistrationRecord {
    /// Team registrations have more than one member.
    pub fn is_team(&self) -> bool {
        self.team_size > 1
    }

    /// Check the member-count invariant: `team_size - 1` members for a
    /// team, none for an individual.
    pub fn member_count_consistent(&self) -> bool {
        let expected = self.team_size.saturating_sub(1) as usize;
        self.team_members.len() == expected
    }
}
