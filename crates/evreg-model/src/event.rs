use serde::{Deserialize, Serialize};

use crate::record::RegistrationRecord;

/// An event as returned by the event lookup collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
}

/// Everything an export run needs for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationListing {
    pub event: Event,
    pub registrations: Vec<RegistrationRecord>,
    pub total_count: usize,
}

/// Number of registrations from one institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionCount {
    pub name: String,
    pub count: usize,
}

impl InstitutionCount {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Registration statistics for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStats {
    pub total_count: usize,
    /// Registrations inside the recent window (one week by default).
    pub recent_count: usize,
    pub team_count: usize,
    pub individual_count: usize,
    pub top_institutions: Vec<InstitutionCount>,
}
