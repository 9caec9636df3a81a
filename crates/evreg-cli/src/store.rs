//! JSON file backend for events and registrations.
//!
//! The file holds every known event and, per event id, the registrations
//! submitted so far:
//!
//! ```json
//! {
//!   "events": [{ "id": "evt-1", "title": "Stellar Hackathon", "status": "open" }],
//!   "registrations": { "evt-1": [] }
//! }
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use evreg_export::{StatsOptions, compute_stats, write_atomic};
use evreg_model::{
    Event, EventDirectory, ModelError, RegistrationListing, RegistrationRecord, RegistrationStats,
    StatsSource,
};
use evreg_rules::{RegistrationSink, SubmissionError, SubmissionReceipt};
use serde::{Deserialize, Serialize};

/// Event status that refuses new registrations.
pub const CLOSED_STATUS: &str = "closed";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreData {
    pub events: Vec<Event>,
    pub registrations: BTreeMap<String, Vec<RegistrationRecord>>,
}

#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    stats: StatsOptions,
    data: RefCell<StoreData>,
}

impl JsonStore {
    /// Open a store file. A missing file is an error.
    pub fn open(path: impl Into<PathBuf>, stats: StatsOptions) -> Result<Self, ModelError> {
        let path = path.into();
        let content = fs::read_to_string(&path)?;
        let data: StoreData = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            events = data.events.len(),
            "opened registration store"
        );
        Ok(Self {
            path,
            stats,
            data: RefCell::new(data),
        })
    }

    /// Replace the store file with `data`; the old file stays intact on failure.
    fn save(&self, data: &StoreData) -> Result<(), SubmissionError> {
        let json = serde_json::to_vec_pretty(data).map_err(SubmissionError::transport)?;
        write_atomic(&self.path, &json).map_err(SubmissionError::transport)
    }
}

impl EventDirectory for JsonStore {
    fn get_event(&self, event_id: &str) -> Result<Option<Event>, ModelError> {
        Ok(self
            .data
            .borrow()
            .events
            .iter()
            .find(|event| event.id == event_id)
            .cloned())
    }

    fn list_registrations(&self, event_id: &str) -> Result<RegistrationListing, ModelError> {
        let event = self.require_event(event_id)?;
        let registrations = self
            .data
            .borrow()
            .registrations
            .get(event_id)
            .cloned()
            .unwrap_or_default();
        Ok(RegistrationListing {
            event,
            total_count: registrations.len(),
            registrations,
        })
    }
}

impl StatsSource for JsonStore {
    fn get_stats(&self, event_id: &str) -> Result<RegistrationStats, ModelError> {
        let listing = self.list_registrations(event_id)?;
        Ok(compute_stats(&listing.registrations, Utc::now(), &self.stats))
    }
}

impl RegistrationSink for JsonStore {
    fn submit(
        &self,
        event_id: &str,
        record: &RegistrationRecord,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let mut data = self.data.borrow_mut();
        let Some(event) = data.events.iter().find(|event| event.id == event_id) else {
            return Err(SubmissionError::Rejected {
                reason: "Event not found".to_string(),
            });
        };
        if event
            .status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case(CLOSED_STATUS))
        {
            return Err(SubmissionError::Rejected {
                reason: "Registrations are closed for this event".to_string(),
            });
        }

        let mut updated = data.clone();
        let registrations = updated
            .registrations
            .entry(event_id.to_string())
            .or_default();
        registrations.push(record.clone());
        let registration_id = format!("reg-{}", registrations.len());
        self.save(&updated)?;
        *data = updated;
        Ok(SubmissionReceipt { registration_id })
    }
}
