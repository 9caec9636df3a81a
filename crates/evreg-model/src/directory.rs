use crate::error::{ModelError, Result};
use crate::event::{Event, RegistrationListing, RegistrationStats};

/// Read side of the registration backend.
pub trait EventDirectory {
    /// Look up an event; `Ok(None)` when it does not exist.
    fn get_event(&self, event_id: &str) -> Result<Option<Event>>;

    /// Fetch an event together with all of its registrations.
    fn list_registrations(&self, event_id: &str) -> Result<RegistrationListing>;

    /// Like [`get_event`](Self::get_event) but a missing event is an error.
    fn require_event(&self, event_id: &str) -> Result<Event> {
        self.get_event(event_id)?
            .ok_or_else(|| ModelError::EventNotFound(event_id.to_string()))
    }
}

/// Aggregated registration figures for an event.
pub trait StatsSource {
    fn get_stats(&self, event_id: &str) -> Result<RegistrationStats>;
}
