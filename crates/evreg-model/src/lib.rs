//! Data model for event registrations.
//!
//! Types shared by the rule engine, the exporter and the CLI:
//! team policies, form drafts, stored registration records, events and
//! the read-side collaborator contract.

pub mod directory;
pub mod draft;
pub mod error;
pub mod event;
pub mod fields;
pub mod policy;
pub mod record;

pub use directory::{EventDirectory, StatsSource};
pub use draft::{Applicant, RegistrationDraft, TeamDraft};
pub use error::{ModelError, Result};
pub use event::{Event, InstitutionCount, RegistrationListing, RegistrationStats};
pub use fields::{EventSpecificData, FieldValue, keys};
pub use policy::{DEFAULT_MAX_TEAM_SIZE, DEFAULT_MIN_TEAM_SIZE, EventTeamPolicy};
pub use record::{RegistrationRecord, TeamMemberRecord};
