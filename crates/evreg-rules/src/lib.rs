//! Registration form rules.
//!
//! - **Policy** (`policy`): team-participation policy derived from the event title
//! - **Reconciliation** (`reconcile`): keep a draft consistent with the policy
//! - **Form schema** (`schema`): event-specific fields shown per event
//! - **Validation** (`validate`): submit-time checks
//! - **Submission** (`record`, `submit`): record building and single-flight submit
//!
//! Keyword tables are ordered data and the first match wins, so supporting
//! a new event family is a table edit.

pub mod error;
pub mod policy;
pub mod reconcile;
pub mod record;
pub mod schema;
pub mod submit;
pub mod validate;

pub use error::{PolicyViolation, SUBMISSION_FALLBACK_MESSAGE, SubmissionError, ValidationError};
pub use policy::{TEAM_RULES, TeamRule, matching_rule, resolve_policy};
pub use reconcile::{effective_size, reconcile, select_team_size, set_team_participation};
pub use record::{LEADER_ROLE, build_record};
pub use schema::{EVENT_FORMS, EventForm, FieldKind, FormField, fields_for_event, form_for_event};
pub use submit::{
    GateGuard, PAYMENT_UNAVAILABLE_NOTICE, PaymentHandoff, Registrar, RegistrationSink,
    SubmissionGate, SubmissionOutcome, SubmissionReceipt,
};
pub use validate::{validate_draft, validate_submission, validate_team};
