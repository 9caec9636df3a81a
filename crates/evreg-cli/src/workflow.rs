//! Registration and export steps shared by the CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use evreg_export::{ExportFormat, ExportOptions, ExportReport, export_registrations};
use evreg_model::{
    EventDirectory, EventSpecificData, EventTeamPolicy, FieldValue, RegistrationDraft,
};
use evreg_rules::{
    FieldKind, Registrar, RegistrationSink, SubmissionOutcome, fields_for_event, reconcile,
    resolve_policy, select_team_size, set_team_participation,
};
use tracing::{debug, warn};

use crate::logging::redact_value;

/// A draft after applying an event's policy and the user's choices.
#[derive(Debug, Clone)]
pub struct PreparedDraft {
    pub policy: EventTeamPolicy,
    pub draft: RegistrationDraft,
    /// The participation choice was ignored because the event fixes it.
    pub toggle_ignored: bool,
    /// Size actually applied when a size was requested.
    pub applied_size: Option<u32>,
}

/// Reconcile a draft with the policy for `event_title`, then apply the
/// participation toggle and size choice and pre-fill the form fields.
pub fn prepare_draft(
    event_title: &str,
    mut draft: RegistrationDraft,
    participation: Option<bool>,
    size: Option<u32>,
) -> PreparedDraft {
    let policy = resolve_policy(event_title);
    let toggle_ignored = participation
        .is_some_and(|is_team| !set_team_participation(&policy, &mut draft.team, is_team));
    if toggle_ignored {
        warn!(event_title, "team participation is fixed for this event");
    }
    reconcile(&policy, &mut draft.team);

    let applied_size = size.map(|requested| {
        let applied = select_team_size(&policy, &mut draft.team, requested);
        if applied != requested {
            warn!(requested, applied, "team size adjusted to the event's limits");
        }
        applied
    });
    prefill_form_fields(event_title, &mut draft.event_fields);

    PreparedDraft {
        policy,
        draft,
        toggle_ignored,
        applied_size,
    }
}

/// Add a blank entry for every form field of the event that is not set yet.
///
/// Checkboxes start unticked; text and choice fields start empty.
pub fn prefill_form_fields(event_title: &str, fields: &mut EventSpecificData) {
    for field in fields_for_event(event_title) {
        if fields.is_defined(field.key) {
            continue;
        }
        let blank = match field.kind {
            FieldKind::Checkbox => FieldValue::Flag(false),
            FieldKind::Text | FieldKind::LongText | FieldKind::Choice(_) => {
                FieldValue::Text(String::new())
            }
        };
        fields.insert(field.key, blank);
    }
}

/// Validate a draft and submit it for `event_id`.
///
/// Errors carry the participant-facing message as their outermost context.
pub fn submit_draft<S>(
    store: &S,
    event_id: &str,
    mut draft: RegistrationDraft,
    reconcile_first: bool,
    registered_at: DateTime<Utc>,
) -> Result<SubmissionOutcome>
where
    S: EventDirectory + RegistrationSink,
{
    let event = store
        .require_event(event_id)
        .with_context(|| format!("look up event {event_id}"))?;
    if reconcile_first {
        reconcile(&resolve_policy(&event.title), &mut draft.team);
    }
    debug!(
        event_id,
        applicant = redact_value(&draft.applicant.full_name),
        email = redact_value(&draft.applicant.email_id),
        team_size = draft.team.team_size,
        "submitting registration"
    );

    let registrar = Registrar::new(store);
    registrar
        .submit(&event, &draft, registered_at)
        .map_err(|error| {
            let message = error.user_message();
            anyhow::Error::new(error).context(message)
        })
}

/// Export every registration of `event_id` into `output_dir`.
pub fn export_event<D: EventDirectory>(
    directory: &D,
    event_id: &str,
    output_dir: &Path,
    format: ExportFormat,
    options: &ExportOptions,
    exported_at: DateTime<Utc>,
) -> Result<ExportReport> {
    let listing = directory
        .list_registrations(event_id)
        .with_context(|| format!("load registrations for {event_id}"))?;
    export_registrations(&listing, output_dir, format, options, exported_at).map_err(|error| {
        let message = error.user_message();
        anyhow::Error::new(error).context(message)
    })
}
