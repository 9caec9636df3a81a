//! Single-flight submission of a registration draft.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use evreg_model::{Event, RegistrationDraft, RegistrationRecord};
use tracing::{info, warn};

use crate::error::SubmissionError;
use crate::record::build_record;
use crate::validate::validate_submission;

/// Notice shown when an event has no payment link configured.
pub const PAYMENT_UNAVAILABLE_NOTICE: &str =
    "Payment link not available. Please contact the organizers for payment details.";

/// Acknowledgement returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub registration_id: String,
}

/// Write side of the registration backend.
pub trait RegistrationSink {
    fn submit(
        &self,
        event_id: &str,
        record: &RegistrationRecord,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}

impl<T: RegistrationSink + ?Sized> RegistrationSink for &T {
    fn submit(
        &self,
        event_id: &str,
        record: &RegistrationRecord,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        (**self).submit(event_id, record)
    }
}

/// Where the participant goes after a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentHandoff {
    Redirect(String),
    Unavailable,
}

impl PaymentHandoff {
    pub fn for_event(event: &Event) -> Self {
        match event.payment_link.as_deref().map(str::trim) {
            Some(link) if !link.is_empty() => Self::Redirect(link.to_string()),
            _ => Self::Unavailable,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Redirect(link) => format!("Continue to payment: {link}"),
            Self::Unavailable => PAYMENT_UNAVAILABLE_NOTICE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub receipt: SubmissionReceipt,
    pub record: RegistrationRecord,
    pub payment: PaymentHandoff,
}

/// Allows at most one pending submission.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    pending: AtomicBool,
}

impl SubmissionGate {
    pub fn try_acquire(&self) -> Result<GateGuard<'_>, SubmissionError> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SubmissionError::InFlight)?;
        Ok(GateGuard { gate: self })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Releases the gate on drop.
#[derive(Debug)]
pub struct GateGuard<'a> {
    gate: &'a SubmissionGate,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate.pending.store(false, Ordering::Release);
    }
}

/// Validates drafts and hands them to a [`RegistrationSink`].
#[derive(Debug)]
pub struct Registrar<S> {
    sink: S,
    gate: SubmissionGate,
}

impl<S: RegistrationSink> Registrar<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            gate: SubmissionGate::default(),
        }
    }

    pub fn gate(&self) -> &SubmissionGate {
        &self.gate
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Validate, build and submit a registration.
    ///
    /// Invalid drafts never reach the sink. A second call while one is
    /// pending fails with [`SubmissionError::InFlight`].
    pub fn submit(
        &self,
        event: &Event,
        draft: &RegistrationDraft,
        registered_at: DateTime<Utc>,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        if let Err(error) = validate_submission(&event.title, draft) {
            warn!(event_id = %event.id, %error, "registration blocked by validation");
            return Err(error.into());
        }
        let _guard = self.gate.try_acquire()?;
        let record = build_record(draft, event, registered_at);
        let receipt = self
            .sink
            .submit(&event.id, &record)
            .inspect_err(|error| {
                warn!(event_id = %event.id, %error, "registration submission failed");
            })?;
        info!(
            event_id = %event.id,
            registration_id = %receipt.registration_id,
            team_size = record.team_size,
            "registration submitted"
        );
        Ok(SubmissionOutcome {
            receipt,
            record,
            payment: PaymentHandoff::for_event(event),
        })
    }
}
