//! Error types for form validation and submission.
//!
//! Every error here ends an attempt: nothing is retried automatically and
//! the participant has to correct the form (or simply resubmit after a
//! collaborator failure). `user_message` gives the text shown to them.

use thiserror::Error;

/// A team-rule violation detected at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("solo only")]
    SoloOnly,
    #[error("team mandatory")]
    TeamMandatory,
    #[error("size out of range")]
    SizeOutOfRange { size: u32, min: u32, max: u32 },
    #[error("member count mismatch")]
    MemberCountMismatch { expected: usize, actual: usize },
    #[error("rules not accepted")]
    RulesNotAccepted,
}

impl PolicyViolation {
    pub fn user_message(&self) -> String {
        match self {
            Self::SoloOnly => "This event accepts individual participation only".to_string(),
            Self::TeamMandatory => "Team participation is compulsory for this event".to_string(),
            Self::SizeOutOfRange { min, max, .. } => {
                format!("Team size must be between {min} and {max}")
            }
            Self::MemberCountMismatch { .. } => {
                "Please complete details for all team members".to_string()
            }
            Self::RulesNotAccepted => "Please agree to the rules and regulations".to_string(),
        }
    }
}

/// Submission blocked by the form contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("policy violation: {0}")]
    PolicyViolation(#[from] PolicyViolation),

    /// A required field is empty.
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// A choice field holds a value outside its option list.
    #[error("invalid value for {field}: {value}")]
    InvalidChoice { field: String, value: String },

    #[error("{field} exceeds {max_len} characters")]
    TooLong { field: String, max_len: usize },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::PolicyViolation(violation) => violation.user_message(),
            Self::MissingField { field } => format!("Please fill in {field}"),
            Self::InvalidChoice { field, .. } => format!("Please select a valid {field}"),
            Self::TooLong { field, max_len } => {
                format!("{field} must be at most {max_len} characters")
            }
        }
    }
}

/// Generic text for collaborator failures without a usable message.
pub const SUBMISSION_FALLBACK_MESSAGE: &str = "Registration failed. Please try again.";

/// Submission did not reach or was refused by the registration backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    /// The form failed validation; the collaborator was never called.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The backend refused the registration.
    #[error("registration rejected: {reason}")]
    Rejected { reason: String },

    /// The backend could not be reached.
    #[error("registration backend unavailable")]
    Transport {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Another submission is still pending.
    #[error("a submission is already in progress")]
    InFlight,
}

impl SubmissionError {
    pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport {
            source: source.into(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(error) => error.user_message(),
            Self::Rejected { reason } if !reason.trim().is_empty() => reason.clone(),
            Self::InFlight => "Your registration is already being submitted".to_string(),
            _ => SUBMISSION_FALLBACK_MESSAGE.to_string(),
        }
    }
}
