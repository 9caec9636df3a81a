//! Submit-time validation and submission flow.

use std::cell::RefCell;

use chrono::{DateTime, Utc};
use evreg_model::{
    Applicant, Event, EventSpecificData, EventTeamPolicy, RegistrationDraft, RegistrationRecord,
    TeamDraft, TeamMemberRecord, keys,
};
use evreg_rules::{
    PaymentHandoff, PolicyViolation, Registrar, RegistrationSink, SubmissionError,
    SubmissionReceipt, ValidationError, validate_draft, validate_submission, validate_team,
};

fn applicant() -> Applicant {
    Applicant {
        full_name: "Asha Rao".to_string(),
        gender: "Female".to_string(),
        contact_number: "9800000000".to_string(),
        email_id: "asha@example.edu".to_string(),
        college_name: "MIT".to_string(),
        city: "Pune".to_string(),
        program_branch: "CSE".to_string(),
        current_year: "3rd Year".to_string(),
    }
}

fn filled_member(n: usize) -> TeamMemberRecord {
    TeamMemberRecord {
        name: format!("Member {n}"),
        gender: "Male".to_string(),
        contact_number: "9811111111".to_string(),
        email_id: format!("m{n}@example.edu"),
        college: "MIT".to_string(),
        city: "Pune".to_string(),
        program_branch: "ECE".to_string(),
        current_year: "2nd Year".to_string(),
    }
}

fn team(is_team: bool, team_size: u32, members: usize) -> TeamDraft {
    TeamDraft {
        is_team,
        team_name: if is_team { "Rocket".to_string() } else { String::new() },
        team_size,
        team_members: (1..=members).map(filled_member).collect(),
    }
}

fn draft(team: TeamDraft) -> RegistrationDraft {
    RegistrationDraft {
        applicant: applicant(),
        team,
        event_fields: EventSpecificData::new(),
        agree_to_rules: true,
    }
}

fn event(title: &str, payment_link: Option<&str>) -> Event {
    Event {
        id: "evt-1".to_string(),
        title: title.to_string(),
        category: None,
        status: None,
        payment_link: payment_link.map(str::to_string),
    }
}

#[derive(Default)]
struct RecordingSink {
    submitted: RefCell<Vec<RegistrationRecord>>,
    reject_with: Option<String>,
}

impl RegistrationSink for RecordingSink {
    fn submit(
        &self,
        _event_id: &str,
        record: &RegistrationRecord,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        if let Some(reason) = &self.reject_with {
            return Err(SubmissionError::Rejected {
                reason: reason.clone(),
            });
        }
        let mut submitted = self.submitted.borrow_mut();
        submitted.push(record.clone());
        Ok(SubmissionReceipt {
            registration_id: format!("reg-{}", submitted.len()),
        })
    }
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_758_268_800_000).expect("timestamp")
}

#[test]
fn solo_policy_rejects_team_claim() {
    let policy = EventTeamPolicy::solo();
    assert_eq!(
        validate_team(&policy, &team(true, 1, 0)),
        Err(PolicyViolation::SoloOnly)
    );
    assert_eq!(
        validate_team(&policy, &team(false, 2, 1)),
        Err(PolicyViolation::SoloOnly)
    );
    assert_eq!(validate_team(&policy, &team(false, 1, 0)), Ok(()));
}

#[test]
fn mandatory_team_checks_in_order() {
    let policy = EventTeamPolicy::team(2, 5);
    assert_eq!(
        validate_team(&policy, &team(false, 3, 2)),
        Err(PolicyViolation::TeamMandatory)
    );
    assert_eq!(
        validate_team(&policy, &team(true, 6, 5)),
        Err(PolicyViolation::SizeOutOfRange {
            size: 6,
            min: 2,
            max: 5
        })
    );
    assert_eq!(
        validate_team(&policy, &team(true, 3, 1)),
        Err(PolicyViolation::MemberCountMismatch {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(validate_team(&policy, &team(true, 3, 2)), Ok(()));
}

#[test]
fn open_policy_has_no_size_limit() {
    let policy = EventTeamPolicy::open();
    assert_eq!(validate_team(&policy, &team(false, 1, 0)), Ok(()));
    assert_eq!(validate_team(&policy, &team(true, 7, 6)), Ok(()));
}

#[test]
fn rules_must_be_accepted() {
    let mut draft = draft(team(false, 1, 0));
    draft.agree_to_rules = false;
    let error = validate_draft(&EventTeamPolicy::open(), &[], &draft).unwrap_err();
    assert_eq!(
        error,
        ValidationError::PolicyViolation(PolicyViolation::RulesNotAccepted)
    );
    assert_eq!(error.user_message(), "Please agree to the rules and regulations");
}

#[test]
fn violation_messages_are_actionable() {
    let error = ValidationError::from(PolicyViolation::SizeOutOfRange {
        size: 1,
        min: 2,
        max: 5,
    });
    assert_eq!(error.to_string(), "policy violation: size out of range");
    assert_eq!(error.user_message(), "Team size must be between 2 and 5");
}

#[test]
fn missing_applicant_field_is_reported() {
    let mut draft = draft(team(false, 1, 0));
    draft.applicant.city = "  ".to_string();
    assert_eq!(
        validate_submission("Quiz Night", &draft),
        Err(ValidationError::missing("City"))
    );
}

#[test]
fn blank_member_field_is_reported() {
    let mut draft = draft(team(true, 5, 4));
    draft.team.team_members[2].email_id.clear();
    draft.event_fields = EventSpecificData::new()
        .with(keys::SELECTED_GAME, "BGMI")
        .with(keys::GAME_USERNAMES, "a\nb\nc\nd\ne");
    assert_eq!(
        validate_submission("Battleclipse", &draft),
        Err(ValidationError::missing("Team Member 3 Email ID"))
    );
}

#[test]
fn event_fields_follow_the_form_schema() {
    let mut draft = draft(team(false, 1, 0));
    assert_eq!(
        validate_submission("Protonova Project Expo", &draft),
        Err(ValidationError::missing("Project Title"))
    );

    draft.event_fields = EventSpecificData::new()
        .with(keys::PROJECT_TITLE, "Solar Tracker")
        .with(keys::PROJECT_ABSTRACT, "x".repeat(1001))
        .with(keys::PROJECT_DOMAIN, "Agriculture")
        .with(keys::PROJECT_TYPE, "Hardware");
    assert!(matches!(
        validate_submission("Protonova Project Expo", &draft),
        Err(ValidationError::TooLong { max_len: 1000, .. })
    ));

    draft
        .event_fields
        .insert(keys::PROJECT_ABSTRACT, "Tracks the sun.");
    draft.event_fields.insert(keys::PROJECT_TYPE, "Firmware");
    assert!(matches!(
        validate_submission("Protonova Project Expo", &draft),
        Err(ValidationError::InvalidChoice { .. })
    ));

    draft.event_fields.insert(keys::PROJECT_TYPE, "Both");
    assert_eq!(validate_submission("Protonova Project Expo", &draft), Ok(()));
}

#[test]
fn invalid_draft_never_reaches_sink() {
    let registrar = Registrar::new(RecordingSink::default());
    let error = registrar
        .submit(&event("Infinity Lab", None), &draft(team(true, 1, 0)), now())
        .unwrap_err();
    assert!(matches!(
        error,
        SubmissionError::Invalid(ValidationError::PolicyViolation(PolicyViolation::SoloOnly))
    ));
    assert!(registrar.sink().submitted.borrow().is_empty());
    assert!(!registrar.gate().is_pending());
}

#[test]
fn valid_draft_is_submitted_with_payment_link() {
    let registrar = Registrar::new(RecordingSink::default());
    let mut draft = draft(team(true, 3, 2));
    draft.event_fields = EventSpecificData::new()
        .with(keys::STARTUP_NAME, "Nimbus")
        .with(keys::STARTUP_IDEA, "Weather drones");
    let outcome = registrar
        .submit(
            &event("SparkX", Some("https://pay.example/sparkx")),
            &draft,
            now(),
        )
        .expect("submit");
    assert_eq!(outcome.receipt.registration_id, "reg-1");
    assert_eq!(
        outcome.payment,
        PaymentHandoff::Redirect("https://pay.example/sparkx".to_string())
    );
    assert_eq!(outcome.record.team_size, 3);
    assert_eq!(outcome.record.registered_at, now());
    assert_eq!(registrar.sink().submitted.borrow().len(), 1);
}

#[test]
fn missing_payment_link_shows_notice() {
    let registrar = Registrar::new(RecordingSink::default());
    let outcome = registrar
        .submit(&event("Quiz Night", Some(" ")), &draft(team(false, 1, 0)), now())
        .expect("submit");
    assert_eq!(outcome.payment, PaymentHandoff::Unavailable);
    assert!(outcome.payment.message().contains("contact the organizers"));
}

#[test]
fn rejection_surfaces_backend_reason() {
    let registrar = Registrar::new(RecordingSink {
        reject_with: Some("Registrations are closed".to_string()),
        ..RecordingSink::default()
    });
    let error = registrar
        .submit(&event("Quiz Night", None), &draft(team(false, 1, 0)), now())
        .unwrap_err();
    assert_eq!(error.user_message(), "Registrations are closed");
    assert!(!registrar.gate().is_pending());
}

#[test]
fn transport_failure_uses_fallback_message() {
    let error = SubmissionError::transport("connection reset");
    assert_eq!(error.user_message(), evreg_rules::SUBMISSION_FALLBACK_MESSAGE);
}

#[test]
fn pending_submission_blocks_resubmit() {
    let registrar = Registrar::new(RecordingSink::default());
    let guard = registrar.gate().try_acquire().expect("acquire gate");
    let error = registrar
        .submit(&event("Quiz Night", None), &draft(team(false, 1, 0)), now())
        .unwrap_err();
    assert!(matches!(error, SubmissionError::InFlight));
    drop(guard);
    assert!(
        registrar
            .submit(&event("Quiz Night", None), &draft(team(false, 1, 0)), now())
            .is_ok()
    );
}
