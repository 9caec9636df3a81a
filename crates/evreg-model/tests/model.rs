//! Tests for evreg-model types.

use evreg_model::{
    EventSpecificData, EventTeamPolicy, RegistrationDraft, RegistrationRecord, keys,
};

#[test]
fn record_parses_backend_json() {
    let json = r#"{
        "fullName": "Asha Rao",
        "emailId": "asha@example.edu",
        "contactNumber": "9800000000",
        "collegeUniversity": "MIT",
        "departmentYear": "CSE - 3rd Year",
        "teamSize": 2,
        "roleInTeam": "Leader",
        "agreeToRules": true,
        "registeredAt": 1758268800000,
        "eventSpecificData": {"laptopAvailable": false, "city": "Pune"},
        "teamMembers": [{"name": "Ravi", "emailId": "ravi@example.edu"}]
    }"#;
    let record: RegistrationRecord = serde_json::from_str(json).expect("parse record");
    assert_eq!(record.full_name, "Asha Rao");
    assert_eq!(record.technical_skills, None);
    assert_eq!(record.registered_at.timestamp_millis(), 1_758_268_800_000);
    assert!(record.is_team());
    assert!(record.member_count_consistent());
    assert_eq!(record.team_members[0].city, "");

    let bag = record.event_specific_data.as_ref().expect("bag present");
    assert_eq!(bag.flag(keys::LAPTOP_AVAILABLE), Some(false));
    assert_eq!(bag.text(keys::CITY), Some("Pune"));
}

#[test]
fn record_round_trips_through_json() {
    let json = r#"{
        "fullName": "Solo",
        "emailId": "s@example.edu",
        "contactNumber": "1",
        "collegeUniversity": "CMU",
        "departmentYear": "ECE - 1st Year",
        "teamSize": 1,
        "roleInTeam": "Leader",
        "agreeToRules": true,
        "registeredAt": 0
    }"#;
    let record: RegistrationRecord = serde_json::from_str(json).expect("parse record");
    let encoded = serde_json::to_string(&record).expect("serialize record");
    assert!(!encoded.contains("eventSpecificData"));
    let decoded: RegistrationRecord = serde_json::from_str(&encoded).expect("reparse record");
    assert_eq!(decoded, record);
}

#[test]
fn draft_defaults_to_individual_entry() {
    let draft: RegistrationDraft =
        serde_json::from_str(r#"{"fullName": "Asha", "agreeToRules": true}"#).expect("parse");
    assert_eq!(draft.applicant.full_name, "Asha");
    assert!(!draft.team.is_team);
    assert_eq!(draft.team.team_size, 1);
    assert!(draft.team.team_members.is_empty());
    assert!(draft.event_fields.is_empty());
}

#[test]
fn draft_reads_event_fields() {
    let draft: RegistrationDraft = serde_json::from_str(
        r#"{"isTeam": true, "teamSize": 3, "eventFields": {"selectedGame": "BGMI"}}"#,
    )
    .expect("parse");
    assert!(draft.team.is_team);
    assert_eq!(draft.team.team_size, 3);
    assert_eq!(draft.event_fields.text(keys::SELECTED_GAME), Some("BGMI"));
}

#[test]
fn policy_serializes_camel_case() {
    let json = serde_json::to_string(&EventTeamPolicy::team(2, 5)).expect("serialize");
    assert_eq!(
        json,
        r#"{"requireTeam":true,"allowToggle":false,"minSize":2,"maxSize":5}"#
    );
}

#[test]
fn bag_collects_from_pairs() {
    let bag: EventSpecificData = [(keys::ROBOT_NAME, "Atlas"), (keys::BOT_DIMENSIONS, "30x30")]
        .into_iter()
        .collect();
    assert_eq!(bag.len(), 2);
    assert_eq!(bag.text(keys::BOT_DIMENSIONS), Some("30x30"));
}
