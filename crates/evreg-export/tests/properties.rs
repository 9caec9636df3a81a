//! Property tests for row flattening.

use chrono::DateTime;
use evreg_export::{
    CORE_COLUMNS, ExportOptions, ExportTable, MEMBER_COLUMNS_PER_MEMBER, OPTIONAL_COLUMNS, flatten,
};
use evreg_model::{EventSpecificData, FieldValue, RegistrationRecord, TeamMemberRecord};
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        any::<bool>().prop_map(FieldValue::Flag),
        "[A-Za-z ]{0,10}".prop_map(FieldValue::Text),
        Just(FieldValue::Other(serde_json::Value::Null)),
    ]
}

fn arb_bag() -> impl Strategy<Value = Option<EventSpecificData>> {
    let known: Vec<&str> = OPTIONAL_COLUMNS.iter().map(|(key, _)| *key).collect();
    let key = prop_oneof![
        prop::sample::select(known),
        Just("unknownField"),
        Just("teamMembers"),
    ];
    prop::option::of(
        prop::collection::vec((key, arb_value()), 0..12)
            .prop_map(|pairs| pairs.into_iter().collect::<EventSpecificData>()),
    )
}

fn arb_record() -> impl Strategy<Value = RegistrationRecord> {
    (
        "[A-Za-z ]{1,12}",
        prop::option::of("[A-Za-z, ]{0,12}"),
        prop::option::of("[A-Za-z]{0,8}"),
        0usize..6,
        any::<bool>(),
        0i64..2_000_000_000,
        arb_bag(),
    )
        .prop_map(
            |(full_name, technical_skills, team_name, members, agree_to_rules, seconds, bag)| {
                RegistrationRecord {
                    full_name,
                    email_id: "someone@example.edu".to_string(),
                    contact_number: "9800000000".to_string(),
                    college_university: "MIT".to_string(),
                    department_year: "CSE - 1st Year".to_string(),
                    technical_skills,
                    previous_experience: None,
                    team_name,
                    team_size: u32::try_from(members).unwrap_or(0) + 1,
                    role_in_team: "Leader".to_string(),
                    agree_to_rules,
                    registered_at: DateTime::from_timestamp(seconds, 0).unwrap_or_default(),
                    event_specific_data: bag,
                    team_members: vec![TeamMemberRecord::default(); members],
                }
            },
        )
}

proptest! {
    #[test]
    fn flatten_is_deterministic(record in arb_record(), index in 0usize..500) {
        let options = ExportOptions::default();
        prop_assert_eq!(flatten(&record, index, &options), flatten(&record, index, &options));
    }

    #[test]
    fn column_set_follows_defined_fields(record in arb_record()) {
        let row = flatten(&record, 0, &ExportOptions::default());
        let defined = record.event_specific_data.as_ref().map_or(0, |bag| {
            OPTIONAL_COLUMNS.iter().filter(|(key, _)| bag.is_defined(key)).count()
        });
        let member_columns = row
            .labels()
            .filter(|label| label.starts_with("Team Member "))
            .count();
        prop_assert_eq!(member_columns, MEMBER_COLUMNS_PER_MEMBER * record.team_members.len());
        prop_assert_eq!(row.len(), CORE_COLUMNS.len() + defined + member_columns);
        prop_assert!(row.labels().take(CORE_COLUMNS.len()).eq(CORE_COLUMNS));
    }

    #[test]
    fn table_rows_match_header_width(records in prop::collection::vec(arb_record(), 1..6)) {
        let table = ExportTable::build(&records, &ExportOptions::default());
        prop_assert_eq!(table.row_count(), records.len());
        for row in table.rows() {
            prop_assert_eq!(row.len(), table.column_count());
        }
    }
}
