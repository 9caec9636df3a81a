//! Turn a validated draft into the record sent to the backend.

use chrono::{DateTime, Utc};
use evreg_model::{
    Event, EventSpecificData, FieldValue, RegistrationDraft, RegistrationRecord, keys,
};

use crate::schema::fields_for_event;

/// Role recorded for the person filling the form.
pub const LEADER_ROLE: &str = "Leader";

/// Build the stored record for `event` from a draft.
///
/// Individual entries are recorded with team size 1 and no members. The
/// event-specific bag carries the applicant's personal details, every
/// answered field of the event's form section, and the event category and
/// title. Blank answers are left out of the bag so they do not turn into
/// empty export columns.
pub fn build_record(
    draft: &RegistrationDraft,
    event: &Event,
    registered_at: DateTime<Utc>,
) -> RegistrationRecord {
    let applicant = &draft.applicant;
    let team = &draft.team;
    let mut bag = EventSpecificData::new();
    for (key, value) in [
        (keys::GENDER, &applicant.gender),
        (keys::CITY, &applicant.city),
        (keys::PROGRAM_BRANCH, &applicant.program_branch),
        (keys::CURRENT_YEAR, &applicant.current_year),
    ] {
        insert_text(&mut bag, key, value);
    }

    for field in fields_for_event(&event.title) {
        if matches!(field.key, keys::TECHNICAL_SKILLS | keys::PREVIOUS_EXPERIENCE) {
            continue;
        }
        match draft.event_fields.get(field.key) {
            Some(FieldValue::Text(text)) => insert_text(&mut bag, field.key, text),
            Some(value) => bag.insert(field.key, value.clone()),
            None => {}
        }
    }

    if let Some(category) = &event.category {
        insert_text(&mut bag, keys::EVENT_CATEGORY, category);
    }
    insert_text(&mut bag, keys::EVENT_TITLE, &event.title);

    let (team_name, team_size, team_members) = if team.is_team {
        (
            non_blank(&team.team_name),
            team.team_size,
            team.team_members.clone(),
        )
    } else {
        (None, 1, Vec::new())
    };

    RegistrationRecord {
        full_name: applicant.full_name.trim().to_string(),
        email_id: applicant.email_id.trim().to_string(),
        contact_number: applicant.contact_number.trim().to_string(),
        college_university: applicant.college_name.trim().to_string(),
        department_year: format!(
            "{} - {}",
            applicant.program_branch.trim(),
            applicant.current_year.trim()
        ),
        technical_skills: draft
            .event_fields
            .text(keys::TECHNICAL_SKILLS)
            .and_then(non_blank),
        previous_experience: draft
            .event_fields
            .text(keys::PREVIOUS_EXPERIENCE)
            .and_then(non_blank),
        team_name,
        team_size,
        role_in_team: LEADER_ROLE.to_string(),
        agree_to_rules: draft.agree_to_rules,
        registered_at,
        event_specific_data: Some(bag),
        team_members,
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn insert_text(bag: &mut EventSpecificData, key: &str, value: &str) {
    if let Some(text) = non_blank(value) {
        bag.insert(key, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evreg_model::{Applicant, TeamDraft, TeamMemberRecord};

    fn event(title: &str) -> Event {
        Event {
            id: "evt-1".to_string(),
            title: title.to_string(),
            category: Some("Technical".to_string()),
            status: Some("open".to_string()),
            payment_link: None,
        }
    }

    fn applicant() -> Applicant {
        Applicant {
            full_name: " Asha Rao ".to_string(),
            gender: "Female".to_string(),
            contact_number: "9800000000".to_string(),
            email_id: "asha@example.edu".to_string(),
            college_name: "MIT".to_string(),
            city: "Pune".to_string(),
            program_branch: "CSE".to_string(),
            current_year: "3rd Year".to_string(),
        }
    }

    #[test]
    fn individual_entry_drops_team_data() {
        let draft = RegistrationDraft {
            applicant: applicant(),
            team: TeamDraft {
                is_team: false,
                team_name: "Ignored".to_string(),
                team_size: 3,
                team_members: vec![TeamMemberRecord::default(); 2],
            },
            event_fields: EventSpecificData::new()
                .with(keys::LAPTOP_AVAILABLE, false)
                .with(keys::ROBOT_NAME, "not on this form"),
            agree_to_rules: true,
        };
        let record = build_record(&draft, &event("Infinity Lab"), DateTime::UNIX_EPOCH);
        assert_eq!(record.full_name, "Asha Rao");
        assert_eq!(record.department_year, "CSE - 3rd Year");
        assert_eq!(record.team_name, None);
        assert_eq!(record.team_size, 1);
        assert!(record.team_members.is_empty());
        assert_eq!(record.role_in_team, LEADER_ROLE);

        let bag = record.event_specific_data.expect("bag");
        assert_eq!(bag.flag(keys::LAPTOP_AVAILABLE), Some(false));
        assert!(!bag.is_defined(keys::ROBOT_NAME));
        assert_eq!(bag.text(keys::EVENT_CATEGORY), Some("Technical"));
        assert_eq!(bag.text(keys::EVENT_TITLE), Some("Infinity Lab"));
        assert_eq!(bag.text(keys::CITY), Some("Pune"));
    }

    #[test]
    fn hackathon_skills_move_to_core_fields() {
        let draft = RegistrationDraft {
            applicant: applicant(),
            team: TeamDraft::default(),
            event_fields: EventSpecificData::new()
                .with(keys::TECHNICAL_SKILLS, "Rust")
                .with(keys::PREVIOUS_EXPERIENCE, "  ")
                .with(keys::PROJECT_IDEA, "Compilers"),
            agree_to_rules: true,
        };
        let record = build_record(&draft, &event("Stellar Hackathon"), DateTime::UNIX_EPOCH);
        assert_eq!(record.technical_skills.as_deref(), Some("Rust"));
        assert_eq!(record.previous_experience, None);
        let bag = record.event_specific_data.expect("bag");
        assert!(!bag.is_defined(keys::TECHNICAL_SKILLS));
        assert_eq!(bag.text(keys::PROJECT_IDEA), Some("Compilers"));
    }

    #[test]
    fn team_entry_keeps_members() {
        let member = TeamMemberRecord {
            name: "Ravi".to_string(),
            ..TeamMemberRecord::default()
        };
        let draft = RegistrationDraft {
            applicant: applicant(),
            team: TeamDraft {
                is_team: true,
                team_name: "Rocket".to_string(),
                team_size: 2,
                team_members: vec![member.clone()],
            },
            event_fields: EventSpecificData::new(),
            agree_to_rules: true,
        };
        let record = build_record(&draft, &event("CodeBurst"), DateTime::UNIX_EPOCH);
        assert_eq!(record.team_name.as_deref(), Some("Rocket"));
        assert_eq!(record.team_size, 2);
        assert_eq!(record.team_members, vec![member]);
        assert!(record.member_count_consistent());
    }
}
