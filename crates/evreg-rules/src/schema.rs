//! Event-specific form fields.
//!
//! Like the team rules, the form schema is an ordered keyword table and
//! the first entry whose keywords appear in the event title decides which
//! extra fields the registration form shows.

use evreg_model::keys;

use crate::policy::title_matches;

/// Input widget of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    /// Pick one of a fixed set of values.
    Choice(&'static [&'static str]),
    Checkbox,
}

#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub max_len: Option<usize>,
}

impl FormField {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            max_len: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

/// Extra form section for a family of events.
#[derive(Debug, Clone, Copy)]
pub struct EventForm {
    pub keywords: &'static [&'static str],
    pub heading: &'static str,
    pub note: Option<&'static str>,
    pub fields: &'static [FormField],
}

pub const PROJECT_DOMAINS: &[&str] = &[
    "Electronics & Telecommunication (ENTC)",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Agriculture",
    "Healthcare",
    "Interdisciplinary / Open Innovation",
    "Computer Science & IT",
    "Other",
];

pub const PROJECT_TYPES: &[&str] = &["Hardware", "Software", "Both"];

pub const GAMES: &[&str] = &["BGMI", "Valorant"];

/// Ordered event forms, first match wins.
pub const EVENT_FORMS: &[EventForm] = &[
    EventForm {
        keywords: &["stellar", "hackathon"],
        heading: "Event-Specific Information",
        note: None,
        fields: &[
            FormField::new(keys::TECHNICAL_SKILLS, "Technical Skills", FieldKind::LongText)
                .required(),
            FormField::new(
                keys::PREVIOUS_EXPERIENCE,
                "Previous Experience",
                FieldKind::LongText,
            ),
            FormField::new(
                keys::PROJECT_IDEA,
                "Project Idea or Area of Interest",
                FieldKind::LongText,
            ),
        ],
    },
    EventForm {
        keywords: &["protonova", "project"],
        heading: "Project Information",
        note: None,
        fields: &[
            FormField::new(keys::PROJECT_TITLE, "Project Title", FieldKind::Text).required(),
            FormField::new(keys::PROJECT_ABSTRACT, "Project Abstract", FieldKind::LongText)
                .required()
                .max_len(1000),
            FormField::new(
                keys::PROJECT_DOMAIN,
                "Project Domain",
                FieldKind::Choice(PROJECT_DOMAINS),
            )
            .required(),
            FormField::new(
                keys::PROJECT_TYPE,
                "Project Type",
                FieldKind::Choice(PROJECT_TYPES),
            )
            .required(),
        ],
    },
    EventForm {
        keywords: &["sparkx", "startup"],
        heading: "Startup Information",
        note: None,
        fields: &[
            FormField::new(keys::STARTUP_NAME, "Startup Name", FieldKind::Text).required(),
            FormField::new(keys::STARTUP_IDEA, "Startup Idea", FieldKind::LongText).required(),
        ],
    },
    EventForm {
        keywords: &["cosmobolt", "robo"],
        heading: "Robot Information",
        note: None,
        fields: &[
            FormField::new(keys::ROBOT_NAME, "Robot Name", FieldKind::Text).required(),
            FormField::new(keys::BOT_DIMENSIONS, "Bot Dimensions", FieldKind::Text).required(),
        ],
    },
    EventForm {
        keywords: &["battleclipse", "esports"],
        heading: "Gaming Information",
        note: None,
        fields: &[
            FormField::new(keys::SELECTED_GAME, "Selected Game", FieldKind::Choice(GAMES))
                .required(),
            FormField::new(keys::GAME_USERNAMES, "Game Usernames", FieldKind::LongText)
                .required(),
        ],
    },
    EventForm {
        keywords: &["infinity", "workshop"],
        heading: "Workshop Information",
        note: Some("This event is for individual participation only."),
        fields: &[FormField::new(
            keys::LAPTOP_AVAILABLE,
            "Laptop available for the hands-on training session",
            FieldKind::Checkbox,
        )],
    },
    EventForm {
        keywords: &["codeburst", "programming"],
        heading: "Coding Information",
        note: Some("This event allows both individual and team participation."),
        fields: &[FormField::new(
            keys::LAPTOP_AVAILABLE,
            "Laptop available for the coding challenge",
            FieldKind::Checkbox,
        )],
    },
];

/// Extra form section for an event title, if it has one.
pub fn form_for_event(event_title: &str) -> Option<&'static EventForm> {
    let title = event_title.to_lowercase();
    EVENT_FORMS
        .iter()
        .find(|form| title_matches(&title, form.keywords))
}

/// Fields shown for an event title; empty when the event has no extra section.
pub fn fields_for_event(event_title: &str) -> &'static [FormField] {
    form_for_event(event_title).map_or(&[], |form| form.fields)
}
