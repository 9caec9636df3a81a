//! Sparse event-specific field bag attached to a registration.
//!
//! Which keys are populated depends on the event: a hackathon carries a
//! project idea, an esports tournament a selected game, a workshop a
//! laptop flag. Keys are kept as they are stored by the registration
//! backend (camelCase) and unknown keys are carried along untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known keys of the event-specific bag.
pub mod keys {
    pub const GENDER: &str = "gender";
    pub const CITY: &str = "city";
    pub const PROGRAM_BRANCH: &str = "programBranch";
    pub const CURRENT_YEAR: &str = "currentYear";
    pub const TECHNICAL_SKILLS: &str = "technicalSkills";
    pub const PREVIOUS_EXPERIENCE: &str = "previousExperience";
    pub const PROJECT_TITLE: &str = "projectTitle";
    pub const PROJECT_ABSTRACT: &str = "projectAbstract";
    pub const PROJECT_DOMAIN: &str = "projectDomain";
    pub const PROJECT_TYPE: &str = "projectType";
    pub const PROJECT_IDEA: &str = "projectIdea";
    pub const STARTUP_NAME: &str = "startupName";
    pub const STARTUP_IDEA: &str = "startupIdea";
    pub const ROBOT_NAME: &str = "robotName";
    pub const BOT_DIMENSIONS: &str = "botDimensions";
    pub const SELECTED_GAME: &str = "selectedGame";
    pub const GAME_USERNAMES: &str = "gameUsernames";
    pub const LAPTOP_AVAILABLE: &str = "laptopAvailable";
    pub const NEEDS_SPECIAL_SETUP: &str = "needsSpecialSetup";
    pub const ADDITIONAL_SPACE_REQUIREMENTS: &str = "additionalSpaceRequirements";
    pub const EVENT_CATEGORY: &str = "eventCategory";
    pub const EVENT_TITLE: &str = "eventTitle";
}

/// A single value in the bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    /// Anything else the backend stored (numbers, nested data, null).
    Other(serde_json::Value),
}

impl FieldValue {
    /// Render the value for a spreadsheet cell.
    ///
    /// Flags become "Yes"/"No". Null and nested values have no display form.
    pub fn display(&self) -> Option<String> {
        match self {
            Self::Flag(true) => Some("Yes".to_string()),
            Self::Flag(false) => Some("No".to_string()),
            Self::Text(text) => Some(text.clone()),
            Self::Other(serde_json::Value::Number(number)) => Some(number.to_string()),
            Self::Other(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    /// JSON null counts as "not defined".
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Other(serde_json::Value::Null))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Sparse map from field key to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventSpecificData {
    fields: BTreeMap<String, FieldValue>,
}

impl EventSpecificData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a defined value. A stored null is treated as absent.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    pub fn is_defined(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FieldValue::as_flag)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for EventSpecificData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
