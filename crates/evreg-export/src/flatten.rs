//! Flatten stored registrations into labeled spreadsheet rows.

use std::fmt;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use evreg_model::{RegistrationRecord, TeamMemberRecord, keys};

use crate::error::{ExportError, Result};

pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Core columns every row starts with, in order.
pub const CORE_COLUMNS: [&str; 14] = [
    "S.No",
    "Registration Date",
    "Registration Time",
    "Full Name",
    "Email ID",
    "Contact Number",
    "College/University",
    "Department & Year",
    "Technical Skills",
    "Previous Experience",
    "Team Name",
    "Team Size",
    "Role in Team",
    "Agreed to Rules",
];

/// Event-specific keys exported as columns, in column order.
///
/// Keys not listed here are never exported.
pub const OPTIONAL_COLUMNS: [(&str, &str); 19] = [
    (keys::GENDER, "Gender"),
    (keys::CITY, "City"),
    (keys::PROGRAM_BRANCH, "Program/Branch"),
    (keys::CURRENT_YEAR, "Current Year"),
    (keys::PROJECT_TITLE, "Project Title"),
    (keys::PROJECT_ABSTRACT, "Project Abstract"),
    (keys::PROJECT_DOMAIN, "Project Domain"),
    (keys::PROJECT_TYPE, "Project Type"),
    (keys::PROJECT_IDEA, "Project Idea"),
    (keys::STARTUP_NAME, "Startup Name"),
    (keys::STARTUP_IDEA, "Startup Idea"),
    (keys::ROBOT_NAME, "Robot Name"),
    (keys::BOT_DIMENSIONS, "Bot Dimensions"),
    (keys::SELECTED_GAME, "Selected Game"),
    (keys::GAME_USERNAMES, "Game Usernames"),
    (keys::LAPTOP_AVAILABLE, "Laptop Available"),
    (keys::NEEDS_SPECIAL_SETUP, "Needs Special Setup"),
    (keys::ADDITIONAL_SPACE_REQUIREMENTS, "Additional Space Requirements"),
    (keys::EVENT_CATEGORY, "Event Category"),
];

/// Columns emitted per team member.
pub const MEMBER_COLUMNS_PER_MEMBER: usize = 8;

const NOT_AVAILABLE: &str = "N/A";
const INDIVIDUAL: &str = "Individual";

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// One flattened registration: labeled cells in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRow {
    cells: Vec<(String, CellValue)>,
}

impl ExportRow {
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.push((label.into(), value.into()));
    }

    pub fn get(&self, label: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| value)
    }

    pub fn has_column(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(label, _)| label.as_str())
    }

    pub fn cells(&self) -> &[(String, CellValue)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Per-run rendering settings: the timezone and formats used to split the
/// registration timestamp into date and time cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    offset: FixedOffset,
    date_format: String,
    time_format: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl ExportOptions {
    /// Build options, rejecting strftime patterns chrono cannot render.
    pub fn new(
        offset: FixedOffset,
        date_format: impl Into<String>,
        time_format: impl Into<String>,
    ) -> Result<Self> {
        let date_format = date_format.into();
        let time_format = time_format.into();
        check_format("date", &date_format)?;
        check_format("time", &time_format)?;
        Ok(Self {
            offset,
            date_format,
            time_format,
        })
    }

    /// Options for a UTC offset given in minutes east of UTC.
    pub fn with_offset_minutes(
        minutes: i32,
        date_format: impl Into<String>,
        time_format: impl Into<String>,
    ) -> Result<Self> {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ExportError::InvalidFormat {
                field: "utc offset",
                format: minutes.to_string(),
            })?;
        Self::new(offset, date_format, time_format)
    }

    /// Date and time cell text for a timestamp.
    pub fn split_timestamp(&self, at: DateTime<Utc>) -> (String, String) {
        let local = at.with_timezone(&self.offset);
        (
            local.format(&self.date_format).to_string(),
            local.format(&self.time_format).to_string(),
        )
    }
}

fn check_format(field: &'static str, format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ExportError::InvalidFormat {
            field,
            format: format.to_string(),
        });
    }
    Ok(())
}

/// Flatten one registration into a labeled row.
///
/// `row_index` is zero-based; the "S.No" cell is `row_index + 1`.
pub fn flatten(
    record: &RegistrationRecord,
    row_index: usize,
    options: &ExportOptions,
) -> ExportRow {
    let mut row = ExportRow::default();
    let (date, time) = options.split_timestamp(record.registered_at);
    let serial = i64::try_from(row_index).map_or(i64::MAX, |index| index.saturating_add(1));

    row.push("S.No", serial);
    row.push("Registration Date", date);
    row.push("Registration Time", time);
    row.push("Full Name", record.full_name.as_str());
    row.push("Email ID", record.email_id.as_str());
    row.push("Contact Number", record.contact_number.as_str());
    row.push("College/University", record.college_university.as_str());
    row.push("Department & Year", record.department_year.as_str());
    row.push(
        "Technical Skills",
        or_default(record.technical_skills.as_deref(), NOT_AVAILABLE),
    );
    row.push(
        "Previous Experience",
        or_default(record.previous_experience.as_deref(), NOT_AVAILABLE),
    );
    row.push(
        "Team Name",
        or_default(record.team_name.as_deref(), INDIVIDUAL),
    );
    row.push("Team Size", i64::from(record.team_size));
    row.push("Role in Team", record.role_in_team.as_str());
    row.push(
        "Agreed to Rules",
        if record.agree_to_rules { "Yes" } else { "No" },
    );

    if let Some(bag) = &record.event_specific_data {
        for (key, label) in OPTIONAL_COLUMNS {
            if let Some(value) = bag.get(key) {
                row.push(label, value.display().unwrap_or_default());
            }
        }
    }

    for (index, member) in record.team_members.iter().enumerate() {
        for (suffix, value) in member_cells(member) {
            row.push(format!("Team Member {} {suffix}", index + 1), value);
        }
    }

    row
}

fn or_default<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(fallback)
}

fn member_cells(
    member: &TeamMemberRecord,
) -> [(&'static str, &str); MEMBER_COLUMNS_PER_MEMBER] {
    [
        ("Name", &member.name),
        ("Email", &member.email_id),
        ("Contact", &member.contact_number),
        ("College", &member.college),
        ("City", &member.city),
        ("Program", &member.program_branch),
        ("Year", &member.current_year),
        ("Gender", &member.gender),
    ]
}
