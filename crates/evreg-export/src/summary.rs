//! Summary sheet contents: event facts and the college distribution.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use evreg_model::{InstitutionCount, RegistrationListing};

use crate::flatten::{CellValue, ExportOptions};

const NOT_AVAILABLE: &str = "N/A";

/// Count registrations per institution.
///
/// Names are grouped by exact match. The result is sorted by count,
/// descending; ties keep the order in which names were first seen.
pub fn rank_institutions<'a, I>(names: I) -> Vec<InstitutionCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<InstitutionCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for name in names {
        match positions.get(name) {
            Some(&position) => counts[position].count += 1,
            None => {
                positions.insert(name, counts.len());
                counts.push(InstitutionCount::new(name, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Facts shown on the "Summary" sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub event_title: String,
    pub event_category: String,
    pub event_status: String,
    pub total_registrations: usize,
    pub export_date: String,
    pub export_time: String,
    pub institutions: Vec<InstitutionCount>,
}

impl ExportSummary {
    pub fn build(
        listing: &RegistrationListing,
        exported_at: DateTime<Utc>,
        options: &ExportOptions,
    ) -> Self {
        let event = &listing.event;
        let (export_date, export_time) = options.split_timestamp(exported_at);
        Self {
            event_title: event.title.clone(),
            event_category: present_or_na(event.category.as_deref()),
            event_status: present_or_na(event.status.as_deref()),
            total_registrations: listing.total_count,
            export_date,
            export_time,
            institutions: rank_institutions(
                listing
                    .registrations
                    .iter()
                    .map(|record| record.college_university.as_str()),
            ),
        }
    }

    /// Metric/value pairs in sheet order, after the header row.
    ///
    /// `None` marks the spacer row before the college distribution.
    pub fn sheet_rows(&self) -> Vec<Option<(String, CellValue)>> {
        let text = |label: &str, value: &str| Some((label.to_string(), CellValue::from(value)));
        let total = i64::try_from(self.total_registrations).unwrap_or(i64::MAX);
        let mut rows = vec![
            text("Event Title", &self.event_title),
            text("Event Category", &self.event_category),
            text("Event Status", &self.event_status),
            Some(("Total Registrations".to_string(), CellValue::Number(total))),
            text("Export Date", &self.export_date),
            text("Export Time", &self.export_time),
            None,
            text("College Distribution", ""),
        ];
        rows.extend(self.institutions.iter().map(|institution| {
            let count = i64::try_from(institution.count).unwrap_or(i64::MAX);
            Some((institution.name.clone(), CellValue::Number(count)))
        }));
        rows
    }
}

fn present_or_na(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_first_seen_order() {
        let ranked = rank_institutions(["IIT", "MIT", "CMU", "MIT", "CMU", "VIT"]);
        assert_eq!(
            ranked,
            vec![
                InstitutionCount::new("MIT", 2),
                InstitutionCount::new("CMU", 2),
                InstitutionCount::new("IIT", 1),
                InstitutionCount::new("VIT", 1),
            ]
        );
    }

    #[test]
    fn grouping_is_exact() {
        let ranked = rank_institutions(["MIT", "mit", "MIT "]);
        assert_eq!(ranked.len(), 3);
    }
}
