//! Registration statistics computed from stored records.

use chrono::{DateTime, TimeDelta, Utc};
use evreg_model::{RegistrationRecord, RegistrationStats};

use crate::summary::rank_institutions;

pub const DEFAULT_RECENT_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_TOP_INSTITUTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    /// Registrations at or after `now - recent_window` count as recent.
    pub recent_window: TimeDelta,
    pub top_institutions: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_WINDOW_DAYS, DEFAULT_TOP_INSTITUTIONS)
    }
}

impl StatsOptions {
    pub fn new(recent_window_days: u32, top_institutions: usize) -> Self {
        Self {
            recent_window: TimeDelta::days(i64::from(recent_window_days)),
            top_institutions,
        }
    }
}

/// Reduce a registration list to its statistics as of `now`.
pub fn compute_stats(
    records: &[RegistrationRecord],
    now: DateTime<Utc>,
    options: &StatsOptions,
) -> RegistrationStats {
    let cutoff = now - options.recent_window;
    let recent_count = records
        .iter()
        .filter(|record| record.registered_at >= cutoff)
        .count();
    let team_count = records.iter().filter(|record| record.is_team()).count();
    let mut top_institutions = rank_institutions(
        records
            .iter()
            .map(|record| record.college_university.as_str()),
    );
    top_institutions.truncate(options.top_institutions);

    tracing::debug!(
        total = records.len(),
        recent = recent_count,
        teams = team_count,
        "computed registration stats"
    );

    RegistrationStats {
        total_count: records.len(),
        recent_count,
        team_count,
        individual_count: records.len() - team_count,
        top_institutions,
    }
}
