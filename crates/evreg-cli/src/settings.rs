//! User settings, persisted as TOML.
//!
//! The default file lives in the platform config directory:
//! - Linux: ~/.config/evreg/settings.toml
//! - macOS: ~/Library/Application Support/org.evreg.evreg/settings.toml
//! - Windows: %APPDATA%\evreg\evreg\config\settings.toml

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use evreg_export::{
    DEFAULT_DATE_FORMAT, DEFAULT_RECENT_WINDOW_DAYS, DEFAULT_TIME_FORMAT,
    DEFAULT_TOP_INSTITUTIONS, ExportError, ExportFormat, ExportOptions, StatsOptions,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "evreg";
const APP_NAME: &str = "evreg";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub export: ExportSettings,
    pub stats: StatsSettings,
}

/// Defaults for roster exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Timezone used for the date and time columns, in minutes east of UTC.
    pub utc_offset_minutes: i32,
    pub date_format: String,
    pub time_format: String,
    /// Where export files go when `--output-dir` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub format: ExportFormat,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            output_dir: None,
            format: ExportFormat::default(),
        }
    }
}

impl ExportSettings {
    pub fn export_options(&self) -> Result<ExportOptions, ExportError> {
        ExportOptions::with_offset_minutes(
            self.utc_offset_minutes,
            self.date_format.as_str(),
            self.time_format.as_str(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSettings {
    pub recent_window_days: u32,
    pub top_institutions: usize,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
            top_institutions: DEFAULT_TOP_INSTITUTIONS,
        }
    }
}

impl StatsSettings {
    pub fn stats_options(&self) -> StatsOptions {
        StatsOptions::new(self.recent_window_days, self.top_institutions)
    }
}

/// Path of the default settings file, if the platform has a config directory.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings.
///
/// An explicit path must exist and parse. The default file is optional:
/// when it is missing or broken the defaults are used and a warning is
/// logged.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    if let Some(path) = explicit {
        return read_settings(path);
    }
    let Some(path) = settings_path() else {
        tracing::debug!("no config directory on this platform, using default settings");
        return Ok(Settings::default());
    };
    match read_settings(&path) {
        Ok(settings) => Ok(settings),
        Err(SettingsError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        Err(error) => {
            tracing::warn!(%error, "ignoring settings file, using defaults");
            Ok(Settings::default())
        }
    }
}

pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Render settings the way they are stored on disk.
pub fn to_toml(settings: &Settings) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [export]
            utc_offset_minutes = 330
            format = "csv"
            "#,
        )
        .expect("parse");
        assert_eq!(settings.export.utc_offset_minutes, 330);
        assert_eq!(settings.export.format, ExportFormat::Csv);
        assert_eq!(settings.export.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(settings.stats, StatsSettings::default());
    }

    #[test]
    fn defaults_round_trip() {
        let text = to_toml(&Settings::default()).expect("serialize");
        let parsed: Settings = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let error = load_settings(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(error, SettingsError::Read { .. }));
    }

    #[test]
    fn explicit_broken_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[stats]\nrecent_window_days = \"soon\"\n").expect("write");
        let error = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(error, SettingsError::Parse { .. }));
    }
}
