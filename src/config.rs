// Configuration for the settings host.
// Resolves file locations from platform directories and reads environment overrides.

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use subtabs::{Result, SubTabError, SubTabId};

use crate::tabs::DemoTab;

/// Overrides the settings file location.
pub const SETTINGS_ENV: &str = "SUBTABS_SETTINGS";
/// Selects the sub-tab shown first.
pub const TAB_ENV: &str = "SUBTABS_TAB";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub settings_path: PathBuf,
    pub log_path: PathBuf,
    pub initial_tab: DemoTab,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "subtabs")
}

/// Default settings file (~/.config/subtabs/settings.json on Linux).
pub fn default_settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
}

/// Log file (~/.cache/subtabs/subtabs.log on Linux).
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("subtabs.log"))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(SETTINGS_ENV).ok(), env::var(TAB_ENV).ok())
    }

    fn from_vars(settings: Option<String>, tab: Option<String>) -> Result<Self> {
        let settings_path = match settings {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_settings_path().ok_or_else(no_home)?,
        };

        let initial_tab = match tab.as_deref() {
            Some(key) if !key.is_empty() => DemoTab::parse(key)?,
            _ => DemoTab::General,
        };

        Ok(Self {
            settings_path,
            log_path: log_path().ok_or_else(no_home)?,
            initial_tab,
        })
    }
}

fn no_home() -> SubTabError {
    SubTabError::Other("Could not determine a home directory".to_string())
}
