// Settings store for reading and writing the settings file.
// Handles JSON serialization and atomic filesystem writes.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use subtabs::Result;

/// Settings as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSettings<T> {
    /// The settings object.
    pub settings: T,
    /// When the settings were last saved.
    pub saved_at: DateTime<Utc>,
}

impl<T> StoredSettings<T> {
    /// Stamp settings with the current time.
    pub fn new(settings: T) -> Self {
        Self {
            settings,
            saved_at: Utc::now(),
        }
    }
}

/// Read stored settings from a file. A missing file is not an error.
pub fn read_stored<T: DeserializeOwned>(path: &Path) -> Result<Option<StoredSettings<T>>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let stored: StoredSettings<T> = serde_json::from_str(&contents)?;
    Ok(Some(stored))
}

/// Write settings as JSON, returning the save timestamp.
pub fn write_stored<T: Serialize>(path: &Path, settings: &T) -> Result<DateTime<Utc>> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let stored = StoredSettings::new(settings);
    let json = serde_json::to_string_pretty(&stored)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(stored.saved_at)
}
