// Host plugin backed by a JSON settings file.
// Owns the live settings object and persists it on request.

pub mod store;

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use serde::{Serialize, de::DeserializeOwned};
use subtabs::{PluginWithSettings, Result, SaveFuture, SubTabError};
use tracing::{debug, info};

use store::{read_stored, write_stored};

/// Plugin whose settings live in a single JSON file.
pub struct FileBackedPlugin<S> {
    path: PathBuf,
    settings: Rc<RefCell<S>>,
    saved_at: Rc<Cell<Option<DateTime<Utc>>>>,
}

impl<S> FileBackedPlugin<S>
where
    S: Serialize + DeserializeOwned + Default,
{
    /// Load settings from `path`, falling back to defaults when the file is missing.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let (settings, saved_at) = match read_stored::<S>(&path)? {
            Some(stored) => (stored.settings, Some(stored.saved_at)),
            None => {
                info!(path = %path.display(), "no settings file, using defaults");
                (S::default(), None)
            }
        };

        Ok(Self {
            path,
            settings: Rc::new(RefCell::new(settings)),
            saved_at: Rc::new(Cell::new(saved_at)),
        })
    }
}

impl<S> FileBackedPlugin<S> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the settings were last written, if ever.
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved_at.get()
    }
}

impl<S> PluginWithSettings<S> for FileBackedPlugin<S>
where
    S: Serialize + 'static,
{
    fn settings(&self) -> Rc<RefCell<S>> {
        Rc::clone(&self.settings)
    }

    fn save_settings(&self) -> SaveFuture {
        let path = self.path.clone();
        let settings = Rc::clone(&self.settings);
        let saved_at = Rc::clone(&self.saved_at);

        async move {
            let timestamp = write_stored(&path, &*settings.borrow()).map_err(SubTabError::save)?;
            saved_at.set(Some(timestamp));
            debug!(path = %path.display(), "settings saved");
            Ok::<_, SubTabError>(())
        }
        .boxed_local()
    }
}
