// Capability the controller needs from the hosting plugin.
// Sub-tabs only ever see this narrow view, never the concrete plugin type.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::error::Result;

/// Completion of a settings save. The controller never awaits it.
pub type SaveFuture = LocalBoxFuture<'static, Result<()>>;

/// A plugin that owns a live settings object and knows how to persist it.
pub trait PluginWithSettings<S> {
    /// The live settings object, shared with the plugin.
    fn settings(&self) -> Rc<RefCell<S>>;

    /// Persist the current settings.
    fn save_settings(&self) -> SaveFuture;
}
