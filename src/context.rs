// Per-render context handed to the active sub-tab.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{Container, Element};
use crate::plugin::{PluginWithSettings, SaveFuture};

/// Everything a sub-tab needs to render itself.
///
/// Built fresh for every render of the active sub-tab. The borrowed container
/// keeps the context from outliving the call.
pub struct RenderContext<'a, S, C: Container = Element> {
    container: &'a C,
    settings: Rc<RefCell<S>>,
    plugin: Rc<dyn PluginWithSettings<S>>,
}

impl<'a, S, C: Container> RenderContext<'a, S, C> {
    pub fn new(container: &'a C, plugin: Rc<dyn PluginWithSettings<S>>) -> Self {
        Self {
            container,
            settings: plugin.settings(),
            plugin,
        }
    }

    /// The region the sub-tab renders into. Empty when the render starts.
    pub fn container(&self) -> &'a C {
        self.container
    }

    /// The plugin's live settings. Mutate in place, then call [`save_settings`](Self::save_settings).
    pub fn settings(&self) -> &Rc<RefCell<S>> {
        &self.settings
    }

    pub fn plugin(&self) -> &Rc<dyn PluginWithSettings<S>> {
        &self.plugin
    }

    /// Persist the settings through the plugin.
    pub fn save_settings(&self) -> SaveFuture {
        self.plugin.save_settings()
    }
}
