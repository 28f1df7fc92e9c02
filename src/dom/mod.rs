// Host container abstraction.
// The controller and sub-tabs build UI only through `Container`; `Element` is the
// retained in-memory implementation the terminal UI draws from.

mod element;

pub use element::{Element, ElementKind};

/// Class of the navigation region created by `display`.
pub const NAV_CLASS: &str = "plugin-settings-subtab-nav";
/// Class of the content region created by `display`.
pub const CONTENT_CLASS: &str = "plugin-settings-subtab-content";
/// Marker carried by the navigation control of the active sub-tab.
pub const ACTIVE_CLASS: &str = "is-active";

/// A handle to a node in the host's UI tree.
///
/// Handles are cheap to clone and refer to the same node.
pub trait Container: Clone + 'static {
    /// Remove all children.
    fn empty(&self);

    /// Append a child region carrying `cls`.
    fn create_div(&self, cls: &str) -> Self;

    /// Append an interactive control labeled `text`.
    fn create_button(&self, text: &str) -> Self;

    fn set_text(&self, text: &str);

    fn add_class(&self, cls: &str);

    fn remove_class(&self, cls: &str);

    /// Register the activation callback, replacing any previous one.
    fn on_click(&self, handler: Box<dyn Fn()>);
}
