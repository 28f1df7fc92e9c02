// Sub-tab controller for plugin settings pages.
// Declares closed sets of sub-tab identifiers, maps each to a renderer,
// and drives navigation between them inside a host-provided container.

pub mod context;
pub mod controller;
pub mod dom;
pub mod error;
pub mod plugin;
pub mod registry;
pub mod subtab;
pub mod ui;

pub use context::RenderContext;
pub use controller::SubTabController;
pub use dom::{ACTIVE_CLASS, CONTENT_CLASS, Container, Element, ElementKind, NAV_CLASS};
pub use error::{Result, SubTabError};
pub use plugin::{PluginWithSettings, SaveFuture};
pub use registry::{SubTabId, SubTabRegistry};
pub use subtab::SubTab;
