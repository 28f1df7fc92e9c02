// Contract implemented by a single settings sub-tab.

use crate::context::RenderContext;
use crate::dom::{Container, Element};

/// An isolated rendering unit within a settings page.
///
/// Sub-tabs do not manage navigation or active state. `render` receives an
/// empty container and must not keep references to it after returning.
pub trait SubTab<S, C: Container = Element> {
    /// Header text shown on the navigation control. Stable for the tab's lifetime.
    fn header(&self) -> &str;

    /// Render the complete UI for this sub-tab into `ctx.container()`.
    fn render(&self, ctx: &RenderContext<'_, S, C>);
}
