// Sub-tab identifier registry.
// Closed identifier sets per plugin and the exact id-to-sub-tab mapping built from them.

mod id;
mod map;

pub use id::SubTabId;
#[doc(hidden)]
pub use id::keys_are_unique;
pub use map::SubTabRegistry;
