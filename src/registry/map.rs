// Exact mapping from identifiers to sub-tab implementations.
// The key set always equals the identifier set: no missing, extra, or duplicate entries.

use std::collections::HashSet;
use std::fmt;

use crate::dom::{Container, Element};
use crate::error::{Result, SubTabError};
use crate::subtab::SubTab;

use super::SubTabId;

/// Declarative registry of the sub-tabs on one settings page.
///
/// Holds no UI state. The controller reads it, never mutates it.
pub struct SubTabRegistry<S, Id: SubTabId, C: Container = Element> {
    entries: Vec<(Id, Box<dyn SubTab<S, C>>)>,
}

impl<S, Id: SubTabId, C: Container> SubTabRegistry<S, Id, C> {
    /// Build the registry by asking for the sub-tab of every identifier.
    ///
    /// Writing `make` as an exhaustive `match` turns a forgotten sub-tab into a
    /// compile error. Iteration follows [`SubTabId::ALL`].
    pub fn from_fn<F>(mut make: F) -> Self
    where
        F: FnMut(Id) -> Box<dyn SubTab<S, C>>,
    {
        let entries = Id::ALL.iter().map(|&id| (id, make(id))).collect();
        Self { entries }
    }

    /// Build the registry from explicit entries, keeping their order.
    ///
    /// Fails unless every identifier of the set appears exactly once.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Id, Box<dyn SubTab<S, C>>)>,
    {
        let mut seen = HashSet::new();
        let mut collected = Vec::new();

        for (id, sub_tab) in entries {
            if !Id::ALL.contains(&id) {
                return Err(SubTabError::UnknownSubTab(id.as_str().to_string()));
            }
            if !seen.insert(id) {
                return Err(SubTabError::DuplicateSubTab(id.as_str()));
            }
            collected.push((id, sub_tab));
        }

        if let Some(missing) = Id::ALL.iter().find(|id| !seen.contains(*id)) {
            return Err(SubTabError::MissingSubTab(missing.as_str()));
        }

        Ok(Self { entries: collected })
    }

    /// Get the sub-tab registered for an identifier.
    pub fn get(&self, id: Id) -> Option<&dyn SubTab<S, C>> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, sub_tab)| sub_tab.as_ref())
    }

    pub fn contains(&self, id: Id) -> bool {
        self.entries.iter().any(|(key, _)| *key == id)
    }

    /// Iterate entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &dyn SubTab<S, C>)> {
        self.entries
            .iter()
            .map(|(id, sub_tab)| (*id, sub_tab.as_ref() as &dyn SubTab<S, C>))
    }

    pub fn ids(&self) -> impl Iterator<Item = Id> {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, Id: SubTabId, C: Container> fmt::Debug for SubTabRegistry<S, Id, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(id, sub_tab)| (id.as_str(), sub_tab.header())),
            )
            .finish()
    }
}
