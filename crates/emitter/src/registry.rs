//! Registry - ordered listener lists keyed by event name

use std::collections::HashMap;

use crate::handle::Handle;

/// Per-event ordered handle lists.
///
/// Insertion order is dispatch order. Removal never reorders the remaining
/// handles. An event with an empty list behaves like an absent one.
#[derive(Debug, Default)]
pub struct Registry {
    events: HashMap<String, Vec<Handle>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handle` to the list for `name`
    pub fn subscribe(&mut self, name: &str, handle: Handle) {
        self.events.entry(name.to_string()).or_default().push(handle);
    }

    /// Remove every occurrence of `handle` from `name`, keeping the rest in order.
    ///
    /// Returns the number of occurrences removed; unknown names and handles are a no-op.
    pub fn unsubscribe(&mut self, name: &str, handle: &Handle) -> usize {
        let Some(handles) = self.events.get_mut(name) else {
            return 0;
        };
        let before = handles.len();
        handles.retain(|h| h != handle);
        before - handles.len()
    }

    /// Drop the entry for `name` entirely
    pub fn unsubscribe_all(&mut self, name: &str) {
        self.events.remove(name);
    }

    /// Current handles for `name`, creating an empty entry if needed
    pub fn subscribers(&mut self, name: &str) -> &[Handle] {
        self.events.entry(name.to_string()).or_default()
    }

    /// Owned copy of the handles for `name`, without creating an entry
    pub fn snapshot(&self, name: &str) -> Vec<Handle> {
        self.events.get(name).cloned().unwrap_or_default()
    }

    /// Number of handles registered for `name`
    pub fn count(&self, name: &str) -> usize {
        self.events.get(name).map_or(0, Vec::len)
    }

    /// True if `name` has at least one handle
    pub fn has_subscribers(&self, name: &str) -> bool {
        self.count(name) > 0
    }

    /// True if `name` has an entry, even an empty one
    #[cfg(test)]
    fn contains(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }
}
