// # Memory Container
//
// In-memory implementation of Container.
//
// ## Purpose
//
// Holds the entries produced by input converters for the duration of one
// run. Nothing is persisted.
//
// ## Ordering
//
// Entries are kept in a HashMap, so `entries()` yields them in an arbitrary
// order. Converters that need a stable order must impose one themselves.

use std::collections::HashMap;

use crate::entry::{Entry, normalize_name};
use crate::traits::container::Container;

/// In-memory container implementation
///
/// # Example
///
/// ```rust
/// use geoip_core::{Container, Entry, MemoryContainer};
///
/// let mut container = MemoryContainer::new();
/// let mut cn = Entry::new("cn");
/// cn.add_prefix_str("1.2.3.0/24").unwrap();
/// container.add(cn);
///
/// assert!(container.get_entry("Cn").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    entries: HashMap<String, Entry>,
}

impl MemoryContainer {
    /// Create a new empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry
    ///
    /// If an entry with the same name exists, the new ranges are appended
    /// to it.
    pub fn add(&mut self, entry: Entry) {
        match self.entries.get_mut(entry.name()) {
            Some(existing) => existing.merge(entry),
            None => {
                self.entries.insert(entry.name().to_string(), entry);
            }
        }
    }

    /// Remove an entry by name, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.entries.remove(&normalize_name(name))
    }
}

impl Container for MemoryContainer {
    fn get_entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(&normalize_name(name))
    }

    fn entries(&self) -> Box<dyn Iterator<Item = &Entry> + '_> {
        Box::new(self.entries.values())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
