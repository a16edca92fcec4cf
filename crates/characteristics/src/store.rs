//! The ordered store backing a curator.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

use crate::characterization::Characterization;
use crate::curation::Curation;
use crate::equality::{loose_eq, loose_hash};

/// Characteristic name to wrapped value, in order of first write.
///
/// Reads of a declared but unset name are answered with a transient empty
/// [`Curation`] that is never stored. Equality and hashing are loose: only
/// key sets and raw values matter.
#[derive(Debug, Clone)]
pub struct CharacteristicStore {
    registry: &'static Characterization,
    entries: IndexMap<String, Curation>,
}

impl CharacteristicStore {
    /// Create an empty store that defaults against `registry`.
    pub fn new(registry: &'static Characterization) -> Self {
        Self {
            registry,
            entries: IndexMap::new(),
        }
    }

    /// The registry used for lazy defaults.
    pub fn registry(&self) -> &'static Characterization {
        self.registry
    }

    /// Get the stored value for `name`, or an empty default if `name` is
    /// declared but unset. Never modifies the store.
    pub fn fetch(&self, name: &str) -> Option<Cow<'_, Curation>> {
        if let Some(curation) = self.entries.get(name) {
            return Some(Cow::Borrowed(curation));
        }

        let descriptor = self.registry.descriptor(name)?;
        trace!(characteristic = name, "serving empty default");
        Some(Cow::Owned(Curation::empty(Some(descriptor))))
    }

    /// Get the stored value for `name` without defaulting.
    pub fn get(&self, name: &str) -> Option<&Curation> {
        self.entries.get(name)
    }

    /// Store `curation` under `name`, returning the value it replaced.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, curation: Curation) -> Option<Curation> {
        self.entries.insert(name.into(), curation)
    }

    /// Remove `name`, preserving the order of the remaining keys.
    pub fn remove(&mut self, name: &str) -> Option<Curation> {
        self.entries.shift_remove(name)
    }

    /// Whether `name` is stored.
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Stored names, in store order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Stored `(name, value)` pairs, in store order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Curation> {
        self.entries.iter()
    }

    /// Number of stored characteristics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A new store holding the requested names that are stored here, in the
    /// order requested. Unset names are skipped rather than defaulted.
    pub fn slice<I, N>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let entries = names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                self.entries
                    .get(name)
                    .map(|curation| (name.to_string(), curation.clone()))
            })
            .collect();

        Self {
            registry: self.registry,
            entries,
        }
    }

    /// Stored raw values with wrappers and descriptors stripped.
    pub fn to_plain(&self) -> IndexMap<String, Value> {
        self.entries
            .iter()
            .map(|(name, curation)| (name.clone(), curation.raw_value().clone()))
            .collect()
    }
}

impl PartialEq for CharacteristicStore {
    fn eq(&self, other: &Self) -> bool {
        loose_eq(&self.entries, &other.entries)
    }
}

impl Eq for CharacteristicStore {}

impl Hash for CharacteristicStore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        loose_hash(&self.entries, state);
    }
}

impl<'a> IntoIterator for &'a CharacteristicStore {
    type Item = (&'a String, &'a Curation);
    type IntoIter = indexmap::map::Iter<'a, String, Curation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
