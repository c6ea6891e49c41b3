//! Repeatable section controller.
//!
//! `EntryCollection<T>` is the one ordered-entry engine behind every
//! repeatable profile section. Each entry gets a client-side `EntryId` when
//! it enters the collection. Ids are never reused and never renumbered, so a
//! UI holding an id keeps pointing at the same entry while siblings come and go.

use crate::error::{PortalError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

/// Identity of an entry within its section, valid for one edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntryId(u64);

impl EntryId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An entry and its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    id: EntryId,
    value: T,
}

impl<T> Entry<T> {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Ordered collection of entries keyed by locally unique ids.
///
/// Insertion order is preserved; new entries append at the end. Mutators
/// referencing an unknown id are no-ops.
#[derive(Debug, Clone)]
pub struct EntryCollection<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for EntryCollection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> EntryCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from an optional source list, assigning fresh ids.
    /// An absent source yields an empty collection.
    pub fn initialize(source: Option<Vec<T>>) -> Self {
        source.into_iter().flatten().collect()
    }

    fn mint(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends an entry and returns its new id.
    pub fn add(&mut self, value: T) -> EntryId {
        let id = self.mint();
        self.entries.push(Entry { id, value });
        id
    }

    /// Applies `edit` to the entry with `id`. Returns `false` if there is none.
    pub fn update<F>(&mut self, id: EntryId, edit: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                edit(&mut entry.value);
                true
            }
            None => false,
        }
    }

    /// Removes the entry with `id` and returns its value.
    /// Siblings keep their ids and relative order.
    pub fn remove(&mut self, id: EntryId) -> Option<T> {
        let index = self.position(id)?;
        Some(self.entries.remove(index).value)
    }

    /// Moves the entry with `id` to `index` (clamped to the end).
    pub fn move_to(&mut self, id: EntryId, index: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let entry = self.entries.remove(from);
        let to = index.min(self.entries.len());
        self.entries.insert(to, entry);
        true
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.value)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> EntryCollection<T> {
    /// Entry values in order, without ids.
    pub fn to_vec(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}

impl<T: Default> EntryCollection<T> {
    /// Appends an entry with the type's default values.
    pub fn add_default(&mut self) -> EntryId {
        self.add(T::default())
    }
}

impl<T> EntryCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Merges wire-named fields into the entry with `id`.
    ///
    /// Field values go through the same decoding as hydrate, so a bad value
    /// becomes the field's default rather than an error. Unknown field names
    /// are ignored. Returns `Ok(false)` if there is no such entry.
    pub fn merge_fields(&mut self, id: EntryId, fields: &Map<String, Value>) -> Result<bool> {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            return Ok(false);
        };

        let mut current = match serde_json::to_value(&entry.value)? {
            Value::Object(map) => map,
            _ => {
                return Err(PortalError::internal(
                    "section entries must serialize as objects",
                ));
            }
        };
        for (key, value) in fields {
            current.insert(key.clone(), value.clone());
        }

        entry.value = serde_json::from_value(Value::Object(current))?;
        Ok(true)
    }
}

impl<T> FromIterator<T> for EntryCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        for value in iter {
            collection.add(value);
        }
        collection
    }
}

impl<'a, T> IntoIterator for &'a EntryCollection<T> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
