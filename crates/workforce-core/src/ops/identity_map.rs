use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::errors::{Result, WorkforceError};

/// A record that carries a store-assigned integer primary key
///
/// `set_id` is called by repositories only: once after the insert that
/// generates the key, and with `None` after the row is deleted.
pub trait Identified {
    /// Entity name used in error messages ("Review", "Employee")
    const ENTITY: &'static str;

    /// The primary key, if the record has been saved
    fn id(&self) -> Option<i64>;

    /// Assign or clear the primary key
    fn set_id(&mut self, id: Option<i64>);
}

/// Identity map from primary key to the single live record for that key
///
/// Owned by a repository and passed around by reference. Not thread-safe;
/// exclusive access comes from `&mut` borrows.
#[derive(Debug, Clone)]
pub struct IdentityMap<T> {
    records: HashMap<i64, T>,
}

impl<T> Default for IdentityMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IdentityMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Get the cached record for an id
    pub fn get(&self, id: i64) -> Option<&T> {
        self.records.get(&id)
    }

    /// Get a mutable reference to the cached record for an id
    pub fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.records.get_mut(&id)
    }

    /// Check whether an id is registered
    pub fn contains(&self, id: i64) -> bool {
        self.records.contains_key(&id)
    }

    /// Remove and return the record for an id
    pub fn remove(&mut self, id: i64) -> Option<T> {
        self.records.remove(&id)
    }

    /// Number of registered records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are registered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Registered ids in ascending order
    pub fn ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl<T: Identified> IdentityMap<T> {
    /// Register a saved record under its id, replacing any previous entry
    ///
    /// # Errors
    /// * `NotPersisted` - If the record has no id
    pub fn insert(&mut self, record: T) -> Result<&mut T> {
        let id = record.id().ok_or_else(|| WorkforceError::NotPersisted {
            entity: T::ENTITY.to_string(),
        })?;

        Ok(match self.records.entry(id) {
            Entry::Occupied(mut slot) => {
                slot.insert(record);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(record),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: Option<i64>,
        text: String,
    }

    impl Identified for Note {
        const ENTITY: &'static str = "Note";

        fn id(&self) -> Option<i64> {
            self.id
        }

        fn set_id(&mut self, id: Option<i64>) {
            self.id = id;
        }
    }

    fn note(id: Option<i64>, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_insert_requires_id() {
        let mut map = IdentityMap::new();
        let err = map.insert(note(None, "draft")).unwrap_err();
        assert_eq!(
            err,
            WorkforceError::NotPersisted {
                entity: "Note".to_string()
            }
        );
        assert!(map.is_empty());
    }

    #[test]
    fn test_insert_replaces_existing_entry() {
        let mut map = IdentityMap::new();
        map.insert(note(Some(1), "first")).unwrap();
        map.insert(note(Some(1), "second")).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(1).unwrap().text, "second");
    }

    #[test]
    fn test_remove_and_ids() {
        let mut map = IdentityMap::new();
        map.insert(note(Some(3), "c")).unwrap();
        map.insert(note(Some(1), "a")).unwrap();
        map.insert(note(Some(2), "b")).unwrap();
        assert_eq!(map.ids(), vec![1, 2, 3]);

        let removed = map.remove(2).unwrap();
        assert_eq!(removed.text, "b");
        assert!(!map.contains(2));
        assert!(map.remove(2).is_none());
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut map = IdentityMap::new();
        map.insert(note(Some(7), "old")).unwrap();
        map.get_mut(7).unwrap().text = "new".to_string();
        assert_eq!(map.get(7).unwrap().text, "new");
    }
}
