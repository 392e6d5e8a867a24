//! Normalized entity tables: an ordered id list paired with an id → record
//! map, giving table-order iteration and O(1) lookup without nesting or
//! duplication.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use im::HashMap;

use crate::core::errors::{Error, Result};

/// A record that can live in a [`NormalizedTable`].
pub trait Entity {
    type Id: Clone + Eq + Hash + Ord + Display + Debug;

    /// Short noun used in error messages ("ingredient", "pizza", ...).
    const KIND: &'static str = "entity";

    fn id(&self) -> &Self::Id;
}

/// A normalized table: parallel (ordered id list, id → record map).
///
/// Invariant, enforced at construction: every id in the list has exactly one
/// entry in the map and vice versa, with no duplicates. The map is an
/// `im::HashMap`, so cloning a table (and thus a whole snapshot) is cheap
/// structural sharing.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable<T: Entity> {
    ids: Vec<T::Id>,
    entities: HashMap<T::Id, T>,
}

impl<T: Entity + Clone> NormalizedTable<T> {
    /// Build a table from records, preserving their order. Rejects duplicate
    /// identifiers.
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut ids = Vec::new();
        let mut entities = HashMap::new();

        for record in records {
            let id = record.id().clone();
            if entities.insert(id.clone(), record).is_some() {
                return Err(Error::DuplicateId {
                    kind: T::KIND,
                    id: id.to_string(),
                });
            }
            ids.push(id);
        }

        Ok(Self { ids, entities })
    }

    /// Build a table from already-separated parts, validating that the id
    /// list and the map agree exactly.
    pub fn from_parts(ids: Vec<T::Id>, entities: HashMap<T::Id, T>) -> Result<Self> {
        let mut seen = im::HashSet::new();
        for id in &ids {
            if seen.insert(id.clone()).is_some() {
                return Err(Error::DuplicateId {
                    kind: T::KIND,
                    id: id.to_string(),
                });
            }
            if !entities.contains_key(id) {
                return Err(Error::TableMismatch {
                    kind: T::KIND,
                    id: id.to_string(),
                });
            }
        }
        if let Some(id) = entities.keys().find(|id| !seen.contains(*id)) {
            return Err(Error::TableMismatch {
                kind: T::KIND,
                id: id.to_string(),
            });
        }

        Ok(Self { ids, entities })
    }

    pub fn empty() -> Self {
        Self {
            ids: Vec::new(),
            entities: HashMap::new(),
        }
    }

    /// All records in table order.
    pub fn all(&self) -> impl Iterator<Item = &T> {
        self.ids.iter().filter_map(move |id| self.entities.get(id))
    }

    /// Direct lookup by identifier.
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.entities.contains_key(id)
    }

    /// Identifiers in table order.
    pub fn ids(&self) -> &[T::Id] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Return a table with `f` applied to the record under `id`, or `None`
    /// if the id is absent. `f` must not change the record's identifier.
    pub fn update<F>(&self, id: &T::Id, f: F) -> Option<Self>
    where
        F: FnOnce(&mut T),
    {
        let mut record = self.entities.get(id)?.clone();
        f(&mut record);

        Some(Self {
            ids: self.ids.clone(),
            entities: self.entities.update(id.clone(), record),
        })
    }
}

impl<T: Entity + Clone> Default for NormalizedTable<T> {
    fn default() -> Self {
        Self::empty()
    }
}
