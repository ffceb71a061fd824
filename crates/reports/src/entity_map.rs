//! Insertion-ordered map keyed by entity identity.

use std::collections::HashMap;

use tally_core::Entity;

/// Map from borrowed entities to values, iterated in first-insertion order.
///
/// Keys are matched by [`Entity::id`], so lookups agree with the entities' own
/// equality.
#[derive(Debug, Clone)]
pub struct EntityMap<'a, E: Entity, V> {
    entries: Vec<(&'a E, V)>,
    index: HashMap<E::Id, usize>,
}

impl<'a, E: Entity, V> Default for EntityMap<'a, E, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<'a, E: Entity, V> EntityMap<'a, E, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, inserting `default()` first if the key is new.
    pub fn get_or_insert_with(&mut self, key: &'a E, default: impl FnOnce() -> V) -> &mut V {
        let entries = &mut self.entries;
        let idx = *self.index.entry(key.id().clone()).or_insert_with(|| {
            entries.push((key, default()));
            entries.len() - 1
        });
        &mut entries[idx].1
    }

    pub fn get(&self, key: &E) -> Option<&V> {
        self.index
            .get(key.id())
            .and_then(|&idx| self.entries.get(idx))
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a E, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
