// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::borrow::Borrow;
use core::hash::Hash;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;

/// A map that keeps declaration order.
///
/// Order matters to consumers: attributes render in the order behaviors declare them and key
/// actions run in declaration order. Equality is order-sensitive, so two behaviors that
/// declare the same entries in a different order are not equal.
#[derive(Clone, Debug)]
pub struct OrderedMap<K, V> {
    entries: IndexMap<K, V, DefaultHashBuilder>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::with_hasher(DefaultHashBuilder::default()),
        }
    }
}

impl<K, V> PartialEq for OrderedMap<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
{
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, replacing an existing entry in place.
    ///
    /// Returns the replaced value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Whether `key` has an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove the entry under `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.shift_remove(key)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.entries.extend(iter);
        map
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
