// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bidirectional dictionary
//!
//! Two owned maps kept in step: `forward` (K -> V) and `reverse` (V -> K).
//! Construction from pairs is last-write-wins in each direction
//! independently, so a later pair that repeats a key or a value shadows the
//! earlier one. Locale inheritance relies on that ordering.

use std::borrow::Borrow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiMap<K, V> {
    forward: BTreeMap<K, V>,
    reverse: BTreeMap<V, K>,
}

impl<K: Ord + Clone, V: Ord + Clone> BiMap<K, V> {
    pub fn new() -> Self {
        Self {
            forward: BTreeMap::new(),
            reverse: BTreeMap::new(),
        }
    }

    pub fn from_pairs<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.reverse.insert(value.clone(), key.clone());
            map.forward.insert(key, value);
        }
        map
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.forward.contains_key(key)
    }

    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.reverse.contains_key(value)
    }

    pub fn get_by_key<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.forward.get(key)
    }

    pub fn get_by_value<Q>(&self, value: &Q) -> Option<&K>
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.reverse.get(value)
    }

    /// Bind `key` to `value` in both directions. Any reverse entry that
    /// still points at `key` through its previous value is dropped.
    pub fn set_by_key(&mut self, key: K, value: V) {
        if let Some(old) = self.forward.insert(key.clone(), value.clone()) {
            if old != value && self.reverse.get(&old) == Some(&key) {
                self.reverse.remove(&old);
            }
        }
        self.reverse.insert(value, key);
    }

    /// Bind `value` to `key` in both directions. Mirror of [`set_by_key`].
    ///
    /// [`set_by_key`]: BiMap::set_by_key
    pub fn set_by_value(&mut self, value: V, key: K) {
        if let Some(old) = self.reverse.insert(value.clone(), key.clone()) {
            if old != key && self.forward.get(&old) == Some(&value) {
                self.forward.remove(&old);
            }
        }
        self.forward.insert(key, value);
    }

    pub fn forward(&self) -> &BTreeMap<K, V> {
        &self.forward
    }

    pub fn reverse(&self) -> &BTreeMap<V, K> {
        &self.reverse
    }

    /// Same pairs with the directions swapped.
    pub fn inverted(&self) -> BiMap<V, K> {
        BiMap {
            forward: self.reverse.clone(),
            reverse: self.forward.clone(),
        }
    }
}

impl<K: Ord + Clone, V: Ord + Clone> Default for BiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Ord + Clone> FromIterator<(K, V)> for BiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
