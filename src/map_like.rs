//! The capability-set contract of the map.
//!
//! `MapLike` describes a plain one-directional associative container, and
//! `BiMapLike` extends it with the value-side operations. `BiMap` implements
//! both, so any consumer written against `MapLike` keeps working unchanged
//! when handed a `BiMap` instead of a plain map.

use map::BiMap;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Operations of a plain one-directional associative container.
pub trait MapLike<K, V> {
    /// Binds `key` to `value`, returning the container for chained calls.
    fn insert(&mut self, key: K, value: V) -> &mut Self;

    /// Returns the value bound to `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns true if `key` is bound to some value.
    fn contains_key(&self, key: &K) -> bool;

    /// Removes the entry for `key` and returns its value, if any.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns the number of entries in the container.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries.
    fn clear(&mut self);

    /// Calls `f` once per entry, passing the value first and the key second.
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&V, &K),
        Self: Sized;
}

/// A `MapLike` container whose values are unique as well, so it can also be
/// queried, probed and pruned from the value side.
pub trait BiMapLike<K, V>: MapLike<K, V> {
    /// Returns the key bound to `value`, if any.
    fn get_key(&self, value: &V) -> Option<&K>;

    /// Returns true if `value` is bound to some key.
    fn contains_val(&self, value: &V) -> bool;

    /// Removes the entry for `value` and returns its key, if any.
    fn remove_val(&mut self, value: &V) -> Option<K>;
}

impl<K: Hash + Eq, V, S: BuildHasher> MapLike<K, V> for HashMap<K, V, S> {
    fn insert(&mut self, key: K, value: V) -> &mut Self {
        HashMap::insert(self, key, value);
        self
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K),
    {
        for (key, value) in self.iter() {
            f(value, key);
        }
    }
}

impl<K: Clone + Hash + Eq, V: Clone + Hash + Eq> MapLike<K, V> for BiMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> &mut Self {
        BiMap::insert(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BiMap::get_val(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BiMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BiMap::remove_key(self, key)
    }

    fn len(&self) -> usize {
        BiMap::len(self)
    }

    fn clear(&mut self) {
        BiMap::clear(self)
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&V, &K),
    {
        BiMap::for_each(self, f)
    }
}

impl<K: Clone + Hash + Eq, V: Clone + Hash + Eq> BiMapLike<K, V> for BiMap<K, V> {
    fn get_key(&self, value: &V) -> Option<&K> {
        BiMap::get_key(self, value)
    }

    fn contains_val(&self, value: &V) -> bool {
        BiMap::contains_val(self, value)
    }

    fn remove_val(&mut self, value: &V) -> Option<K> {
        BiMap::remove_val(self, value)
    }
}
