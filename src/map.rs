//! The bidirectional map itself.

use indexmap::IndexMap;
use iter::{IntoIter, Iter, Keys, Values};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

/// A map holding a one-to-one relation between keys and values, with lookup
/// in both directions.
///
/// Internally two insertion-ordered maps are maintained, one per direction,
/// and every mutating operation updates both so that they stay exact
/// inverses of each other. Inserting a pair first evicts whatever entry
/// would collide with its key or with its value.
#[derive(Clone)]
pub struct BiMap<K, V> {
    forward: IndexMap<K, V>,
    reverse: IndexMap<V, K>,
}

impl<K, V> BiMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        BiMap {
            forward: IndexMap::new(),
            reverse: IndexMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` pairs per direction.
    pub fn with_capacity(capacity: usize) -> Self {
        BiMap {
            forward: IndexMap::with_capacity(capacity),
            reverse: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the number of pairs in the map.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.forward.len(), self.reverse.len());
        self.forward.len()
    }

    /// Returns true if the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Removes all pairs from both directions.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
    }

    /// Returns an iterator over `(&key, &value)` pairs in forward insertion
    /// order.
    pub fn iter(&self) -> Iter<K, V> {
        Iter {
            inner: self.forward.iter(),
        }
    }

    /// Returns an iterator over the keys in forward insertion order.
    pub fn keys(&self) -> Keys<K, V> {
        Keys {
            inner: self.forward.keys(),
        }
    }

    /// Returns an iterator over the values.
    ///
    /// The order is the reverse direction's own insertion order, i.e. the
    /// order in which each value was last (re)associated. Every mutation
    /// enters or removes a pair on both sides together, so in practice this
    /// matches the entry order of `iter`; the accessor still reads the
    /// reverse direction, which is a map of its own and not an index derived
    /// from the forward one.
    pub fn values(&self) -> Values<V, K> {
        Values {
            inner: self.reverse.keys(),
        }
    }

    /// Calls `f` once per pair, passing the value first and the key second,
    /// in forward insertion order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K),
    {
        for (key, value) in self.forward.iter() {
            f(value, key);
        }
    }
}

impl<K: Clone + Hash + Eq, V: Clone + Hash + Eq> BiMap<K, V> {
    /// Establishes the association `key` <-> `value`.
    ///
    /// If `key` is already bound to some other value, that pair is removed
    /// from both directions first, and the old value becomes unmapped. The
    /// same holds independently for a `value` already bound to some other
    /// key. The new pair is then appended to both directions. Overwriting
    /// is silent; the returned reference allows chained calls.
    pub fn insert(&mut self, key: K, value: V) -> &mut Self {
        if let Some(old_value) = self.forward.shift_remove(&key) {
            self.reverse.shift_remove(&old_value);
        }
        if let Some(old_key) = self.reverse.shift_remove(&value) {
            self.forward.shift_remove(&old_key);
        }

        self.forward.insert(key.clone(), value.clone());
        self.reverse.insert(value, key);

        self
    }

    /// Returns the value bound to `key`, if any.
    pub fn get_val<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(key)
    }

    /// Same as `get_val`, under the name one-directional map users expect.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_val(key)
    }

    /// Returns the key bound to `value`, if any.
    pub fn get_key<Q>(&self, value: &Q) -> Option<&K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.get(value)
    }

    /// Returns true if `key` is bound to some value.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains_key(key)
    }

    /// Returns true if `value` is bound to some key.
    pub fn contains_val<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.contains_key(value)
    }

    /// Removes the pair bound to `key` from both directions and returns its
    /// value, or `None` if the key is absent.
    ///
    /// The value is resolved through the forward direction before anything
    /// is removed, so no stale reverse entry can be left behind.
    // TODO: shift_remove keeps the insertion order but is linear in the map
    // size; if removal ever shows up in profiles, a tombstone scheme in the
    // reverse direction would bring it back to O(1).
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(value) = self.forward.shift_remove(key) {
            self.reverse.shift_remove(&value);
            Some(value)
        } else {
            None
        }
    }

    /// Removes the pair bound to `value` from both directions and returns
    /// its key, or `None` if the value is absent.
    pub fn remove_val<Q>(&mut self, value: &Q) -> Option<K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(key) = self.reverse.shift_remove(value) {
            self.forward.shift_remove(&key);
            Some(key)
        } else {
            None
        }
    }

    /// Same as `remove_key`, under the name one-directional map users
    /// expect.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_key(key)
    }
}

impl<K, V> Default for BiMap<K, V> {
    fn default() -> Self {
        BiMap::new()
    }
}

impl<K: Clone + Hash + Eq, V: Clone + Hash + Eq> FromIterator<(K, V)> for BiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BiMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Clone + Hash + Eq, V: Clone + Hash + Eq> Extend<(K, V)> for BiMap<K, V> {
    /// Inserts every pair in iteration order, with the same conflict
    /// eviction as repeated `insert` calls.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Clone + Hash + Eq, V: Clone + Hash + Eq, const N: usize> From<[(K, V); N]>
    for BiMap<K, V>
{
    fn from(pairs: [(K, V); N]) -> Self {
        let mut map = BiMap::with_capacity(N);
        for (key, value) in pairs {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Clone + Hash + Eq, V: Clone + Hash + Eq, S> From<HashMap<K, V, S>> for BiMap<K, V> {
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Clone + Hash + Eq, V: Clone + Hash + Eq, S> From<IndexMap<K, V, S>> for BiMap<K, V> {
    fn from(map: IndexMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

/// Equality of the stored relation, irrespective of insertion order.
impl<K: Hash + Eq, V: Hash + Eq> PartialEq for BiMap<K, V> {
    fn eq(&self, other: &BiMap<K, V>) -> bool {
        self.forward == other.forward
    }
}

impl<K: Hash + Eq, V: Hash + Eq> Eq for BiMap<K, V> {}

/// Tagged with the type name so the output is distinguishable from a plain
/// map's.
impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("BiMap ")?;
        f.debug_map().entries(self.forward.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a BiMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for BiMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.forward.into_iter(),
        }
    }
}
