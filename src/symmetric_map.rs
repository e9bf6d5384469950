use crate::{
    pair_key::PairKey,
    view::{PairRef, PairView},
};

use fnv::FnvHashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::Index;

/// A map whose keys are unordered pairs: the entry stored under `(a, b)` is the same entry as
/// `(b, a)`.
#[derive(Clone, Debug)]
pub struct SymmetricMap<K, V> {
    map: FnvHashMap<PairKey<K>, V>,
}

impl<K, V> Default for SymmetricMap<K, V> {
    fn default() -> Self {
        SymmetricMap {
            map: FnvHashMap::default(),
        }
    }
}

impl<K, V> SymmetricMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SymmetricMap {
            map: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// The number of distinct unordered pairs.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Yields `(first, second, value)` with `first <= second`. Iteration order is that of the
    /// backing hash map.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &K, &V)> + '_ {
        self.map.iter().map(|(k, v)| (k.first(), k.second(), v))
    }
}

impl<K: Ord + Hash, V> SymmetricMap<K, V> {
    /// Stores `value` for the pair, returning whatever was stored for it before, under either
    /// key order.
    pub fn set(&mut self, k1: K, k2: K, value: V) -> Option<V> {
        let old = self.map.insert(PairKey::new(k1, k2), value);
        if old.is_some() {
            log::trace!("Overwrote pair entry; {} pairs stored", self.map.len());
        }

        old
    }

    pub fn get(&self, k1: K, k2: K) -> Option<&V> {
        self.map.get(&PairKey::new(k1, k2))
    }

    pub fn get_mut(&mut self, k1: K, k2: K) -> Option<&mut V> {
        self.map.get_mut(&PairKey::new(k1, k2))
    }

    pub fn contains(&self, k1: K, k2: K) -> bool {
        self.map.contains_key(&PairKey::new(k1, k2))
    }

    pub fn remove(&mut self, k1: K, k2: K) -> Option<V> {
        let removed = self.map.remove(&PairKey::new(k1, k2));
        if removed.is_some() {
            log::trace!("Removed pair entry; {} pairs stored", self.map.len());
        }

        removed
    }

    pub fn entry(&mut self, k1: K, k2: K) -> Entry<'_, PairKey<K>, V> {
        self.map.entry(PairKey::new(k1, k2))
    }

    /// Binds `k1` so the pair can be completed later, as in `map.at(a).set(b, v)`.
    pub fn at(&mut self, k1: K) -> PairView<'_, K, V> {
        PairView::new(k1, self)
    }

    /// Read-only counterpart of `at`.
    pub fn view(&self, k1: K) -> PairRef<'_, K, V> {
        PairRef::new(k1, self)
    }
}

/// Panics if the pair has no value. Use `get` for a fallible lookup.
impl<K: Ord + Hash, V> Index<(K, K)> for SymmetricMap<K, V> {
    type Output = V;

    fn index(&self, (k1, k2): (K, K)) -> &V {
        &self.map[&PairKey::new(k1, k2)]
    }
}

impl<K: Ord + Hash, V> Extend<(K, K, V)> for SymmetricMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, K, V)>>(&mut self, iter: I) {
        for (k1, k2, value) in iter {
            self.set(k1, k2, value);
        }
    }
}

impl<K: Ord + Hash, V> FromIterator<(K, K, V)> for SymmetricMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, K, V)>>(iter: I) -> Self {
        let mut map = SymmetricMap::new();
        map.extend(iter);

        map
    }
}

/// Renders as `{{a, b} -> value, ...}`, each pair in sorted order.
impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for SymmetricMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k1, k2, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{{{:?}, {:?}}} -> {:?}", k1, k2, value)?;
        }

        write!(f, "}}")
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
