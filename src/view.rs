use crate::symmetric_map::SymmetricMap;

use std::hash::Hash;

/// A `SymmetricMap` with the first key of a pair already chosen. Created by
/// [`SymmetricMap::at`]; every method completes the pair with `k2` and forwards to the map.
pub struct PairView<'a, K, V> {
    k1: K,
    map: &'a mut SymmetricMap<K, V>,
}

impl<'a, K, V> PairView<'a, K, V> {
    pub(crate) fn new(k1: K, map: &'a mut SymmetricMap<K, V>) -> Self {
        PairView { k1, map }
    }

    pub fn key(&self) -> &K {
        &self.k1
    }
}

impl<'a, K: Clone + Ord + Hash, V> PairView<'a, K, V> {
    pub fn get(&self, k2: K) -> Option<&V> {
        self.map.get(self.k1.clone(), k2)
    }

    pub fn get_mut(&mut self, k2: K) -> Option<&mut V> {
        self.map.get_mut(self.k1.clone(), k2)
    }

    pub fn contains(&self, k2: K) -> bool {
        self.map.contains(self.k1.clone(), k2)
    }

    /// Same as `SymmetricMap::set(k1, k2, value)`.
    pub fn set(&mut self, k2: K, value: V) -> Option<V> {
        self.map.set(self.k1.clone(), k2, value)
    }

    pub fn remove(&mut self, k2: K) -> Option<V> {
        self.map.remove(self.k1.clone(), k2)
    }
}

/// Shared-borrow version of [`PairView`], created by [`SymmetricMap::view`].
pub struct PairRef<'a, K, V> {
    k1: K,
    map: &'a SymmetricMap<K, V>,
}

impl<'a, K, V> PairRef<'a, K, V> {
    pub(crate) fn new(k1: K, map: &'a SymmetricMap<K, V>) -> Self {
        PairRef { k1, map }
    }

    pub fn key(&self) -> &K {
        &self.k1
    }
}

impl<'a, K: Clone + Ord + Hash, V> PairRef<'a, K, V> {
    pub fn get(&self, k2: K) -> Option<&'a V> {
        self.map.get(self.k1.clone(), k2)
    }

    pub fn contains(&self, k2: K) -> bool {
        self.map.contains(self.k1.clone(), k2)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_writes_land_in_map() {
        let mut m = SymmetricMap::new();
        {
            let mut row = m.at(String::from("sun"));
            assert_eq!(row.key(), "sun");
            assert_eq!(row.set("earth".to_string(), 1.0), None);
            assert_eq!(row.set("mars".to_string(), 0.4), None);
            assert!(row.contains("earth".to_string()));
            assert_eq!(row.get("mars".to_string()), Some(&0.4));
        }

        assert_eq!(m.len(), 2);
        assert_eq!(m.get("earth".to_string(), "sun".to_string()), Some(&1.0));
    }

    #[test]
    fn test_view_get_mut_and_remove() {
        let mut m = SymmetricMap::new();
        m.set(1, 2, vec![1]);

        m.at(2).get_mut(1).unwrap().push(2);
        assert_eq!(m.get(1, 2), Some(&vec![1, 2]));

        assert_eq!(m.at(2).remove(1), Some(vec![1, 2]));
        assert_eq!(m.at(1).get(2), None);
    }

    #[test]
    fn test_ref_view_outlives_temporary_binding() {
        let mut m = SymmetricMap::new();
        m.set('a', 'b', 3);
        m.set('b', 'c', 4);

        let values: Vec<_> = ['a', 'c', 'z']
            .iter()
            .map(|other| m.view('b').get(*other))
            .collect();
        assert_eq!(values, vec![Some(&3), Some(&4), None]);
        assert!(!m.view('a').contains('c'));
        assert_eq!(m.view('q').key(), &'q');
    }
}
