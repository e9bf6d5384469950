//! `SymmetricMap` is written as a sequence of `(first, second, value)` triples. Reading goes
//! through `SymmetricMap::set`, so triples naming the same unordered pair collapse into one
//! entry and the last one wins.

use crate::symmetric_map::SymmetricMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::Hash;

impl<K: Serialize, V: Serialize> Serialize for SymmetricMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, K, V> Deserialize<'de> for SymmetricMap<K, V>
where
    K: Deserialize<'de> + Ord + Hash,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let triples = Vec::<(K, K, V)>::deserialize(deserializer)?;
        log::debug!("Deserialized {} pair triples", triples.len());

        Ok(triples.into_iter().collect())
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
