use serde::{Deserialize, Serialize};

/// An unordered pair of keys, stored in sorted order so that `PairKey::new(a, b)` and
/// `PairKey::new(b, a)` are equal and hash the same.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(from = "(K, K)")]
#[serde(bound(deserialize = "K: Deserialize<'de> + Ord"))]
pub struct PairKey<K>(K, K);

impl<K: Ord> PairKey<K> {
    pub fn new(k1: K, k2: K) -> Self {
        if k1 > k2 {
            PairKey(k2, k1)
        } else {
            PairKey(k1, k2)
        }
    }
}

impl<K> PairKey<K> {
    /// The lesser key.
    pub fn first(&self) -> &K {
        &self.0
    }

    /// The greater key.
    pub fn second(&self) -> &K {
        &self.1
    }

    pub fn into_inner(self) -> (K, K) {
        (self.0, self.1)
    }

    pub fn is_self_pair(&self) -> bool
    where
        K: PartialEq,
    {
        self.0 == self.1
    }
}

impl<K: Ord> From<(K, K)> for PairKey<K> {
    fn from((k1, k2): (K, K)) -> Self {
        PairKey::new(k1, k2)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
