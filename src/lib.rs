//! A map keyed by unordered pairs. `map.set(a, b, v)` and `map.set(b, a, v)` write the same
//! entry, and `map.at(a).set(b, v)` is the two-step spelling of the same write.

pub mod pair_key;
pub mod symmetric_map;
pub mod view;

mod serialization;

pub use pair_key::PairKey;
pub use symmetric_map::SymmetricMap;
pub use view::{PairRef, PairView};
