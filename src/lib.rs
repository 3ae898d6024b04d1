//! Word-frequency dictionaries with prefix autocomplete.
//!
//! Three interchangeable backends implement [`PrefixDictionary`]:
//! [`SortedArrayDictionary`], [`HashMapDictionary`] and [`TernarySearchTree`].
//! They agree on every result, so any of them can stand in for another.

pub mod dict;
pub mod utils;

pub use dict::*;
pub use utils::*;
