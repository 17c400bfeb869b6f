//! Index structures.
//!
//! An index here is a sorted in-memory table keyed by `i64`, the kind a
//! storage engine keeps as its active write segment before flushing.
//!
//! # Implementations
//! - [`SkipList`] - probabilistic multi-level linked list
//!
//! The engine above talks to an index only through [`OrderedIndex`], so
//! the structure can be swapped at compile time.

pub mod skiplist;

pub use skiplist::{random_level, RangeIter, RevIter, SkipList};

/// A sorted map from `i64` keys to values of type `V`.
///
/// # Example
/// ```
/// use skipindex::{OrderedIndex, SkipList};
///
/// fn newest<I: OrderedIndex<u64>>(index: &I) -> Option<u64> {
///     index.all().last().map(|(_, v)| *v)
/// }
///
/// let mut index = SkipList::with_seed(0);
/// OrderedIndex::insert(&mut index, 10, 1);
/// OrderedIndex::insert(&mut index, 20, 2);
/// assert_eq!(newest(&index), Some(2));
/// ```
pub trait OrderedIndex<V> {
    /// Ascending iterator over `(key, &value)` pairs.
    type Range<'a>: Iterator<Item = (i64, &'a V)>
    where
        Self: 'a,
        V: 'a;

    /// Insert or overwrite. Returns the previous value for an existing key.
    fn insert(&mut self, key: i64, value: V) -> Option<V>;

    /// Remove `key`. Returns `false` if it was absent.
    fn delete(&mut self, key: i64) -> bool;

    fn search(&self, key: i64) -> Option<&V>;

    /// Entries with `start <= key <= end`, ascending.
    fn range(&self, start: i64, end: i64) -> Self::Range<'_>;

    /// Every entry, ascending.
    fn all(&self) -> Self::Range<'_> {
        self.range(i64::MIN, i64::MAX)
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
