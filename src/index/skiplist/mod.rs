//! Skip list ordered index.
//!
//! The [`SkipList`] provides:
//! - Expected O(log n) search, insert (upsert) and delete by `i64` key
//! - Ascending range scans through [`RangeIter`]
//! - O(1) access to the first and last entries
//! - Descending traversal through [`RevIter`]
//!
//! Level heights are drawn from an injected [`rand::Rng`], so a list built
//! with [`SkipList::with_seed`] has the same shape on every run.

mod iter;
mod level;
mod node;

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::common::config::MAX_LEVEL_COUNT;
use crate::common::NodeId;
use crate::index::OrderedIndex;

pub use iter::{RangeIter, RevIter};
pub use level::random_level;

use node::{Node, Position};

/// An in-memory ordered index from `i64` keys to values of type `V`.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                        SkipList<V, R>                       │
/// │  ┌──────────────┐  ┌───────────────────────────────────┐   │
/// │  │ head[0..32]  │  │   slots: Vec<Option<Node<V>>>     │   │
/// │  │ Option<Nid>  │─▶│  [Node0] [None] [Node2] ...       │   │
/// │  └──────────────┘  └───────────────────────────────────┘   │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐      │
/// │  │  free_list   │  │     tail     │  │     rng      │      │
/// │  │ Vec<NodeId>  │  │ Option<Nid>  │  │      R       │      │
/// │  └──────────────┘  └──────────────┘  └──────────────┘      │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// Nodes live in an arena and link to each other by [`NodeId`]. The head
/// sentinel is just its array of forward links. Slots vacated by a delete
/// are recycled LIFO by the next insert.
///
/// # Thread Safety
/// None internally. Mutation takes `&mut self` and iterators borrow the list,
/// so a structural change can never race an outstanding iterator. Callers
/// sharing a list across threads wrap it in their own lock.
///
/// # Usage
/// ```
/// use skipindex::SkipList;
///
/// let mut index = SkipList::with_seed(42);
/// index.insert(2, "b");
/// index.insert(1, "a");
/// index.insert(3, "c");
///
/// assert_eq!(index.search(2), Some(&"b"));
/// let values: Vec<_> = index.range(2, 3).map(|(_, v)| *v).collect();
/// assert_eq!(values, ["b", "c"]);
/// ```
pub struct SkipList<V, R = StdRng> {
    /// Node arena; `None` marks a slot on the free list.
    slots: Vec<Option<Node<V>>>,

    /// Vacated slots awaiting reuse.
    free_list: Vec<NodeId>,

    /// Forward links of the head sentinel, one per possible level.
    head: [Option<NodeId>; MAX_LEVEL_COUNT],

    /// Node with the greatest key.
    tail: Option<NodeId>,

    /// Number of levels in use (1..=MAX_LEVEL_COUNT).
    level_count: usize,

    /// Number of stored entries.
    len: usize,

    /// Source of level draws.
    rng: R,
}

impl<V> SkipList<V, StdRng> {
    /// Create an empty list whose level draws are seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty list with a deterministic level sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<V> Default for SkipList<V, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, R> SkipList<V, R> {
    /// Create an empty list drawing levels from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            head: [None; MAX_LEVEL_COUNT],
            tail: None,
            level_count: 1,
            len: 0,
            rng,
        }
    }

    // ========================================================================
    // Public API: Queries
    // ========================================================================

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels currently in use.
    #[inline]
    pub fn level_count(&self) -> usize {
        self.level_count
    }

    /// Look up the value stored under `key`.
    pub fn search(&self, key: i64) -> Option<&V> {
        let id = self.find(key)?;
        Some(&self.node(id).value)
    }

    /// Look up the value stored under `key` for in-place modification.
    pub fn search_mut(&mut self, key: i64) -> Option<&mut V> {
        let id = self.find(key)?;
        Some(&mut self.node_mut(id).value)
    }

    /// Check if `key` is present.
    pub fn contains_key(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    /// Entry with the smallest key.
    pub fn first(&self) -> Option<(i64, &V)> {
        let node = self.node(self.head[0]?);
        Some((node.key, &node.value))
    }

    /// Entry with the greatest key. O(1).
    pub fn last(&self) -> Option<(i64, &V)> {
        let node = self.node(self.tail?);
        Some((node.key, &node.value))
    }

    /// Iterate over entries with `start <= key <= end` in ascending order.
    ///
    /// An inverted interval (`start > end`) yields nothing.
    pub fn range(&self, start: i64, end: i64) -> RangeIter<'_, V, R> {
        RangeIter::new(self, start, end)
    }

    /// Iterate over every entry in ascending key order, negative keys included.
    pub fn all(&self) -> RangeIter<'_, V, R> {
        self.range(i64::MIN, i64::MAX)
    }

    /// Iterate over every entry in descending key order.
    pub fn iter_rev(&self) -> RevIter<'_, V, R> {
        RevIter::new(self, self.tail)
    }

    // ========================================================================
    // Public API: Removal
    // ========================================================================

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let update = self.find_predecessors(key);

        let target = match self.forward(update[0], 0) {
            Some(id) if self.node(id).key == key => id,
            _ => return None,
        };
        debug_assert!(self.node(target).height() <= self.level_count);

        // Levels the target never reached fail the equality check and are skipped.
        for (level, &pred) in update.iter().enumerate().take(self.level_count) {
            if self.forward(pred, level) == Some(target) {
                let next = self.node(target).forward[level];
                self.set_forward(pred, level, next);
            }
        }

        let (next, backward) = {
            let node = self.node(target);
            (node.forward[0], node.backward)
        };
        match next {
            Some(next) => self.node_mut(next).backward = backward,
            None => self.tail = backward,
        }

        let before = self.level_count;
        while self.level_count > 1 && self.head[self.level_count - 1].is_none() {
            self.level_count -= 1;
        }
        if self.level_count != before {
            trace!(from = before, to = self.level_count, "skip list levels shrank");
        }

        self.len -= 1;
        Some(self.release(target).value)
    }

    /// Remove `key`. Returns `false` if it was not present.
    pub fn delete(&mut self, key: i64) -> bool {
        self.remove(key).is_some()
    }

    /// Drop every entry and return to the freshly constructed state.
    ///
    /// The random number generator keeps its position.
    pub fn clear(&mut self) {
        debug!(entries = self.len, "clearing skip list");
        self.slots.clear();
        self.free_list.clear();
        self.head = [None; MAX_LEVEL_COUNT];
        self.tail = None;
        self.level_count = 1;
        self.len = 0;
    }

    // ========================================================================
    // Internal: descent
    // ========================================================================

    /// Last position at each level whose successor is not below `key`.
    ///
    /// Levels at or above `level_count` are left at `Head`, which is exactly
    /// the predecessor a newly grown level needs.
    fn find_predecessors(&self, key: i64) -> [Position; MAX_LEVEL_COUNT] {
        let mut update = [Position::Head; MAX_LEVEL_COUNT];
        let mut x = Position::Head;
        for level in (0..self.level_count).rev() {
            x = self.advance_while_below(x, level, key);
            update[level] = x;
        }
        update
    }

    /// Last position whose key is strictly below `key` (or `Head`).
    pub(crate) fn find_last_before(&self, key: i64) -> Position {
        (0..self.level_count)
            .rev()
            .fold(Position::Head, |x, level| self.advance_while_below(x, level, key))
    }

    fn advance_while_below(&self, mut x: Position, level: usize, key: i64) -> Position {
        while let Some(next) = self.forward(x, level) {
            if self.node(next).key >= key {
                break;
            }
            x = Position::Node(next);
        }
        x
    }

    fn find(&self, key: i64) -> Option<NodeId> {
        let candidate = self.forward(self.find_last_before(key), 0)?;
        (self.node(candidate).key == key).then_some(candidate)
    }

    // ========================================================================
    // Internal: arena
    // ========================================================================

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<V> {
        match &self.slots[id.0] {
            Some(node) => node,
            None => unreachable!("link to freed slot {}", id),
        }
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<V> {
        match &mut self.slots[id.0] {
            Some(node) => node,
            None => unreachable!("link to freed slot {}", id),
        }
    }

    #[inline]
    pub(crate) fn forward(&self, at: Position, level: usize) -> Option<NodeId> {
        match at {
            Position::Head => self.head[level],
            Position::Node(id) => self.node(id).forward[level],
        }
    }

    #[inline]
    fn set_forward(&mut self, at: Position, level: usize, to: Option<NodeId>) {
        match at {
            Position::Head => self.head[level] = to,
            Position::Node(id) => self.node_mut(id).forward[level] = to,
        }
    }

    fn allocate(&mut self, node: Node<V>) -> NodeId {
        match self.free_list.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId::new(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<V> {
        match self.slots[id.0].take() {
            Some(node) => {
                self.free_list.push(id);
                node
            }
            None => unreachable!("double free of slot {}", id),
        }
    }
}

impl<V, R: Rng> SkipList<V, R> {
    /// Insert `value` under `key`.
    ///
    /// If `key` is already present its value is replaced in place and the
    /// old value is returned; the list's shape, length and tail are untouched.
    pub fn insert(&mut self, key: i64, value: V) -> Option<V> {
        let update = self.find_predecessors(key);

        if let Some(next) = self.forward(update[0], 0) {
            let node = self.node_mut(next);
            if node.key == key {
                return Some(std::mem::replace(&mut node.value, value));
            }
        }

        let height = random_level(&mut self.rng);
        if height > self.level_count {
            trace!(from = self.level_count, to = height, "skip list levels grew");
            self.level_count = height;
        }

        let id = self.allocate(Node::new(key, value, height));
        for (level, &pred) in update.iter().enumerate().take(height) {
            let next = self.forward(pred, level);
            self.node_mut(id).forward[level] = next;
            self.set_forward(pred, level, Some(id));
        }

        self.node_mut(id).backward = match update[0] {
            Position::Head => None,
            Position::Node(pred) => Some(pred),
        };
        match self.node(id).forward[0] {
            Some(next) => self.node_mut(next).backward = Some(id),
            None => self.tail = Some(id),
        }

        self.len += 1;
        None
    }
}

impl<V: fmt::Debug, R> fmt::Debug for SkipList<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.all()).finish()
    }
}

impl<V, R: Rng> Extend<(i64, V)> for SkipList<V, R> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> FromIterator<(i64, V)> for SkipList<V, StdRng> {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<'a, V, R> IntoIterator for &'a SkipList<V, R> {
    type Item = (i64, &'a V);
    type IntoIter = RangeIter<'a, V, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}

impl<V, R: Rng> OrderedIndex<V> for SkipList<V, R> {
    type Range<'a>
        = RangeIter<'a, V, R>
    where
        Self: 'a,
        V: 'a;

    fn insert(&mut self, key: i64, value: V) -> Option<V> {
        SkipList::insert(self, key, value)
    }

    fn delete(&mut self, key: i64) -> bool {
        SkipList::delete(self, key)
    }

    fn search(&self, key: i64) -> Option<&V> {
        SkipList::search(self, key)
    }

    fn range(&self, start: i64, end: i64) -> Self::Range<'_> {
        SkipList::range(self, start, end)
    }

    fn len(&self) -> usize {
        SkipList::len(self)
    }
}

#[cfg(test)]
impl<V, R> SkipList<V, R> {
    /// Panic if any structural invariant is broken.
    pub(crate) fn check_invariants(&self) {
        assert!((1..=MAX_LEVEL_COUNT).contains(&self.level_count));
        assert!(self.head[self.level_count..].iter().all(Option::is_none));

        // Level 0: strictly increasing keys, backward links mirror forward links.
        let mut prev: Option<NodeId> = None;
        let mut cursor = self.head[0];
        let mut count = 0;
        let mut tallest = 1;
        while let Some(id) = cursor {
            let node = self.node(id);
            assert_eq!(node.backward, prev, "backward link of key {}", node.key);
            if let Some(p) = prev {
                assert!(self.node(p).key < node.key, "keys out of order at {}", node.key);
            }
            tallest = tallest.max(node.height());
            count += 1;
            prev = Some(id);
            cursor = node.forward[0];
        }
        assert_eq!(self.tail, prev);
        assert_eq!(self.len, count);
        assert_eq!(self.level_count, tallest);
        assert_eq!(self.slots.iter().filter(|s| s.is_some()).count(), count);

        // Every higher level is an ordered subsequence of nodes tall enough for it.
        for level in 1..self.level_count {
            let expected: Vec<NodeId> = std::iter::successors(self.head[0], |id| {
                self.node(*id).forward[0]
            })
            .filter(|id| self.node(*id).height() > level)
            .collect();
            let actual: Vec<NodeId> = std::iter::successors(self.head[level], |id| {
                self.node(*id).forward[level]
            })
            .collect();
            assert_eq!(actual, expected, "level {} chain", level);
        }
    }
}
