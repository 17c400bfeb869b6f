//! Cursors over a [`SkipList`].

use std::iter::FusedIterator;

use rand::rngs::StdRng;

use super::node::{Node, Position};
use super::SkipList;
use crate::common::{Error, NodeId, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Parked just before the first candidate; nothing exposed yet.
    NotStarted(Position),
    /// Exposing the entry at this node.
    Advancing(NodeId),
    /// Past the upper bound. Sticky.
    Exhausted,
}

/// Ascending cursor over the entries with `start <= key <= end`.
///
/// Supports two styles of use. The explicit protocol:
/// ```
/// use skipindex::SkipList;
///
/// let mut index = SkipList::with_seed(1);
/// index.insert(1, "a");
/// index.insert(2, "b");
///
/// let mut iter = index.range(2, 10);
/// while iter.advance() {
///     assert_eq!(iter.key(), 2);
///     assert_eq!(*iter.value(), "b");
/// }
/// ```
/// or plain [`Iterator`] over `(key, &value)` pairs. Both share one state
/// machine, so mixing them is allowed.
///
/// The cursor borrows the list, which keeps it from being mutated while the
/// cursor is alive.
pub struct RangeIter<'a, V, R = StdRng> {
    list: &'a SkipList<V, R>,
    end: i64,
    state: State,
}

impl<'a, V, R> RangeIter<'a, V, R> {
    pub(crate) fn new(list: &'a SkipList<V, R>, start: i64, end: i64) -> Self {
        Self {
            list,
            end,
            state: State::NotStarted(list.find_last_before(start)),
        }
    }

    /// Step to the next entry along level 0.
    ///
    /// Returns `true` if an entry with key `<= end` is now exposed. Once this
    /// returns `false` every later call does too.
    pub fn advance(&mut self) -> bool {
        let from = match self.state {
            State::NotStarted(pos) => pos,
            State::Advancing(id) => Position::Node(id),
            State::Exhausted => return false,
        };

        match self.list.forward(from, 0) {
            Some(next) if self.list.node(next).key <= self.end => {
                self.state = State::Advancing(next);
                true
            }
            _ => {
                self.state = State::Exhausted;
                false
            }
        }
    }

    /// Value at the current position, or why there is none.
    pub fn try_value(&self) -> Result<&'a V> {
        self.current().map(|node| &node.value)
    }

    /// Value at the current position.
    ///
    /// # Panics
    /// Panics unless the last call to [`advance`](Self::advance) returned `true`.
    pub fn value(&self) -> &'a V {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("RangeIter::value: {}", err),
        }
    }

    /// Key at the current position.
    ///
    /// # Panics
    /// Same contract as [`value`](Self::value).
    pub fn key(&self) -> i64 {
        match self.current() {
            Ok(node) => node.key,
            Err(err) => panic!("RangeIter::key: {}", err),
        }
    }

    fn current(&self) -> Result<&'a Node<V>> {
        match self.state {
            State::NotStarted(_) => Err(Error::IteratorNotStarted),
            State::Advancing(id) => Ok(self.list.node(id)),
            State::Exhausted => Err(Error::IteratorExhausted),
        }
    }
}

impl<'a, V, R> Iterator for RangeIter<'a, V, R> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.advance() {
            return None;
        }
        self.current().ok().map(|node| (node.key, &node.value))
    }
}

impl<V, R> FusedIterator for RangeIter<'_, V, R> {}

/// Descending cursor that follows backward links from the tail.
pub struct RevIter<'a, V, R = StdRng> {
    list: &'a SkipList<V, R>,
    next: Option<NodeId>,
}

impl<'a, V, R> RevIter<'a, V, R> {
    pub(crate) fn new(list: &'a SkipList<V, R>, from: Option<NodeId>) -> Self {
        Self { list, next: from }
    }
}

impl<'a, V, R> Iterator for RevIter<'a, V, R> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.next?);
        self.next = node.backward;
        Some((node.key, &node.value))
    }
}

impl<V, R> FusedIterator for RevIter<'_, V, R> {}
