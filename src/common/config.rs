//! Configuration constants for the skip list index.
//!
//! Both values are fixed at compile time; the only runtime knob is the
//! random number generator injected into [`SkipList`](crate::SkipList).

/// Maximum number of levels a node (and the head sentinel) can have.
///
/// With a promotion probability of 1/4, 32 levels comfortably cover
/// 4^32 = 2^64 entries, i.e. every key an `i64` can express.
pub const MAX_LEVEL_COUNT: usize = 32;

/// Probability that a new node which reached level `i` is promoted to `i + 1`.
///
/// A level count of `n` is therefore drawn with probability
/// `0.25^(n-1) * 0.75`, giving an expected 1.33 forward links per node.
pub const LEVEL_UP_PROBABILITY: f64 = 0.25;
