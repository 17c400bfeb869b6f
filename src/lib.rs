//! skipindex - An in-memory ordered index for storage engine write buffers.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                Storage engine (not in this crate)               │
//! │        time-series segments, flush, locking, query planning     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Index Layer (index/)  [Compile-Time Swappable]    │   │
//! │  │                 OrderedIndex trait                       │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  SkipList<V, R>: search | insert | delete       │   │   │
//! │  │   │  RangeIter (ascending) | RevIter (descending)   │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Common (common/)                               │   │
//! │  │     NodeId + Error + config constants                    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Error, config)
//! - [`index`] - Index structures (skip list)
//!
//! # Quick Start
//! ```
//! use skipindex::SkipList;
//!
//! let mut index = SkipList::new();
//! index.insert(-3, "cold");
//! index.insert(7, "warm");
//! index.insert(7, "hot"); // upsert
//!
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.last(), Some((7, &"hot")));
//!
//! let mut iter = index.all();
//! while iter.advance() {
//!     println!("{} => {}", iter.key(), iter.value());
//! }
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{LEVEL_UP_PROBABILITY, MAX_LEVEL_COUNT};
pub use common::{Error, NodeId, Result};

pub use index::{random_level, OrderedIndex, RangeIter, RevIter, SkipList};
