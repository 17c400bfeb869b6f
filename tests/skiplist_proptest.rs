//! Property-based tests for the skip list, checked against a `BTreeMap` model.

use std::collections::BTreeMap;

use proptest::prelude::*;
use skipindex::SkipList;

// =============================================================================
// Test helpers
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Insert(i64, u32),
    Delete(i64),
}

/// Keys drawn from a narrow band around zero so deletes and upserts hit.
fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-64i64..64, any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        1 => (-64i64..64).prop_map(Op::Delete),
    ]
}

fn apply(
    index: &mut SkipList<u32>,
    model: &mut BTreeMap<i64, u32>,
    op: &Op,
) -> Result<(), TestCaseError> {
    match *op {
        Op::Insert(key, value) => {
            prop_assert_eq!(index.insert(key, value), model.insert(key, value));
        }
        Op::Delete(key) => {
            prop_assert_eq!(index.delete(key), model.remove(&key).is_some());
        }
    }
    Ok(())
}

fn build(ops: &[Op], seed: u64) -> Result<(SkipList<u32>, BTreeMap<i64, u32>), TestCaseError> {
    let mut index = SkipList::with_seed(seed);
    let mut model = BTreeMap::new();
    for op in ops {
        apply(&mut index, &mut model, op)?;
    }
    Ok((index, model))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_all_is_strictly_increasing(
        ops in prop::collection::vec(arbitrary_op(), 0..200),
        seed in any::<u64>(),
    ) {
        let (index, _) = build(&ops, seed)?;
        let keys: Vec<i64> = index.all().map(|(k, _)| k).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_matches_model(
        ops in prop::collection::vec(arbitrary_op(), 0..200),
        seed in any::<u64>(),
    ) {
        let (index, model) = build(&ops, seed)?;
        let actual: Vec<(i64, u32)> = index.all().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(i64, u32)> = model.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(index.len(), model.len());
        prop_assert_eq!(index.is_empty(), model.is_empty());
    }

    #[test]
    fn prop_tail_is_max_key(
        ops in prop::collection::vec(arbitrary_op(), 0..200),
        seed in any::<u64>(),
    ) {
        let (index, model) = build(&ops, seed)?;
        prop_assert_eq!(index.last(), model.iter().next_back().map(|(k, v)| (*k, v)));
        prop_assert_eq!(index.first(), model.iter().next().map(|(k, v)| (*k, v)));
    }

    #[test]
    fn prop_range_matches_model(
        ops in prop::collection::vec(arbitrary_op(), 0..200),
        seed in any::<u64>(),
        a in -80i64..80,
        b in -80i64..80,
    ) {
        let (index, model) = build(&ops, seed)?;
        let actual: Vec<i64> = index.range(a, b).map(|(k, _)| k).collect();
        let expected: Vec<i64> = model.keys().copied().filter(|k| a <= *k && *k <= b).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_round_trip(
        entries in prop::collection::btree_map(any::<i64>(), any::<u32>(), 0..100),
        seed in any::<u64>(),
    ) {
        let mut index = SkipList::with_seed(seed);
        for (&key, &value) in &entries {
            index.insert(key, value);
        }
        for (&key, &value) in &entries {
            prop_assert_eq!(index.search(key), Some(&value));
        }
        for &key in entries.keys() {
            prop_assert!(index.delete(key));
            prop_assert_eq!(index.search(key), None);
            prop_assert!(!index.delete(key));
        }
        prop_assert!(index.is_empty());
        prop_assert_eq!(index.level_count(), 1);
    }

    #[test]
    fn prop_upsert_keeps_size(
        key in any::<i64>(),
        first in any::<u32>(),
        second in any::<u32>(),
        seed in any::<u64>(),
    ) {
        let mut index = SkipList::with_seed(seed);
        index.insert(key, first);
        prop_assert_eq!(index.insert(key, second), Some(first));
        prop_assert_eq!(index.len(), 1);
        prop_assert_eq!(index.search(key), Some(&second));
    }

    /// Full scans cover the whole signed key space.
    #[test]
    fn prop_all_includes_negative_keys(
        keys in prop::collection::btree_set(i64::MIN..0, 1..50),
        seed in any::<u64>(),
    ) {
        let mut index = SkipList::with_seed(seed);
        for &key in &keys {
            index.insert(key, 0u32);
        }
        let scanned: Vec<i64> = index.all().map(|(k, _)| k).collect();
        prop_assert_eq!(scanned, keys.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_size_accounting(
        keys in prop::collection::btree_set(any::<i64>(), 0..100),
        delete_mask in prop::collection::vec(any::<bool>(), 100),
        seed in any::<u64>(),
    ) {
        let mut index = SkipList::with_seed(seed);
        for &key in &keys {
            index.insert(key, 1u32);
        }
        let mut deleted = 0;
        for (&key, &drop_it) in keys.iter().zip(&delete_mask) {
            if drop_it {
                prop_assert!(index.delete(key));
                deleted += 1;
            }
        }
        prop_assert_eq!(index.len(), keys.len() - deleted);
        prop_assert_eq!(index.iter_rev().count(), keys.len() - deleted);
    }
}
