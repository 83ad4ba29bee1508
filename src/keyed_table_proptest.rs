#![cfg(test)]

// Property tests for KeyedTable kept inside the crate so they can use the
// deterministic test hashers.

use crate::error::InsertError;
use crate::keyed_table::test_hashers::{ConstBuildHasher, IdentityBuildHasher};
use crate::keyed_table::KeyedTable;
use core::hash::BuildHasher;
use proptest::prelude::*;
use std::collections::HashMap;
use std::fmt;

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Pool-indexed operations: indices shrink to earlier keys, the pool
// shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Modify(usize, i32),
    Remove(usize),
    Search(usize),
    Contains(String),
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<Op>)> {
    (1usize..=8, proptest::collection::vec("[a-z]{0,4}", 1..=12)).prop_flat_map(
        |(capacity, pool)| {
            let idx = proptest::sample::select((0..pool.len()).collect::<Vec<_>>());
            let op = prop_oneof![
                3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
                1 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Modify(i, v)),
                1 => idx.clone().prop_map(Op::Remove),
                1 => idx.clone().prop_map(Op::Search),
                1 => "[a-z]{0,4}".prop_map(Op::Contains),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (capacity, pool.clone(), ops))
        },
    )
}

// Runs `ops` against a KeyedTable and a std HashMap model. Checked after
// every op:
// - duplicate inserts fail and change nothing;
// - search/contains/modify/remove agree with the model;
// - len matches the model;
// - capacity doubles exactly when len reaches 0.7 * capacity after a
//   successful insert, and never changes otherwise.
fn run_against_model<S: BuildHasher>(
    mut sut: KeyedTable<Key, i32, S>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<Key, i32> = HashMap::new();
    let mut capacity = sut.capacity();
    let key = |i: usize| Key(pool[i].clone());

    for op in ops {
        match op {
            Op::Insert(i, v) => {
                let k = key(i);
                let already = model.contains_key(&k);
                match sut.insert(k.clone(), v) {
                    Ok(()) => {
                        prop_assert!(!already, "insert must fail on duplicate");
                        model.insert(k, v);
                        if model.len() * 10 >= capacity * 7 {
                            capacity *= 2;
                        }
                    }
                    Err(InsertError::DuplicateKey) => {
                        prop_assert!(already, "duplicate error only when key exists");
                        prop_assert_eq!(sut.search(&k), model.get(&k));
                    }
                }
            }
            Op::Modify(i, v) => {
                let k = key(i);
                let prev = sut.modify(&k, v);
                let model_prev = model.get_mut(&k).map(|mv| std::mem::replace(mv, v));
                prop_assert_eq!(prev, model_prev);
            }
            Op::Remove(i) => {
                let k = key(i);
                let got = sut.remove(&k);
                let want = model.remove(&k).map(|v| (k.clone(), v));
                prop_assert_eq!(got, want);
                prop_assert!(sut.search(&k).is_none());
            }
            Op::Search(i) => {
                let k = key(i);
                prop_assert_eq!(sut.search(&k), model.get(&k));
            }
            Op::Contains(s) => {
                let has_model = model.keys().any(|k| k.0 == s);
                prop_assert_eq!(sut.contains_key(s.as_str()), has_model);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert_eq!(sut.capacity(), capacity);
    }

    // Every surviving key still resolves to its latest value.
    for (k, v) in &model {
        prop_assert_eq!(sut.search(k), Some(v));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_state_machine((capacity, pool, ops) in arb_scenario()) {
        let sut: KeyedTable<Key, i32> = KeyedTable::with_capacity(capacity);
        run_against_model(sut, &pool, ops)?;
    }

    // Same invariants with every key sharing one home slot.
    #[test]
    fn prop_state_machine_with_collisions((capacity, pool, ops) in arb_scenario()) {
        let sut = KeyedTable::with_capacity_and_hasher(capacity, ConstBuildHasher);
        run_against_model(sut, &pool, ops)?;
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    // Integer keys with identity hashing: heavy clustering around small
    // homes, with removals punching holes in probe runs.
    #[test]
    fn prop_removal_holes_never_hide_keys(
        keys in proptest::collection::btree_set(0usize..64, 1..40),
        remove_every in 2usize..5,
    ) {
        let mut t: KeyedTable<usize, usize, IdentityBuildHasher> =
            KeyedTable::with_capacity_and_hasher(4, IdentityBuildHasher);
        for &k in &keys {
            prop_assert!(t.insert(k, k * 10).is_ok());
        }
        let mut gone = Vec::new();
        let mut kept = Vec::new();
        for (i, &k) in keys.iter().enumerate() {
            if i % remove_every == 0 { gone.push(k) } else { kept.push(k) }
        }
        for &k in &gone {
            prop_assert_eq!(t.remove(&k), Some((k, k * 10)));
        }
        for &k in &kept {
            prop_assert_eq!(t.search(&k), Some(&(k * 10)));
        }
        for &k in &gone {
            prop_assert!(t.search(&k).is_none());
        }
        prop_assert_eq!(t.len(), kept.len());
    }
}
