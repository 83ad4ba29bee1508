use adtkit::{EdgeError, IndexGraph, LabeledGraph, MinHeap};
use proptest::prelude::*;
use std::collections::{BTreeMap, BinaryHeap, HashSet};
use std::cmp::Reverse;

#[derive(Clone, Debug)]
enum HeapOp {
    Insert(i16),
    Extract,
    Peek,
}

fn arb_heap_op() -> impl Strategy<Value = HeapOp> {
    prop_oneof![
        3 => any::<i16>().prop_map(HeapOp::Insert),
        2 => Just(HeapOp::Extract),
        1 => Just(HeapOp::Peek),
    ]
}

proptest! {
    // Property: draining yields the sorted input, same length.
    #[test]
    fn prop_heap_drains_sorted(xs in proptest::collection::vec(any::<i32>(), 0..200)) {
        let mut h: MinHeap<i32> = xs.iter().copied().collect();
        let out: Vec<i32> = std::iter::from_fn(|| h.extract_min()).collect();
        let mut sorted = xs.clone();
        sorted.sort();
        prop_assert_eq!(out, sorted);
        prop_assert!(h.is_empty());
    }

    // Property: state-machine equivalence with std's BinaryHeap<Reverse<_>>.
    #[test]
    fn prop_heap_matches_binary_heap(ops in proptest::collection::vec(arb_heap_op(), 1..150)) {
        let mut sut = MinHeap::new();
        let mut model = BinaryHeap::new();
        for op in ops {
            match op {
                HeapOp::Insert(x) => {
                    sut.insert(x);
                    model.push(Reverse(x));
                }
                HeapOp::Extract => {
                    prop_assert_eq!(sut.extract_min(), model.pop().map(|r| r.0));
                }
                HeapOp::Peek => {
                    let before = sut.len();
                    prop_assert_eq!(sut.peek_min(), model.peek().map(|r| &r.0));
                    prop_assert_eq!(sut.len(), before);
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }

    // Property: IndexGraph agrees with a map keyed by (from, to).
    // - add succeeds iff both endpoints are in range and the pair is new;
    // - a rejected add leaves num_edges unchanged;
    // - num_edges equals the model size and the sum of out-degrees.
    #[test]
    fn prop_index_graph_matches_edge_map(
        n in 0usize..8,
        adds in proptest::collection::vec((0usize..10, 0usize..10, -50i64..50), 0..80),
    ) {
        let mut g: IndexGraph = IndexGraph::new(n);
        let mut model: BTreeMap<(usize, usize), i64> = BTreeMap::new();
        for (from, to, w) in adds {
            let before = g.num_edges();
            let res = g.add_weighted_edge(from, to, w);
            if from >= n || to >= n {
                let is_range_err = matches!(res, Err(EdgeError::VertexOutOfRange { .. }));
                prop_assert!(is_range_err);
                prop_assert_eq!(g.num_edges(), before);
            } else if model.contains_key(&(from, to)) {
                prop_assert_eq!(res, Err(EdgeError::DuplicateEdge));
                prop_assert_eq!(g.num_edges(), before);
            } else {
                prop_assert_eq!(res, Ok(()));
                model.insert((from, to), w);
            }
        }
        prop_assert_eq!(g.num_edges(), model.len());
        let degree_sum: usize = (0..n).map(|v| g.connected(v).len()).sum();
        prop_assert_eq!(degree_sum, model.len());
        for (&(from, to), w) in &model {
            prop_assert_eq!(g.edge_weight(from, to), Some(w));
        }
    }

    // Property: LabeledGraph name/index bijection under random registration.
    #[test]
    fn prop_labeled_bijection(names in proptest::collection::vec("[a-c]{1,2}", 0..40)) {
        let mut g: LabeledGraph<String> = LabeledGraph::new();
        let mut seen = HashSet::new();
        for name in names {
            let fresh = seen.insert(name.clone());
            prop_assert_eq!(g.add_vertex(name).is_ok(), fresh);
        }
        prop_assert_eq!(g.num_vertices(), seen.len());
        for i in 0..g.num_vertices() {
            let name = g.name_of(i).cloned();
            prop_assert!(name.is_some());
            let name = name.unwrap_or_default();
            prop_assert_eq!(g.index_of(name.as_str()), Some(i));
        }
    }
}
