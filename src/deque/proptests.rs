//! Property-based tests for the bounded deque using proptest
//!
//! Random operation sequences are replayed against `std::collections::VecDeque`
//! with the same capacity rule; every result and the final contents must match.

use super::*;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Op {
    Append(i32),
    Prepend(i32),
    Pop,
    Shift,
    First,
    Last,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Append),
        3 => any::<i32>().prop_map(Op::Prepend),
        2 => Just(Op::Pop),
        2 => Just(Op::Shift),
        1 => Just(Op::First),
        1 => Just(Op::Last),
    ]
}

fn capacity_strategy() -> impl Strategy<Value = Capacity> {
    prop_oneof![
        Just(Capacity::Unbounded),
        (0usize..16).prop_map(Capacity::Bounded),
    ]
}

proptest! {
    #[test]
    fn test_matches_vecdeque_model(
        limit in capacity_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..200)
    ) {
        let deque = BoundedDeque::with_limit(limit);
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Append(value) => {
                    let fits = limit.admits(model.len());
                    prop_assert_eq!(deque.append(value), fits);
                    if fits {
                        model.push_back(value);
                    }
                }
                Op::Prepend(value) => {
                    let fits = limit.admits(model.len());
                    prop_assert_eq!(deque.prepend(value), fits);
                    if fits {
                        model.push_front(value);
                    }
                }
                Op::Pop => prop_assert_eq!(deque.pop(), model.pop_back()),
                Op::Shift => prop_assert_eq!(deque.shift(), model.pop_front()),
                Op::First => prop_assert_eq!(deque.first(), model.front().copied()),
                Op::Last => prop_assert_eq!(deque.last(), model.back().copied()),
            }

            prop_assert_eq!(deque.size(), model.len());
            prop_assert_eq!(deque.is_empty(), model.is_empty());
            if let Some(max) = limit.max_len() {
                prop_assert!(deque.size() <= max);
                prop_assert_eq!(deque.is_full(), model.len() == max);
            } else {
                prop_assert!(!deque.is_full());
            }
        }

        prop_assert!(deque.links_consistent());
        prop_assert_eq!(deque.to_vec(), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_size_counts_successful_operations(
        capacity in 1usize..32,
        pushes in prop::collection::vec(any::<bool>(), 0..100),
        removals in 0usize..120
    ) {
        let deque = BoundedDeque::with_capacity(capacity);
        let mut inserted = 0usize;

        for (i, at_back) in pushes.iter().enumerate() {
            let ok = if *at_back { deque.append(i) } else { deque.prepend(i) };
            if ok {
                inserted += 1;
            }
        }
        prop_assert_eq!(inserted, pushes.len().min(capacity));

        let mut removed = 0usize;
        for i in 0..removals {
            let item = if i % 2 == 0 { deque.pop() } else { deque.shift() };
            if item.is_some() {
                removed += 1;
            }
        }

        prop_assert_eq!(deque.size(), inserted - removed);
        prop_assert_eq!(removed, removals.min(inserted));
    }
}
