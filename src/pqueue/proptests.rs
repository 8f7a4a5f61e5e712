//! Property-based tests for the priority queue using proptest

use super::*;
use proptest::prelude::*;

fn order_strategy() -> impl Strategy<Value = HeapOrder> {
    prop_oneof![Just(HeapOrder::Max), Just(HeapOrder::Min)]
}

/// `Some(priority)` pushes, `None` pops.
fn op_strategy() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![
        3 => (-50i64..50).prop_map(Some),
        1 => Just(None),
    ]
}

proptest! {
    #[test]
    fn test_head_is_extremum_of_stored(
        order in order_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..200)
    ) {
        let pq = PriorityQueue::new(order);
        let mut stored: Vec<i64> = Vec::new();

        for op in ops {
            match op {
                Some(priority) => {
                    pq.push((), priority);
                    stored.push(priority);
                }
                None => {
                    let popped = pq.pop().map(|(_, p)| p);
                    let expected = match order {
                        HeapOrder::Max => stored.iter().copied().max(),
                        HeapOrder::Min => stored.iter().copied().min(),
                    };
                    prop_assert_eq!(popped, expected);
                    if let Some(p) = popped {
                        let at = stored.iter().position(|&s| s == p).unwrap();
                        stored.swap_remove(at);
                    }
                }
            }

            prop_assert!(pq.is_valid_heap());
            prop_assert_eq!(pq.size(), stored.len());
            let expected_head = match order {
                HeapOrder::Max => stored.iter().copied().max(),
                HeapOrder::Min => stored.iter().copied().min(),
            };
            prop_assert_eq!(pq.head_priority(), expected_head);
        }
    }

    #[test]
    fn test_drain_is_sorted(
        order in order_strategy(),
        priorities in prop::collection::vec(any::<i64>(), 0..150)
    ) {
        let pq = PriorityQueue::new(order);
        for (i, &priority) in priorities.iter().enumerate() {
            pq.push(i, priority);
        }

        let mut drained = Vec::with_capacity(priorities.len());
        while let Some((_, priority)) = pq.pop() {
            prop_assert!(pq.is_valid_heap());
            drained.push(priority);
        }

        let mut expected = priorities.clone();
        expected.sort_unstable();
        if order == HeapOrder::Max {
            expected.reverse();
        }
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn test_values_travel_with_priorities(
        priorities in prop::collection::vec(-1000i64..1000, 1..100)
    ) {
        let pq = PriorityQueue::min();
        for &priority in &priorities {
            pq.push(priority.wrapping_mul(3), priority);
        }
        for (value, priority) in pq.into_sorted_vec() {
            prop_assert_eq!(value, priority.wrapping_mul(3));
        }
    }
}
