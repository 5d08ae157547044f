mod common;

use common::small_items;
use knapsack_dp::{solve, DpTable};
use proptest::prelude::*;

proptest! {
    /// Row 0 and column 0 are zero, and `m[i][w]` never decreases along
    /// either axis, zero-weight items included.
    #[test]
    fn borders_zero_and_monotone(items in small_items(0, 12), capacity in 0usize..30) {
        let table = DpTable::build(&items, capacity);
        prop_assert_eq!(table.num_items(), items.len());
        prop_assert_eq!(table.capacity(), capacity);

        for w in 0..=capacity {
            prop_assert_eq!(table.get(0, w), 0, "m[0][{}]", w);
        }
        for i in 0..=items.len() {
            prop_assert_eq!(table.get(i, 0), 0, "m[{}][0]", i);
            prop_assert_eq!(table.row(i).len(), capacity + 1);
            for w in 1..=capacity {
                prop_assert!(table.get(i, w - 1) <= table.get(i, w), "row {} at w={}", i, w);
            }
            if i > 0 {
                for w in 0..=capacity {
                    prop_assert!(table.get(i - 1, w) <= table.get(i, w), "column {} at i={}", w, i);
                }
            }
        }
    }

    /// Every cell follows the recurrence from the row above it.
    #[test]
    fn cells_follow_recurrence(items in small_items(0, 12), capacity in 0usize..30) {
        let table = DpTable::build(&items, capacity);
        for (i, item) in items.iter().enumerate() {
            for w in 1..=capacity {
                let skip = table.get(i, w);
                let expected = if item.weight <= w {
                    skip.max(item.value + table.get(i, w - item.weight))
                } else {
                    skip
                };
                prop_assert_eq!(table.get(i + 1, w), expected, "m[{}][{}]", i + 1, w);
            }
        }
    }

    #[test]
    fn corner_cell_is_the_solved_value(items in small_items(0, 12), capacity in 0usize..30) {
        let table = DpTable::build(&items, capacity);
        let value = table.get(items.len(), capacity);
        prop_assert_eq!(table.optimal_value(), value);
        prop_assert_eq!(solve(&items, capacity).value, value);

        let taken = table.reconstruct();
        prop_assert!(taken.iter().map(|it| it.weight).sum::<usize>() <= capacity);
        prop_assert_eq!(taken.iter().map(|it| it.value).sum::<u64>(), value);
    }
}
