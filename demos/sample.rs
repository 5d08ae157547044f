//! Example: solve the sample instance with both strategies.
//!
//! Run with:
//! `cargo run --example sample`

use knapsack_dp::{items_from_pairs, solve_with, DpTable, Strategy};

fn main() {
    let items = items_from_pairs(&[(2, 3), (3, 4), (4, 5), (5, 5)]);
    let capacity = 7;

    let table = DpTable::build(&items, capacity);
    println!("DP table ({} x {}):", table.num_items() + 1, capacity + 1);
    for i in 0..=table.num_items() {
        let row: Vec<String> = table.row(i).iter().map(u64::to_string).collect();
        println!("  {}", row.join(" "));
    }

    for strategy in [
        Strategy::FullTable,
        Strategy::Checkpointed { block_size: None },
    ] {
        let sol = solve_with(&items, capacity, strategy);
        println!("{strategy:?}: value {}", sol.value);
        for item in &sol.items {
            println!("  take weight {} value {}", item.weight, item.value);
        }
    }
}
