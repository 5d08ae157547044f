#![allow(dead_code)]

use knapsack_dp::Item;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Straight transcription of the table recurrence, kept independent of the
/// crate so the exact witness can be compared, ties included.
pub fn textbook_knapsack(items: &[Item], capacity: usize) -> (u64, Vec<Item>) {
    let n = items.len();
    let mut m = vec![vec![0u64; capacity + 1]; n + 1];
    for i in 0..=n {
        for w in 0..=capacity {
            if i == 0 || w == 0 {
                m[i][w] = 0;
            } else if items[i - 1].weight <= w {
                let it = items[i - 1];
                m[i][w] = (it.value + m[i - 1][w - it.weight]).max(m[i - 1][w]);
            } else {
                m[i][w] = m[i - 1][w];
            }
        }
    }
    let mut w = capacity;
    let mut selected = Vec::new();
    for i in (1..=n).rev() {
        if m[i][w] != m[i - 1][w] {
            selected.push(items[i - 1]);
            w -= items[i - 1].weight;
        }
    }
    selected.reverse();
    (m[n][capacity], selected)
}

/// Best value over all subsets that fit, by enumeration.
pub fn brute_force_best(items: &[Item], capacity: usize) -> u64 {
    assert!(items.len() <= 20, "brute force is exponential");
    let mut best = 0;
    for mask in 0u32..(1 << items.len()) {
        let (mut weight, mut value) = (0usize, 0u64);
        for (k, it) in items.iter().enumerate() {
            if mask & (1 << k) != 0 {
                weight += it.weight;
                value += it.value;
            }
        }
        if weight <= capacity {
            best = best.max(value);
        }
    }
    best
}

/// True if `picked` can be obtained from `items` by deleting elements.
pub fn is_subsequence(picked: &[Item], items: &[Item]) -> bool {
    let mut rest = items.iter();
    picked.iter().all(|p| rest.any(|it| it == p))
}

pub fn random_items(rng: &mut StdRng, n: usize, max_weight: usize, max_value: u64) -> Vec<Item> {
    (0..n)
        .map(|_| Item::new(rng.gen_range(0..=max_weight), rng.gen_range(0..=max_value)))
        .collect()
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Items with weights in `min_weight..8` and values below 20.
pub fn small_items(min_weight: usize, max_len: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((min_weight..8usize, 0u64..20), 0..=max_len)
        .prop_map(|pairs| pairs.into_iter().map(Item::from).collect())
}
