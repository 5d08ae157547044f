//! Value types shared by every solving strategy.

/// A single candidate for the knapsack: a weight and the value gained by
/// packing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub weight: usize,
    pub value: u64,
}

impl Item {
    pub fn new(weight: usize, value: u64) -> Self {
        Self { weight, value }
    }
}

impl From<(usize, u64)> for Item {
    fn from((weight, value): (usize, u64)) -> Self {
        Self { weight, value }
    }
}

/// Optimal value together with one witness subset achieving it.
///
/// `items` preserves the relative order the items had in the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub value: u64,
    pub items: Vec<Item>,
}

impl Solution {
    /// Sum of the weights of the selected items.
    pub fn total_weight(&self) -> usize {
        self.items.iter().map(|it| it.weight).sum()
    }

    /// Sum of the values of the selected items.
    ///
    /// Equals [`Solution::value`] for every solution produced by this crate.
    pub fn total_value(&self) -> u64 {
        self.items.iter().map(|it| it.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Value of packing an item worth `value` on top of a best value `rest`.
///
/// # Panics
/// Panics if the sum exceeds `u64::MAX`.
#[inline]
pub(crate) fn packed_value(value: u64, rest: u64) -> u64 {
    value
        .checked_add(rest)
        .expect("sum of item values exceeds u64::MAX")
}

/// Number of residual capacities `0..=capacity`, i.e. one DP row.
///
/// # Panics
/// Panics if `capacity == usize::MAX`.
#[inline]
pub(crate) fn row_len(capacity: usize) -> usize {
    capacity
        .checked_add(1)
        .expect("capacity must be less than usize::MAX")
}

/// Convenience for building item lists from `(weight, value)` literals.
pub fn items_from_pairs(pairs: &[(usize, u64)]) -> Vec<Item> {
    pairs.iter().copied().map(Item::from).collect()
}
