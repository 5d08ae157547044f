//! Text input and output around the solver.
//!
//! Input is four lines:
//!
//! ```text
//! 7          <- capacity
//! 4          <- number of items N
//! 2 3 4 5    <- N weights
//! 3 4 5 5    <- N values
//! ```
//!
//! Output is the optimal value on its own line followed by one
//! `weight value` line per selected item.

use std::io::{self, BufRead, Write};
use std::mem;

use thiserror::Error;

use crate::item::{Item, Solution};

/// Reasons an input file is rejected before any solving happens.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("missing line {line}: expected {field}")]
    MissingLine { line: usize, field: &'static str },

    #[error("line {line}: `{token}` is not a valid integer")]
    InvalidInteger { line: usize, token: String },

    #[error("All numbers must be non-negative integers.")]
    Negative,

    #[error(
        "Value and weight lists must match. \
         Expected {declared} items, got {weights} weights and {values} values."
    )]
    LengthMismatch {
        declared: i64,
        weights: usize,
        values: usize,
    },

    #[error("Sum of item values does not fit in 64 bits.")]
    ValueOverflow,
}

/// A validated knapsack instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub items: Vec<Item>,
    pub capacity: usize,
}

impl Instance {
    /// Number of cells in the full DP table, or `None` if it overflows `usize`.
    pub fn table_cells(&self) -> Option<usize> {
        (self.items.len() + 1).checked_mul(self.capacity.checked_add(1)?)
    }

    /// Bytes held by one DP row, or `None` if that overflows `usize`.
    pub fn row_bytes(&self) -> Option<usize> {
        self.capacity
            .checked_add(1)?
            .checked_mul(mem::size_of::<u64>())
    }

    /// Bytes held by the full DP table, or `None` if that overflows `usize`.
    pub fn table_bytes(&self) -> Option<usize> {
        self.table_cells()?.checked_mul(mem::size_of::<u64>())
    }
}

const FIELDS: [&str; 4] = ["capacity", "item count", "weights", "values"];

fn integer(line: usize, token: &str) -> Result<i64, InputError> {
    token.parse::<i64>().map_err(|_| InputError::InvalidInteger {
        line,
        token: token.to_string(),
    })
}

fn integer_list(line: usize, text: &str) -> Result<Vec<i64>, InputError> {
    text.split_whitespace().map(|t| integer(line, t)).collect()
}

fn to_usize(line: usize, n: i64) -> Result<usize, InputError> {
    usize::try_from(n).map_err(|_| InputError::InvalidInteger {
        line,
        token: n.to_string(),
    })
}

/// Read and validate an instance.
///
/// Checks run in a fixed order: every token must be an integer, then every
/// number must be non-negative, then both lists must have the declared
/// length. Lines after the fourth are ignored.
pub fn parse_input<R: BufRead>(reader: R) -> Result<Instance, InputError> {
    let mut lines = Vec::with_capacity(FIELDS.len());
    for line in reader.lines().take(FIELDS.len()) {
        lines.push(line?);
    }
    if let Some(missing) = FIELDS.get(lines.len()) {
        return Err(InputError::MissingLine {
            line: lines.len() + 1,
            field: *missing,
        });
    }

    let capacity = integer(1, lines[0].trim())?;
    let declared = integer(2, lines[1].trim())?;
    let weights = integer_list(3, &lines[2])?;
    let values = integer_list(4, &lines[3])?;

    if capacity < 0 || weights.iter().any(|&w| w < 0) || values.iter().any(|&v| v < 0) {
        return Err(InputError::Negative);
    }
    let matches = |len: usize| usize::try_from(declared).is_ok_and(|n| n == len);
    if !matches(weights.len()) || !matches(values.len()) {
        return Err(InputError::LengthMismatch {
            declared,
            weights: weights.len(),
            values: values.len(),
        });
    }

    values
        .iter()
        .try_fold(0u64, |acc, &v| acc.checked_add(v as u64))
        .ok_or(InputError::ValueOverflow)?;

    let items = weights
        .iter()
        .zip(&values)
        .map(|(&w, &v)| Ok(Item::new(to_usize(3, w)?, v as u64)))
        .collect::<Result<Vec<_>, InputError>>()?;

    Ok(Instance {
        items,
        capacity: to_usize(1, capacity)?,
    })
}

/// Write the optimal value and the selected items.
pub fn write_result<W: Write>(mut out: W, solution: &Solution) -> io::Result<()> {
    writeln!(out, "{}", solution.value)?;
    for item in &solution.items {
        writeln!(out, "{} {}", item.weight, item.value)?;
    }
    out.flush()
}
