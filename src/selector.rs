use std::cmp::Reverse;
use std::collections::BinaryHeap;

use clap::ValueEnum;
use log::{debug, trace};
use serde::Serialize;

use crate::error::{SelectError, SelectResult};

/// Algorithmic path used to find the k-th largest value.
///
/// Every strategy returns the same value for the same `(values, k)`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Bounded min-heap holding the k largest values seen so far.
    #[default]
    Heap,
    /// Full descending sort, then index.
    Sort,
    /// Partial ordering around rank k, O(n) on average.
    #[value(name = "quickselect")]
    QuickSelect,
}

/// Report of a single selection, as printed by the `kth` binary.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    pub k: usize,
    pub len: usize,
    pub value: T,
    pub strategy: Strategy,
}

/// Checks a possibly signed rank against an input of `len` values and
/// returns it as a 1-based index.
///
/// An empty input is always reported as `EmptyInput`, whatever the rank.
pub fn resolve_rank(k: i64, len: usize) -> SelectResult<usize> {
    if len == 0 {
        return Err(SelectError::EmptyInput);
    }
    match usize::try_from(k) {
        Ok(rank) => check_rank(rank, len),
        Err(_) => Err(SelectError::InvalidRank { k: i128::from(k), len }),
    }
}

fn check_rank(k: usize, len: usize) -> SelectResult<usize> {
    if len == 0 {
        return Err(SelectError::EmptyInput);
    }
    if (1..=len).contains(&k) {
        Ok(k)
    } else {
        // usize always fits in i128.
        Err(SelectError::InvalidRank { k: k as i128, len })
    }
}

/// Returns the k-th largest value (1-indexed, duplicates counted) using the
/// default strategy.
///
/// ```
/// use kthsel::kth_largest;
///
/// assert_eq!(kth_largest(&[3, 2, 1, 5, 6, 4], 2), Ok(5));
/// assert_eq!(kth_largest(&[5, 5, 3], 2), Ok(5));
/// ```
pub fn kth_largest<T: Ord + Clone>(values: &[T], k: usize) -> SelectResult<T> {
    kth_largest_with(values, k, Strategy::default())
}

/// Same as [`kth_largest`], with an explicit [`Strategy`].
pub fn kth_largest_with<T: Ord + Clone>(values: &[T], k: usize, strategy: Strategy) -> SelectResult<T> {
    let rank = check_rank(k, values.len())?;
    debug!("Selecting rank {} of {} values using {:?}", rank, values.len(), strategy);
    let value = match strategy {
        Strategy::Heap => by_heap(values, rank),
        Strategy::Sort => by_sort(values, rank),
        Strategy::QuickSelect => by_quickselect(values, rank),
    };
    Ok(value)
}

/// Runs a selection and wraps the result in a [`Selection`] report.
pub fn select<T: Ord + Clone>(values: &[T], k: usize, strategy: Strategy) -> SelectResult<Selection<T>> {
    let value = kth_largest_with(values, k, strategy)?;
    Ok(Selection { k, len: values.len(), value, strategy })
}

// --- Strategies ---
// Callers guarantee 1 <= rank <= values.len().

fn by_heap<T: Ord + Clone>(values: &[T], rank: usize) -> T {
    // Min-heap of the `rank` largest values; its top is the answer.
    let mut heap: BinaryHeap<Reverse<T>> = BinaryHeap::with_capacity(rank);
    for v in values {
        if heap.len() < rank {
            heap.push(Reverse(v.clone()));
        } else if let Some(mut top) = heap.peek_mut() {
            if *v > top.0 {
                // Replaces the smallest kept value; the heap re-sifts on drop.
                top.0 = v.clone();
            }
        }
    }
    trace!("Heap settled with {} entries", heap.len());
    match heap.pop() {
        Some(Reverse(v)) => v,
        None => unreachable!("heap holds at least one value"),
    }
}

fn by_sort<T: Ord + Clone>(values: &[T], rank: usize) -> T {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.swap_remove(rank - 1)
}

fn by_quickselect<T: Ord + Clone>(values: &[T], rank: usize) -> T {
    let mut buf = values.to_vec();
    let (_, nth, _) = buf.select_nth_unstable_by(rank - 1, |a, b| b.cmp(a));
    nth.clone()
}
