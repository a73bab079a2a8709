pub mod time;

pub use time::*;

use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Most frequent value in a sequence, together with its count.
/// Candidates are scanned in ascending order and only a strictly higher
/// count replaces the running best, so a tie resolves to the smallest
/// value.
pub fn mode_with_count<T, I>(values: I) -> Option<(T, u64)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, u64> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut best: Option<(T, u64)> = None;
    for (value, count) in counts {
        if best.as_ref().is_none_or(|(_, best_count)| count > *best_count) {
            best = Some((value, count));
        }
    }
    best
}

/// Most frequent value in a sequence. None if the sequence is empty.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    mode_with_count(values).map(|(value, _)| value)
}

/// Frequency table ordered by descending count. The sort is stable over
/// an ascending-key table, so equal counts stay in ascending key order.
pub fn ranked_counts<T, I>(values: I) -> Vec<(T, u64)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, u64> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut table: Vec<(T, u64)> = counts.into_iter().collect();
    table.sort_by_key(|(_, count)| Reverse(*count));
    table
}

#[test]
fn mode_empty() {
    let values: Vec<u32> = Vec::new();
    assert!(mode(values).is_none());
}

#[test]
fn mode_single_winner() {
    assert_eq!(mode([8u32, 8, 9, 14]), Some(8));
}

#[test]
fn mode_tie_takes_smallest() {
    assert_eq!(mode([2u32, 1, 2, 1]), Some(1));
}

#[test]
fn mode_with_count_reports_count() {
    assert_eq!(mode_with_count(["b", "a", "b"]), Some(("b", 2)));
}

#[test]
fn ranked_counts_orders_by_count_then_key() {
    let table = ranked_counts(["c", "a", "b", "a", "c"]);
    assert_eq!(table, vec![("a", 2), ("c", 2), ("b", 1)]);
}
