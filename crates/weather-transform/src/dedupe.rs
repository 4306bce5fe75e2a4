//! Stable exact-duplicate removal.

use std::collections::BTreeSet;

/// Removes rows whose key was already seen, keeping first occurrences.
///
/// Surviving rows keep their relative order. Returns the rows and the number
/// removed.
pub fn drop_duplicates<T, K, F>(rows: Vec<T>, key: F) -> (Vec<T>, usize)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let before = rows.len();
    let mut seen = BTreeSet::new();
    let kept: Vec<T> = rows.into_iter().filter(|row| seen.insert(key(row))).collect();
    let removed = before - kept.len();
    (kept, removed)
}
