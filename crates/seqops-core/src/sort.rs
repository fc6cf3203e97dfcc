//! Stable sorting by a derived key.

use std::cmp::Reverse;

/// A new vector sorted ascending by `key(e)`.
///
/// The sort is stable: elements with equal keys keep their input order.
pub fn sorted_by_key<I, K, F>(items: I, key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    let mut result: Vec<_> = items.into_iter().collect();
    result.sort_by_key(key);
    result
}

/// A new vector sorted descending by `key(e)`.
///
/// Descending order comes from flipping the comparator, not from reversing
/// the ascending result, so elements with equal keys still keep their input
/// order.
pub fn sorted_by_key_desc<I, K, F>(items: I, mut key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    let mut result: Vec<_> = items.into_iter().collect();
    result.sort_by_key(|item| Reverse(key(item)));
    result
}

/// Fallible [`sorted_by_key`].
///
/// Every key is computed up front, short-circuiting on the first failure
/// before any sorting work happens; the keys are then discarded after a
/// stable sort.
pub fn try_sorted_by_key<I, K, X, F>(items: I, mut key: F) -> Result<Vec<I::Item>, X>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<K, X>,
    K: Ord,
{
    let mut keyed = Vec::new();
    for item in items {
        let k = key(&item)?;
        keyed.push((k, item));
    }
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// Fallible [`sorted_by_key_desc`].
pub fn try_sorted_by_key_desc<I, K, X, F>(items: I, mut key: F) -> Result<Vec<I::Item>, X>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<K, X>,
    K: Ord,
{
    let mut keyed = Vec::new();
    for item in items {
        let k = key(&item)?;
        keyed.push((k, item));
    }
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}
