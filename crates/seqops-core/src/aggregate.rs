//! Summation and extremal-element selection.

use std::iter::Sum;

/// Sum the elements of a sequence. Empty input yields the additive identity.
pub fn sum<I>(items: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Sum<I::Item>,
{
    items.into_iter().sum()
}

/// Sum `transform(e)` for each element, in input order.
pub fn sum_by<I, T, F>(items: I, transform: F) -> T
where
    I: IntoIterator,
    F: FnMut(I::Item) -> T,
    T: Sum<T>,
{
    items.into_iter().map(transform).sum()
}

/// Fallible [`sum_by`]: stops at the first transform failure and returns it.
pub fn try_sum_by<I, T, X, F>(items: I, transform: F) -> Result<T, X>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<T, X>,
    T: Sum<T>,
{
    items.into_iter().map(transform).sum()
}

/// The element with the smallest key, or `None` on empty input.
///
/// Ties go to the FIRST element reaching the minimal key: the current best
/// is only replaced on a strictly smaller key.
pub fn min_by_key<I, K, F>(items: I, mut key: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    let mut best: Option<(I::Item, K)> = None;
    for item in items {
        let k = key(&item);
        let replace = match &best {
            Some((_, best_key)) => k < *best_key,
            None => true,
        };
        if replace {
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}

/// The element with the largest key, or `None` on empty input.
///
/// Ties go to the FIRST element reaching the maximal key.
pub fn max_by_key<I, K, F>(items: I, mut key: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    let mut best: Option<(I::Item, K)> = None;
    for item in items {
        let k = key(&item);
        let replace = match &best {
            Some((_, best_key)) => k > *best_key,
            None => true,
        };
        if replace {
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}

/// Fallible [`min_by_key`].
pub fn try_min_by_key<I, K, X, F>(items: I, mut key: F) -> Result<Option<I::Item>, X>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<K, X>,
    K: Ord,
{
    let mut best: Option<(I::Item, K)> = None;
    for item in items {
        let k = key(&item)?;
        let replace = match &best {
            Some((_, best_key)) => k < *best_key,
            None => true,
        };
        if replace {
            best = Some((item, k));
        }
    }
    Ok(best.map(|(item, _)| item))
}

/// Fallible [`max_by_key`].
pub fn try_max_by_key<I, K, X, F>(items: I, mut key: F) -> Result<Option<I::Item>, X>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<K, X>,
    K: Ord,
{
    let mut best: Option<(I::Item, K)> = None;
    for item in items {
        let k = key(&item)?;
        let replace = match &best {
            Some((_, best_key)) => k > *best_key,
            None => true,
        };
        if replace {
            best = Some((item, k));
        }
    }
    Ok(best.map(|(item, _)| item))
}
