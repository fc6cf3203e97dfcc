//! First-seen-order deduplication and predicate counting.

use std::collections::HashSet;
use std::hash::Hash;

/// Distinct elements in first-seen order.
pub fn distinct<I>(items: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }
    result
}

/// Distinct transformed values in first-seen order.
pub fn distinct_by<I, T, F>(items: I, transform: F) -> Vec<T>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> T,
    T: Hash + Eq + Clone,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for value in items.into_iter().map(transform) {
        if seen.insert(value.clone()) {
            result.push(value);
        }
    }
    result
}

/// Fallible [`distinct_by`]: stops at the first transform failure.
pub fn try_distinct_by<I, T, X, F>(items: I, mut transform: F) -> Result<Vec<T>, X>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<T, X>,
    T: Hash + Eq + Clone,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        let value = transform(item)?;
        if seen.insert(value.clone()) {
            result.push(value);
        }
    }
    Ok(result)
}

/// Number of distinct elements. Retains only a set of seen values, never the
/// output sequence.
pub fn count_distinct<I>(items: I) -> usize
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let mut seen = HashSet::new();
    for item in items {
        seen.insert(item);
    }
    seen.len()
}

/// Number of distinct transformed values.
pub fn count_distinct_by<I, T, F>(items: I, transform: F) -> usize
where
    I: IntoIterator,
    F: FnMut(I::Item) -> T,
    T: Hash + Eq,
{
    let mut seen = HashSet::new();
    for value in items.into_iter().map(transform) {
        seen.insert(value);
    }
    seen.len()
}

/// Fallible [`count_distinct_by`].
pub fn try_count_distinct_by<I, T, X, F>(items: I, mut transform: F) -> Result<usize, X>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<T, X>,
    T: Hash + Eq,
{
    let mut seen = HashSet::new();
    for item in items {
        seen.insert(transform(item)?);
    }
    Ok(seen.len())
}

/// Number of elements satisfying the predicate.
pub fn count_where<I, F>(items: I, mut predicate: F) -> usize
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).count()
}

/// Fallible [`count_where`].
pub fn try_count_where<I, X, F>(items: I, mut predicate: F) -> Result<usize, X>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<bool, X>,
{
    let mut count = 0;
    for item in items {
        if predicate(&item)? {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_removes_duplicates() {
        assert_eq!(distinct(vec![1, 1, 2]), vec![1, 2]);
        assert_eq!(distinct(vec![1, 1, 1]), vec![1]);
        assert_eq!(distinct(vec![-1]), vec![-1]);
    }

    #[test]
    fn distinct_preserves_already_unique_input() {
        assert_eq!(distinct(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn distinct_of_empty_is_empty() {
        let empty: Vec<i32> = vec![];
        assert_eq!(distinct(empty), Vec::<i32>::new());
    }

    #[test]
    fn distinct_keeps_first_seen_order() {
        assert_eq!(distinct(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn distinct_by_dedupes_transformed_values() {
        let words = vec!["apple", "avocado", "banana"];
        assert_eq!(
            distinct_by(words, |w| w.chars().next()),
            vec![Some('a'), Some('b')]
        );
    }

    #[test]
    fn try_distinct_by_propagates_failure() {
        let result: Result<Vec<i32>, &str> =
            try_distinct_by(vec![1, 2, 3], |x| if x == 2 { Err("boom") } else { Ok(x) });
        assert_eq!(result, Err("boom"));
    }

    #[test]
    fn count_distinct_counts_unique_values() {
        assert_eq!(count_distinct(vec![1, 2, 3]), 3);
        assert_eq!(count_distinct(vec![1, 1, 2]), 2);
        assert_eq!(count_distinct(vec![1, 1]), 1);
        assert_eq!(count_distinct(vec![1]), 1);
        assert_eq!(count_distinct(Vec::<i32>::new()), 0);
    }

    #[test]
    fn count_distinct_by_counts_transformed_values() {
        let words = vec!["apple", "avocado", "banana"];
        assert_eq!(count_distinct_by(words, |w| w.chars().next()), 2);
    }

    #[test]
    fn count_distinct_matches_distinct_len() {
        let xs = vec![5, 5, 2, 9, 2, 5];
        assert_eq!(count_distinct(xs.clone()), distinct(xs).len());
    }

    #[test]
    fn count_where_counts_matches() {
        assert_eq!(count_where(vec![1, 2, 3, 4], |&x| x % 2 == 0), 2);
        assert_eq!(count_where(vec![1, 2], |&x| x % 2 == 0), 1);
        assert_eq!(count_where(vec![1, 3, 5], |&x| x % 2 == 0), 0);
        assert_eq!(count_where(Vec::<i32>::new(), |&x| x % 2 == 0), 0);
    }

    #[test]
    fn try_count_where_propagates_failure() {
        let result: Result<usize, String> = try_count_where(vec![1, 2, 3], |&x| {
            if x == 2 {
                Err("bad predicate input".to_string())
            } else {
                Ok(x % 2 == 0)
            }
        });
        assert_eq!(result, Err("bad predicate input".to_string()));
    }

    #[test]
    fn try_count_distinct_by_succeeds_when_all_succeed() {
        let result: Result<usize, String> = try_count_distinct_by(vec![1, 1, 2], Ok);
        assert_eq!(result, Ok(2));
    }
}
