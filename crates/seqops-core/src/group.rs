//! Hash-keyed partitioning of a sequence into groups.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;
use std::slice;

/// A key together with the elements that mapped to it, in the order they
/// appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, E> {
    key: K,
    elements: Vec<E>,
}

impl<K, E> Group<K, E> {
    fn new(key: K, elements: Vec<E>) -> Self {
        Self { key, elements }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.elements.iter()
    }

    /// Decompose into the key and the element vector.
    pub fn into_parts(self) -> (K, Vec<E>) {
        (self.key, self.elements)
    }
}

impl<K, E> IntoIterator for Group<K, E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, K, E> IntoIterator for &'a Group<K, E> {
    type Item = &'a E;
    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<K, E> Index<usize> for Group<K, E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.elements[index]
    }
}

/// Partition elements into groups keyed by `key(e)`.
///
/// Elements within a group keep the order they were encountered in the
/// input. The relative order of the groups themselves is unspecified
/// (hash-map backed); callers needing a deterministic order should sort the
/// result, e.g. by key or size.
pub fn group_by<I, K, F>(items: I, mut key: F) -> Vec<Group<K, I::Item>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    let mut buckets: HashMap<K, Vec<I::Item>> = HashMap::new();
    for item in items {
        let k = key(&item);
        buckets.entry(k).or_default().push(item);
    }

    buckets
        .into_iter()
        .map(|(key, elements)| Group::new(key, elements))
        .collect()
}

/// Fallible [`group_by`]: stops at the first key-function failure.
pub fn try_group_by<I, K, X, F>(items: I, mut key: F) -> Result<Vec<Group<K, I::Item>>, X>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<K, X>,
    K: Hash + Eq,
{
    let mut buckets: HashMap<K, Vec<I::Item>> = HashMap::new();
    for item in items {
        let k = key(&item)?;
        buckets.entry(k).or_default().push(item);
    }

    Ok(buckets
        .into_iter()
        .map(|(key, elements)| Group::new(key, elements))
        .collect())
}
