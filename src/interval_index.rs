use std::{cmp::Ordering, marker::PhantomData, ops::Range};

use crate::rbtree_base::{
    error::RbTreeError,
    rbtree::RbTree,
    traversal::Iter,
    tree_traits::{Comparator, DefaultTreeTraits},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalEntry<K, V> {
    pub range: Range<K>,
    pub value: V,
}

/// Orders entries by interval start.
#[derive(Clone, Debug)]
pub struct StartComparator<K, V> {
    _k: PhantomData<K>,
    _v: PhantomData<V>,
}

impl<K, V> Default for StartComparator<K, V> {
    fn default() -> Self {
        Self {
            _k: PhantomData,
            _v: PhantomData,
        }
    }
}

impl<K: Ord, V> Comparator<IntervalEntry<K, V>> for StartComparator<K, V> {
    fn compare(&self, lhs: &IntervalEntry<K, V>, rhs: &IntervalEntry<K, V>) -> Ordering {
        lhs.range.start.cmp(&rhs.range.start)
    }
}

/// `point` against the half-open `range`: `Less` if it lies before the
/// start, `Greater` if at or past the end, `Equal` if contained.
pub fn classify_point<K: Ord>(point: &K, range: &Range<K>) -> Ordering {
    if *point < range.start {
        Ordering::Less
    } else if *point >= range.end {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Half-open intervals keyed by their start, answering "which interval
/// contains this point" by a classifying descent.
///
/// Stored intervals are expected not to overlap. With overlapping intervals
/// [`find`](Self::find) may miss a containing interval.
pub struct IntervalIndex<K, V> {
    _tree: RbTree<IntervalEntry<K, V>, StartComparator<K, V>, DefaultTreeTraits>,
}

impl<K: Ord, V> IntervalIndex<K, V> {
    pub fn new() -> Self {
        Self {
            _tree: RbTree::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self._tree.is_empty()
    }

    pub fn len(&self) -> usize {
        self._tree.len()
    }

    pub fn insert(&mut self, range: Range<K>, value: V) -> Result<(), RbTreeError> {
        if range.start >= range.end {
            return Err(RbTreeError::EmptyInterval);
        }
        self._tree.insert(IntervalEntry { range, value })
    }

    pub fn find(&self, point: &K) -> Result<&V, RbTreeError> {
        self.find_entry(point).map(|e| &e.value)
    }

    pub fn find_entry(&self, point: &K) -> Result<&IntervalEntry<K, V>, RbTreeError> {
        self._tree.search(point, |p, e| classify_point(p, &e.range))
    }

    pub fn iter(&self) -> Iter<'_, IntervalEntry<K, V>> {
        self._tree.iter()
    }

    pub fn tree(&self) -> &RbTree<IntervalEntry<K, V>, StartComparator<K, V>, DefaultTreeTraits> {
        &self._tree
    }
}

impl<K: Ord, V> Default for IntervalIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_half_open() {
        assert_eq!(classify_point(&4, &(5..8)), Ordering::Less);
        assert_eq!(classify_point(&5, &(5..8)), Ordering::Equal);
        assert_eq!(classify_point(&7, &(5..8)), Ordering::Equal);
        assert_eq!(classify_point(&8, &(5..8)), Ordering::Greater);
    }

    #[test]
    fn finds_containing_interval() {
        let mut index = IntervalIndex::new();
        index.insert(10..20, "a").unwrap();
        index.insert(0..5, "b").unwrap();
        index.insert(20..21, "c").unwrap();
        index.insert(30..40, "d").unwrap();

        assert_eq!(index.find(&0), Ok(&"b"));
        assert_eq!(index.find(&19), Ok(&"a"));
        assert_eq!(index.find(&20), Ok(&"c"));
        assert_eq!(index.find(&39), Ok(&"d"));
        assert_eq!(index.find(&7), Err(RbTreeError::NotFound));
        assert_eq!(index.find(&40), Err(RbTreeError::NotFound));
        assert!(index.tree().verify().is_ok());
    }

    #[test]
    fn iter_yields_entries_by_start() {
        let mut index = IntervalIndex::new();
        index.insert(20..25, 'c').unwrap();
        index.insert(1..4, 'a').unwrap();
        index.insert(7..9, 'b').unwrap();

        let entries: Vec<_> = index.iter().map(|e| (e.range.clone(), e.value)).collect();
        assert_eq!(entries, vec![(1..4, 'a'), (7..9, 'b'), (20..25, 'c')]);

        let entry = index.find_entry(&8).unwrap();
        assert_eq!(
            entry,
            &IntervalEntry {
                range: 7..9,
                value: 'b',
            }
        );
    }

    #[test]
    fn rejects_empty_and_duplicate_starts() {
        let mut index = IntervalIndex::new();
        assert_eq!(index.insert(3..3, ()), Err(RbTreeError::EmptyInterval));
        index.insert(3..9, ()).unwrap();
        assert_eq!(index.insert(3..4, ()), Err(RbTreeError::DuplicateKey));
        assert_eq!(index.len(), 1);
    }
}
