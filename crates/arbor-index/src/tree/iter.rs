//! Guard-based iteration over the tree.
//!
//! A [`TreeReader`] wraps the tree's shared lock guard; every iterator
//! borrows the reader, so the borrow checker guarantees no mutation while
//! an iterator is alive. Shared-reference items make every iterator a
//! read-only view; advancing past the last entry yields `None`.

use parking_lot::RwLockReadGuard;

use super::node::NodeId;
use super::tree::TreeCore;

/// Shared view of a tree, held for the lifetime of any iteration.
pub struct TreeReader<'t, K, V, const ORDER: usize> {
    core: RwLockReadGuard<'t, TreeCore<K, V, ORDER>>,
}

impl<'t, K: Ord + Clone, V, const ORDER: usize> TreeReader<'t, K, V, ORDER> {
    pub(crate) fn new(core: RwLockReadGuard<'t, TreeCore<K, V, ORDER>>) -> Self {
        Self { core }
    }

    /// Number of key/value pairs visible to this reader.
    pub fn len(&self) -> usize {
        self.core.len
    }

    pub fn is_empty(&self) -> bool {
        self.core.len == 0
    }

    /// Forward iterator over all entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V, ORDER> {
        let core: &TreeCore<K, V, ORDER> = &self.core;
        Iter {
            core,
            leaf: core.leftmost_leaf(),
            index: 0,
        }
    }

    /// Iterator over entries with keys in the inclusive interval
    /// `[from, to]`. An inverted interval yields nothing.
    pub fn range(&self, from: &K, to: &K) -> RangeIter<'_, K, V, ORDER> {
        let core: &TreeCore<K, V, ORDER> = &self.core;
        let mut start = Iter {
            core,
            leaf: None,
            index: 0,
        };
        if let Some(leaf_id) = core.find_leaf(from) {
            start.leaf = Some(leaf_id);
            start.index = core.arena.leaf(leaf_id).keys.partition_point(|k| k < from);
        }
        RangeIter {
            inner: start,
            upper: to.clone(),
        }
    }

    /// Iterator over entries whose key/value pair matches `pred`.
    pub fn filter<P>(&self, pred: P) -> FilterIter<'_, K, V, ORDER, P>
    where
        P: FnMut(&K, &V) -> bool,
    {
        FilterIter {
            inner: self.iter(),
            pred,
        }
    }
}

impl<'a, 't, K: Ord + Clone, V, const ORDER: usize> IntoIterator for &'a TreeReader<'t, K, V, ORDER> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, ORDER>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator: a leaf handle and an index within that leaf.
///
/// Advancing walks the current leaf, then follows the leaf chain; the
/// past-the-end state is a `None` leaf.
#[derive(Clone)]
pub struct Iter<'a, K, V, const ORDER: usize> {
    core: &'a TreeCore<K, V, ORDER>,
    leaf: Option<NodeId>,
    index: usize,
}

impl<'a, K, V, const ORDER: usize> Iterator for Iter<'a, K, V, ORDER> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf_id = self.leaf?;
            let leaf = self.core.arena.leaf(leaf_id);
            if self.index < leaf.len() {
                let i = self.index;
                self.index += 1;
                return Some((&leaf.keys[i], &leaf.records[i]));
            }
            self.leaf = leaf.next_leaf;
            self.index = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.core.len))
    }
}

/// Bounded forward iterator; stops at the first key past the upper bound.
pub struct RangeIter<'a, K, V, const ORDER: usize> {
    inner: Iter<'a, K, V, ORDER>,
    upper: K,
}

impl<'a, K: Ord, V, const ORDER: usize> Iterator for RangeIter<'a, K, V, ORDER> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.next()?;
        if self.upper < *key {
            // Fuse: no key after this one can be back in range.
            self.inner.leaf = None;
            return None;
        }
        Some((key, value))
    }
}

/// Forward iterator filtered by a key/value predicate.
pub struct FilterIter<'a, K, V, const ORDER: usize, P> {
    inner: Iter<'a, K, V, ORDER>,
    pred: P,
}

impl<'a, K, V, const ORDER: usize, P> Iterator for FilterIter<'a, K, V, ORDER, P>
where
    P: FnMut(&K, &V) -> bool,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for (key, value) in self.inner.by_ref() {
            if (self.pred)(key, value) {
                return Some((key, value));
            }
        }
        None
    }
}
