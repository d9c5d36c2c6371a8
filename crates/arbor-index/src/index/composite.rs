//! Multi-attribute index keyed by a composite key.

use arbor_common::{ArborError, IndexConfig, Result};

use super::store::{RecordId, RecordStore};
use crate::key::{Component, CompositeKey};
use crate::tree::{BPlusTree, DEFAULT_ORDER};

/// Indexes records of type `R` by a [`CompositeKey`] over the tuple `T`.
///
/// The tree indexes only the full composite key; looking up a single
/// component goes through [`CompositeIndex::find_by_component`], which
/// scans the record store linearly.
pub struct CompositeIndex<R, T, const ORDER: usize = DEFAULT_ORDER> {
    tree: BPlusTree<CompositeKey<T>, RecordId, ORDER>,
    records: RecordStore<R>,
    key_of: Box<dyn Fn(&R) -> CompositeKey<T> + Send + Sync>,
}

impl<R, T: Ord + Clone, const ORDER: usize> CompositeIndex<R, T, ORDER> {
    /// Creates an empty index with the given composite-key extractor.
    pub fn new<F>(key_of: F) -> Self
    where
        F: Fn(&R) -> CompositeKey<T> + Send + Sync + 'static,
    {
        Self::with_config(&IndexConfig::default(), key_of)
    }

    /// Creates an empty index, reserving capacities from `config`.
    pub fn with_config<F>(config: &IndexConfig, key_of: F) -> Self
    where
        F: Fn(&R) -> CompositeKey<T> + Send + Sync + 'static,
    {
        Self {
            tree: BPlusTree::with_config(&config.tree),
            records: RecordStore::with_capacity(config.initial_record_capacity),
            key_of: Box::new(key_of),
        }
    }

    /// Stores a record and indexes it under its composite key.
    ///
    /// # Errors
    ///
    /// [`ArborError::DuplicateKey`] if a record with an equal composite
    /// key is already indexed; the record is not stored.
    pub fn insert(&mut self, record: R) -> Result<RecordId> {
        let key = (self.key_of)(&record);
        let id = self.records.next_id();
        self.tree.insert(key, id)?;
        let stored = self.records.push(record);
        debug_assert_eq!(stored, id);
        Ok(id)
    }

    /// Drops the index entry for `key`; absent keys are a silent no-op.
    pub fn remove(&mut self, key: &CompositeKey<T>) {
        self.tree.remove(key);
    }

    /// Replaces the record behind `id`, moving its index entry from the
    /// old composite key to the new one.
    ///
    /// # Errors
    ///
    /// [`ArborError::RecordNotFound`] for an unknown id;
    /// [`ArborError::DuplicateKey`] if the new key is already taken, in
    /// which case the old entry is restored and the record unchanged.
    pub fn update(&mut self, id: RecordId, new_record: R) -> Result<()> {
        let old_key = {
            let old = self
                .records
                .get(id)
                .ok_or(ArborError::RecordNotFound { id: id.as_u64() })?;
            (self.key_of)(old)
        };
        let new_key = (self.key_of)(&new_record);

        self.tree.remove(&old_key);
        if let Err(err) = self.tree.insert(new_key, id) {
            self.tree.insert(old_key, id)?;
            return Err(err);
        }
        *self.records.get_mut(id).expect("id resolved above") = new_record;
        Ok(())
    }

    /// Whether any record is indexed under `key`.
    pub fn contains(&self, key: &CompositeKey<T>) -> bool {
        self.tree.find(key).is_some()
    }

    /// The record indexed under the full composite `key`, if any.
    pub fn find(&self, key: &CompositeKey<T>) -> Option<&R> {
        let id = self.tree.find(key)?;
        self.records.get(id)
    }

    /// Records with composite keys in the inclusive interval `[from, to]`,
    /// ascending by key.
    pub fn range_search(&self, from: &CompositeKey<T>, to: &CompositeKey<T>) -> Vec<&R> {
        self.tree
            .range_search(from, to)
            .into_iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    /// Records whose `I`-th key component equals `value`.
    ///
    /// Linear scan of the record store: the tree cannot answer single-
    /// component lookups, since it orders by the full composite key.
    pub fn find_by_component<const I: usize>(
        &self,
        value: &<CompositeKey<T> as Component<I>>::Output,
    ) -> Vec<&R>
    where
        CompositeKey<T>: Component<I>,
        <CompositeKey<T> as Component<I>>::Output: PartialEq,
    {
        self.records
            .iter()
            .filter(|&(_, record)| (self.key_of)(record).get::<I>() == value)
            .map(|(_, record)| record)
            .collect()
    }

    /// The record behind `id`, if it exists.
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.get(id)
    }

    /// Number of live index entries.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Fill factor of the underlying tree.
    pub fn fill_factor(&self) -> f64 {
        self.tree.fill_factor()
    }
}
