//! Single-attribute index: a B+ tree over one projected key per record.

use arbor_common::{ArborError, IndexConfig, Result};

use super::store::{RecordId, RecordStore};
use crate::tree::{BPlusTree, DEFAULT_ORDER};

/// Indexes records of type `R` by a key projected with a user-supplied
/// extractor.
///
/// Records live in an append-only [`RecordStore`]; the tree maps each
/// extracted key to the id of the row that produced it. Each key can be
/// held by at most one record; indexing two records with equal keys fails
/// with [`ArborError::DuplicateKey`]. Callers that need several records
/// per logical key should widen the key with a tiebreaker component (see
/// [`crate::CompositeIndex`]).
pub struct Index<R, K, const ORDER: usize = DEFAULT_ORDER> {
    tree: BPlusTree<K, RecordId, ORDER>,
    records: RecordStore<R>,
    key_of: Box<dyn Fn(&R) -> K + Send + Sync>,
}

impl<R, K: Ord + Clone, const ORDER: usize> Index<R, K, ORDER> {
    /// Creates an empty index with the given key extractor.
    pub fn new<F>(key_of: F) -> Self
    where
        F: Fn(&R) -> K + Send + Sync + 'static,
    {
        Self::with_config(&IndexConfig::default(), key_of)
    }

    /// Creates an empty index, reserving capacities from `config`.
    pub fn with_config<F>(config: &IndexConfig, key_of: F) -> Self
    where
        F: Fn(&R) -> K + Send + Sync + 'static,
    {
        Self {
            tree: BPlusTree::with_config(&config.tree),
            records: RecordStore::with_capacity(config.initial_record_capacity),
            key_of: Box::new(key_of),
        }
    }

    /// Stores a record and indexes it under its extracted key.
    ///
    /// # Errors
    ///
    /// [`ArborError::DuplicateKey`] if a record with an equal key is
    /// already indexed; the record is not stored.
    pub fn insert(&mut self, record: R) -> Result<RecordId> {
        let key = (self.key_of)(&record);
        let id = self.records.next_id();
        self.tree.insert(key, id)?;
        let stored = self.records.push(record);
        debug_assert_eq!(stored, id);
        Ok(id)
    }

    /// Drops the index entry for `key`. The record row itself stays in the
    /// store; absent keys are a silent no-op.
    pub fn remove(&mut self, key: &K) {
        self.tree.remove(key);
    }

    /// Replaces the record behind `id`, moving its index entry from the
    /// old key to the new one.
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
    pub fn contains(&self, key: &K) -> bool {
        self.tree.find(key).is_some()
    }

    /// The record indexed under `key`, if any.
    pub fn find(&self, key: &K) -> Option<&R> {
        let id = self.tree.find(key)?;
        self.records.get(id)
    }

    /// Records with keys in the inclusive interval `[from, to]`, ascending
    /// by key.
    pub fn range_search(&self, from: &K, to: &K) -> Vec<&R> {
        self.tree
            .range_search(from, to)
            .into_iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    /// Indexed records matching `pred`, in key order. Rows whose keys were
    /// removed from the index are not visited.
    pub fn find_if<P>(&self, pred: P) -> Vec<&R>
    where
        P: Fn(&R) -> bool,
    {
        let reader = self.tree.read();
        reader
            .iter()
            .filter_map(|(_, id)| self.records.get(*id))
            .filter(|record| pred(record))
            .collect::<Vec<&R>>()
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

    /// Number of rows ever stored, including rows whose keys were removed.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Fill factor of the underlying tree.
    pub fn fill_factor(&self) -> f64 {
        self.tree.fill_factor()
    }
}
