//! Configuration structures for the Arbor index engine.

use serde::{Deserialize, Serialize};

/// Default number of node slots reserved in a tree's arena.
pub const DEFAULT_NODE_CAPACITY: usize = 1024;

/// Default number of record slots reserved in an index's record store.
pub const DEFAULT_RECORD_CAPACITY: usize = 4096;

/// Tuning knobs for a single B+ tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Number of node slots to reserve up front in the node arena.
    pub initial_node_capacity: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            initial_node_capacity: DEFAULT_NODE_CAPACITY,
        }
    }
}

/// Tuning knobs for an index wrapper (tree plus record store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Tree configuration for the underlying B+ tree.
    pub tree: TreeConfig,
    /// Number of record slots to reserve up front in the record store.
    pub initial_record_capacity: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            tree: TreeConfig::default(),
            initial_record_capacity: DEFAULT_RECORD_CAPACITY,
        }
    }
}
