//! In-memory index engine for Arbor.
//!
//! This crate provides:
//! - A generic, concurrent B+ tree mapping ordered keys to record identifiers
//! - Composite keys with lexicographic ordering and typed component access
//! - Guard-based iteration (forward, bounded range, filtered)
//! - Single-attribute and multi-attribute index wrappers over a record store

mod index;
mod key;
mod tree;

pub use index::{CompositeIndex, Index, RecordId, RecordStore};
pub use key::{Component, CompositeKey, MatchesPrefix};
pub use tree::{
    BPlusTree, FilterIter, Iter, RangeIter, TreeReader, DEFAULT_ORDER, MIN_ORDER,
};
