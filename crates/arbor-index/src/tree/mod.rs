//! Arena-based B+ tree keyed by any ordered type.
//!
//! All nodes live in a flat arena owned by the tree and are addressed by
//! `NodeId` handles; child links and the leaf chain are handles, never
//! pointers. This linearizes destruction order and makes deep copy a plain
//! clone of the arena (handles stay valid across the copy).
//!
//! ```text
//!                 +----------------------+
//!                 | Internal   [ 40 ]    |
//!                 +----------------------+
//!                  /                    \
//!     +----------------+        +----------------+
//!     | Leaf 10 20 30  | -----> | Leaf 40 50     | ----> (none)
//!     +----------------+  next  +----------------+  next
//! ```
//!
//! Concurrency is two-tier: a tree-level reader-writer lock guards the root,
//! the size counter, and the arena (readers shared, mutators exclusive), and
//! every node carries its own latch. The baseline critical path relies only
//! on the tree lock; mutators latch the located leaf exclusively and readers
//! latch scanned leaves shared so a finer-grained locking scheme can be
//! introduced without moving the latches.
//!
//! Iteration goes through [`TreeReader`], a read-guard wrapper: the borrow
//! checker rules out mutation while any iterator is alive.

pub mod arena;
pub mod constants;
pub mod iter;
pub mod node;
#[allow(clippy::module_inception)]
pub mod tree;

pub use constants::{DEFAULT_ORDER, MIN_ORDER};
pub use iter::{FilterIter, Iter, RangeIter, TreeReader};
pub use tree::BPlusTree;
