//! Arena storage for B+ tree nodes.
//!
//! All nodes of one tree live in a slot vector owned by that tree and are
//! addressed by [`NodeId`] handles. Merges and root collapses return slots
//! to a free list for reuse; a handle is valid exactly as long as its node
//! is reachable from the root. Cloning the arena deep-copies every node
//! while keeping all handles valid, which is what makes whole-tree copy a
//! single pass.

use super::node::{InternalNode, LeafNode, Node, NodeId};

/// Slot-vector arena with free-list reuse.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K, V> {
    /// Node slots; `None` marks a freed slot awaiting reuse.
    slots: Vec<Option<Node<K, V>>>,
    /// Handles of freed slots.
    free: Vec<NodeId>,
}

impl<K, V> NodeArena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Creates an arena with room for `capacity` nodes before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of live (occupied) nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Stores a node, reusing a freed slot when one is available.
    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.index()].is_none());
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                let id = NodeId::from_index(self.slots.len());
                self.slots.push(Some(node));
                id
            }
        }
    }

    /// Releases a node's slot. Only merge, root collapse, and clear free
    /// nodes; the handle must not be used afterwards.
    pub(crate) fn free(&mut self, id: NodeId) {
        let slot = self.slots[id.index()].take();
        debug_assert!(slot.is_some(), "double free of node slot");
        self.free.push(id);
    }

    /// Drops every node and resets the free list, keeping the allocation.
    pub(crate) fn reset(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Shared access to a node. Panics on a vacant slot: reaching a freed
    /// node means the tree structure is corrupted.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        self.slots[id.index()]
            .as_ref()
            .expect("vacant node slot")
    }

    /// Exclusive access to a node. Same panic contract as [`Self::node`].
    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.slots[id.index()]
            .as_mut()
            .expect("vacant node slot")
    }

    /// Shared access to a node known to be a leaf.
    #[inline]
    pub(crate) fn leaf(&self, id: NodeId) -> &LeafNode<K, V> {
        match self.node(id) {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => panic!("expected leaf node"),
        }
    }

    /// Exclusive access to a node known to be a leaf.
    #[inline]
    pub(crate) fn leaf_mut(&mut self, id: NodeId) -> &mut LeafNode<K, V> {
        match self.node_mut(id) {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => panic!("expected leaf node"),
        }
    }

    /// Shared access to a node known to be internal.
    #[inline]
    pub(crate) fn internal(&self, id: NodeId) -> &InternalNode<K> {
        match self.node(id) {
            Node::Internal(node) => node,
            Node::Leaf(_) => panic!("expected internal node"),
        }
    }

    /// Exclusive access to a node known to be internal.
    #[inline]
    pub(crate) fn internal_mut(&mut self, id: NodeId) -> &mut InternalNode<K> {
        match self.node_mut(id) {
            Node::Internal(node) => node,
            Node::Leaf(_) => panic!("expected internal node"),
        }
    }

    /// Iterates over all live nodes.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Node<K, V>> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }
}

impl<K, V> Default for NodeArena<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
