//! List node for slab-based storage.
//!
//! ## Design
//!
//! `Node` wraps a value with doubly-linked list pointers. The pointers
//! are slab keys (`usize`), not references, so a node can be unlinked in
//! O(1) once its key is known.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup
//!
//! ## Linked List
//!
//! - `next`: Points toward the tail (worse prices in a book side)
//! - `prev`: Points toward the head (better prices in a book side)

/// Node stored in the slab.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// The stored value
    pub value: T,

    /// Next node toward the tail (slab key), None at the tail
    pub next: Option<usize>,

    /// Previous node toward the head (slab key), None at the head
    pub prev: Option<usize>,
}

impl<T> Node<T> {
    /// Create a new node (not yet linked)
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }

    /// Check if this node has no neighbours
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }
}
