//! Slab-backed doubly linked list.
//!
//! ## Design
//!
//! Each side of the book is an ordered sequence that must support
//! insertion and removal at an arbitrary position reached by a scan from
//! either end. A doubly linked list gives O(1) splicing once the position
//! is known; the nodes live in a [`Slab`] so they stay in one
//! pre-allocatable block instead of one heap allocation per node.
//!
//! ## Queue Structure
//!
//! ```text
//! head (best) <-> level2 <-> level3 <-> tail (worst)
//! ```
//!
//! The list itself knows nothing about ordering; the
//! [`cursor`](crate::orderbook::cursor) functions decide where to splice.

use slab::Slab;

use crate::orderbook::Node;

/// A doubly linked list whose nodes are stored in a slab.
///
/// Node keys handed out by the insert methods stay valid until that node
/// is removed. Passing a stale or foreign key is a defect and panics.
#[derive(Debug, Clone)]
pub struct SlabList<T> {
    /// Node storage
    nodes: Slab<Node<T>>,

    /// First node (slab key)
    head: Option<usize>,

    /// Last node (slab key)
    tail: Option<usize>,
}

impl<T> Default for SlabList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlabList<T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
        }
    }

    /// Create a list with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    // ========================================================================
    // Size and Access
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Key of the first node
    #[inline]
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Key of the last node
    #[inline]
    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    #[inline]
    pub fn get(&self, key: usize) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.value)
    }

    /// Key of the node after `key`
    #[inline]
    pub fn next_key(&self, key: usize) -> Option<usize> {
        self.nodes.get(key)?.next
    }

    /// Key of the node before `key`
    #[inline]
    pub fn prev_key(&self, key: usize) -> Option<usize> {
        self.nodes.get(key)?.prev
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|key| self.get(key))
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|key| self.get(key))
    }

    /// Iterate from head to tail (reversible)
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a value before the head; returns its key
    pub fn push_front(&mut self, value: T) -> usize {
        match self.head {
            Some(head) => self.insert_before(head, value),
            None => self.insert_first(value),
        }
    }

    /// Add a value after the tail; returns its key
    pub fn push_back(&mut self, value: T) -> usize {
        match self.tail {
            Some(tail) => self.insert_after(tail, value),
            None => self.insert_first(value),
        }
    }

    /// Insert a value immediately before the node at `key`
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a live node of this list
    pub fn insert_before(&mut self, key: usize, value: T) -> usize {
        let prev = self.node(key).prev;

        let mut node = Node::new(value);
        node.prev = prev;
        node.next = Some(key);
        let new_key = self.nodes.insert(node);

        self.node_mut(key).prev = Some(new_key);
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(new_key),
            None => self.head = Some(new_key),
        }

        new_key
    }

    /// Insert a value immediately after the node at `key`
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a live node of this list
    pub fn insert_after(&mut self, key: usize, value: T) -> usize {
        let next = self.node(key).next;

        let mut node = Node::new(value);
        node.prev = Some(key);
        node.next = next;
        let new_key = self.nodes.insert(node);

        self.node_mut(key).next = Some(new_key);
        match next {
            Some(next) => self.node_mut(next).prev = Some(new_key),
            None => self.tail = Some(new_key),
        }

        new_key
    }

    /// Swap the value stored at `key`, returning the old one
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a live node of this list
    pub fn replace(&mut self, key: usize, value: T) -> T {
        std::mem::replace(&mut self.node_mut(key).value, value)
    }

    /// Unlink and remove the node at `key`, returning its value
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a live node of this list
    pub fn remove(&mut self, key: usize) -> T {
        let node = self.nodes.remove(key);

        // Update the previous node's next pointer
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }

        // Update the next node's prev pointer
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }

        node.value
    }

    /// Remove every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    fn insert_first(&mut self, value: T) -> usize {
        debug_assert!(self.is_empty());
        let key = self.nodes.insert(Node::new(value));
        self.head = Some(key);
        self.tail = Some(key);
        key
    }

    #[inline]
    fn node(&self, key: usize) -> &Node<T> {
        self.nodes.get(key).expect("Invalid slab key")
    }

    #[inline]
    fn node_mut(&mut self, key: usize) -> &mut Node<T> {
        self.nodes.get_mut(key).expect("Invalid slab key")
    }
}

impl<T: Clone> SlabList<T> {
    /// Copy the values out in head-to-tail order
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a SlabList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`SlabList`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a SlabList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

// ============================================================================
// Unit Tests
// ============================================================================
