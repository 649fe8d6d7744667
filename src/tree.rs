//! An unbalanced BST over `i32` keys. Every node is exclusively owned by its parent's child slot
//! and the root is owned by the [`OrderedTree`], so there is no reference counting and no parent
//! pointer anywhere.
//!
//! All of the walks down the tree are loops rather than recursion. Nothing here rebalances, so
//! inserting keys in sorted order produces a tree shaped like a linked list and a recursive walk
//! would be bounded by the call stack instead of the heap.
//!
//! # Examples
//!
//! ```
//! use ordtree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(1));
//!
//! tree.insert(1);
//! assert!(tree.search(1));
//!
//! // Inserting the same key again is ignored.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! tree.delete(1);
//! assert!(!tree.search(1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::traversal::{Order, Traversal};

/// A child slot. `None` is the empty position at the bottom of a subtree.
pub(crate) type Link = Option<Box<Node>>;

pub(crate) struct Node {
    pub(crate) key: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    fn new_boxed(key: i32) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree of distinct `i32` keys. This can be used for inserting, searching and
/// deleting keys, and for walking them in any of the three depth-first orders.
///
/// For every node, all keys in its left subtree are smaller than its own key and all keys in its
/// right subtree are larger.
#[derive(Default)]
pub struct OrderedTree {
    root: Link,
    len: usize,
}

impl Drop for OrderedTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for OrderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.traverse(Order::In)).finish()
    }
}

impl FromIterator<i32> for OrderedTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for OrderedTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl OrderedTree {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a single node has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    /// Inserts `key` into the tree. If the key is already present the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.in_order(), vec![1, 2]);
    /// ```
    pub fn insert(&mut self, key: i32) {
        let slot = seek(&mut self.root, key);
        if slot.is_some() {
            debug!(key, "duplicate key ignored");
            return;
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        debug!(key, len = self.len, "attached new node");
    }

    /// Whether a node with `key` exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let tree: OrderedTree = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.search(3));
    /// assert!(!tree.search(42));
    /// ```
    pub fn search(&self, key: i32) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Deletes the node holding `key`. If the tree does not contain the key, nothing happens.
    ///
    /// A node with two children is not unlinked itself. Instead it takes the key of its in-order
    /// successor (the smallest key in its right subtree) and the successor's original node is
    /// deleted from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree: OrderedTree = [5, 3, 8, 7, 9].into_iter().collect();
    /// tree.delete(5);
    ///
    /// assert!(!tree.search(5));
    /// assert_eq!(tree.pre_order(), vec![7, 3, 8, 9]);
    /// ```
    pub fn delete(&mut self, key: i32) {
        if unlink(&mut self.root, key) {
            self.len -= 1;
        }
    }

    /// Returns an iterator over the keys in the given depth-first `order`. Calling this again
    /// restarts the walk from the root.
    pub fn traverse(&self, order: Order) -> Traversal<'_> {
        Traversal::new(self.root.as_deref(), order, self.len)
    }

    /// Collects the keys in ascending order.
    pub fn in_order(&self) -> Vec<i32> {
        self.traverse(Order::In).collect()
    }

    /// Collects the keys with every node before its subtrees.
    pub fn pre_order(&self) -> Vec<i32> {
        self.traverse(Order::Pre).collect()
    }

    /// Collects the keys with every node after its subtrees.
    pub fn post_order(&self) -> Vec<i32> {
        self.traverse(Order::Post).collect()
    }

    /// Removes every key. Nodes are released one at a time off an explicit stack so dropping a
    /// very deep tree can't overflow the call stack.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

/// Walks down from `slot` and returns the slot holding `key`. If `key` isn't in the subtree,
/// this is the empty slot where it would be attached.
fn seek(mut slot: &mut Link, key: i32) -> &mut Link {
    loop {
        let ordering = slot.as_deref().map(|node| key.cmp(&node.key));
        match (ordering, slot) {
            (Some(Ordering::Less), Some(node)) => slot = &mut node.left,
            (Some(Ordering::Greater), Some(node)) => slot = &mut node.right,
            (_, found) => return found,
        }
    }
}

/// Deletes `key` from the subtree in `slot`, returning whether a node was removed.
fn unlink(slot: &mut Link, key: i32) -> bool {
    let slot = seek(slot, key);
    let Some(mut target) = slot.take() else {
        return false;
    };

    match (target.left.take(), target.right.take()) {
        (None, right) => {
            debug!(key, "deleting node without a left child");
            *slot = right;
        }
        (left, None) => {
            debug!(key, "deleting node without a right child");
            *slot = left;
        }
        (Some(left), Some(right)) => {
            let successor = min_value(&right);
            debug!(key, successor, "deleting node with two children");

            target.key = successor;
            target.left = Some(left);
            target.right = Some(right);
            // The successor has no left child so this takes one of the simple branches above.
            unlink(&mut target.right, successor);
            *slot = Some(target);
        }
    }
    true
}

/// The smallest key in the subtree rooted at `node`.
fn min_value(mut node: &Node) -> i32 {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node.key
}
