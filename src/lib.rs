//! This crate exposes an unbalanced Binary Search Tree over `i32` keys and a small console menu
//! for driving it by hand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). [`OrderedTree`] does nothing to
//! limit its height, so keys inserted in sorted order leave it shaped like a linked
//! list with a height of `N`. BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree. That is
//! [`Order::In`]; [`Order::Pre`] and [`Order::Post`] are the other two depth-first orders.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cli;
pub mod error;
pub mod exitcode;
pub mod menu;
pub mod traversal;
pub mod tree;

#[cfg(test)]
mod util;

pub use traversal::{Order, Traversal};
pub use tree::OrderedTree;
