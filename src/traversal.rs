//! Depth-first walks over an [`OrderedTree`][crate::OrderedTree].
//!
//! A [`Traversal`] is lazy. It keeps its own stack of pending work on the heap, so it holds at
//! most a few entries per level of the tree and never recurses.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Order, OrderedTree};
//!
//! let tree: OrderedTree = [2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.traverse(Order::Pre).collect::<Vec<_>>(), vec![2, 1, 3]);
//! assert_eq!(tree.traverse(Order::In).collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(tree.traverse(Order::Post).collect::<Vec<_>>(), vec![1, 3, 2]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::InputError;
use crate::tree::Node;

/// The order in which a [`Traversal`] yields the keys of each subtree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. Keys come out ascending.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

impl Order {
    /// All three orders, in the order the menu lists them.
    pub const ALL: [Order; 3] = [Order::In, Order::Pre, Order::Post];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pre => "pre-order",
            Self::In => "in-order",
            Self::Post => "post-order",
        })
    }
}

impl FromStr for Order {
    type Err = InputError;

    /// Accepts `pre`, `in` and `post`, optionally followed by `order` or `-order`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let stem = name
            .strip_suffix("order")
            .map(|stem| stem.strip_suffix('-').unwrap_or(stem))
            .unwrap_or(name.as_str());
        match stem {
            "pre" => Ok(Self::Pre),
            "in" => Ok(Self::In),
            "post" => Ok(Self::Post),
            _ => Err(InputError::UnknownOrder(s.to_string())),
        }
    }
}

enum Step<'a> {
    /// A subtree that hasn't been expanded yet.
    Descend(&'a Node),
    /// A key that is next in line once everything above it on the stack has been yielded.
    Emit(i32),
}

/// An iterator over the keys of a tree in a depth-first [`Order`]. Created by
/// [`OrderedTree::traverse`][crate::OrderedTree::traverse].
pub struct Traversal<'a> {
    order: Order,
    stack: Vec<Step<'a>>,
    remaining: usize,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(root: Option<&'a Node>, order: Order, len: usize) -> Self {
        Self {
            order,
            stack: root.map(Step::Descend).into_iter().collect(),
            remaining: len,
        }
    }

    /// The order this traversal yields keys in.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Replaces a subtree on the stack with its key and children. They are pushed in the reverse
    /// of the order they should be visited since the stack pops from the back.
    fn expand(&mut self, node: &'a Node) {
        let left = node.left.as_deref().map(Step::Descend);
        let right = node.right.as_deref().map(Step::Descend);
        let key = Some(Step::Emit(node.key));

        let steps = match self.order {
            Order::Pre => [right, left, key],
            Order::In => [right, key, left],
            Order::Post => [key, right, left],
        };
        self.stack.extend(steps.into_iter().flatten());
    }
}

impl Iterator for Traversal<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        loop {
            match self.stack.pop()? {
                Step::Emit(key) => {
                    self.remaining -= 1;
                    return Some(key);
                }
                Step::Descend(node) => self.expand(node),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Traversal<'_> {}

impl FusedIterator for Traversal<'_> {}
