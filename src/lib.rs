//! This crate provides [`OrderedTree`], an ordered multiset stored in a plain
//! (not self-balancing) Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! may have up to two child `Node`s. The invariant kept here is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value.
//!
//! > The "or equal" is what lets the tree hold duplicates: an inserted value
//! > equal to one already stored always goes to its right.
//!
//! Searching takes `O(height)`. Nothing here rotates nodes on insert or
//! delete, so inserting sorted input produces a tree as tall as it is long.
//! [`OrderedTree::rebalance`] rebuilds the tree at minimum height on request,
//! and [`OrderedTree::is_balanced`] tells when that might be worth doing.
//!
//! Every traversal and every mutation walks the tree with a loop or an
//! explicit stack, so tall trees are slow rather than fatal.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree: OrderedTree<_> = (1..=7).collect();
//! assert_eq!(tree.height(), 6);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.inorder().eq(&[1, 2, 3, 4, 5, 6, 7]));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
mod node;
pub mod tree;

pub use error::{Error, Result};
pub use tree::OrderedTree;
