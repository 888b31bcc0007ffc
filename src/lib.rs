//! This crate exposes [`OrderedTree`], an ordered collection of unique
//! values backed by an unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST
//! are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have
//!    a value ordering before its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree
//!    have a value ordering after its own value.
//!
//! The "ordering" here is the tree's *ordering provider*: either the
//! natural ordering of the value type (its [`Ord`] implementation) or a
//! comparison function supplied when the tree is constructed. The
//! provider is bound once at construction and never changes for the
//! lifetime of the tree.
//!
//! These invariants let every lookup, insertion, and deletion run in
//! `O(height)`. This tree performs no rebalancing, so the height is only
//! `O(lg N)` for friendly insertion orders and degrades to `O(N)` for
//! adversarial ones (e.g. inserting already-sorted values). BSTs also
//! naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree; [`OrderedTree`] exposes
//! that as its inorder traversal alongside preorder and postorder.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! assert_eq!(tree.insert(2).unwrap(), true);
//! assert_eq!(tree.insert(1).unwrap(), true);
//! // A value equal to one already stored is rejected.
//! assert_eq!(tree.insert(2).unwrap(), false);
//!
//! assert!(tree.contains(&1).unwrap());
//! assert_eq!(tree.len(), 2);
//!
//! // Inorder traversal yields values in ascending order.
//! let sorted: Vec<&i32> = tree.inorder().collect();
//! assert_eq!(sorted, [&1, &2]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
mod tree;

pub use error::TreeError;
pub use tree::OrderedTree;
