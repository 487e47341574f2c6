//! This crate exposes a mutable Binary Search Tree (BST) with parent
//! pointers, stored in an arena.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted traversal by repeatedly taking the successor of a node.
//!
//! ## This tree
//!
//! This tree is deliberately *unbalanced* - insertion order dictates its
//! shape, so a sorted insertion sequence degenerates into a chain and
//! operations become `O(N)`. In exchange the structure stays small and
//! every mutation is a handful of link rewrites.
//!
//! Every node also records its parent, which makes predecessor/successor
//! walks possible from any node without searching from the root. Rather
//! than modeling that back-reference with owning pointers (which would
//! create a reference cycle), all nodes live in an arena owned by the tree
//! and link to each other by index. See [`arena`] for details.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod arena;
pub mod error;

pub use crate::arena::{NodeId, Tree};
pub use crate::error::DuplicateKeyError;
