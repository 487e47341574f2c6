//! An arena-backed BST with parent pointers.
//!
//! Nodes are stored in a [`generational_arena::Arena`] owned by the
//! [`Tree`]; `left`, `right`, and `parent` are arena indices instead of
//! owning pointers. A child pointing back at its parent therefore never
//! forms a reference cycle, and the parent lookup stays `O(1)`. The
//! generational indices also mean a handle to a deleted node is detectably
//! stale rather than silently aliasing a reused slot.
//!
//! Callers interact with nodes through [`NodeId`] handles. A `NodeId` is
//! only meaningful for the tree that issued it and only while its node is
//! still in the tree.
//!
//! # Examples
//!
//! ```
//! use arena_bst::arena::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(1, "one").unwrap();
//! let node = tree.search(&1).unwrap();
//! assert_eq!(tree.data(node), &"one");
//!
//! // Inserting the same key again is an error and changes nothing.
//! assert!(tree.insert(1, "uno").is_err());
//! assert_eq!(tree.data(node), &"one");
//!
//! tree.delete(&1);
//! assert_eq!(tree.search(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};

use crate::error::DuplicateKeyError;

/// A handle to a node in a [`Tree`].
///
/// Handles are cheap to copy and stay valid until the node they name is
/// deleted. They carry no lifetime - the key and payload are read back
/// through the tree with [`Tree::key`] and [`Tree::data`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(Index);

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    data: V,
    parent: Option<Index>,
    left: Option<Index>,
    right: Option<Index>,
}

/// An unbalanced Binary Search Tree. This can be used for inserting,
/// finding, and deleting keys and payloads, and for walking the stored
/// keys in sorted order via [`leftmost`][Tree::leftmost] and
/// [`successor`][Tree::successor].
pub struct Tree<K, V> {
    nodes: Arena<Node<K, V>>,
    root: Option<Index>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    // Indices survive an arena clone unchanged, so the links can be copied
    // as-is.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root.map(NodeId)
    }

    /// Potentially finds the node holding the given key. If no node has
    /// the corresponding key, `None` is returned.
    ///
    /// This is a pure read: it never mutates the tree and runs in
    /// `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2).unwrap();
    ///
    /// let node = tree.search(&1).unwrap();
    /// assert_eq!(tree.key(node), &1);
    /// assert_eq!(tree.data(node), &2);
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<NodeId>
    where
        K: Ord,
    {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Some(NodeId(idx)),
            }
        }
        None
    }

    /// Inserts the given payload into the tree stored at the given key.
    ///
    /// Keys are unique: inserting a key that is already present fails with
    /// [`DuplicateKeyError`] carrying the rejected key, and the tree is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1, 2).is_ok());
    /// assert_eq!(tree.insert(1, 3).unwrap_err().key, 1);
    /// ```
    pub fn insert(&mut self, key: K, data: V) -> Result<(), DuplicateKeyError<K>>
    where
        K: Ord,
    {
        // Walk down as in `search`, remembering the last node visited: if
        // the key is absent, that node is the new node's parent.
        let mut parent = None;
        let mut current = self.root;
        while let Some(idx) = current {
            parent = Some(idx);
            let node = &self.nodes[idx];
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Err(DuplicateKeyError { key }),
            }
        }

        let new = self.nodes.insert(Node {
            key,
            data,
            parent,
            left: None,
            right: None,
        });
        match parent {
            None => self.root = Some(new),
            Some(p) => {
                let goes_left = self.nodes[new].key < self.nodes[p].key;
                if goes_left {
                    self.nodes[p].left = Some(new);
                } else {
                    self.nodes[p].right = Some(new);
                }
            }
        }

        if cfg!(debug_assertions) {
            if let Some(p) = parent {
                let parent_node = &self.nodes[p];
                if let Some(left) = parent_node.left {
                    assert!(self.nodes[left].key < parent_node.key);
                }
                if let Some(right) = parent_node.right {
                    assert!(self.nodes[right].key > parent_node.key);
                }
            }
        }

        Ok(())
    }

    /// Deletes the node containing the given key from the tree. If the
    /// tree does not contain a node with the key, nothing happens.
    ///
    /// Any `NodeId` previously obtained for the deleted node is stale
    /// afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2).unwrap();
    ///
    /// tree.delete(&1);
    /// assert_eq!(tree.search(&1), None);
    ///
    /// // Absent keys are a no-op, not an error.
    /// tree.delete(&42);
    /// ```
    pub fn delete(&mut self, key: &K)
    where
        K: Ord,
    {
        let deleting = match self.search(key) {
            Some(NodeId(idx)) => idx,
            None => return,
        };

        let left = self.nodes[deleting].left;
        let right = self.nodes[deleting].right;
        match (left, right) {
            (None, _) => self.transplant(deleting, right),
            (_, None) => self.transplant(deleting, left),
            (Some(left), Some(right)) => {
                // Replace with the in-order successor: the leftmost node of
                // the right subtree. If it isn't the direct right child it
                // first has to be spliced out of its own position (it has
                // no left child, so its right subtree fills the gap).
                let replacing = self.leftmost_idx(right);
                if self.nodes[replacing].parent != Some(deleting) {
                    let replacing_right = self.nodes[replacing].right;
                    self.transplant(replacing, replacing_right);
                    self.nodes[replacing].right = Some(right);
                    self.nodes[right].parent = Some(replacing);
                }
                self.transplant(deleting, Some(replacing));
                self.nodes[replacing].left = Some(left);
                self.nodes[left].parent = Some(replacing);
            }
        }

        self.nodes.remove(deleting);
    }

    /// Replaces the subtree rooted at `deleting` with the subtree rooted
    /// at `replacing` in `deleting`'s parent's child slot, and reparents
    /// `replacing` accordingly.
    ///
    /// `replacing`'s own children are not touched; the caller reattaches
    /// them. `deleting`'s links are also left alone - after this call it
    /// is simply no longer reachable from its former parent.
    fn transplant(&mut self, deleting: Index, replacing: Option<Index>) {
        let parent = self.nodes[deleting].parent;
        match parent {
            None => self.root = replacing,
            Some(p) => {
                if self.nodes[p].left == Some(deleting) {
                    self.nodes[p].left = replacing;
                } else {
                    self.nodes[p].right = replacing;
                }
            }
        }
        if let Some(r) = replacing {
            self.nodes[r].parent = parent;
        }
    }

    /// The height of the subtree rooted at the given node: 0 for a leaf,
    /// otherwise one more than the taller child.
    ///
    /// Computed with a level-order walk rather than recursion so that a
    /// degenerate chain can't exhaust the stack.
    ///
    /// # Panics
    ///
    /// When the node is stale or belongs to another tree.
    pub fn height(&self, node: NodeId) -> usize {
        let mut height = 0;
        let mut level = vec![node.0];
        loop {
            let mut next = Vec::new();
            for &idx in &level {
                let node = &self.nodes[idx];
                next.extend(node.left);
                next.extend(node.right);
            }
            if next.is_empty() {
                return height;
            }
            height += 1;
            level = next;
        }
    }

    /// The minimum-keyed node of the subtree rooted at the given node,
    /// found by following `left` links to their end.
    ///
    /// # Panics
    ///
    /// When the node is stale or belongs to another tree.
    pub fn leftmost(&self, node: NodeId) -> NodeId {
        NodeId(self.leftmost_idx(node.0))
    }

    /// The maximum-keyed node of the subtree rooted at the given node,
    /// found by following `right` links to their end.
    ///
    /// # Panics
    ///
    /// When the node is stale or belongs to another tree.
    pub fn rightmost(&self, node: NodeId) -> NodeId {
        let mut current = node.0;
        while let Some(right) = self.nodes[current].right {
            current = right;
        }
        NodeId(current)
    }

    /// The node with the next-smaller key, in sorted order, or `None` if
    /// this node holds the minimum.
    ///
    /// With a left subtree this is its rightmost node; otherwise it is the
    /// first ancestor reached from a right child while walking up.
    ///
    /// # Panics
    ///
    /// When the node is stale or belongs to another tree.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        if let Some(left) = self.nodes[node.0].left {
            return Some(self.rightmost(NodeId(left)));
        }
        let mut current = node.0;
        let mut parent = self.nodes[current].parent;
        while let Some(p) = parent {
            if self.nodes[p].right == Some(current) {
                return Some(NodeId(p));
            }
            current = p;
            parent = self.nodes[p].parent;
        }
        None
    }

    /// The node with the next-larger key, in sorted order, or `None` if
    /// this node holds the maximum.
    ///
    /// With a right subtree this is its leftmost node; otherwise it is the
    /// first ancestor reached from a left child while walking up.
    ///
    /// # Panics
    ///
    /// When the node is stale or belongs to another tree.
    pub fn successor(&self, node: NodeId) -> Option<NodeId> {
        if let Some(right) = self.nodes[node.0].right {
            return Some(self.leftmost(NodeId(right)));
        }
        let mut current = node.0;
        let mut parent = self.nodes[current].parent;
        while let Some(p) = parent {
            if self.nodes[p].left == Some(current) {
                return Some(NodeId(p));
            }
            current = p;
            parent = self.nodes[p].parent;
        }
        None
    }

    /// The key of the given node.
    ///
    /// # Panics
    ///
    /// When the node is stale or belongs to another tree.
    pub fn key(&self, node: NodeId) -> &K {
        &self.nodes[node.0].key
    }

    /// Borrows the payload of the given node.
    ///
    /// # Panics
    ///
    /// When the node is stale or belongs to another tree.
    pub fn data(&self, node: NodeId) -> &V {
        &self.nodes[node.0].data
    }

    /// Mutably borrows the payload of the given node. The key cannot be
    /// changed this way, so the tree's ordering is not at risk.
    ///
    /// # Panics
    ///
    /// When the node is stale or belongs to another tree.
    pub fn data_mut(&mut self, node: NodeId) -> &mut V {
        &mut self.nodes[node.0].data
    }

    /// The parent of the given node, or `None` for the root.
    ///
    /// # Panics
    ///
    /// When the node is stale or belongs to another tree.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent.map(NodeId)
    }

    /// The left child of the given node, if any.
    ///
    /// # Panics
    ///
    /// When the node is stale or belongs to another tree.
    pub fn left(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].left.map(NodeId)
    }

    /// The right child of the given node, if any.
    ///
    /// # Panics
    ///
    /// When the node is stale or belongs to another tree.
    pub fn right(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].right.map(NodeId)
    }

    fn leftmost_idx(&self, mut current: Index) -> Index {
        while let Some(left) = self.nodes[current].left {
            current = left;
        }
        current
    }
}

impl<K, V> fmt::Display for Tree<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            None => f.write_str("empty tree"),
            Some(root) => {
                let node = &self.nodes[root];
                write!(
                    f,
                    "root: {} => {}, height: {}",
                    node.key,
                    node.data,
                    self.height(NodeId(root))
                )
            }
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root.map(|idx| NodeDebug { tree: self, idx }))
            .finish()
    }
}

struct NodeDebug<'a, K, V> {
    tree: &'a Tree<K, V>,
    idx: Index,
}

impl<'a, K, V> fmt::Debug for NodeDebug<'a, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.tree.nodes[self.idx];
        let child = |idx| NodeDebug {
            tree: self.tree,
            idx,
        };
        f.debug_struct("Node")
            .field("key", &node.key)
            .field("data", &node.data)
            .field("left", &node.left.map(child))
            .field("right", &node.right.map(child))
            .finish()
    }
}
