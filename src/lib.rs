// Copyright 2025 Redglyph
//

//! An ordered rooted-tree collection that keeps, for each node, a link to its parent and an index
//! of its whole subtree. See the [IndexTree] type for a list of methods.
//!
//! ## Building the tree
//!
//! A tree is always created with its root. The nodes are then designated by the [NodeId] returned
//! by the methods adding a node; children are kept in the order they were added.
//!
//! Example:
//!
//! ```rust
//! use indexed_tree::{IndexTree, TreeError};
//!
//! fn build_tree() -> Result<IndexTree<String>, TreeError> {
//!     // use `with_capacity` if you know the number of nodes:
//!     let mut tree = IndexTree::new("root".to_string());
//!     let root = tree.root_id();
//!
//!     // adds three children to the root:
//!     let a = tree.add_child(root, "a".to_string())?;
//!     let _ = tree.add_child(root, "b".to_string())?;
//!     let c = tree.add_child(root, "c".to_string())?;
//!
//!     // adds several children at once:
//!     tree.add_children(a, ["a1".to_string(), "a2".to_string()])?;
//!     tree.add_children(c, ["c1", "c2"].map(|s| s.to_string()))?;
//!
//!     Ok(tree)
//! }
//! # let tree = build_tree().unwrap();
//! # assert_eq!(tree.to_string(), "root(a(a1,a2),b,c(c1,c2))");
//! ```
//!
//! ## Navigation and search
//!
//! [IndexTree::node] and [IndexTree::root] return a [NodeRef], a lightweight handle that gives
//! access to the value, the children, the parent, the root, the level and the subtree size of
//! a node. Each node caches the list of all the nodes of its subtree in the order they were
//! inserted in the tree, so [NodeRef::find] is a simple linear scan of that subtree:
//!
//! ```rust
//! # use indexed_tree::IndexTree;
//! let mut tree = IndexTree::new("root");
//! let a = tree.add_child(tree.root_id(), "a").unwrap();
//! let a1 = tree.add_child(a, "a1").unwrap();
//!
//! let found = tree.root().find(|v| v.ends_with('1')).unwrap();
//! assert_eq!(found.id(), a1);
//! assert_eq!(found.level(), 2);
//! assert_eq!(*found.parent().unwrap(), "a");
//! assert_eq!(found.root().id(), tree.root_id());
//! ```
//!
//! Note that the search returns the first match in insertion order, which is not necessarily
//! the first match in pre-order.
//!
//! ## Iterators
//!
//! [PreOrderIter] visits a subtree in a depth-first, pre-order search: a node comes before its
//! descendants, and siblings come in insertion order.
//!
//! * [IndexTree::iter] (from the root)
//! * [IndexTree::iter_at] (from a specific node)
//! * [NodeRef::iter] (from the node)
//!
//! ```rust
//! # use indexed_tree::IndexTree;
//! let mut tree = IndexTree::new("R");
//! let root = tree.root_id();
//! let [a, b, c] = ["A", "B", "C"].map(|v| tree.add_child(root, v).unwrap());
//! tree.add_child(a, "A1").unwrap();
//! tree.add_child(c, "C1").unwrap();
//! tree.add_child(b, "B1").unwrap();
//!
//! let values = tree.iter().map(|n| *n.value()).collect::<Vec<_>>();
//! assert_eq!(values, ["R", "A", "A1", "B", "B1", "C", "C1"]);
//! ```
//!
//! ## Important limitation
//!
//! The [IndexTree] object doesn't provide methods to delete, move or modify nodes.

use std::fmt::{Debug, Display, Formatter};
use std::ops::{Deref, Index};

mod error;
mod iter;
mod compile_tests;

pub use error::{Result, TreeError};
pub use iter::PreOrderIter;

/// Identifier of a node in an [IndexTree]. Since nodes are never removed, the identifier is
/// also the rank of the node in the global insertion order: the root is always [NodeId::ROOT].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of any tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the position of the node in the tree buffer.
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// An ordered, append-only tree collection. Each node holds a value of type `T`, the
/// ordered list of its children, a link to its parent, and the index of its subtree.
#[derive(Debug, Clone)]
pub struct IndexTree<T> {
    nodes: Vec<Node<T>>,
}

/// A node of an [`IndexTree<T>`]. The links are identifiers in the same tree buffer.
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// The node itself, then all its descendants in insertion order.
    subtree: Vec<NodeId>,
}

impl<T> Node<T> {
    fn new(id: NodeId, value: T, parent: Option<NodeId>) -> Self {
        Node { value, parent, children: Vec::new(), subtree: vec![id] }
    }
}

// ---------------------------------------------------------------------------------------------

impl<T> IndexTree<T> {
    /// Creates a new tree made of a root node holding `value`.
    ///
    /// If the number of nodes is known in advance, prefer the [`IndexTree::with_capacity()`] method.
    pub fn new(value: T) -> Self {
        IndexTree { nodes: vec![Node::new(NodeId::ROOT, value, None)] }
    }

    /// Creates a new tree made of a root node holding `value`, with a pre-allocated buffer for
    /// `capacity` nodes (including the root). This reduces the number of reallocations when
    /// the number of nodes is known in advance.
    ///
    /// `capacity` is not a hard limit; nodes can still be added beyond it.
    pub fn with_capacity(value: T, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::new(NodeId::ROOT, value, None));
        IndexTree { nodes }
    }

    /// Returns the identifier of the root node.
    pub fn root_id(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Returns a handle on the root node.
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef { tree: self, id: NodeId::ROOT }
    }

    /// Returns a handle on the node `id`.
    ///
    /// Fails with [TreeError::InvalidArgument] if `id` doesn't exist in this tree.
    pub fn node(&self, id: NodeId) -> Result<NodeRef<'_, T>> {
        self.get(id)?;
        Ok(NodeRef { tree: self, id })
    }

    /// Returns `true` if `id` designates a node of this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Returns the total number of nodes in the tree, which is never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Calculates the tree depth, which is the maximum level of its nodes (0 if the root has
    /// no children).
    pub fn depth(&self) -> usize {
        // a parent is always inserted before its children
        let mut levels: Vec<usize> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let level = node.parent.map_or(0, |p| levels[p.0] + 1);
            levels.push(level);
        }
        levels.into_iter().max().unwrap_or(0)
    }

    fn get(&self, id: NodeId) -> Result<&Node<T>> {
        self.nodes.get(id.0).ok_or(TreeError::InvalidArgument(id))
    }

    /// Appends a child holding `value` at the end of the children of `parent`, and returns its
    /// identifier.
    ///
    /// The new node is registered in the subtree index of `parent` and all its ancestors,
    /// so the cost is proportional to the level of the new node.
    ///
    /// Fails with [TreeError::InvalidArgument] if `parent` doesn't exist in this tree, in which
    /// case the tree is left unchanged.
    pub fn add_child(&mut self, parent: NodeId, value: T) -> Result<NodeId> {
        self.get(parent)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, value, Some(parent)));
        self.nodes[parent.0].children.push(id);
        let mut level = 0;
        let mut ancestor = Some(parent);
        while let Some(index) = ancestor {
            let node = &mut self.nodes[index.0];
            node.subtree.push(id);
            ancestor = node.parent;
            level += 1;
        }
        tracing::trace!(parent = %parent, child = %id, level, "added node");
        Ok(id)
    }

    /// Appends children holding `values` to `parent`, in the iteration order, and returns their
    /// identifiers.
    ///
    /// Fails with [TreeError::InvalidArgument] if `parent` doesn't exist in this tree, in which
    /// case the tree is left unchanged.
    pub fn add_children<U: IntoIterator<Item = T>>(&mut self, parent: NodeId, values: U) -> Result<Vec<NodeId>> {
        self.get(parent)?;
        values.into_iter().map(|value| self.add_child(parent, value)).collect()
    }

    /// Returns a reference to the value of the node `id`.
    pub fn value(&self, id: NodeId) -> Result<&T> {
        Ok(&self.get(id)?.value)
    }

    /// Returns the children of the node `id`, in insertion order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.get(id)?.children.as_slice())
    }

    /// Returns the parent of the node `id`.
    ///
    /// Fails with [TreeError::NoParent] if `id` is the root; use [IndexTree::is_root] first.
    pub fn parent(&self, id: NodeId) -> Result<NodeId> {
        self.get(id)?.parent.ok_or(TreeError::NoParent(id))
    }

    /// Returns the root of the tree, by following the parent links from the node `id`.
    pub fn root_of(&self, id: NodeId) -> Result<NodeId> {
        Ok(self.node(id)?.root().id)
    }

    /// Returns `true` if the node `id` has no parent.
    pub fn is_root(&self, id: NodeId) -> Result<bool> {
        Ok(self.get(id)?.parent.is_none())
    }

    /// Returns `true` if the node `id` has no children.
    pub fn is_leaf(&self, id: NodeId) -> Result<bool> {
        Ok(self.get(id)?.children.is_empty())
    }

    /// Returns the number of edges between the root and the node `id`.
    pub fn level(&self, id: NodeId) -> Result<usize> {
        Ok(self.node(id)?.level())
    }

    /// Returns the number of nodes in the subtree of `id`, including `id` itself.
    pub fn size(&self, id: NodeId) -> Result<usize> {
        Ok(self.get(id)?.subtree.len())
    }

    /// Returns the subtree index of the node `id`: the node itself followed by all its
    /// descendants in the order they were inserted in the tree.
    pub fn subtree_index(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.get(id)?.subtree.as_slice())
    }

    /// Searches the subtree of `id` for the first node, in insertion order, whose value
    /// satisfies `predicate`. See [NodeRef::find].
    pub fn find<F: FnMut(&T) -> bool>(&self, id: NodeId, predicate: F) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.find(predicate).map(|n| n.id))
    }

    /// Pre-order, depth-first search iteration over all the nodes of the tree, starting at
    /// its root node.
    pub fn iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self, NodeId::ROOT)
    }

    /// Pre-order, depth-first search iteration over the subtree of the node `top`.
    pub fn iter_at(&self, top: NodeId) -> Result<PreOrderIter<'_, T>> {
        self.get(top)?;
        Ok(PreOrderIter::new(self, top))
    }
}

impl<T> Index<NodeId> for IndexTree<T> {
    type Output = T;

    /// Returns the value of the node `id`.
    ///
    /// Panics if `id` doesn't exist in this tree.
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0].value
    }
}

impl<T: Display> Display for IndexTree<T> {
    /// Writes the tree as `root(a(a1,a2),b)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn write_node<T: Display>(node: NodeRef<'_, T>, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", node.value())?;
            if !node.is_leaf() {
                f.write_str("(")?;
                for (i, child) in node.children().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_node(child, f)?;
                }
                f.write_str(")")?;
            }
            Ok(())
        }
        write_node(self.root(), f)
    }
}

// ---------------------------------------------------------------------------------------------
// Node handle

/// A handle on a node of an [IndexTree], returned by the navigation methods, the search and
/// the iterators. It borrows the tree, so the tree can't be modified while a handle is alive.
///
/// The handle dereferences to the node value.
pub struct NodeRef<'a, T> {
    tree: &'a IndexTree<T>,
    id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    /// Creates a handle from an identifier already verified against `tree`.
    pub(crate) fn new(tree: &'a IndexTree<T>, id: NodeId) -> Self {
        NodeRef { tree, id }
    }

    fn node(&self) -> &'a Node<T> {
        &self.tree.nodes[self.id.0]
    }

    /// Gets the identifier of the node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Gets a reference to the node value.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// Gets the number of children of the node.
    pub fn num_children(&self) -> usize {
        self.node().children.len()
    }

    /// Iterates over the node's children, in insertion order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeRef<'a, T>> + ExactSizeIterator {
        let tree = self.tree;
        self.node().children.iter().map(move |&id| NodeRef { tree, id })
    }

    /// Gets the parent of the node.
    ///
    /// Fails with [TreeError::NoParent] if the node is the root; use [NodeRef::is_root] first.
    pub fn parent(&self) -> Result<NodeRef<'a, T>> {
        match self.node().parent {
            Some(id) => Ok(NodeRef { tree: self.tree, id }),
            None => Err(TreeError::NoParent(self.id)),
        }
    }

    /// Gets the root of the tree by following the parent links.
    pub fn root(&self) -> NodeRef<'a, T> {
        let mut id = self.id;
        while let Some(parent) = self.tree.nodes[id.0].parent {
            id = parent;
        }
        NodeRef { tree: self.tree, id }
    }

    /// Returns `true` if the node has no parent.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node().children.is_empty()
    }

    /// Gets the number of edges between the root and the node.
    pub fn level(&self) -> usize {
        let mut level = 0;
        let mut ancestor = self.node().parent;
        while let Some(id) = ancestor {
            ancestor = self.tree.nodes[id.0].parent;
            level += 1;
        }
        level
    }

    /// Gets the number of nodes in the subtree, including this node.
    pub fn size(&self) -> usize {
        self.node().subtree.len()
    }

    /// Searches the subtree for the first node whose value satisfies `predicate`.
    ///
    /// The subtree is scanned in insertion order, starting with this node, so the result is the
    /// earliest inserted match; it may differ from the first match found by [NodeRef::iter].
    pub fn find<F: FnMut(&T) -> bool>(&self, mut predicate: F) -> Option<NodeRef<'a, T>> {
        let subtree = &self.node().subtree;
        let position = subtree.iter().position(|&id| predicate(&self.tree.nodes[id.0].value));
        tracing::trace!(
            node = %self.id,
            scanned = position.map_or(subtree.len(), |p| p + 1),
            found = position.is_some(),
            "subtree search"
        );
        position.map(|p| NodeRef { tree: self.tree, id: subtree[p] })
    }

    /// Pre-order, depth-first search iteration over the subtree, starting with this node.
    pub fn iter(&self) -> PreOrderIter<'a, T> {
        PreOrderIter::new(self.tree, self.id)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    /// Two handles are equal if they designate the same node of the same tree.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: Debug> Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .finish()
    }
}

impl<T> Deref for NodeRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value()
    }
}

// ---------------------------------------------------------------------------------------------
// Shortcuts

impl<'a, T> IntoIterator for &'a IndexTree<T> {
    type Item = NodeRef<'a, T>;
    type IntoIter = PreOrderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for NodeRef<'a, T> {
    type Item = NodeRef<'a, T>;
    type IntoIter = PreOrderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
