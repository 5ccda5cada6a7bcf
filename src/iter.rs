// Copyright 2025 Redglyph
//

// The search keeps a stack of cursors on the children lists of the nodes already visited. The
// top cursor always designates the next node to visit, except right after visiting a leaf
// start node, whose (empty) cursor is discarded on the next call.

use std::iter::FusedIterator;
use std::slice;

use crate::{IndexTree, NodeId, NodeRef, Result, TreeError};

/// A [IndexTree] pre-order, depth-first search iterator over the subtree of a node.
///
/// The iterator yields exactly [NodeRef::size] nodes, starting with the top node. Besides the
/// [Iterator] methods, [PreOrderIter::has_next] tells whether another node is available without
/// advancing, and [PreOrderIter::try_next] reports the end of the iteration as an error.
pub struct PreOrderIter<'a, T> {
    tree: &'a IndexTree<T>,
    /// Top node, until it's been visited.
    top: Option<NodeId>,
    stack: Vec<slice::Iter<'a, NodeId>>,
    remaining: usize,
}

impl<'a, T> PreOrderIter<'a, T> {
    /// `top` must be a node of `tree`.
    pub(crate) fn new(tree: &'a IndexTree<T>, top: NodeId) -> Self {
        PreOrderIter {
            tree,
            top: Some(top),
            stack: Vec::new(),
            remaining: tree.nodes[top.0].subtree.len(),
        }
    }

    /// Returns `true` if another node is available. This method doesn't advance the iterator.
    pub fn has_next(&self) -> bool {
        if self.top.is_some() {
            return true;
        }
        self.stack.last().map_or(false, |cursor| cursor.len() > 0)
    }

    /// Advances the iterator and returns the next node.
    ///
    /// Fails with [TreeError::IteratorExhausted] when all the nodes have been visited.
    pub fn try_next(&mut self) -> Result<NodeRef<'a, T>> {
        self.next().ok_or(TreeError::IteratorExhausted)
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        if let Some(top) = self.top.take() {
            self.stack.push(tree.nodes[top.0].children.iter());
            self.remaining -= 1;
            return Some(NodeRef::new(tree, top));
        }
        while let Some(mut cursor) = self.stack.pop() {
            if let Some(&id) = cursor.next() {
                if cursor.len() > 0 {
                    self.stack.push(cursor);
                }
                let children = &tree.nodes[id.0].children;
                if !children.is_empty() {
                    self.stack.push(children.iter());
                }
                self.remaining -= 1;
                return Some(NodeRef::new(tree, id));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PreOrderIter<'_, T> {}

impl<T> FusedIterator for PreOrderIter<'_, T> {}
