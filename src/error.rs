// Copyright 2025 Redglyph
//

use thiserror::Error;

use crate::NodeId;

/// Result type returned by the fallible [IndexTree](crate::IndexTree) operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors raised by the tree and its iterator. None of them leaves the tree modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The node argument doesn't designate a node of this tree.
    #[error("node {0} doesn't exist in this tree")]
    InvalidArgument(NodeId),

    /// The parent of the root node was requested.
    #[error("node {0} is the root node and has no parent")]
    NoParent(NodeId),

    /// The iterator was advanced after the last node.
    #[error("the iterator has no more nodes")]
    IteratorExhausted,
}
