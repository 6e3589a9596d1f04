use std::fmt;

use super::node::NodeId;

/// Errors surfaced by tree operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RbTreeError {
    /// The comparator returned `Equal` against an already stored payload.
    DuplicateKey,
    /// A search reached an empty position without a match.
    NotFound,
    /// A rotation was requested on a node without a pivot child on that side.
    InvalidRotation(NodeId),
    /// An interval with `begin >= end` was offered to an interval index.
    EmptyInterval,
}

impl fmt::Display for RbTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RbTreeError::DuplicateKey => write!(f, "payload compares equal to a stored payload"),
            RbTreeError::NotFound => write!(f, "no payload matched the search"),
            RbTreeError::InvalidRotation(id) => {
                write!(f, "node {} has no pivot child for this rotation", id.index())
            }
            RbTreeError::EmptyInterval => write!(f, "interval is empty"),
        }
    }
}

impl std::error::Error for RbTreeError {}

/// Red-black or ordering invariant found broken by [`RbTree::verify`].
///
/// [`RbTree::verify`]: super::rbtree::RbTree::verify
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    RedRoot,
    RedChildOfRed(NodeId),
    BlackHeightMismatch(NodeId),
    BrokenParentLink(NodeId),
    OutOfOrder(NodeId),
    SizeMismatch { counted: usize, recorded: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RedRoot => write!(f, "root is red"),
            Violation::RedChildOfRed(id) => write!(f, "red node {} has a red child", id.index()),
            Violation::BlackHeightMismatch(id) => {
                write!(f, "subtrees of node {} differ in black height", id.index())
            }
            Violation::BrokenParentLink(id) => {
                write!(f, "parent link of node {} does not match its parent", id.index())
            }
            Violation::OutOfOrder(id) => {
                write!(f, "node {} is out of comparator order", id.index())
            }
            Violation::SizeMismatch { counted, recorded } => {
                write!(f, "reachable nodes {} != recorded size {}", counted, recorded)
            }
        }
    }
}

impl std::error::Error for Violation {}
