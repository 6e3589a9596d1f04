//! A red-black tree that keeps its nodes in an arena and is ordered by a
//! user supplied comparator.
//!
//! Besides exact lookups the tree supports *classifying* searches, where the
//! probe is a different type than the payload and the classifier decides
//! whether the probe falls left of, right of, or inside a node. The
//! [`interval_index::IntervalIndex`] wrapper uses this to answer "which
//! interval contains this point" queries.

pub mod interval_index;
pub mod rbtree_base;

pub use rbtree_base::{
    error::{RbTreeError, Violation},
    node::{Color, Direction, NodeId},
    rbtree::RbTree,
    traversal::{NodeRef, TraversalOrder},
    tree_traits::{
        Comparator, DefaultComparator, DefaultTreeTraits, TreeTraits, VerifiedTreeTraits,
    },
    DefaultRbTree,
};
