pub mod error;
pub mod fixup;
pub mod node;
pub mod rbtree;
mod rotation;
pub mod traversal;
pub mod tree_stats;
pub mod tree_traits;

use self::{
    rbtree::RbTree,
    tree_traits::{DefaultComparator, DefaultTreeTraits},
};

pub type DefaultRbTree<P> = RbTree<P, DefaultComparator<P>, DefaultTreeTraits>;
