use super::{
    error::RbTreeError,
    node::{Direction, NodeId},
    rbtree::RbTree,
    tree_traits::{Comparator, TreeTraits},
};

/// Rotation
impl<P, C: Comparator<P>, T: TreeTraits> RbTree<P, C, T> {
    /// Rotate the subtree rooted at `id` in direction `dir`. A right rotation
    /// lifts the left child into `id`'s place and vice versa. In-order
    /// sequence is preserved; colors are left alone.
    ///
    /// Fails with [`RbTreeError::InvalidRotation`] if the pivot child is
    /// missing.
    pub fn rotate(&mut self, id: NodeId, dir: Direction) -> Result<(), RbTreeError> {
        match self.get_child(id, dir.opposite()) {
            Some(pivot) => {
                self.rotate_unchecked(id, dir, pivot);
                Ok(())
            }
            None => {
                log::debug!("RbTree::rotate {:?} {:?}: no pivot", id, dir);
                Err(RbTreeError::InvalidRotation(id))
            }
        }
    }

    /// Rotation with a known pivot, which must be `id`'s child opposite `dir`.
    pub(crate) fn rotate_unchecked(&mut self, id: NodeId, dir: Direction, pivot: NodeId) {
        debug_assert_eq!(self.node(id).child(dir.opposite()), Some(pivot));

        log::debug!("RbTree::rotate {:?} {:?} around pivot {:?}", id, dir, pivot);

        // the pivot's inner subtree changes sides
        let inner = self.node(pivot).child(dir);
        self.node_mut(id).set_child(dir.opposite(), inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(id);
        }

        let parent = self.node(id).parent;
        self.node_mut(pivot).set_child(dir, Some(id));
        self.node_mut(id).parent = Some(pivot);
        self.node_mut(pivot).parent = parent;

        match parent {
            Some(p) => {
                let p = self.node_mut(p);
                if p.left == Some(id) {
                    p.left = Some(pivot);
                } else {
                    debug_assert_eq!(p.right, Some(id));
                    p.right = Some(pivot);
                }
            }
            None => {
                self.root_ = Some(pivot);
                self.stats_.root_changes += 1;
            }
        }

        self.stats_.rotations += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::rbtree_base::{
        error::RbTreeError,
        node::{Direction, NodeId},
        DefaultRbTree,
    };

    fn build(values: &[i32]) -> DefaultRbTree<i32> {
        let mut tree = DefaultRbTree::new();
        for &v in values {
            tree.insert(v).unwrap();
        }
        tree
    }

    fn id_of(tree: &DefaultRbTree<i32>, v: i32) -> NodeId {
        tree.search_node(&v, |a, b| a.cmp(b)).unwrap().id()
    }

    fn links_consistent(tree: &DefaultRbTree<i32>) -> bool {
        let mut ok = true;
        tree.traverse(crate::TraversalOrder::Pre, |node, _| {
            for child in [node.left(), node.right()].into_iter().flatten() {
                ok &= child.parent().map(|p| p.id()) == Some(node.id());
            }
        });
        ok && tree.root().map_or(true, |r| r.parent().is_none())
    }

    #[test]
    fn rotation_preserves_in_order() {
        let values = [50, 30, 70, 20, 40, 60, 80, 10, 35, 45];
        let mut tree = build(&values);
        let before: Vec<_> = tree.iter().copied().collect();

        let root = tree.root().unwrap().id();
        tree.rotate(root, Direction::Right).unwrap();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), before);
        assert!(links_consistent(&tree));
        assert_eq!(*tree.root().unwrap().payload(), 30);

        let thirty = id_of(&tree, 30);
        tree.rotate(thirty, Direction::Left).unwrap();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), before);
        assert!(links_consistent(&tree));
        assert_eq!(tree.root().unwrap().id(), root);
    }

    #[test]
    fn rotation_below_root_relinks_parent() {
        let mut tree = build(&[50, 30, 70, 20, 40, 60, 80]);
        let before: Vec<_> = tree.iter().copied().collect();
        let seventy = id_of(&tree, 70);

        tree.rotate(seventy, Direction::Left).unwrap();

        let root = tree.root().unwrap();
        assert_eq!(*root.payload(), 50);
        assert_eq!(*root.right().unwrap().payload(), 80);
        assert_eq!(*root.right().unwrap().left().unwrap().payload(), 70);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), before);
        assert!(links_consistent(&tree));
    }

    #[test]
    fn rotation_without_pivot_fails() {
        let mut tree = build(&[1]);
        let root = tree.root().unwrap().id();
        let rotations = tree.stats().rotations;

        assert_eq!(
            tree.rotate(root, Direction::Left),
            Err(RbTreeError::InvalidRotation(root))
        );
        assert_eq!(tree.stats().rotations, rotations);
        assert_eq!(tree.root().unwrap().id(), root);
    }
}
