use std::{cmp::Ordering, marker::PhantomData};

use super::{
    error::{RbTreeError, Violation},
    fixup::FixupFlags,
    node::{Color, Direction, Node, NodeId},
    traversal::NodeRef,
    tree_stats::TreeStats,
    tree_traits::{Comparator, DefaultComparator, DefaultTreeTraits, TreeTraits},
};

pub struct RbTree<P, C = DefaultComparator<P>, T: TreeTraits = DefaultTreeTraits> {
    pub(crate) root_: Option<NodeId>,
    pub(crate) nodes_: Vec<Node<P>>,
    pub(crate) stats_: TreeStats,
    compare: C,
    _traits: PhantomData<T>,
}

impl<P, C: Comparator<P> + Default, T: TreeTraits> RbTree<P, C, T> {
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<P, C: Comparator<P> + Default, T: TreeTraits> Default for RbTree<P, C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, C: Comparator<P>, T: TreeTraits> RbTree<P, C, T> {
    pub fn with_comparator(compare: C) -> Self {
        Self {
            root_: None,
            nodes_: Vec::with_capacity(T::INITIAL_CAPACITY),
            stats_: TreeStats::new(),
            compare,
            _traits: PhantomData,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }
}

/// Access functions to the item count and shape
impl<P, C: Comparator<P>, T: TreeTraits> RbTree<P, C, T> {
    pub fn len(&self) -> usize {
        self.stats_.size
    }

    pub fn is_empty(&self) -> bool {
        self.root_.is_none()
    }

    pub fn stats(&self) -> &TreeStats {
        &self.stats_
    }

    pub fn root(&self) -> Option<NodeRef<'_, P>> {
        self.root_.map(|id| NodeRef::new(&self.nodes_[..], id))
    }

    /// Read-only view of a node. Panics if `id` was not handed out by this tree.
    pub fn node_ref(&self, id: NodeId) -> NodeRef<'_, P> {
        NodeRef::new(&self.nodes_[..], id)
    }

    /// Number of nodes on the longest root-to-leaf path, so one more than
    /// the depth of the deepest node. Zero for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        self.walk_ids(|_, depth| height = height.max(depth + 1));
        height
    }
}

/// Link accessors
impl<P, C: Comparator<P>, T: TreeTraits> RbTree<P, C, T> {
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<P> {
        &self.nodes_[id.0]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<P> {
        &mut self.nodes_[id.0]
    }

    pub fn get_child(&self, id: NodeId, dir: Direction) -> Option<NodeId> {
        let child = self.node(id).child(dir);
        if let Some(c) = child {
            debug_assert_eq!(self.node(c).parent, Some(id), "child {:?} lost its parent link", c);
        }
        child
    }

    pub fn get_parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id).parent;
        if let Some(p) = parent {
            let p = self.node(p);
            debug_assert!(
                p.left == Some(id) || p.right == Some(id),
                "parent of {:?} does not link back",
                id
            );
        }
        parent
    }

    /// The child of the grandparent that is not the parent.
    pub fn get_uncle(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get_parent(id)?;
        let grandparent = self.get_parent(parent)?;
        let side = self.side_of(parent)?;
        self.get_child(grandparent, side.opposite())
    }

    /// Which side of its parent `id` hangs on, `None` for the root.
    pub fn side_of(&self, id: NodeId) -> Option<Direction> {
        let parent = self.get_parent(id)?;
        if self.node(parent).left == Some(id) {
            Some(Direction::Left)
        } else {
            Some(Direction::Right)
        }
    }
}

/// Insertion
impl<P, C: Comparator<P>, T: TreeTraits> RbTree<P, C, T> {
    /// Insert a payload. Fails with [`RbTreeError::DuplicateKey`] and leaves
    /// the tree untouched if an equal payload is already stored.
    pub fn insert(&mut self, payload: P) -> Result<(), RbTreeError> {
        self.insert_traced(payload).map(|_| ())
    }

    /// Like [`insert`](Self::insert) but reports which rebalancing cases ran.
    pub fn insert_traced(&mut self, payload: P) -> Result<FixupFlags, RbTreeError> {
        let slot = self.find_slot(&payload)?;

        let id = NodeId(self.nodes_.len());
        let parent = slot.map(|(p, _)| p);
        self.nodes_.push(Node::new_red(payload, parent));

        match slot {
            None => self.root_ = Some(id),
            Some((p, dir)) => self.node_mut(p).set_child(dir, Some(id)),
        }
        self.stats_.size += 1;

        let flags = self.insert_fixup(id);
        log::debug!(
            "RbTree::insert node {:?} under {:?}, fixup {:?}, size {}",
            id,
            slot,
            flags,
            self.len()
        );

        if T::SELF_VERIFY {
            debug_assert_eq!(self.verify().err(), None);
        }

        Ok(flags)
    }

    /// Descend from the root to the empty child slot where `payload` belongs.
    /// `Less` goes left, `Greater` goes right, `Equal` is a duplicate.
    fn find_slot(&self, payload: &P) -> Result<Option<(NodeId, Direction)>, RbTreeError> {
        let mut curr = match self.root_ {
            Some(root) => root,
            None => return Ok(None),
        };

        loop {
            let dir = match self.compare.compare(payload, &self.node(curr).payload) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => {
                    log::debug!("RbTree::find_slot duplicate at {:?}", curr);
                    return Err(RbTreeError::DuplicateKey);
                }
            };
            match self.get_child(curr, dir) {
                Some(next) => curr = next,
                None => return Ok(Some((curr, dir))),
            }
        }
    }
}

/// Rebalancing
impl<P, C: Comparator<P>, T: TreeTraits> RbTree<P, C, T> {
    /// Restore the red-black invariants after `n` was linked in as a red node.
    fn insert_fixup(&mut self, mut n: NodeId) -> FixupFlags {
        let mut flags = FixupFlags::Clean;

        loop {
            let parent = match self.get_parent(n) {
                Some(p) => p,
                None => {
                    // n is the root
                    if self.node(n).is_red() {
                        self.node_mut(n).color = Color::Black;
                        flags = flags | FixupFlags::RootRecolor;
                    }
                    return flags;
                }
            };

            if !self.node(parent).is_red() {
                return flags;
            }

            let grandparent = match self.get_parent(parent) {
                Some(g) => g,
                None => {
                    // red root, only reachable if the root was left red
                    self.node_mut(parent).color = Color::Black;
                    return flags | FixupFlags::RootRecolor;
                }
            };

            let uncle = self.get_uncle(n).filter(|&u| self.node(u).is_red());
            if let Some(uncle) = uncle {
                log::debug!(
                    "RbTree::insert_fixup recolor parent {:?} uncle {:?} grandparent {:?}",
                    parent,
                    uncle,
                    grandparent
                );
                self.node_mut(parent).color = Color::Black;
                self.node_mut(uncle).color = Color::Black;
                self.node_mut(grandparent).color = Color::Red;
                self.stats_.recolors += 1;
                flags = flags | FixupFlags::Recolor;
                n = grandparent;
                continue;
            }

            let parent_side = match self.side_of(parent) {
                Some(side) => side,
                None => return flags,
            };

            let mut parent = parent;
            if self.side_of(n) != Some(parent_side) {
                // inner grandchild: turn it into an outer one
                self.rotate_unchecked(parent, parent_side, n);
                flags = flags | FixupFlags::InnerRotation;
                parent = n;
            }

            let root_before = self.root_;
            self.rotate_unchecked(grandparent, parent_side.opposite(), parent);
            self.node_mut(parent).color = Color::Black;
            self.node_mut(grandparent).color = Color::Red;
            flags = flags | FixupFlags::OuterRotation;
            if self.root_ != root_before {
                flags = flags | FixupFlags::RootChanged;
            }

            return flags;
        }
    }
}

/// Access functions querying the tree by descending from the root
impl<P, C: Comparator<P>, T: TreeTraits> RbTree<P, C, T> {
    /// Classifying search. `classify(target, payload)` returning `Less`
    /// descends left, `Greater` descends right and `Equal` is a hit.
    ///
    /// The classifier must agree with the tree's comparator for the result to
    /// be meaningful: with containment classifiers the stored intervals must
    /// not overlap.
    pub fn search<Q, F>(&self, target: &Q, classify: F) -> Result<&P, RbTreeError>
    where
        Q: ?Sized,
        F: Fn(&Q, &P) -> Ordering,
    {
        self.locate(target, classify)
            .map(|id| &self.node(id).payload)
            .ok_or(RbTreeError::NotFound)
    }

    /// Same as [`search`](Self::search), yielding the node view.
    pub fn search_node<Q, F>(&self, target: &Q, classify: F) -> Result<NodeRef<'_, P>, RbTreeError>
    where
        Q: ?Sized,
        F: Fn(&Q, &P) -> Ordering,
    {
        self.locate(target, classify)
            .map(|id| self.node_ref(id))
            .ok_or(RbTreeError::NotFound)
    }

    /// Exact lookup with the tree's own comparator.
    pub fn get(&self, payload: &P) -> Result<&P, RbTreeError> {
        self.search(payload, |a, b| self.compare.compare(a, b))
    }

    pub fn contains(&self, payload: &P) -> bool {
        self.get(payload).is_ok()
    }

    fn locate<Q, F>(&self, target: &Q, classify: F) -> Option<NodeId>
    where
        Q: ?Sized,
        F: Fn(&Q, &P) -> Ordering,
    {
        let mut curr = self.root_;
        while let Some(id) = curr {
            curr = match classify(target, &self.node(id).payload) {
                Ordering::Equal => return Some(id),
                Ordering::Less => self.get_child(id, Direction::Left),
                Ordering::Greater => self.get_child(id, Direction::Right),
            };
        }
        None
    }
}

/// Verification
impl<P, C: Comparator<P>, T: TreeTraits> RbTree<P, C, T> {
    /// Check every red-black invariant, the parent/child links and the
    /// comparator order. Returns the number of black nodes on each
    /// root-to-leaf path.
    pub fn verify(&self) -> Result<usize, Violation> {
        let root = match self.root_ {
            Some(root) => root,
            None => {
                return match self.stats_.size {
                    0 => Ok(0),
                    recorded => Err(Violation::SizeMismatch { counted: 0, recorded }),
                }
            }
        };

        if self.node(root).parent.is_some() {
            return Err(Violation::BrokenParentLink(root));
        }
        if self.node(root).is_red() {
            return Err(Violation::RedRoot);
        }

        let black_height = self.verify_subtree(root)?;

        let mut counted = 0;
        let mut prev: Option<NodeId> = None;
        let mut out_of_order = None;
        self.walk_in_order_ids(|id| {
            counted += 1;
            if let Some(p) = prev {
                if out_of_order.is_none()
                    && self.compare.compare(&self.node(p).payload, &self.node(id).payload)
                        != Ordering::Less
                {
                    out_of_order = Some(id);
                }
            }
            prev = Some(id);
        });

        if let Some(id) = out_of_order {
            return Err(Violation::OutOfOrder(id));
        }
        if counted != self.stats_.size {
            return Err(Violation::SizeMismatch {
                counted,
                recorded: self.stats_.size,
            });
        }

        Ok(black_height)
    }

    fn verify_subtree(&self, id: NodeId) -> Result<usize, Violation> {
        let node = self.node(id);
        let mut heights = [0usize; 2];

        for (i, dir) in [Direction::Left, Direction::Right].into_iter().enumerate() {
            if let Some(child) = node.child(dir) {
                if self.node(child).parent != Some(id) {
                    return Err(Violation::BrokenParentLink(child));
                }
                if node.is_red() && self.node(child).is_red() {
                    return Err(Violation::RedChildOfRed(id));
                }
                heights[i] = self.verify_subtree(child)?;
            }
        }

        if heights[0] != heights[1] {
            return Err(Violation::BlackHeightMismatch(id));
        }

        Ok(heights[0] + usize::from(!node.is_red()))
    }
}

/// Debug
impl<P: std::fmt::Debug, C, T: TreeTraits> RbTree<P, C, T> {
    fn print_node(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        id: NodeId,
        depth: usize,
    ) -> std::fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }

        let n = &self.nodes_[id.0];
        writeln!(f, "{:?} {:?}", n.color, n.payload)?;

        for child in [n.left, n.right].into_iter().flatten() {
            self.print_node(f, child, depth + 1)?;
        }

        Ok(())
    }
}

/// Display
impl<P: std::fmt::Debug, C, T: TreeTraits> std::fmt::Debug for RbTree<P, C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(root) = self.root_ {
            self.print_node(f, root, 0)?;
        }

        Ok(())
    }
}
