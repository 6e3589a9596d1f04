use super::{
    node::{Color, Node, NodeId},
    rbtree::RbTree,
    tree_traits::{Comparator, TreeTraits},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalOrder {
    Pre,
    In,
    Post,
}

/// Read-only view of a node, enough for a caller to draw the tree.
pub struct NodeRef<'a, P> {
    nodes: &'a [Node<P>],
    id: NodeId,
}

impl<P> Clone for NodeRef<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for NodeRef<'_, P> {}

impl<P: std::fmt::Debug> std::fmt::Debug for NodeRef<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("color", &self.color())
            .field("payload", self.payload())
            .finish()
    }
}

impl<'a, P> NodeRef<'a, P> {
    pub(crate) fn new(nodes: &'a [Node<P>], id: NodeId) -> Self {
        Self { nodes, id }
    }

    #[inline]
    fn node(&self) -> &'a Node<P> {
        &self.nodes[self.id.0]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn payload(&self) -> &'a P {
        &self.node().payload
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn is_red(&self) -> bool {
        self.node().is_red()
    }

    pub fn is_leafnode(&self) -> bool {
        self.node().is_leafnode()
    }

    pub fn left(&self) -> Option<Self> {
        self.node().left.map(|id| Self::new(self.nodes, id))
    }

    pub fn right(&self) -> Option<Self> {
        self.node().right.map(|id| Self::new(self.nodes, id))
    }

    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|id| Self::new(self.nodes, id))
    }
}

enum Visit {
    Enter,
    Between,
    Exit,
}

/// Walk `root`'s subtree depth first with an explicit stack, calling `f` at
/// the `order` point of every node. Same visit order as the recursive walk.
fn depth_first<P>(
    nodes: &[Node<P>],
    root: Option<NodeId>,
    order: TraversalOrder,
    mut f: impl FnMut(NodeId, usize),
) {
    let mut stack: Vec<(NodeId, usize, Visit)> = Vec::new();
    if let Some(root) = root {
        stack.push((root, 0, Visit::Enter));
    }

    while let Some((id, depth, visit)) = stack.pop() {
        let node = &nodes[id.0];
        match visit {
            Visit::Enter => {
                if order == TraversalOrder::Pre {
                    f(id, depth);
                }
                stack.push((id, depth, Visit::Between));
                if let Some(left) = node.left {
                    stack.push((left, depth + 1, Visit::Enter));
                }
            }
            Visit::Between => {
                if order == TraversalOrder::In {
                    f(id, depth);
                }
                stack.push((id, depth, Visit::Exit));
                if let Some(right) = node.right {
                    stack.push((right, depth + 1, Visit::Enter));
                }
            }
            Visit::Exit => {
                if order == TraversalOrder::Post {
                    f(id, depth);
                }
            }
        }
    }
}

/// Traversal
impl<P, C: Comparator<P>, T: TreeTraits> RbTree<P, C, T> {
    /// Visit every node once, calling `callback(node, depth)` at the pre-,
    /// in- or post-order point. The root has depth 0.
    pub fn traverse<F>(&self, order: TraversalOrder, mut callback: F)
    where
        F: FnMut(NodeRef<'_, P>, usize),
    {
        let nodes = &self.nodes_[..];
        depth_first(nodes, self.root_, order, |id, depth| {
            callback(NodeRef::new(nodes, id), depth)
        });
    }

    pub(crate) fn walk_ids(&self, f: impl FnMut(NodeId, usize)) {
        depth_first(&self.nodes_[..], self.root_, TraversalOrder::Pre, f);
    }

    pub(crate) fn walk_in_order_ids(&self, mut f: impl FnMut(NodeId)) {
        depth_first(&self.nodes_[..], self.root_, TraversalOrder::In, |id, _| f(id));
    }

    /// Payloads in ascending comparator order.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter::new(&self.nodes_[..], self.root_, self.len())
    }
}

impl<'a, P, C: Comparator<P>, T: TreeTraits> IntoIterator for &'a RbTree<P, C, T> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a tree's payloads.
pub struct Iter<'a, P> {
    nodes: &'a [Node<P>],
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, P> Iter<'a, P> {
    fn new(nodes: &'a [Node<P>], root: Option<NodeId>, len: usize) -> Self {
        let mut it = Self {
            nodes,
            stack: Vec::new(),
            remaining: len,
        };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut curr: Option<NodeId>) {
        while let Some(id) = curr {
            self.stack.push(id);
            curr = self.nodes[id.0].left;
        }
    }
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id.0];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.payload)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<P> ExactSizeIterator for Iter<'_, P> {}

#[cfg(test)]
mod tests {
    use super::TraversalOrder;
    use crate::rbtree_base::DefaultRbTree;

    fn recursive<P: Copy>(
        node: Option<super::NodeRef<'_, P>>,
        order: TraversalOrder,
        depth: usize,
        out: &mut Vec<(P, usize)>,
    ) {
        let Some(node) = node else { return };
        if order == TraversalOrder::Pre {
            out.push((*node.payload(), depth));
        }
        recursive(node.left(), order, depth + 1, out);
        if order == TraversalOrder::In {
            out.push((*node.payload(), depth));
        }
        recursive(node.right(), order, depth + 1, out);
        if order == TraversalOrder::Post {
            out.push((*node.payload(), depth));
        }
    }

    #[test]
    fn iterative_matches_recursive() {
        let mut tree = DefaultRbTree::new();
        for x in [41, 38, 31, 12, 19, 8, 77, 52, 60, 3, 99, 45] {
            tree.insert(x).unwrap();
        }

        for order in [TraversalOrder::Pre, TraversalOrder::In, TraversalOrder::Post] {
            let mut expected = Vec::new();
            recursive(tree.root(), order, 0, &mut expected);

            let mut seen = Vec::new();
            tree.traverse(order, |node, depth| seen.push((*node.payload(), depth)));
            assert_eq!(seen, expected, "{:?}", order);
        }
    }

    #[test]
    fn three_node_orders() {
        let mut tree = DefaultRbTree::new();
        for x in [1, 2, 3] {
            tree.insert(x).unwrap();
        }
        let collect = |order| {
            let mut v = Vec::new();
            tree.traverse(order, |node, depth| v.push((*node.payload(), depth)));
            v
        };

        assert_eq!(collect(TraversalOrder::Pre), vec![(2, 0), (1, 1), (3, 1)]);
        assert_eq!(collect(TraversalOrder::In), vec![(1, 1), (2, 0), (3, 1)]);
        assert_eq!(collect(TraversalOrder::Post), vec![(1, 1), (3, 1), (2, 0)]);
    }

    #[test]
    fn iter_is_sorted_and_sized() {
        let mut tree = DefaultRbTree::new();
        for x in (0..100).rev() {
            tree.insert(x * 7 % 101).unwrap();
        }
        let it = tree.iter();
        assert_eq!(it.len(), 100);
        let v: Vec<_> = it.copied().collect();
        assert!(v.windows(2).all(|w| w[0] < w[1]));
        assert_eq!((&tree).into_iter().count(), 100);
    }

    #[test]
    fn empty_traversal_visits_nothing() {
        let tree = DefaultRbTree::<u8>::new();
        let mut calls = 0;
        tree.traverse(TraversalOrder::In, |_, _| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(tree.iter().next(), None);
    }
}
