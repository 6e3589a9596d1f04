/// Stable handle of a node inside its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node<P> {
    pub payload: P,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
    pub color: Color,
}

impl<P> Node<P> {
    /// Fresh nodes are always red and attached under `parent`.
    pub fn new_red(payload: P, parent: Option<NodeId>) -> Self {
        Self {
            payload,
            left: None,
            right: None,
            parent,
            color: Color::Red,
        }
    }

    #[inline]
    pub fn child(&self, dir: Direction) -> Option<NodeId> {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    #[inline]
    pub fn set_child(&mut self, dir: Direction, child: Option<NodeId>) {
        match dir {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub fn is_leafnode(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
