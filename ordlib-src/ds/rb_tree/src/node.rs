use std::{fmt, ops::Index};

pub(crate) type NodeId = usize;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(fmt, "R"),
            Color::Black => write!(fmt, "B"),
        }
    }
}

pub(crate) struct Node<T> {
    pub(crate) val: T,
    pub(crate) color: Color,
    // not an ownership edge; `None` for the root
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(val: T) -> Self {
        Self { val, color: Color::Red, parent: None, left: None, right: None }
    }
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Backing storage of the tree. Links are plain indices, so a rotation
/// only rewrites a handful of `Option<NodeId>` fields and no ownership
/// has to move around.
pub(crate) struct Arena<T>(Vec<Node<T>>);

impl<T> Arena<T> {
    pub fn new() -> Self { Self(vec![]) }
    pub fn len(&self) -> usize { self.0.len() }

    /// Allocates a detached red leaf.
    pub fn alloc(&mut self, val: T) -> NodeId {
        self.0.push(Node::new(val));
        self.0.len() - 1
    }

    pub fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.0[id].child(side)
    }
    pub fn parent(&self, id: NodeId) -> Option<NodeId> { self.0[id].parent }
    pub fn color(&self, id: NodeId) -> Color { self.0[id].color }
    pub fn set_color(&mut self, id: NodeId, color: Color) {
        self.0[id].color = color;
    }
    pub fn detach_parent(&mut self, id: NodeId) { self.0[id].parent = None; }

    pub fn is_red(&self, id: NodeId) -> bool {
        self.0[id].color == Color::Red
    }

    /// Stores `child` into the `side` slot of `id` and points the
    /// child's parent link back at `id`.
    ///
    /// The previous owner of `child`, if any, is left untouched; the
    /// caller is responsible for overwriting that slot as well.
    pub fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        if let Some(child) = child {
            self.0[child].parent = Some(id);
        }
        *self.0[id].child_mut(side) = child;
    }

    /// Which slot of its parent holds `id`, or `None` for a parentless
    /// node.
    pub fn side_of(&self, id: NodeId) -> Option<Side> {
        let par = self.0[id].parent?;
        Some(self.which_side(par, id))
    }

    /// Which slot of `par` holds `id`; `id` must be a child of `par`.
    pub fn which_side(&self, par: NodeId, id: NodeId) -> Side {
        if self.0[par].left == Some(id) {
            Side::Left
        } else {
            debug_assert_eq!(self.0[par].right, Some(id));
            Side::Right
        }
    }

    /// The descendant reached by following `side` links as far as
    /// possible, `id` itself included.
    pub fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(next) = self.0[id].child(side) {
            id = next;
        }
        id
    }

    /// In-order neighbor of `id`: the successor for `Side::Right`, the
    /// predecessor for `Side::Left`.
    pub fn step(&self, mut id: NodeId, side: Side) -> Option<NodeId> {
        if let Some(child) = self.0[id].child(side) {
            return Some(self.extreme(child, side.opposite()));
        }
        while let Some(par) = self.0[id].parent {
            if self.0[par].child(side.opposite()) == Some(id) {
                return Some(par);
            }
            id = par;
        }
        None
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;
    fn index(&self, id: NodeId) -> &Node<T> { &self.0[id] }
}
