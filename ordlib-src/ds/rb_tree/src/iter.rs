use std::iter::FusedIterator;

use crate::node::{Arena, NodeId, Side};

/// In-order iterator over an [`RbTree`](crate::RbTree).
pub struct Iter<'a, T> {
    nodes: &'a Arena<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<T>, root: Option<NodeId>) -> Self {
        let front = root.map(|r| nodes.extreme(r, Side::Left));
        let back = root.map(|r| nodes.extreme(r, Side::Right));
        Self { nodes, front, back, len: nodes.len() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let cur = self.front?;
        self.len -= 1;
        self.front = self.nodes.step(cur, Side::Right);
        Some(&self.nodes[cur].val)
    }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let cur = self.back?;
        self.len -= 1;
        self.back = self.nodes.step(cur, Side::Left);
        Some(&self.nodes[cur].val)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        let Self { nodes, front, back, len } = *self;
        Self { nodes, front, back, len }
    }
}
