//! An ordered, duplicate-free set backed by a red-black tree whose
//! order is given by a user-supplied three-way comparator.
//!
//! ```
//! use rb_tree::RbTree;
//!
//! let mut tree = RbTree::new();
//! for x in [10, 5, 15, 5] {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.first_n(2), [&5, &10]);
//! assert!(tree.is_valid_rb_tree());
//! ```
//!
//! The comparator must be a strict total order. Anything else leaves
//! the shape of the tree unspecified.
//!
//! With the `check-invariants` feature every successful insertion
//! re-validates the whole tree and panics on the first violation. Unit
//! tests of this crate always run with these checks.

use std::{cmp::Ordering, fmt};

mod debug;
mod error;
mod insert;
mod iter;
mod node;
mod validate;

pub use error::RbTreeError;
pub use iter::Iter;
pub use node::Color;

use node::{Arena, NodeId, Side};

/// Ordered set of distinct values. `C` decides both placement and
/// equality; two values comparing `Equal` are the same element.
pub struct RbTree<T, C = fn(&T, &T) -> Ordering> {
    nodes: Arena<T>,
    root: Option<NodeId>,
    cmp: C,
}

impl<T: Ord> RbTree<T> {
    pub fn new() -> Self { Self::with_cmp(<T as Ord>::cmp) }
}

impl<T: Ord> Default for RbTree<T> {
    fn default() -> Self { Self::new() }
}

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_cmp(cmp: C) -> Self {
        Self { nodes: Arena::new(), root: None, cmp }
    }

    /// Number of distinct values stored. Nodes are never freed, so this
    /// is exactly the number of allocated nodes.
    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    pub fn contains(&self, val: &T) -> bool { self.get(val).is_some() }

    /// The stored value comparing equal to `val`.
    pub fn get(&self, val: &T) -> Option<&T> {
        let (id, ord) = self.find(self.root?, val);
        (ord == Ordering::Equal).then(|| &self.nodes[id].val)
    }

    /// The smallest value.
    pub fn first(&self) -> Result<&T, RbTreeError> {
        self.extreme(Side::Left)
    }
    /// The largest value.
    pub fn last(&self) -> Result<&T, RbTreeError> {
        self.extreme(Side::Right)
    }

    fn extreme(&self, side: Side) -> Result<&T, RbTreeError> {
        let root = self.root.ok_or(RbTreeError::EmptyCollection)?;
        Ok(&self.nodes[self.nodes.extreme(root, side)].val)
    }

    /// The `min(count, self.len())` smallest values in ascending order.
    /// Only the visited prefix of the tree is walked.
    pub fn first_n(&self, count: usize) -> Vec<&T> {
        self.iter().take(count).collect()
    }

    pub fn iter(&self) -> Iter<'_, T> { Iter::new(&self.nodes, self.root) }

    /// The root value together with its color.
    pub fn root(&self) -> Option<(&T, Color)> {
        let root = self.root?;
        Some((&self.nodes[root].val, self.nodes.color(root)))
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut res = 0_usize;
        let mut stack: Vec<_> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            res = res.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        res
    }

    /// Descends from `from` towards `val`. Returns the node where the
    /// descent stopped along with `cmp(val, node)`: `Equal` for an
    /// exact match, otherwise the side of that node whose slot is free.
    fn find(&self, from: NodeId, val: &T) -> (NodeId, Ordering) {
        let mut cur = from;
        loop {
            let ord = (self.cmp)(val, &self.nodes[cur].val);
            let next = match ord {
                Ordering::Less => self.nodes.child(cur, Side::Left),
                Ordering::Greater => self.nodes.child(cur, Side::Right),
                Ordering::Equal => None,
            };
            match next {
                Some(next) => cur = next,
                None => return (cur, ord),
            }
        }
    }
}

impl<'a, T, C> IntoIterator for &'a RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> Extend<T> for RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.insert(val);
        }
    }
}

impl<T: Ord> FromIterator<T> for RbTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Debug, C> fmt::Debug for RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}
