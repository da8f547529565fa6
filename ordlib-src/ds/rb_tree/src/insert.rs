use std::cmp::Ordering;

use log::{debug, trace};

use crate::{
    node::{Color, NodeId, Side},
    RbTree,
};

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Adds `val` unless an equal value is already present. Returns
    /// whether the tree changed.
    pub fn insert(&mut self, val: T) -> bool {
        let Some(root) = self.root else {
            // a lone red root has no parent to clash with
            self.root = Some(self.nodes.alloc(val));
            return true;
        };

        let (par, ord) = self.find(root, &val);
        let side = match ord {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => {
                debug!("skipping a value equal to node {par}");
                return false;
            }
        };
        let node = self.nodes.alloc(val);
        self.nodes.set_child(par, side, Some(node));
        self.establish_red_invariant(node);

        #[cfg(any(test, feature = "check-invariants"))]
        {
            assert!(self.is_valid_rb_tree(), "red-black invariant broken");
            assert!(self.is_ordered(), "search order broken");
            assert!(self.links_consistent(), "parent links broken");
        }
        true
    }

    /// Walks up from the freshly attached red `node`, recoloring and
    /// rotating until no red node has a red parent.
    fn establish_red_invariant(&mut self, mut node: NodeId) {
        while let Some(par) =
            self.nodes.parent(node).filter(|&p| self.nodes.is_red(p))
        {
            let Some(grandpar) = self.nodes.parent(par) else {
                trace!("blackening red root {par}");
                self.nodes.set_color(par, Color::Black);
                break;
            };
            assert_eq!(
                self.nodes.color(grandpar),
                Color::Black,
                "a red node must have a black parent before fixup"
            );

            let par_side = self.nodes.which_side(grandpar, par);
            let uncle = self.nodes.child(grandpar, par_side.opposite());
            let red_uncle = uncle.filter(|&u| self.nodes.is_red(u));
            node = match red_uncle {
                Some(uncle) => {
                    trace!("recoloring around grandparent {grandpar}");
                    self.nodes.set_color(par, Color::Black);
                    self.nodes.set_color(uncle, Color::Black);
                    self.nodes.set_color(grandpar, Color::Red);
                    grandpar
                }
                None => self.fix_red_red(node, par, grandpar),
            };
        }

        if self.nodes.parent(node).is_none() && self.root != Some(node) {
            trace!("node {node} is the new root");
            self.root = Some(node);
        }
    }

    /// Rotates the red `child`, its red parent `par` and their black
    /// grandparent `grandpar` so that the pair is no longer adjacent.
    /// Returns the node now sitting where `grandpar` was.
    fn fix_red_red(
        &mut self,
        child: NodeId,
        par: NodeId,
        grandpar: NodeId,
    ) -> NodeId {
        assert_eq!(self.nodes.color(child), Color::Red);
        assert_eq!(self.nodes.color(par), Color::Red);
        assert_eq!(self.nodes.color(grandpar), Color::Black);

        let par_side = self.nodes.which_side(grandpar, par);
        let child_side = self.nodes.which_side(par, child);

        if par_side == child_side {
            //       g          p
            //      / \        / \
            //     p   u  ->  c   g
            //    / \            / \
            //   c   s          s   u
            trace!("single rotation at {grandpar}");
            let sibling_side = child_side.opposite();
            let sibling = self.nodes.child(par, sibling_side);
            self.replace_subtree_root(grandpar, par);
            self.nodes.set_child(grandpar, par_side, sibling);
            self.nodes.set_child(par, sibling_side, Some(grandpar));
            self.nodes.set_color(child, Color::Black);
            par
        } else {
            //     g             c
            //    / \          /   \
            //   p   u  ->    p     g
            //  / \          / \   / \
            // a   c        a   x y   u
            //    / \
            //   x   y
            trace!("double rotation at {grandpar}");
            let toward_par = self.nodes.child(child, par_side);
            let toward_grandpar = self.nodes.child(child, child_side);
            self.replace_subtree_root(grandpar, child);
            self.nodes.set_child(grandpar, par_side, toward_grandpar);
            self.nodes.set_child(par, child_side, toward_par);
            self.nodes.set_child(child, child_side, Some(grandpar));
            self.nodes.set_child(child, par_side, Some(par));
            self.nodes.set_color(par, Color::Black);
            child
        }
    }

    /// Hangs `new` from the slot of `old`'s parent that holds `old`, or
    /// leaves `new` parentless if `old` had no parent. The links of
    /// `old` itself are left for the caller to rewrite.
    fn replace_subtree_root(&mut self, old: NodeId, new: NodeId) {
        match (self.nodes.parent(old), self.nodes.side_of(old)) {
            (Some(up), Some(side)) => self.nodes.set_child(up, side, Some(new)),
            _ => self.nodes.detach_parent(new),
        }
    }
}
