use std::cmp::Ordering;

use crate::{node::Color, RbTree};

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Uniform black height and no red node under a red parent.
    pub fn is_valid_rb_tree(&self) -> bool {
        self.black_height().is_some() && self.red_invariant_holds()
    }

    /// Number of black nodes on every path from the root down to an
    /// absent child, the absent child itself counted as one black node.
    /// `None` if two such paths disagree.
    pub fn black_height(&self) -> Option<usize> {
        let Some(root) = self.root else { return Some(1) };
        let mut res = None;
        let mut stack = vec![(root, 0)];
        while let Some((id, above)) = stack.pop() {
            let node = &self.nodes[id];
            let count = above + (node.color == Color::Black) as usize;
            for child in [node.left, node.right] {
                match child {
                    Some(child) => stack.push((child, count)),
                    None => match res {
                        None => res = Some(count + 1),
                        Some(bh) if bh == count + 1 => {}
                        Some(_) => return None,
                    },
                }
            }
        }
        res
    }

    pub fn red_invariant_holds(&self) -> bool {
        self.ids().all(|id| {
            let node = &self.nodes[id];
            node.color == Color::Black
                || node.parent.map_or(true, |p| !self.nodes.is_red(p))
        })
    }

    /// Every value compares strictly less than its in-order successor.
    pub fn is_ordered(&self) -> bool {
        let mut it = self.iter();
        let Some(mut prev) = it.next() else { return true };
        it.all(|cur| {
            let ok = (self.cmp)(prev, cur) == Ordering::Less;
            prev = cur;
            ok
        })
    }

    /// Every child points back at its parent, the root has no parent,
    /// and every stored node is reachable from the root exactly once.
    pub fn links_consistent(&self) -> bool {
        let Some(root) = self.root else { return self.nodes.len() == 0 };
        if self.nodes[root].parent.is_some() {
            return false;
        }
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id], true) {
                return false;
            }
            let node = &self.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                if self.nodes[child].parent != Some(id) {
                    return false;
                }
                stack.push(child);
            }
        }
        seen.into_iter().all(|b| b)
    }

    /// Preorder ids of the nodes reachable from the root.
    fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        let mut stack: Vec<_> = self.root.into_iter().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let node = &self.nodes[id];
            stack.extend(node.right);
            stack.extend(node.left);
            Some(id)
        })
    }
}
