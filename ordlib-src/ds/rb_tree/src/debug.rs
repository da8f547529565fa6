use std::{cmp::Ordering, fmt::Debug};

use crate::{
    node::{NodeId, Side},
    RbTree,
};

#[derive(Clone, Copy, Eq, PartialEq)]
enum Kind {
    Root,
    // right child, drawn above its parent
    Upper,
    // left child, drawn below its parent
    Lower,
}

impl<T: Debug, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Draws the tree sideways, larger values on top, one node per line
    /// with its color.
    ///
    /// ```text
    /// ┌── 15 (R)
    /// 10 (B)
    /// └── 5 (R)
    /// ```
    pub fn visualize(&self) -> String {
        let mut res = String::new();
        if let Some(root) = self.root {
            self.draw(root, "", Kind::Root, &mut res);
        }
        res
    }

    fn draw(&self, id: NodeId, prefix: &str, kind: Kind, out: &mut String) {
        let branch = |side: Side| {
            let bar = match (kind, side) {
                (Kind::Root, _) => "",
                (Kind::Upper, Side::Left) | (Kind::Lower, Side::Right) => "│   ",
                (Kind::Upper, Side::Right) | (Kind::Lower, Side::Left) => "    ",
            };
            format!("{prefix}{bar}")
        };
        if let Some(right) = self.nodes.child(id, Side::Right) {
            self.draw(right, &branch(Side::Right), Kind::Upper, out);
        }
        let joint = match kind {
            Kind::Root => "",
            Kind::Upper => "┌── ",
            Kind::Lower => "└── ",
        };
        let node = &self.nodes[id];
        let line = format!("{prefix}{joint}{:?} ({})\n", node.val, node.color);
        out.push_str(&line);
        if let Some(left) = self.nodes.child(id, Side::Left) {
            self.draw(left, &branch(Side::Left), Kind::Lower, out);
        }
    }
}
