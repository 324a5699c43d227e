use crate::{Block, Quad};

/// Reflection axes for `Block::reflect`. `X` runs horizontally, so reflecting
/// across it swaps top and bottom.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    X,
    Y,
}

impl Block {
    /// Mirrors the subtree across the given axis through this node's center:
    /// children reorder recursively, then geometry is reassigned in one pass
    /// so the result occupies the original footprint. No-op on a leaf.
    pub fn reflect(&mut self, axis: Axis) {
        if !self.is_leaf() {
            self.reflect_children(axis);
            self.set_geometry(self.size, self.pos);
        }
    }

    fn reflect_children(&mut self, axis: Axis) {
        if let Some(children) = self.children_mut() {
            for child in children.iter_mut() {
                child.reflect_children(axis);
            }
            match axis {
                Axis::X => children.flip_x(),
                Axis::Y => children.flip_y(),
            }
        }
    }
}

impl<T> Quad<T> {
    // [ur, ul, ll, lr] -> [lr, ll, ul, ur]
    fn flip_x(&mut self) {
        std::mem::swap(&mut self.ur, &mut self.lr);
        std::mem::swap(&mut self.ul, &mut self.ll);
    }

    // [ur, ul, ll, lr] -> [ul, ur, lr, ll]
    fn flip_y(&mut self) {
        std::mem::swap(&mut self.ur, &mut self.ul);
        std::mem::swap(&mut self.ll, &mut self.lr);
    }
}
