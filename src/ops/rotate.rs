use crate::{Block, Quad};

/// quarter-turn directions for `Block::rotate`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Block {
    /// Turns the subtree a quarter around this node's center: children cycle
    /// one quadrant recursively, then geometry is reassigned in one pass so
    /// the result occupies the original footprint. No-op on a leaf.
    pub fn rotate(&mut self, direction: Rotation) {
        if !self.is_leaf() {
            self.rotate_children(direction);
            self.set_geometry(self.size, self.pos);
        }
    }

    fn rotate_children(&mut self, direction: Rotation) {
        if let Some(children) = self.children_mut() {
            for child in children.iter_mut() {
                child.rotate_children(direction);
            }
            match direction {
                Rotation::Clockwise => children.rotate_cw(),
                Rotation::CounterClockwise => children.rotate_ccw(),
            }
        }
    }
}

impl<T> Quad<T> {
    // [ur, ul, ll, lr] -> [ul, ll, lr, ur]
    fn rotate_cw(&mut self) {
        std::mem::swap(&mut self.ur, &mut self.ul);
        std::mem::swap(&mut self.ul, &mut self.ll);
        std::mem::swap(&mut self.ll, &mut self.lr);
    }

    // [ur, ul, ll, lr] -> [lr, ur, ul, ll]
    fn rotate_ccw(&mut self) {
        std::mem::swap(&mut self.ll, &mut self.lr);
        std::mem::swap(&mut self.ul, &mut self.ll);
        std::mem::swap(&mut self.ur, &mut self.ul);
    }
}
