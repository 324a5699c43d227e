use crate::{Block, BlockKind, ColorGrid, Quad};

impl Block {
    /// Full-resolution snapshot, 2^(max_depth - level) cells per side. Cell
    /// placement depends only on quadrant order, never on absolute
    /// coordinates, so an unpositioned tree flattens the same as a placed one.
    pub fn flatten(&self) -> ColorGrid {
        let edge = 1usize << (self.max_depth - self.level);
        match &self.kind {
            BlockKind::Leaf(color) => ColorGrid::filled(edge, *color),
            BlockKind::Split(children) => {
                ColorGrid::merge(Quad::as_ref(children).map(Block::flatten))
            }
        }
    }
}
