use rand::Rng;
use tracing::trace;

use crate::{Block, BlockKind, Quad};

impl Block {
    /// Replaces this node's content with four freshly generated children one
    /// level deeper and re-applies the node's geometry, so the new subtree
    /// tiles the same square. Refused on the root and at `max_depth`; a
    /// refusal mutates nothing and returns false.
    pub fn smash(&mut self, rng: &mut impl Rng) -> bool {
        if self.level == 0 || self.level >= self.max_depth {
            return false;
        }
        trace!(level = self.level, size = self.size, "smash");
        let (level, max_depth) = (self.level + 1, self.max_depth);
        self.kind = BlockKind::Split(Box::new(Quad {
            ur: Block::generate(level, max_depth, rng),
            ul: Block::generate(level, max_depth, rng),
            ll: Block::generate(level, max_depth, rng),
            lr: Block::generate(level, max_depth, rng),
        }));
        self.set_geometry(self.size, self.pos);
        true
    }
}
