use rand::Rng;
use tracing::trace_span;

use crate::{Block, BlockError, BlockKind, Color, Pos, Quad};

impl Block {
    /// Randomized subtree: below `max_depth` one stream draw decides subdivide
    /// vs leaf (subdivide chance e^(-level/4)), then each leaf draws a palette
    /// color. Children generate in ur/ul/ll/lr order, so one seed pins the
    /// whole board. Geometry starts zeroed until `update_size_and_position`.
    pub fn generate(level: u8, max_depth: u8, rng: &mut impl Rng) -> Block {
        assert!(level <= max_depth && max_depth <= Block::MAX_DEPTH);
        let _span = trace_span!("generate", level, max_depth).entered();
        generate_block(level, max_depth, rng)
    }

    /// a level-0 tree with its geometry already assigned
    pub fn generate_board(size: i32, max_depth: u8, rng: &mut impl Rng) -> Result<Block, BlockError> {
        let mut board = Block::generate(0, max_depth, rng);
        board.update_size_and_position(size, 0, 0)?;
        Ok(board)
    }
}

fn generate_block(level: u8, max_depth: u8, rng: &mut impl Rng) -> Block {
    let kind = if level < max_depth && rng.gen::<f64>() < (-0.25 * f64::from(level)).exp() {
        BlockKind::Split(Box::new(Quad {
            ur: generate_block(level + 1, max_depth, rng),
            ul: generate_block(level + 1, max_depth, rng),
            ll: generate_block(level + 1, max_depth, rng),
            lr: generate_block(level + 1, max_depth, rng),
        }))
    } else {
        BlockKind::Leaf(Color::PALETTE[rng.gen_range(0..Color::PALETTE.len())])
    };
    Block {
        pos: Pos { x: 0, y: 0 },
        size: 0,
        level,
        max_depth,
        kind,
    }
}
