use crate::{Block, BlockError, Pos, Quadrant};

impl Block {
    /// Assigns this node's square and cascades halved squares into each child
    /// quadrant, ur right of ul, ll below ul, lr diagonal. Sizes that cannot
    /// halve cleanly all the way down to `max_depth` are rejected before
    /// anything is written.
    pub fn update_size_and_position(&mut self, size: i32, x: i32, y: i32) -> Result<(), BlockError> {
        if size < 0 || !valid_size(size, self.level, self.max_depth) {
            return Err(BlockError::InvalidSize {
                size,
                level: self.level,
                max_depth: self.max_depth,
            });
        }
        self.set_geometry(size, Pos { x, y });
        Ok(())
    }

    /// assignment half of the update; callers guarantee the size halves cleanly
    pub(crate) fn set_geometry(&mut self, size: i32, pos: Pos) {
        self.size = size;
        self.pos = pos;
        if let Some(children) = self.children_mut() {
            let half = size / 2;
            for quadrant in Quadrant::iter_all() {
                children[quadrant].set_geometry(half, pos + Pos::quadrant_offset(quadrant, half));
            }
        }
    }
}

fn valid_size(size: i32, level: u8, max_depth: u8) -> bool {
    if level == max_depth {
        true
    } else {
        size % 2 == 0 && valid_size(size / 2, level + 1, max_depth)
    }
}
