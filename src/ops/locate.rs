use crate::{Block, BlockError, BlockKind};

impl Block {
    /// Finds the node covering (x, y) at `level`, or the covering leaf if the
    /// tree stops subdividing first. Points outside this node's square give
    /// None; levels outside `self.level()..=max_depth` are an error.
    pub fn locate(&self, x: i32, y: i32, level: u8) -> Result<Option<&Block>, BlockError> {
        if level < self.level || level > self.max_depth {
            return Err(BlockError::LevelOutOfRange {
                level,
                min: self.level,
                max: self.max_depth,
            });
        }
        Ok(self.locate_in_bounds(x, y, level))
    }

    /// `locate` with mutable access to the found node
    pub fn locate_mut(&mut self, x: i32, y: i32, level: u8) -> Result<Option<&mut Block>, BlockError> {
        if level < self.level || level > self.max_depth {
            return Err(BlockError::LevelOutOfRange {
                level,
                min: self.level,
                max: self.max_depth,
            });
        }
        Ok(self.locate_in_bounds_mut(x, y, level))
    }

    fn locate_in_bounds(&self, x: i32, y: i32, level: u8) -> Option<&Block> {
        if !self.contains(x, y) {
            return None;
        }
        match &self.kind {
            BlockKind::Leaf(_) => Some(self),
            BlockKind::Split(_) if self.level == level => Some(self),
            BlockKind::Split(children) => {
                match children.iter().find(|child| child.contains(x, y)) {
                    Some(child) => child.locate_in_bounds(x, y, level),
                    None => panic!("no child quadrant contains ({x}, {y})"),
                }
            }
        }
    }

    fn locate_in_bounds_mut(&mut self, x: i32, y: i32, level: u8) -> Option<&mut Block> {
        if !self.contains(x, y) {
            return None;
        }
        if self.is_leaf() || self.level == level {
            return Some(self);
        }
        let children = match &mut self.kind {
            BlockKind::Split(children) => children,
            BlockKind::Leaf(_) => unreachable!(),
        };
        match children.iter_mut().find(|child| child.contains(x, y)) {
            Some(child) => child.locate_in_bounds_mut(x, y, level),
            None => panic!("no child quadrant contains ({x}, {y})"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{test_grid, Block, BlockError, Color, Pos, Quad, Rotation};

    fn leaf(level: u8, max_depth: u8, color: Color) -> Block {
        Block::new_leaf(Pos { x: 0, y: 0 }, 0, level, max_depth, color)
    }

    fn depth_two_board() -> Block {
        let inner = Block::new_split(
            Pos { x: 0, y: 0 },
            0,
            1,
            2,
            Quad {
                ur: leaf(2, 2, Color::Green),
                ul: leaf(2, 2, Color::Blue),
                ll: leaf(2, 2, Color::Yellow),
                lr: leaf(2, 2, Color::Red),
            },
        );
        let mut board = Block::new_split(
            Pos { x: 0, y: 0 },
            0,
            0,
            2,
            Quad {
                ur: leaf(1, 2, Color::Red),
                ul: inner,
                ll: leaf(1, 2, Color::Blue),
                lr: leaf(1, 2, Color::Yellow),
            },
        );
        board.update_size_and_position(4, 0, 0).unwrap();
        board
    }

    #[test]
    fn finds_the_leaf_at_any_deeper_level() {
        let board = depth_two_board();
        let hit = board.locate(3, 0, 1).unwrap().expect("inside");
        assert_eq!(hit.level(), 1);
        assert_eq!(hit.color(), Some(Color::Red));
        // asking past the leaf's level still lands on the leaf
        let hit = board.locate(3, 0, 2).unwrap().expect("inside");
        assert_eq!(hit.level(), 1);
        assert_eq!(hit.color(), Some(Color::Red));
    }

    #[test]
    fn stops_at_the_requested_level() {
        let board = depth_two_board();
        let hit = board.locate(0, 0, 0).unwrap().expect("inside");
        assert_eq!(hit.level(), 0);
        assert!(!hit.is_leaf());
        let hit = board.locate(0, 0, 1).unwrap().expect("inside");
        assert_eq!(hit.level(), 1);
        assert!(!hit.is_leaf());
        let hit = board.locate(0, 0, 2).unwrap().expect("inside");
        assert_eq!(hit.level(), 2);
        assert_eq!(hit.color(), Some(Color::Blue));
    }

    #[test]
    fn outside_returns_none() {
        let board = depth_two_board();
        assert_eq!(board.locate(4, 0, 1).unwrap(), None);
        assert_eq!(board.locate(0, 4, 1).unwrap(), None);
        assert_eq!(board.locate(-1, 2, 0).unwrap(), None);
    }

    #[test]
    fn level_out_of_range() {
        let board = depth_two_board();
        assert_eq!(
            board.locate(0, 0, 3).unwrap_err(),
            BlockError::LevelOutOfRange {
                level: 3,
                min: 0,
                max: 2,
            }
        );
        let children = board.children().unwrap();
        assert_eq!(
            children.ur.locate(3, 0, 0).unwrap_err(),
            BlockError::LevelOutOfRange {
                level: 0,
                min: 1,
                max: 2,
            }
        );
    }

    #[test]
    fn locate_mut_mutates_in_place() {
        let mut board = depth_two_board();
        let node = board.locate_mut(0, 0, 1).unwrap().expect("inside");
        assert!(!node.is_leaf());
        node.rotate(Rotation::Clockwise);
        assert_eq!(board.flatten(), test_grid! {"
            YBRR
            RGRR
            BBYY
            BBYY
        "});
    }

    #[test]
    #[should_panic(expected = "no child quadrant contains")]
    fn broken_partition_is_fatal() {
        // the children never received geometry, so no child covers the point
        let board = Block::new_split(
            Pos { x: 0, y: 0 },
            4,
            0,
            1,
            Quad {
                ur: leaf(1, 1, Color::Red),
                ul: leaf(1, 1, Color::Green),
                ll: leaf(1, 1, Color::Blue),
                lr: leaf(1, 1, Color::Yellow),
            },
        );
        let _ = board.locate(1, 1, 1);
    }
}
