use std::ops::Add;

use crate::quad::Quadrant;

/// x increases to the right
/// y increases downward
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    /// where a child square's corner sits relative to its parent's corner
    pub fn quadrant_offset(quadrant: Quadrant, half: i32) -> Self {
        Self {
            x: if quadrant.is_left() { 0 } else { half },
            y: if quadrant.is_upper() { 0 } else { half },
        }
    }
}

impl Add for Pos {
    type Output = Pos;
    fn add(self, rhs: Pos) -> Pos {
        Pos {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
