use std::fmt;
use std::ops::Index;

use crate::color::Color;
use crate::quad::{Quad, Quadrant};

/// Full-resolution color snapshot of a subtree. Row 0 is the top edge and
/// cell addressing is (row, col).
#[derive(Clone, PartialEq, Eq)]
pub struct ColorGrid {
    edge: usize,
    cells: Vec<Color>,
}

impl ColorGrid {
    pub fn filled(edge: usize, color: Color) -> Self {
        ColorGrid {
            edge,
            cells: vec![color; edge * edge],
        }
    }

    pub(crate) fn from_cells(edge: usize, cells: Vec<Color>) -> Self {
        assert_eq!(cells.len(), edge * edge);
        ColorGrid { edge, cells }
    }

    /// Stitches four equal grids into one twice the edge: ur top-right,
    /// ul top-left, ll bottom-left, lr bottom-right.
    pub fn merge(quads: Quad<ColorGrid>) -> Self {
        let half = quads.ul.edge;
        assert!(quads.iter().all(|quad| quad.edge == half));
        let edge = half * 2;
        let mut cells = Vec::with_capacity(edge * edge);
        for row in 0..edge {
            for col in 0..edge {
                let quadrant = Quadrant::from_cell(row, col, half);
                let row = row - if quadrant.is_upper() { 0 } else { half };
                let col = col - if quadrant.is_left() { 0 } else { half };
                cells.push(quads[quadrant][(row, col)]);
            }
        }
        ColorGrid { edge, cells }
    }

    pub fn edge(&self) -> usize {
        self.edge
    }
}

impl Index<(usize, usize)> for ColorGrid {
    type Output = Color;
    fn index(&self, (row, col): (usize, usize)) -> &Color {
        assert!(row < self.edge && col < self.edge);
        &self.cells[row * self.edge + col]
    }
}

impl fmt::Display for ColorGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.edge {
            for col in 0..self.edge {
                write!(f, "{}", self[(row, col)].letter())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ColorGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorGrid {}x{}\n{self}", self.edge, self.edge)
    }
}
