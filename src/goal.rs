use itertools::Itertools;

use crate::block::Block;
use crate::color::Color;
use crate::grid::ColorGrid;

/// The two win conditions. Both score a flattened snapshot of the board and
/// mutate nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Goal {
    /// largest 4-connected region of the target color, diagonals do not touch
    Blob(Color),
    /// target-color cells on the outer border, corners count double
    Perimeter(Color),
}

impl Goal {
    pub fn target(self) -> Color {
        match self {
            Goal::Blob(color) | Goal::Perimeter(color) => color,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Goal::Blob(_) => "create the largest connected blob of the target color",
            Goal::Perimeter(_) => {
                "put the most target-color cells on the outer perimeter, corners count double"
            }
        }
    }

    pub fn score(self, board: &Block) -> usize {
        let grid = board.flatten();
        match self {
            Goal::Blob(color) => largest_blob(&grid, color),
            Goal::Perimeter(color) => perimeter_count(&grid, color),
        }
    }
}

fn largest_blob(grid: &ColorGrid, target: Color) -> usize {
    let edge = grid.edge();
    let mut visited = vec![false; edge * edge];
    let mut best = 0;
    for (row, col) in (0..edge).cartesian_product(0..edge) {
        if !visited[row * edge + col] && grid[(row, col)] == target {
            best = best.max(blob_size(grid, target, &mut visited, row, col));
        }
    }
    best
}

/// Flood fill from one seed, marking and counting. The grid can hold
/// 4^max_depth cells, so this iterates an explicit stack instead of recursing
/// per cell.
fn blob_size(
    grid: &ColorGrid,
    target: Color,
    visited: &mut [bool],
    row: usize,
    col: usize,
) -> usize {
    let edge = grid.edge();
    visited[row * edge + col] = true;
    let mut stack = vec![(row, col)];
    let mut size = 0;
    while let Some((row, col)) = stack.pop() {
        size += 1;
        for (row, col) in neighbors(row, col, edge) {
            if !visited[row * edge + col] && grid[(row, col)] == target {
                visited[row * edge + col] = true;
                stack.push((row, col));
            }
        }
    }
    size
}

fn neighbors(row: usize, col: usize, edge: usize) -> impl Iterator<Item = (usize, usize)> {
    let up = row.checked_sub(1).map(|row| (row, col));
    let down = (row + 1 < edge).then_some((row + 1, col));
    let left = col.checked_sub(1).map(|col| (row, col));
    let right = (col + 1 < edge).then_some((row, col + 1));
    [up, down, left, right].into_iter().flatten()
}

fn perimeter_count(grid: &ColorGrid, target: Color) -> usize {
    let edge = grid.edge();
    let last = edge - 1;
    let mut count = 0;
    for (row, col) in (0..edge).cartesian_product(0..edge) {
        if grid[(row, col)] != target {
            continue;
        }
        let on_row_edge = row == 0 || row == last;
        let on_col_edge = col == 0 || col == last;
        if on_row_edge && on_col_edge {
            // a corner cell is visited once and scores 2, even on a 1x1 grid
            // where it satisfies all four border conditions at once
            count += 2;
        } else if on_row_edge || on_col_edge {
            count += 1;
        }
    }
    count
}
