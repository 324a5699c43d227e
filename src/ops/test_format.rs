use crate::{Color, ColorGrid};

// a macro makes the expected grids in tests nicer to read

/// little error handling; expects whitespace-separated rows of color letters
#[macro_export]
macro_rules! test_grid {
    {$s:literal} => {
        $crate::ColorGrid::from_test_format($s)
    };
}
pub use test_grid;

impl ColorGrid {
    pub fn from_test_format(s: &str) -> ColorGrid {
        let rows: Vec<&str> = s.split_ascii_whitespace().collect();
        let edge = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == edge),
            "grid must be square"
        );
        let cells = rows
            .iter()
            .flat_map(|row| row.bytes().map(Color::from_letter))
            .collect();
        ColorGrid::from_cells(edge, cells)
    }
}
