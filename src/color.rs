/// Leaf colors plus the two chrome colors the renderer layers on top.
/// Generated boards only ever hold `PALETTE` entries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Black,
    White,
}

impl Color {
    /// fixed draw order, so a seed pins every leaf color
    pub const PALETTE: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];
    pub const FRAME: Color = Color::Black;
    pub const HIGHLIGHT: Color = Color::White;

    /// one letter per cell in grid output and the test format
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Black => 'K',
            Color::White => 'W',
        }
    }

    pub fn from_letter(b: u8) -> Color {
        match b {
            b'R' => Color::Red,
            b'G' => Color::Green,
            b'B' => Color::Blue,
            b'Y' => Color::Yellow,
            b'K' => Color::Black,
            b'W' => Color::White,
            _ => panic!("Invalid color letter {b:02x}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Color;

    #[test]
    fn letters_round_trip() {
        for color in [
            Color::Red,
            Color::Green,
            Color::Blue,
            Color::Yellow,
            Color::Black,
            Color::White,
        ] {
            assert_eq!(Color::from_letter(color.letter() as u8), color);
        }
    }

    #[test]
    fn chrome_colors_are_not_in_the_palette() {
        assert!(!Color::PALETTE.contains(&Color::FRAME));
        assert!(!Color::PALETTE.contains(&Color::HIGHLIGHT));
    }
}
