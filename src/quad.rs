//! Quadrant names and the four-slot container the tree hangs children on

use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

/// The canonical ur/ul/ll/lr ordering. Child indexing, iteration, reflection,
/// and rotation all go through it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    UR,
    UL,
    LL,
    LR,
}

impl Quadrant {
    pub fn is_upper(self) -> bool {
        matches!(self, Quadrant::UR | Quadrant::UL)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Quadrant::UL | Quadrant::LL)
    }

    /// which quadrant of a grid split at `half` holds cell (row, col)
    pub fn from_cell(row: usize, col: usize, half: usize) -> Self {
        if row < half {
            if col < half {
                Quadrant::UL
            } else {
                Quadrant::UR
            }
        } else {
            if col < half {
                Quadrant::LL
            } else {
                Quadrant::LR
            }
        }
    }

    pub fn iter_all() -> impl Iterator<Item = Quadrant> {
        QuadrantIter::new()
    }
}

struct QuadrantIter {
    next: Option<Quadrant>,
}

impl QuadrantIter {
    fn new() -> Self {
        QuadrantIter {
            next: Some(Quadrant::UR),
        }
    }
}

impl Iterator for QuadrantIter {
    type Item = Quadrant;
    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.next;
        self.next = match curr {
            Some(Quadrant::UR) => Some(Quadrant::UL),
            Some(Quadrant::UL) => Some(Quadrant::LL),
            Some(Quadrant::LL) => Some(Quadrant::LR),
            _ => None,
        };
        curr
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.len();
        (size, Some(size))
    }
}

impl FusedIterator for QuadrantIter {}

impl ExactSizeIterator for QuadrantIter {
    fn len(&self) -> usize {
        match self.next {
            Some(Quadrant::UR) => 4,
            Some(Quadrant::UL) => 3,
            Some(Quadrant::LL) => 2,
            Some(Quadrant::LR) => 1,
            None => 0,
        }
    }
}

/// four values addressed by quadrant; field order is the canonical child order
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub ur: T,
    pub ul: T,
    pub ll: T,
    pub lr: T,
}

impl<T> Quad<T> {
    pub fn as_ref(&self) -> Quad<&T> {
        Quad {
            ur: &self.ur,
            ul: &self.ul,
            ll: &self.ll,
            lr: &self.lr,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        [&mut self.ur, &mut self.ul, &mut self.ll, &mut self.lr].into_iter()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Quad<U> {
        Quad {
            ur: f(self.ur),
            ul: f(self.ul),
            ll: f(self.ll),
            lr: f(self.lr),
        }
    }
}

impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.ur, self.ul, self.ll, self.lr].into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Quad<T> {
    type Item = &'a T;
    type IntoIter = std::array::IntoIter<&'a T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [&self.ur, &self.ul, &self.ll, &self.lr].into_iter()
    }
}

impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;
    fn index(&self, quadrant: Quadrant) -> &T {
        match quadrant {
            Quadrant::UR => &self.ur,
            Quadrant::UL => &self.ul,
            Quadrant::LL => &self.ll,
            Quadrant::LR => &self.lr,
        }
    }
}

impl<T> IndexMut<Quadrant> for Quad<T> {
    fn index_mut(&mut self, quadrant: Quadrant) -> &mut T {
        match quadrant {
            Quadrant::UR => &mut self.ur,
            Quadrant::UL => &mut self.ul,
            Quadrant::LL => &mut self.ll,
            Quadrant::LR => &mut self.lr,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Quad, Quadrant};

    #[test]
    fn iteration_order_is_child_order() {
        let quad = Quad {
            ur: 'a',
            ul: 'b',
            ll: 'c',
            lr: 'd',
        };
        assert_eq!(quad.iter().copied().collect::<Vec<_>>(), ['a', 'b', 'c', 'd']);
        assert_eq!(quad.into_iter().collect::<Vec<_>>(), ['a', 'b', 'c', 'd']);
        let quadrants: Vec<_> = Quadrant::iter_all().collect();
        assert_eq!(
            quadrants,
            [Quadrant::UR, Quadrant::UL, Quadrant::LL, Quadrant::LR]
        );
    }

    #[test]
    fn index_matches_fields() {
        let mut quad = Quad {
            ur: 1,
            ul: 2,
            ll: 3,
            lr: 4,
        };
        for (i, q) in Quadrant::iter_all().enumerate() {
            assert_eq!(quad[q], i + 1, "i={i}");
        }
        quad[Quadrant::LL] = 30;
        assert_eq!(quad.ll, 30);
    }

    #[test]
    fn map_keeps_slots() {
        let quad = Quad {
            ur: 1,
            ul: 2,
            ll: 3,
            lr: 4,
        };
        let doubled = quad.map(|n| n * 2);
        assert_eq!(
            doubled,
            Quad {
                ur: 2,
                ul: 4,
                ll: 6,
                lr: 8,
            }
        );
    }

    #[test]
    fn cell_classification() {
        assert_eq!(Quadrant::from_cell(0, 0, 2), Quadrant::UL);
        assert_eq!(Quadrant::from_cell(1, 1, 2), Quadrant::UL);
        assert_eq!(Quadrant::from_cell(0, 2, 2), Quadrant::UR);
        assert_eq!(Quadrant::from_cell(2, 1, 2), Quadrant::LL);
        assert_eq!(Quadrant::from_cell(3, 3, 2), Quadrant::LR);
    }
}
