use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for letter counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`. `x` grows rightward along a row,
/// `y` grows downward along a column.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Axis a hidden word is written along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Orientation assigned to the word at `index` of the configured list:
    /// even indices run horizontally, odd indices vertically.
    pub const fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Unit step from one letter cell to the next along this axis.
    pub const fn step(self) -> (Coord, Coord) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
        }
    }

    /// Length of the board axis a word with this orientation must fit inside.
    pub const fn axis_len(self, size: Coord2) -> Coord {
        match self {
            Self::Horizontal => size.0,
            Self::Vertical => size.1,
        }
    }
}

/// Applies `step` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_step(coords: Coord2, step: (Coord, Coord), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = step;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterator over the cells a placed word occupies, starting at its anchor and
/// walking the orientation step. Stops early at the board edge.
#[derive(Debug)]
pub struct SpanIter {
    next: Option<Coord2>,
    step: (Coord, Coord),
    bounds: Coord2,
    remaining: usize,
}

impl SpanIter {
    pub(crate) fn new(anchor: Coord2, orientation: Orientation, len: usize, bounds: Coord2) -> Self {
        let next = (anchor.0 < bounds.0 && anchor.1 < bounds.1).then_some(anchor);
        Self {
            next,
            step: orientation.step(),
            bounds,
            remaining: len,
        }
    }
}

impl Iterator for SpanIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = apply_step(current, self.step, self.bounds);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn orientation_alternates_by_word_index() {
        assert_eq!(Orientation::from_index(0), Orientation::Horizontal);
        assert_eq!(Orientation::from_index(1), Orientation::Vertical);
        assert_eq!(Orientation::from_index(4), Orientation::Horizontal);
    }

    #[test]
    fn step_vectors_move_right_and_down() {
        assert_eq!(Orientation::Horizontal.step(), (1, 0));
        assert_eq!(Orientation::Vertical.step(), (0, 1));
    }

    #[test]
    fn span_iter_walks_the_orientation_axis() {
        let cells: Vec<_> = SpanIter::new((1, 2), Orientation::Horizontal, 3, (8, 8)).collect();
        assert_eq!(cells, [(1, 2), (2, 2), (3, 2)]);

        let cells: Vec<_> = SpanIter::new((1, 2), Orientation::Vertical, 3, (8, 8)).collect();
        assert_eq!(cells, [(1, 2), (1, 3), (1, 4)]);
    }

    #[test]
    fn span_iter_truncates_at_the_board_edge() {
        let cells: Vec<_> = SpanIter::new((6, 0), Orientation::Horizontal, 4, (8, 8)).collect();
        assert_eq!(cells, [(6, 0), (7, 0)]);
    }

    #[test]
    fn span_iter_is_empty_for_an_out_of_bounds_anchor() {
        let mut iter = SpanIter::new((8, 0), Orientation::Horizontal, 2, (8, 8));
        assert_eq!(iter.next(), None);
    }
}
