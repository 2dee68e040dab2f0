#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod session;
mod types;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub cell_size: u32,
    pub words: Vec<String>,
}

impl GameConfig {
    pub fn new_unchecked(size: Coord2, cell_size: u32, words: Vec<String>) -> Self {
        Self {
            size,
            cell_size,
            words,
        }
    }

    pub fn new((size_x, size_y): Coord2, cell_size: u32, words: Vec<String>) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let cell_size = cell_size.max(1);
        Self::new_unchecked((size_x, size_y), cell_size, words)
    }

    /// Derives the board dimensions from a window size, one cell per
    /// `cell_size` pixel square, truncating any partial cell at the edges.
    pub fn from_window(window: (u32, u32), cell_size: u32, words: Vec<String>) -> Self {
        let cell_size = cell_size.max(1);
        let size_x = (window.0 / cell_size).min(Coord::MAX as u32) as Coord;
        let size_y = (window.1 / cell_size).min(Coord::MAX as u32) as Coord;
        Self::new((size_x, size_y), cell_size, words)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Where one hidden word sits on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub anchor: Coord2,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(word: String, anchor: Coord2, orientation: Orientation) -> Self {
        Self {
            word,
            anchor,
            orientation,
        }
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Whether the whole word stays inside a board of `size`.
    pub fn fits(&self, size: Coord2) -> bool {
        let (x, y) = self.anchor;
        if x >= size.0 || y >= size.1 {
            return false;
        }
        let along = match self.orientation {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        };
        along as usize + self.len() <= self.orientation.axis_len(size) as usize
    }

    pub fn cells(&self, bounds: Coord2) -> SpanIter {
        SpanIter::new(self.anchor, self.orientation, self.len(), bounds)
    }
}

/// The finished letter board: every cell filled, hidden words written over
/// the fill. Immutable once constructed; the selection engine only reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordLayout {
    letters: Array2<char>,
    placements: Vec<Placement>,
}

impl WordLayout {
    /// Builds a layout from a fully filled letter grid and a placement list,
    /// writing each word over the fill in list order. Later placements
    /// overwrite earlier ones where spans intersect.
    pub fn from_parts(mut letters: Array2<char>, placements: Vec<Placement>) -> Result<Self> {
        let dim = letters.dim();
        let size: Coord2 = (
            dim.0.try_into().map_err(|_| GameError::InvalidCoords)?,
            dim.1.try_into().map_err(|_| GameError::InvalidCoords)?,
        );

        for placement in &placements {
            if placement.is_empty() {
                return Err(GameError::EmptyWord);
            }
            if !placement.fits(size) {
                return Err(GameError::InvalidCoords);
            }
        }

        for placement in &placements {
            for (letter, coords) in placement.word.chars().zip(placement.cells(size)) {
                letters[coords.to_nd_index()] = letter;
            }
        }

        Ok(Self {
            letters,
            placements,
        })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.letters.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.letters.len().try_into().unwrap()
    }

    pub fn letter_at(&self, coords: Coord2) -> char {
        self[coords]
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(|placement| placement.word.as_str())
    }

    pub fn span(&self, placement: &Placement) -> SpanIter {
        placement.cells(self.size())
    }

    /// The letters currently on the board along a placement's span. Equals
    /// the placed word unless a later placement overwrote part of it.
    pub fn read_back(&self, placement: &Placement) -> String {
        self.span(placement).map(|coords| self[coords]).collect()
    }
}

impl Index<Coord2> for WordLayout {
    type Output = char;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.letters[(x as usize, y as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn blank(size: Coord2) -> Array2<char> {
        Array2::from_elem(size.to_nd_index(), 'q')
    }

    #[test]
    fn from_window_truncates_partial_cells() {
        let config = GameConfig::from_window((640, 480), 40, vec![]);
        assert_eq!(config.size, (16, 12));
        assert_eq!(config.total_cells(), 192);
    }

    #[test]
    fn from_parts_writes_words_over_the_fill() {
        let placement = Placement::new("ab".to_string(), (0, 0), Orientation::Horizontal);
        let layout = WordLayout::from_parts(blank((3, 3)), vec![placement]).unwrap();

        assert_eq!(layout[(0, 0)], 'a');
        assert_eq!(layout[(1, 0)], 'b');
        assert_eq!(layout[(2, 0)], 'q');
    }

    #[test]
    fn from_parts_rejects_a_span_past_the_edge() {
        let placement = Placement::new("abcd".to_string(), (1, 0), Orientation::Horizontal);
        let result = WordLayout::from_parts(blank((4, 4)), vec![placement]);

        assert_eq!(result, Err(GameError::InvalidCoords));
    }

    #[test]
    fn from_parts_rejects_an_empty_word() {
        let placement = Placement::new(String::new(), (0, 0), Orientation::Vertical);
        let result = WordLayout::from_parts(blank((4, 4)), vec![placement]);

        assert_eq!(result, Err(GameError::EmptyWord));
    }

    #[test]
    fn later_placements_overwrite_earlier_ones() {
        let first = Placement::new("aaa".to_string(), (0, 0), Orientation::Horizontal);
        let second = Placement::new("bbb".to_string(), (1, 0), Orientation::Horizontal);
        let layout = WordLayout::from_parts(blank((4, 4)), vec![first.clone(), second]).unwrap();

        assert_eq!(layout.read_back(&first), "abb");
        assert_eq!(layout[(3, 0)], 'b');
    }

    #[test]
    fn read_back_reproduces_an_untouched_word() {
        let placement = Placement::new("cab".to_string(), (2, 1), Orientation::Vertical);
        let layout = WordLayout::from_parts(blank((5, 5)), vec![placement.clone()]).unwrap();

        assert_eq!(layout.read_back(&placement), "cab");
    }
}
