use crate::*;
pub use random::*;

mod random;

pub trait LayoutGenerator {
    fn generate(self, config: &GameConfig) -> Result<WordLayout>;
}

/// How anchors are drawn for each hidden word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnchorRule {
    /// Uniform over every anchor the word fits at.
    AnywhereFits,
    /// Historical reduced ranges: anchors near the start of the writing axis,
    /// cross axis limited to the first ten positions. Clamped to the board.
    LegacyRanges,
}

impl Default for AnchorRule {
    fn default() -> Self {
        Self::AnywhereFits
    }
}

/// What happens when a drawn span crosses an already placed word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverlapRule {
    /// Redraw the anchor a bounded number of times, then fail.
    Reattempt,
    /// Keep the draw and overwrite; the later word's letters stand.
    LastWriterWins,
}

impl Default for OverlapRule {
    fn default() -> Self {
        Self::Reattempt
    }
}
