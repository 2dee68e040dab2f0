use super::*;
use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;

/// Generation strategy that fills the whole board with uniform letters first,
/// then writes each hidden word at a randomly drawn anchor in list order.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
    anchor_rule: AnchorRule,
    overlap_rule: OverlapRule,
}

const MAX_PLACEMENT_ATTEMPTS: u32 = 64;

/// Historical anchor ranges: writing axis drawn from `[0, 3)`, cross axis
/// from `[0, 10)`.
const LEGACY_ALONG: usize = 3;
const LEGACY_CROSS: usize = 10;

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_rules(seed, AnchorRule::default(), OverlapRule::default())
    }

    pub fn with_rules(seed: u64, anchor_rule: AnchorRule, overlap_rule: OverlapRule) -> Self {
        Self {
            seed,
            anchor_rule,
            overlap_rule,
        }
    }

    fn draw_anchor(
        &self,
        len: usize,
        orientation: Orientation,
        size: Coord2,
        rng: &mut SmallRng,
    ) -> Coord2 {
        // number of anchor positions along the writing axis where the word fits
        let fit_along = orientation.axis_len(size) as usize - len + 1;
        let cross_len = match orientation {
            Orientation::Horizontal => size.1,
            Orientation::Vertical => size.0,
        } as usize;

        let (along_max, cross_max) = match self.anchor_rule {
            AnchorRule::AnywhereFits => (fit_along, cross_len),
            AnchorRule::LegacyRanges => {
                let along_max = LEGACY_ALONG.min(fit_along);
                let cross_max = LEGACY_CROSS.min(cross_len);
                if along_max < LEGACY_ALONG || cross_max < LEGACY_CROSS {
                    log::warn!(
                        "Legacy anchor range clamped to fit the board, along: {}, cross: {}",
                        along_max,
                        cross_max
                    );
                }
                (along_max, cross_max)
            }
        };

        let along = rng.random_range(0..along_max) as Coord;
        let cross = rng.random_range(0..cross_max) as Coord;
        match orientation {
            Orientation::Horizontal => (along, cross),
            Orientation::Vertical => (cross, along),
        }
    }

    fn place_word(
        &self,
        word: &str,
        orientation: Orientation,
        size: Coord2,
        occupied: &mut Array2<bool>,
        rng: &mut SmallRng,
    ) -> Result<Placement> {
        let mut attempts_left = match self.overlap_rule {
            OverlapRule::Reattempt => MAX_PLACEMENT_ATTEMPTS,
            OverlapRule::LastWriterWins => 1,
        };

        while attempts_left > 0 {
            attempts_left -= 1;

            let anchor = self.draw_anchor(word.len(), orientation, size, rng);
            let placement = Placement::new(word.into(), anchor, orientation);

            if matches!(self.overlap_rule, OverlapRule::Reattempt)
                && placement
                    .cells(size)
                    .any(|coords| occupied[coords.to_nd_index()])
            {
                continue;
            }

            for coords in placement.cells(size) {
                occupied[coords.to_nd_index()] = true;
            }
            return Ok(placement);
        }

        log::warn!(
            "No non-overlapping anchor found for {:?} after {} attempts",
            word,
            MAX_PLACEMENT_ATTEMPTS
        );
        Err(GameError::NoRoomForWord)
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: &GameConfig) -> Result<WordLayout> {
        // reject a bad word list before any cell is touched; a zero axis
        // leaves no anchor for any word regardless of orientation
        if !config.words.is_empty() && (config.size.0 == 0 || config.size.1 == 0) {
            return Err(GameError::WordTooLong);
        }
        for (index, word) in config.words.iter().enumerate() {
            if word.is_empty() {
                return Err(GameError::EmptyWord);
            }
            if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(GameError::NonAlphabetic);
            }
            let orientation = Orientation::from_index(index);
            if word.len() > orientation.axis_len(config.size) as usize {
                return Err(GameError::WordTooLong);
            }
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);

        let letters: Array2<char> =
            Array2::from_shape_simple_fn(config.size.to_nd_index(), || {
                (b'a' + rng.random_range(0..26u8)) as char
            });

        let mut occupied: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut placements = Vec::with_capacity(config.words.len());
        for (index, word) in config.words.iter().enumerate() {
            let orientation = Orientation::from_index(index);
            let placement =
                self.place_word(word, orientation, config.size, &mut occupied, &mut rng)?;
            log::debug!(
                "Placed {:?} at {:?} going {:?}",
                placement.word,
                placement.anchor,
                placement.orientation
            );
            placements.push(placement);
        }

        WordLayout::from_parts(letters, placements)
    }
}
