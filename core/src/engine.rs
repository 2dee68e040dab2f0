use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SelectState {
    Idle,
    Tracking,
}

impl SelectState {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_tracking(self) -> bool {
        matches!(self, Self::Tracking)
    }
}

impl Default for SelectState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Which condition ends an attempt as a found word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionRule {
    /// Historical rule: some configured word has the attempt's length and its
    /// last letter equals the last accepted letter. The earlier letters of
    /// the attempt are not checked, so an unrelated traversal of matching
    /// length and final letter also completes.
    Lenient,
    /// The accepted letters must spell a configured word exactly.
    Strict,
}

impl Default for CompletionRule {
    fn default() -> Self {
        Self::Lenient
    }
}

/// Outcome of a press or drag step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Extended,
    Completed,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Extended => true,
            Completed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Record queued when an attempt completes a hidden word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFound {
    pub word: String,
    pub cells: Vec<Coord2>,
}

/// Tracks one press-to-release drag against the hidden-word set. Owns the
/// finished layout read-only; all mutation is confined to the per-cell marks
/// and the attempt bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectEngine {
    layout: WordLayout,
    highlighted: Array2<bool>,
    found: Array2<bool>,
    state: SelectState,
    progress: u8,
    anchor: Option<Coord2>,
    path: Vec<Coord2>,
    pending_events: Vec<WordFound>,
    found_words: BTreeSet<String>,
    completion: CompletionRule,
}

impl SelectEngine {
    pub fn new(layout: WordLayout) -> Self {
        Self::with_completion(layout, CompletionRule::default())
    }

    pub fn with_completion(layout: WordLayout, completion: CompletionRule) -> Self {
        let size = layout.size();
        Self {
            layout,
            highlighted: Array2::default(size.to_nd_index()),
            found: Array2::default(size.to_nd_index()),
            state: Default::default(),
            progress: 0,
            anchor: None,
            path: Vec::new(),
            pending_events: Vec::new(),
            found_words: BTreeSet::new(),
            completion,
        }
    }

    pub fn state(&self) -> SelectState {
        self.state
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn layout(&self) -> &WordLayout {
        &self.layout
    }

    pub fn letter_at(&self, coords: Coord2) -> char {
        self.layout[coords]
    }

    pub fn cell_at(&self, coords: Coord2) -> CellMark {
        if self.highlighted[coords.to_nd_index()] {
            CellMark::Highlighted
        } else if self.found[coords.to_nd_index()] {
            CellMark::Found
        } else {
            CellMark::Plain
        }
    }

    pub fn is_highlighted(&self, coords: Coord2) -> bool {
        self.highlighted[coords.to_nd_index()]
    }

    /// Cells accepted so far in the current attempt, oldest first.
    pub fn current_path(&self) -> &[Coord2] {
        &self.path
    }

    pub fn words_found(&self) -> usize {
        self.found_words.len()
    }

    /// Whether every configured word has been found at least once.
    pub fn is_solved(&self) -> bool {
        self.layout
            .words()
            .all(|word| self.found_words.contains(word))
    }

    /// Drains the completion events queued since the last call.
    pub fn take_word_found_events(&mut self) -> Vec<WordFound> {
        core::mem::take(&mut self.pending_events)
    }

    /// Starts a fresh attempt at `coords`, abandoning any previous one.
    pub fn press(&mut self, coords: Coord2) -> SelectOutcome {
        self.clear_attempt();
        self.state = SelectState::Tracking;
        self.try_extend(coords)
    }

    /// Extends the attempt while the pointer is down. Ignored while idle or
    /// when `coords` is the currently active cell.
    pub fn drag(&mut self, coords: Coord2) -> SelectOutcome {
        if self.state.is_idle() {
            return SelectOutcome::NoChange;
        }
        if self.anchor == Some(coords) {
            return SelectOutcome::NoChange;
        }
        self.try_extend(coords)
    }

    /// Drops the attempt unconditionally. A partially matched word never
    /// survives a release.
    pub fn release(&mut self) -> MarkOutcome {
        let had_attempt = self.state.is_tracking() && !self.path.is_empty();
        self.clear_attempt();
        self.state = SelectState::Idle;
        if had_attempt {
            MarkOutcome::Changed
        } else {
            MarkOutcome::NoChange
        }
    }

    /// Whether `coords` would be accepted as the next cell of the attempt.
    pub fn can_extend(&self, coords: Coord2) -> bool {
        self.state.is_tracking()
            && self.layout.validate_coords(coords).is_ok()
            && self.is_adjacent(coords)
            && self.prefix_matches(self.layout[coords])
    }

    fn try_extend(&mut self, coords: Coord2) -> SelectOutcome {
        // out-of-bounds pointer input is routine, drop it without touching
        // the attempt
        if self.layout.validate_coords(coords).is_err() {
            return SelectOutcome::NoChange;
        }

        if !self.can_extend(coords) {
            log::trace!("Rejected {:?} at progress {}", coords, self.progress);
            return SelectOutcome::NoChange;
        }

        self.accept(coords)
    }

    fn prefix_matches(&self, letter: char) -> bool {
        let pos = self.progress as usize;
        self.layout
            .words()
            .any(|word| word.len() > pos && word.chars().nth(pos) == Some(letter))
    }

    fn is_adjacent(&self, coords: Coord2) -> bool {
        // any cell may start an attempt
        let Some(anchor) = self.anchor else {
            return true;
        };

        let bounds = self.layout.size();
        Orientation::ALL
            .iter()
            .any(|orientation| apply_step(anchor, orientation.step(), bounds) == Some(coords))
    }

    fn accept(&mut self, coords: Coord2) -> SelectOutcome {
        self.highlighted[coords.to_nd_index()] = true;
        self.path.push(coords);
        self.anchor = Some(coords);
        self.progress += 1;
        log::debug!("Accepted {:?}, progress: {}", coords, self.progress);

        match self.completed_word() {
            Some(word) => self.finish_attempt(word),
            None => SelectOutcome::Extended,
        }
    }

    fn completed_word(&self) -> Option<String> {
        let len = self.progress as usize;
        let last_letter = self.layout[*self.path.last()?];

        match self.completion {
            CompletionRule::Lenient => self
                .layout
                .words()
                .find(|word| word.len() == len && word.chars().last() == Some(last_letter))
                .map(String::from),
            CompletionRule::Strict => {
                let attempt: String = self.path.iter().map(|&coords| self.layout[coords]).collect();
                self.layout
                    .words()
                    .find(|&word| word == attempt)
                    .map(String::from)
            }
        }
    }

    fn finish_attempt(&mut self, word: String) -> SelectOutcome {
        let cells = core::mem::take(&mut self.path);
        for &coords in &cells {
            self.highlighted[coords.to_nd_index()] = false;
            self.found[coords.to_nd_index()] = true;
        }
        self.progress = 0;
        self.anchor = None;
        self.state = SelectState::Idle;
        log::debug!("Found {:?} along {:?}", word, cells);
        self.found_words.insert(word.clone());
        self.pending_events.push(WordFound { word, cells });
        SelectOutcome::Completed
    }

    fn clear_attempt(&mut self) {
        for coords in core::mem::take(&mut self.path) {
            self.highlighted[coords.to_nd_index()] = false;
        }
        self.progress = 0;
        self.anchor = None;
    }
}
