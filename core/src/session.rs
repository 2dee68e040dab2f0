use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Discrete pointer events delivered by the platform layer, in pixel
/// coordinates of the board surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: u32, y: u32 },
    Move { x: u32, y: u32 },
    Up,
}

/// Binds a [`SelectEngine`] to a pixel-based pointer stream: one board cell
/// per `cell_size` square. Events landing outside the board are dropped
/// before they reach the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    engine: SelectEngine,
    cell_size: u32,
    pressed: bool,
}

impl GameSession {
    pub fn new(engine: SelectEngine, cell_size: u32) -> Self {
        Self {
            engine,
            cell_size: cell_size.max(1),
            pressed: false,
        }
    }

    /// Generates a board from `config` and wraps it in a fresh session.
    pub fn start(config: &GameConfig, seed: u64) -> Result<Self> {
        let layout = RandomLayoutGenerator::new(seed).generate(config)?;
        Ok(Self::new(SelectEngine::new(layout), config.cell_size))
    }

    pub fn engine(&self) -> &SelectEngine {
        &self.engine
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn letter_at(&self, coords: Coord2) -> char {
        self.engine.letter_at(coords)
    }

    pub fn cell_at(&self, coords: Coord2) -> CellMark {
        self.engine.cell_at(coords)
    }

    pub fn take_word_found_events(&mut self) -> Vec<WordFound> {
        self.engine.take_word_found_events()
    }

    /// Feeds one pointer event through the engine. Returns whether anything
    /// a renderer shows may have changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { x, y } => {
                self.pressed = true;
                match self.cell_for(x, y) {
                    Some(coords) => self.engine.press(coords).has_update(),
                    None => false,
                }
            }
            PointerEvent::Move { x, y } if self.pressed => match self.cell_for(x, y) {
                Some(coords) => self.engine.drag(coords).has_update(),
                None => false,
            },
            PointerEvent::Move { .. } => false,
            PointerEvent::Up => {
                self.pressed = false;
                self.engine.release().has_update()
            }
        }
    }

    fn cell_for(&self, x: u32, y: u32) -> Option<Coord2> {
        let cell_x = x / self.cell_size;
        let cell_y = y / self.cell_size;
        let (size_x, size_y) = self.engine.size();
        (cell_x < size_x as u32 && cell_y < size_y as u32)
            .then(|| (cell_x as Coord, cell_y as Coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use ndarray::Array2;

    fn session() -> GameSession {
        let letters = Array2::from_elem([3, 3], 'z');
        let placement = Placement::new("ab".to_string(), (0, 0), Orientation::Horizontal);
        let layout = WordLayout::from_parts(letters, vec![placement]).unwrap();
        GameSession::new(SelectEngine::new(layout), 40)
    }

    #[test]
    fn pixels_map_to_cells_by_cell_size() {
        let mut session = session();

        assert!(session.handle(PointerEvent::Down { x: 39, y: 0 }));
        assert_eq!(session.engine().current_path(), [(0, 0)]);
        assert!(session.cell_at((0, 0)).is_marked());
    }

    #[test]
    fn a_full_pointer_gesture_finds_the_word() {
        let mut session = session();

        assert!(session.handle(PointerEvent::Down { x: 5, y: 5 }));
        assert!(session.handle(PointerEvent::Move { x: 45, y: 5 }));

        let events = session.take_word_found_events();
        assert_eq!(events[0].word, "ab");

        assert!(!session.handle(PointerEvent::Up));
        assert!(!session.is_pressed());
    }

    #[test]
    fn moves_without_a_press_are_ignored() {
        let mut session = session();

        assert!(!session.handle(PointerEvent::Move { x: 5, y: 5 }));
        assert_eq!(session.cell_at((0, 0)), CellMark::Plain);
    }

    #[test]
    fn events_outside_the_board_are_dropped() {
        let mut session = session();

        session.handle(PointerEvent::Down { x: 5, y: 5 });
        // 3 cells of 40px; x = 200 is past the right edge
        assert!(!session.handle(PointerEvent::Move { x: 200, y: 5 }));
        assert_eq!(session.engine().progress(), 1);
    }

    #[test]
    fn sessions_serialize_round_trip() {
        let session = session();
        let json = serde_json::to_string(&session).unwrap();
        let restored: GameSession = serde_json::from_str(&json).unwrap();

        assert_eq!(session, restored);
    }

    #[test]
    fn start_builds_a_playable_board() {
        let config = GameConfig::from_window((640, 480), 40, vec!["code".to_string()]);
        let session = GameSession::start(&config, 42).unwrap();

        assert_eq!(session.engine().size(), (16, 12));
        let placement = &session.engine().layout().placements()[0];
        assert_eq!(session.engine().layout().read_back(placement), "code");
    }
}
