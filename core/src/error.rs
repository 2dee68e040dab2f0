use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Hidden word is empty")]
    EmptyWord,
    #[error("Hidden word contains a non-alphabetic letter")]
    NonAlphabetic,
    #[error("Hidden word does not fit inside the board along its orientation")]
    WordTooLong,
    #[error("No non-overlapping placement found for a hidden word")]
    NoRoomForWord,
}

pub type Result<T> = core::result::Result<T, GameError>;
