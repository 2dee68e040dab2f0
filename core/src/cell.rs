use serde::{Deserialize, Serialize};

/// Player-visible state of one board cell, kept by the selection engine.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellMark {
    Plain,
    Highlighted,
    Found,
}

impl CellMark {
    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Highlighted | Self::Found)
    }
}

impl Default for CellMark {
    fn default() -> Self {
        Self::Plain
    }
}
