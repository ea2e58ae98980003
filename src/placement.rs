use super::*;

/// A token that has been dropped into the grid.
///
/// The history of a [`GameState`] is a sequence of these, one per successful
/// turn, in the order they were played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub player: PlayerId,
}

impl From<(usize, usize, PlayerId)> for Placement {
    fn from((row, col, player): (usize, usize, PlayerId)) -> Self {
        Self { row, col, player }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{} @ ({}, {})", self.player, self.row, self.col)
    }
}
