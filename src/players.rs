use super::*;

/// Endless alternation over [`PLAYERS`], starting with the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotation {
    ticker: usize,
}

impl Rotation {
    /// The player whose turn it is, without advancing.
    pub fn current(&self) -> PlayerId {
        PLAYERS[self.ticker % PLAYERS.len()]
    }
    /// Hands the turn to the next player, returning the one who was up.
    pub fn advance(&mut self) -> PlayerId {
        let player = self.current();
        self.ticker += 1;
        player
    }
    /// Turns handed out so far.
    pub fn ticker(&self) -> usize {
        self.ticker
    }
}

impl Iterator for Rotation {
    type Item = PlayerId;
    fn next(&mut self) -> Option<PlayerId> {
        Some(self.advance())
    }
}
