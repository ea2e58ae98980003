use super::*;

/// Glyph for an unoccupied cell.
pub const GLYPH_EMPTY: &str = "⬜️";
/// Glyph for the first player's tokens.
pub const GLYPH_FIRST: &str = "🟢";
/// Glyph for the second player's tokens.
pub const GLYPH_SECOND: &str = "🔴";
/// Glyph for any other player id.
pub const GLYPH_OTHER: &str = "⬛️";

/// Glyph used to draw a cell.
pub fn glyph(color: Color) -> &'static str {
    match color {
        EMPTY => GLYPH_EMPTY,
        c if c == PLAYERS[0] => GLYPH_FIRST,
        c if c == PLAYERS[1] => GLYPH_SECOND,
        _ => GLYPH_OTHER,
    }
}

/// Summary header followed by the grid, top row first.
///
/// ```text
/// size:     7 x 6
/// turn:     1
/// terminal: NO
///
/// ⬜️ ⬜️ ⬜️ ...
/// ```
impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "size:     {} x {}", self.width(), self.height())?;
        writeln!(f, "turn:     {}", self.turns())?;
        match self.is_terminal() {
            Some(winner) => writeln!(f, "terminal: YES (player {} is a winner)", winner)?,
            None => writeln!(f, "terminal: NO")?,
        }
        writeln!(f)?;
        for row in self.grid() {
            for &color in row {
                write!(f, "{} ", glyph(color))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
