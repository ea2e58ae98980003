use super::*;

/// Lowest empty row of a column, or `None` if the column is full or does not
/// exist.
pub fn trace_row_coordinate(state: &GameState, col: usize) -> Option<usize> {
    if col >= state.width() {
        return None;
    }
    (0..state.height())
        .rev()
        .find(|&row| state.cell(row, col) == Some(EMPTY))
}

/// Drops `player`'s token into `col`.
///
/// On success the token occupies the landing row of the column and is
/// appended to the history. On failure nothing changes.
///
/// Turn order, player identity and whether the game is already over are not
/// checked here; that is up to whoever drives the game.
pub fn make_turn(state: &mut GameState, col: isize, player: PlayerId) -> Result<(), GameError> {
    let col = usize::try_from(col)
        .ok()
        .filter(|&col| col < state.width())
        .ok_or(GameError::InvalidColumn)?;
    let row = trace_row_coordinate(state, col).ok_or(GameError::ColumnFull)?;
    state.place(Placement::from((row, col, player)));
    Ok(())
}

/// Scans `steps` cells from `(row, col)` along `direction`, looking for
/// [`LINE_LEN`] consecutive tokens of `player`.
///
/// The run counter resets on anything else, empty cells included. Leaving the
/// grid ends the scan with `false`.
pub fn check_line(
    state: &GameState,
    row: usize,
    col: usize,
    direction: Direction,
    steps: usize,
    player: PlayerId,
) -> bool {
    let (drow, dcol) = direction;
    let mut cursor = (row as isize, col as isize);
    let mut count = 0;
    for _ in 0..steps {
        let Some(color) = color_at(state, cursor) else {
            return false;
        };
        count = if color == player { count + 1 } else { 0 };
        if count == LINE_LEN {
            return true;
        }
        let (Some(row), Some(col)) = (cursor.0.checked_add(drow), cursor.1.checked_add(dcol))
        else {
            return false;
        };
        cursor = (row, col);
    }
    false
}

fn color_at(state: &GameState, (row, col): (isize, isize)) -> Option<Color> {
    let row = usize::try_from(row).ok()?;
    let col = usize::try_from(col).ok()?;
    state.cell(row, col)
}
