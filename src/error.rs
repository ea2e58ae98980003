/// Ways a game can refuse a request.
///
/// None of these are fatal: the state is left exactly as it was, and the
/// caller decides whether to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameError {
    /// Width or height was zero at initialization.
    InvalidDimensions,
    /// Column index outside `[0, width)`.
    InvalidColumn,
    /// Column has no empty cell left.
    ColumnFull,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions => write!(f, "invalid dimensions"),
            Self::InvalidColumn => write!(f, "column index is outside of the grid range"),
            Self::ColumnFull => write!(
                f,
                "token cannot be placed in a given column as it's full or does not exist"
            ),
        }
    }
}

impl std::error::Error for GameError {}
