use super::*;

/// The grid and everything that has happened on it.
///
/// `GameState` is created once with fixed dimensions and then only changes
/// through [`make_turn`], which drops a token into the grid and records it in
/// the history. Queries such as [`is_terminal`](Self::is_terminal) never
/// mutate.
///
/// # Fields
///
/// - `grid` — Row-major cells, `grid_height` rows of `grid_width` colors
/// - `grid_width` — Number of columns, always positive
/// - `grid_height` — Number of rows, always positive
/// - `history` — One [`Placement`] per successful turn, oldest first
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Snapshot")]
pub struct GameState {
    grid: Vec<Vec<Color>>,
    grid_width: usize,
    grid_height: usize,
    history: Vec<Placement>,
}

/// Lifecycle.
impl GameState {
    /// Empty grid of the given size.
    ///
    /// Fails with [`GameError::InvalidDimensions`] if either side is zero.
    pub fn init_state(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self::blank(width, height))
    }
    fn blank(width: usize, height: usize) -> Self {
        Self {
            grid: vec![vec![EMPTY; width]; height],
            grid_width: width,
            grid_height: height,
            history: Vec::with_capacity(width * height),
        }
    }
    /// Writes a token and records it. Callers have already checked that the
    /// cell is the landing cell of its column.
    pub(crate) fn place(&mut self, placement: Placement) {
        self.grid[placement.row][placement.col] = placement.player;
        self.history.push(placement);
    }
}

/// Serialized form of a [`GameState`], trusted only after replay.
#[derive(serde::Deserialize)]
struct Snapshot {
    grid: Vec<Vec<Color>>,
    grid_width: usize,
    grid_height: usize,
    history: Vec<Placement>,
}

/// Rebuilds the state move by move, so a deserialized state satisfies the
/// same invariants as one built through [`make_turn`].
impl TryFrom<Snapshot> for GameState {
    type Error = anyhow::Error;
    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let mut state = Self::init_state(snapshot.grid_width, snapshot.grid_height)?;
        for placement in snapshot.history {
            anyhow::ensure!(placement.player != EMPTY, "{} uses the empty color", placement);
            let col = isize::try_from(placement.col).unwrap_or(isize::MAX);
            make_turn(&mut state, col, placement.player)
                .map_err(|e| anyhow::anyhow!("{} cannot be replayed: {}", placement, e))?;
            anyhow::ensure!(
                state.last() == Some(placement),
                "{} does not land where gravity puts it",
                placement
            );
        }
        anyhow::ensure!(state.grid == snapshot.grid, "grid disagrees with history");
        Ok(state)
    }
}

/// Accessors.
impl GameState {
    pub fn width(&self) -> usize {
        self.grid_width
    }
    pub fn height(&self) -> usize {
        self.grid_height
    }
    pub fn grid(&self) -> &[Vec<Color>] {
        &self.grid
    }
    pub fn history(&self) -> &[Placement] {
        &self.history
    }
    /// Number of tokens played so far.
    pub fn turns(&self) -> usize {
        self.history.len()
    }
    /// The most recent placement, if any.
    pub fn last(&self) -> Option<Placement> {
        self.history.last().copied()
    }
    /// Color at a cell, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Color> {
        self.grid.get(row)?.get(col).copied()
    }
    /// Columns that can still take a token.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.grid_width)
            .filter(|&col| trace_row_coordinate(self, col).is_some())
            .collect()
    }
}

/// Terminal detection.
impl GameState {
    /// The winner, if the last token completed a run of [`LINE_LEN`].
    ///
    /// Only lines through the most recent placement are scanned: every token
    /// before it was already checked when it was played, and a new run must
    /// include the cell that was just filled.
    pub fn is_terminal(&self) -> Option<PlayerId> {
        let last = self.last()?;
        Line::all()
            .into_iter()
            .any(|line| {
                let (row, col) = line.start(&last, self.grid_width);
                check_line(self, row, col, line.direction(), LINE_STEPS, last.player)
            })
            .then_some(last.player)
    }
    /// True once no column can take another token.
    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(|&color| color != EMPTY)
    }
    /// Full grid with no winner.
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.is_terminal().is_none()
    }
}

/// A 7x6 game played forward by uniformly random legal moves, stopping at a
/// random turn, at a win, or when the grid fills.
impl Arbitrary for GameState {
    fn random() -> Self {
        let (width, height) = (7, 6);
        let mut state = Self::blank(width, height);
        let mut rotation = Rotation::default();
        let turns = rand::random_range(0..=width * height);
        for _ in 0..turns {
            if state.is_terminal().is_some() {
                break;
            }
            let open = state.open_columns();
            if open.is_empty() {
                break;
            }
            let col = open[rand::random_range(0..open.len())];
            if make_turn(&mut state, col as isize, rotation.advance()).is_err() {
                break;
            }
        }
        state
    }
}
