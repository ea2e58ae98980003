use super::*;
use colored::Colorize;
use std::collections::VecDeque;
use std::io::BufRead;
use std::io::Write;
use std::num::IntErrorKind;

/// How a driven game came to a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The last move completed a run for this player.
    Winner(PlayerId),
    /// Grid filled up with no winner.
    Draw,
    /// The engine refused a move.
    Rejected(GameError),
    /// Input token that is not a column index.
    Unparsable(String),
    /// Input ran out before the game ended.
    Exhausted,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winner(player) => write!(f, "player {} wins", player),
            Self::Draw => write!(f, "draw"),
            Self::Rejected(e) => write!(f, "rejected: {}", e),
            Self::Unparsable(token) => write!(f, "unparsable input {:?}", token),
            Self::Exhausted => write!(f, "input exhausted"),
        }
    }
}

/// Plays a game out of whitespace-separated column indices.
///
/// Players alternate through a [`Rotation`]. After every accepted move the
/// state is rendered to `output`. The first error, win, or draw ends the
/// game.
pub struct Driver<R, W> {
    state: GameState,
    rotation: Rotation,
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R, W> Driver<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(state: GameState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
            rotation: Rotation::default(),
            pending: VecDeque::new(),
        }
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Reads and applies moves until the game stops.
    ///
    /// `Err` only for I/O failures; every game-level stop is an [`Outcome`].
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        loop {
            let Some(token) = self.token()? else {
                log::info!("[driver] input exhausted after {} turns", self.state.turns());
                return Ok(Outcome::Exhausted);
            };
            let Some(col) = column(&token) else {
                log::warn!("[driver] unparsable column {:?}", token);
                let message = format!("error: {} is not a column index", token);
                writeln!(self.output, "{}", message.red())?;
                return Ok(Outcome::Unparsable(token));
            };
            let player = self.rotation.advance();
            if let Err(e) = make_turn(&mut self.state, col, player) {
                log::warn!("[driver] P{} rejected at column {}: {}", player, col, e);
                writeln!(self.output, "{}", format!("error: {}", e).red())?;
                return Ok(Outcome::Rejected(e));
            }
            if let Some(placement) = self.state.last() {
                log::debug!("[driver] placed {}", placement);
            }
            write!(self.output, "{}", self.state)?;
            if let Some(winner) = self.state.is_terminal() {
                log::info!("[driver] P{} wins on turn {}", winner, self.state.turns());
                writeln!(self.output, "{}", "gg".green())?;
                return Ok(Outcome::Winner(winner));
            }
            if self.state.is_draw() {
                log::info!("[driver] draw on turn {}", self.state.turns());
                writeln!(self.output, "{}", "draw".yellow())?;
                return Ok(Outcome::Draw);
            }
        }
    }

    fn token(&mut self) -> anyhow::Result<Option<String>> {
        while self.pending.is_empty() {
            let ref mut line = String::new();
            if self.input.read_line(line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
        Ok(self.pending.pop_front())
    }
}

/// Column index from an input token. Integers too large for `isize` are
/// saturated, so they still count as out-of-range columns.
fn column(token: &str) -> Option<isize> {
    match token.parse::<isize>() {
        Ok(col) => Some(col),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(isize::MAX),
            IntErrorKind::NegOverflow => Some(isize::MIN),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drive(width: usize, height: usize, input: &str) -> (Outcome, GameState, String) {
        let state = GameState::init_state(width, height).unwrap();
        let mut output = Vec::new();
        let mut driver = Driver::new(state, Cursor::new(input.to_string()), &mut output);
        let outcome = driver.run().unwrap();
        let state = driver.into_state();
        (outcome, state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn first_player_wins_vertically() {
        let (outcome, state, output) = drive(10, 10, "0 1 0 1 0 1 0 1 0");
        assert_eq!(outcome, Outcome::Winner(1));
        assert_eq!(state.turns(), 7);
        assert!(output.contains("gg"));
        assert!(output.contains("terminal: YES (player 1 is a winner)"));
    }

    #[test]
    fn players_alternate() {
        let (outcome, state, _) = drive(7, 6, "3\n3\n4\n");
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(
            state.history().iter().map(|p| p.player).collect::<Vec<_>>(),
            vec![1, 2, 1]
        );
    }

    #[test]
    fn stops_on_invalid_column() {
        let (outcome, state, output) = drive(10, 10, "2 10 3");
        assert_eq!(outcome, Outcome::Rejected(GameError::InvalidColumn));
        assert_eq!(state.turns(), 1);
        assert!(output.contains("error: column index is outside of the grid range"));
    }

    #[test]
    fn stops_on_negative_column() {
        let (outcome, state, _) = drive(10, 10, "-1");
        assert_eq!(outcome, Outcome::Rejected(GameError::InvalidColumn));
        assert_eq!(state.turns(), 0);
    }

    #[test]
    fn stops_on_oversized_column() {
        let (outcome, state, output) = drive(10, 10, "99999999999999999999");
        assert_eq!(outcome, Outcome::Rejected(GameError::InvalidColumn));
        assert_eq!(state.turns(), 0);
        assert!(output.contains("error: column index is outside of the grid range"));
        let (outcome, _, _) = drive(10, 10, "-99999999999999999999");
        assert_eq!(outcome, Outcome::Rejected(GameError::InvalidColumn));
    }

    #[test]
    fn column_tokens() {
        assert_eq!(column("3"), Some(3));
        assert_eq!(column("-2"), Some(-2));
        assert_eq!(column("99999999999999999999"), Some(isize::MAX));
        assert_eq!(column("x9"), None);
        assert_eq!(column(""), None);
    }

    #[test]
    fn stops_on_full_column() {
        let (outcome, state, output) = drive(3, 2, "0 0 0");
        assert_eq!(outcome, Outcome::Rejected(GameError::ColumnFull));
        assert_eq!(state.turns(), 2);
        assert!(output.contains("error: token cannot be placed"));
    }

    #[test]
    fn stops_on_garbage() {
        let (outcome, state, output) = drive(10, 10, "1 two 3");
        assert_eq!(outcome, Outcome::Unparsable(String::from("two")));
        assert_eq!(state.turns(), 1);
        assert!(output.contains("error: two is not a column index"));
    }

    #[test]
    fn stops_on_draw() {
        let (outcome, state, output) = drive(2, 2, "0 1 1 0");
        assert_eq!(outcome, Outcome::Draw);
        assert!(state.is_full());
        assert!(output.contains("draw"));
    }

    #[test]
    fn renders_after_every_move() {
        let (_, _, output) = drive(4, 4, "0 1 2");
        assert_eq!(output.matches("size:     4 x 4").count(), 3);
        assert!(output.contains("turn:     3"));
    }

    #[test]
    fn empty_input() {
        let (outcome, state, output) = drive(4, 4, "");
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(state.turns(), 0);
        assert!(output.is_empty());
    }
}
