//! Command line configuration for the `play` binary.
use super::*;
use clap::Parser;

/// Two players alternate dropping tokens; columns are read from stdin.
#[derive(Debug, Clone, Parser)]
#[command(name = "play", version, about)]
pub struct Args {
    /// Number of columns.
    #[arg(long, env = "CONNECT_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,
    /// Number of rows.
    #[arg(long, env = "CONNECT_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,
    /// Print the move history as JSON once the game stops.
    #[arg(long)]
    pub history: bool,
}

impl Args {
    /// Fresh state with the configured dimensions.
    pub fn state(&self) -> Result<GameState, GameError> {
        GameState::init_state(self.width, self.height)
    }

    /// Plays `state` out over stdin and stdout.
    pub fn play(&self, state: GameState) -> anyhow::Result<Outcome> {
        log::info!("[play] starting {} x {} game", state.width(), state.height());
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut driver = Driver::new(state, stdin.lock(), stdout.lock());
        let outcome = driver.run()?;
        let state = driver.into_state();
        log::info!("[play] {} after {} turns", outcome, state.turns());
        if self.history {
            println!("{}", serde_json::to_string_pretty(state.history())?);
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["play"]).unwrap();
        assert_eq!(args.width, DEFAULT_WIDTH);
        assert_eq!(args.height, DEFAULT_HEIGHT);
        assert!(!args.history);
    }

    #[test]
    fn dimensions() {
        let args = Args::try_parse_from(["play", "--width", "7", "--height", "6", "--history"])
            .unwrap();
        let state = args.state().unwrap();
        assert_eq!((state.width(), state.height()), (7, 6));
        assert!(args.history);
    }

    #[test]
    fn zero_dimension() {
        let args = Args::try_parse_from(["play", "--width", "0"]).unwrap();
        assert_eq!(args.state(), Err(GameError::InvalidDimensions));
    }

    #[test]
    fn negative_dimension() {
        assert!(Args::try_parse_from(["play", "--height", "-3"]).is_err());
    }
}
