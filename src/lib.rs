//! Rules engine for Connect-Four-style games.
//!
//! Tokens drop into the columns of a fixed grid and settle in the lowest free
//! cell. A game is over once the last token completes a run of [`LINE_LEN`]
//! same-colored tokens vertically, horizontally, or along either diagonal.
//!
//! ## State
//!
//! - [`GameState`] — The grid, its dimensions, and the append-only move history
//! - [`Placement`] — One history entry: where a token landed and whose it is
//!
//! ## Rules
//!
//! - [`make_turn`] — Validates a column and drops a token into it
//! - [`trace_row_coordinate`] — Landing row for a column under gravity
//! - [`check_line`] — Counts consecutive tokens along a direction
//! - [`Line`] — The four directions a winning run can take
//!
//! ## Driving a game
//!
//! - [`Rotation`] — Alternates between the two [`PLAYERS`]
//! - [`Driver`] — Reads columns from any input and plays them out (feature `cli`)
//! - [`Args`] — Command line configuration for the `play` binary (feature `cli`)
mod engine;
mod error;
mod line;
mod placement;
mod players;
mod render;
mod state;

#[cfg(feature = "cli")]
mod cli;
#[cfg(feature = "cli")]
mod driver;

pub use engine::*;
pub use error::*;
pub use line::*;
pub use placement::*;
pub use players::*;
pub use render::*;
pub use state::*;

#[cfg(feature = "cli")]
pub use cli::*;
#[cfg(feature = "cli")]
pub use driver::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Cell contents: a player id, or [`EMPTY`].
pub type Color = usize;
/// Player identifier. Never equal to [`EMPTY`] for a real player.
pub type PlayerId = Color;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RULE PARAMETERS
// ============================================================================
/// Marker for an unoccupied cell.
pub const EMPTY: Color = 0;
/// Run length required to win.
pub const LINE_LEN: usize = 4;
/// How far a scan backs up from the last placed token.
pub const LINE_OFFSET: usize = LINE_LEN - 1;
/// Scan window covering every run of [`LINE_LEN`] through a single cell.
pub const LINE_STEPS: usize = LINE_LEN * 2 - 1;
/// The two seated players, in turn order.
pub const PLAYERS: [PlayerId; 2] = [1, 2];

// ============================================================================
// DRIVER DEFAULTS
// ============================================================================
/// Grid width used when none is configured.
pub const DEFAULT_WIDTH: usize = 10;
/// Grid height used when none is configured.
pub const DEFAULT_HEIGHT: usize = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so the rendered board is not interleaved with log lines.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
