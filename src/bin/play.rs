//! Play Binary
//!
//! Two-player game on the terminal: one column index per turn on stdin.
//!
//! Options: --width, --height, --history

use clap::Parser;
use connectfour::*;

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let Ok(state) = args.state() else {
        log::error!("invalid dimensions {} x {}", args.width, args.height);
        println!("failed to initialize game state");
        std::process::exit(1);
    };
    args.play(state)?;
    Ok(())
}
