//! Treasure Hunter
//!
//! Main entry point for the game.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use th_core::{GameError, GameLoop, GameLoopResult, GameRng};
use th_ui::{LineInput, TerminalWindow};

/// Treasure Hunter - hunt for treasure, trade with the shop, stay solvent
#[derive(Parser, Debug)]
#[command(name = "treasure-hunter")]
#[command(author, version, about = "Treasure Hunter - find all three treasures!", long_about = None)]
struct Args {
    /// Seed for the random number generator (replays a session)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Diagnostic log filter written to stderr (e.g. "debug", "th_core=trace")
    #[arg(long = "log")]
    log: Option<String>,
}

fn main() -> Result<(), GameError> {
    let args = Args::parse();

    if let Some(ref filter) = args.log {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .init();
    }

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let Some(mut game) = GameLoop::welcome(LineInput::stdin(), TerminalWindow::stdout(), rng)?
    else {
        return Ok(());
    };

    match game.run()? {
        GameLoopResult::PlayerWon => tracing::info!("session ended: won"),
        GameLoopResult::PlayerLost => tracing::info!("session ended: lost"),
        GameLoopResult::PlayerQuit | GameLoopResult::Continue => {
            tracing::info!("session ended: quit")
        }
    }

    Ok(())
}
