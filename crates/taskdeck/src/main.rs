//! CLI entry point for taskdeck.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use taskdeck_app::Board;

mod tui;

/// Single-board task tracker in the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "taskdeck",
    version,
    about = "taskdeck: three-lane task board with ETA statistics"
)]
struct Cli {
    /// Preload a few sample tasks onto the board.
    #[arg(long)]
    sample: bool,
}

fn main() -> Result<()> {
    let Cli { sample } = Cli::parse();
    install_tracing();

    let mut board = Board::new();
    if sample {
        seed_sample_tasks(&mut board)?;
    }
    tui::run(board)
}

fn seed_sample_tasks(board: &mut Board) -> Result<()> {
    let samples = [
        ("Sketch the landing page", "4:30"),
        ("Wire up the signup form", "45"),
        ("Review analytics queries", "30"),
    ];
    for (title, eta) in samples {
        board.add_task(title, eta)?;
    }
    Ok(())
}

fn install_tracing() {
    // EnvFilter honors RUST_LOG; default is INFO.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_core::Status;

    #[test]
    fn parse_sample_flag() {
        let cli = Cli::parse_from(["taskdeck", "--sample"]);
        assert!(cli.sample);
    }

    #[test]
    fn parse_defaults_to_empty_board() {
        let cli = Cli::parse_from(["taskdeck"]);
        assert!(!cli.sample);
    }

    #[test]
    fn sample_tasks_all_validate() {
        let mut board = Board::new();
        seed_sample_tasks(&mut board).unwrap_or_else(|err| panic!("samples must be valid: {err}"));
        assert_eq!(board.lane(Status::ToDo).len(), 3);
    }
}
