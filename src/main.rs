//! Headless match between two AI players.
//!
//! Usage: `dots_and_boxes [dots] [rounds]`. Set `RUST_LOG=info` to see the
//! round results, `RUST_LOG=debug` for per-move search statistics.

use dots_and_boxes::config::{MatchConfig, DEFAULT_DOTS};
use dots_and_boxes::game_repr::Side;
use dots_and_boxes::orchestrator::Orchestrator;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let dots = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_DOTS)
        .max(2);
    let rounds = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(10);

    let mut config = MatchConfig::default().with_rounds(rounds);
    config.dots = dots;
    log::info!(
        "{} vs {} on {}x{} dots, {} rounds",
        config.player_one.display_string(),
        config.player_two.display_string(),
        dots,
        dots,
        rounds
    );

    let mut orchestrator = Orchestrator::from_config(&config);
    match orchestrator.run() {
        Ok(board) => {
            println!("Player 1: {}", board.wins(Side::One));
            println!("Player 2: {}", board.wins(Side::Two));
            println!("Tie: {}", board.ties);
        }
        Err(err) => {
            log::error!("match aborted: {}", err);
            std::process::exit(1);
        }
    }
}
