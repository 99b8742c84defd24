//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p heuristic_engine -- [level] [depth_cap] [fen]
//!
//! Examples:
//!   # Default: level 8, depth cap 3, every test position
//!   cargo flamegraph --example search_bench -p heuristic_engine
//!
//!   # Deeper than the trainer ever searches
//!   cargo run --release --example search_bench -p heuristic_engine -- 8 4
//!
//!   # Single position
//!   cargo run --release --example search_bench -p heuristic_engine -- 8 3 "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1"

use heuristic_engine::Searcher;
use std::env;
use std::time::{Duration, Instant};
use trainer_core::{DifficultyLevel, Game, Result, DEFAULT_DEPTH_CAP};

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Italian game",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    ("Back-rank mate", "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1"),
];

/// Fixed seed so runs are comparable.
const SEED: u64 = 0x5eed;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let level: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);
    let depth_cap: u8 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DEPTH_CAP);
    let level = DifficultyLevel::get(level)?;

    if let Some(fen) = args.get(3) {
        run_single_position(fen, level, depth_cap)
    } else {
        run_all_positions(level, depth_cap)
    }
}

fn run_single_position(fen: &str, level: &DifficultyLevel, depth_cap: u8) -> Result<()> {
    let game = Game::from_fen(fen)?;
    let mut searcher = Searcher::with_seed(SEED).with_depth_cap(depth_cap);

    println!("Position: {fen}");
    println!("Level: {} (skill {})", level.name, level.skill_level);
    println!("Depth: {}", searcher.search_depth(level));
    println!();

    let start = Instant::now();
    let result = searcher.best_move(&game, level)?;
    let elapsed = start.elapsed();

    println!("Best move: {}", game.move_to_uci(result.best_move));
    println!("Score: {:+.2}", result.score);
    println!("Nodes: {}", result.nodes);
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(result.nodes, elapsed));
    Ok(())
}

fn run_all_positions(level: &DifficultyLevel, depth_cap: u8) -> Result<()> {
    let mut searcher = Searcher::with_seed(SEED).with_depth_cap(depth_cap);

    println!("=== Search Benchmark Suite ===");
    println!("Level: {} (skill {})", level.name, level.skill_level);
    println!("Depth: {}", searcher.search_depth(level));
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let game = Game::from_fen(fen)?;

        print!("{name:.<30}");

        let start = Instant::now();
        let result = searcher.best_move(&game, level)?;
        let elapsed = start.elapsed();

        total_nodes += result.nodes;
        total_time += elapsed;

        println!(
            " {:<6} {:>10} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            game.move_to_uci(result.best_move),
            result.nodes,
            nps(result.nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
    Ok(())
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}
