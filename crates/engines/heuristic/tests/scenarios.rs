//! End-to-end scenarios through the public engine API

use heuristic_engine::{HeuristicEngine, Searcher};
use trainer_core::{DifficultyLevel, Engine, Game, Piece, TrainerError, MATE_SCORE};

#[test]
fn test_grandmaster_opening_move_is_legal() {
    let game = Game::startpos();
    let legal = game.legal_moves();
    assert_eq!(legal.len(), 20);

    let mut searcher = Searcher::with_seed(17);
    let result = searcher
        .best_move(&game, DifficultyLevel::get(8).unwrap())
        .unwrap();

    assert!(legal.contains(&result.best_move));
    assert_eq!(result.depth, 3);
    assert_eq!(result.candidates, 20);
    assert!(!result.random_pick);
    assert!(result.best_move.promotion.is_none());
}

#[test]
fn test_back_rank_mate_is_found() {
    let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    let mut searcher = Searcher::with_seed(3);

    let result = searcher
        .best_move(&game, DifficultyLevel::get(8).unwrap())
        .unwrap();
    assert_eq!(game.move_to_uci(result.best_move), "a1a8");
    assert_eq!(result.score, MATE_SCORE);

    game.apply(result.best_move).unwrap();
    assert!(game.is_checkmate());
    assert_eq!(searcher.position_score(&game), MATE_SCORE);
}

#[test]
fn test_black_finds_mate_too() {
    let game = Game::from_fen("r5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    let mut searcher = Searcher::with_seed(4);
    let result = searcher
        .best_move(&game, DifficultyLevel::get(8).unwrap())
        .unwrap();
    assert_eq!(game.move_to_uci(result.best_move), "a8a1");
    assert_eq!(result.score, -MATE_SCORE);
}

#[test]
fn test_every_level_plays_a_legal_game() {
    for level in DifficultyLevel::all() {
        let mut game = Game::startpos();
        let mut searcher = Searcher::with_seed(level.elo as u64).with_depth_cap(1);
        // Four plies: too few for any side to be mated before the last search
        for _ in 0..4 {
            let result = searcher.best_move(&game, level).unwrap();
            game.apply(result.best_move).unwrap();
        }
        assert_eq!(game.move_number(), 3, "{}", level.name);
    }
}

#[test]
fn test_engine_options() {
    let mut engine = HeuristicEngine::with_searcher(Searcher::with_seed(1), DifficultyLevel::default());
    assert_eq!(engine.level().name, "Casual Player");
    assert_eq!(engine.options().len(), 3);

    assert!(engine.set_option("Difficulty", "6"));
    assert_eq!(engine.level().name, "Expert");
    assert!(!engine.set_option("Difficulty", "9"));
    assert_eq!(engine.level().name, "Expert");

    assert!(engine.set_option("skill level", "4"));
    assert_eq!(engine.level().skill_level, 4);

    assert!(engine.set_option("Depth Cap", "2"));
    assert_eq!(engine.searcher().depth_cap(), 2);

    assert!(!engine.set_option("Hash", "64"));
    assert!(!engine.set_option("Difficulty", "hard"));
}

#[test]
fn test_engine_search_and_evaluate() {
    let mut engine = HeuristicEngine::with_searcher(
        Searcher::with_seed(6).with_depth_cap(2),
        *DifficultyLevel::get(5).unwrap(),
    );

    // Free queen on d5 for the e4 pawn
    let game = Game::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 20").unwrap();
    let result = engine.search(&game).unwrap();
    assert_eq!(game.move_to_uci(result.best_move), "e4d5");
    assert!(engine.evaluate(&game) < -5.0);

    let mated = Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
        .unwrap();
    assert!(matches!(engine.search(&mated), Err(TrainerError::GameOver)));
}

#[test]
fn test_promotion_is_preferred() {
    let game = Game::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 40").unwrap();
    let mut searcher = Searcher::with_seed(10).with_depth_cap(2);
    let result = searcher
        .best_move(&game, DifficultyLevel::get(8).unwrap())
        .unwrap();
    assert_eq!(result.best_move.promotion, Some(Piece::Queen));
}
