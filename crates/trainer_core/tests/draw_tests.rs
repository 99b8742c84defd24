//! Tests for draw and game-over detection
//!
//! This module tests all draw conditions:
//! - Stalemate
//! - Fifty-move rule
//! - Threefold repetition
//! - Insufficient material

use trainer_core::{DrawReason, Game, Outcome, Piece};

fn game(fen: &str) -> Game {
    Game::from_fen(fen).expect("test FEN should be valid")
}

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let mv = game.parse_uci_move(text).expect("test move should be legal");
        game.apply(mv).expect("legal move should apply");
    }
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king in corner, white queen stalemates
    let pos = game("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");

    assert!(pos.legal_moves().is_empty());
    assert!(!pos.is_check(), "Stalemate means king is not in check");
    assert!(pos.is_stalemate());
    assert_eq!(pos.draw_reason(), Some(DrawReason::Stalemate));
    assert!(pos.is_game_over());
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let pos = game("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");

    assert!(pos.is_stalemate());
    assert!(!pos.is_checkmate());
    assert_eq!(pos.outcome(), Some(Outcome::Draw(DrawReason::Stalemate)));
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    let pos = game("8/8/8/4k3/8/4K3/4P3/8 w - - 100 60");

    assert!(pos.is_fifty_move_draw());
    assert_eq!(pos.draw_reason(), Some(DrawReason::FiftyMoveRule));
}

#[test]
fn test_fifty_move_rule_at_99_halfmoves() {
    let pos = game("8/8/8/4k3/8/4K3/4P3/8 w - - 99 60");

    assert!(!pos.is_fifty_move_draw());
    assert!(!pos.is_draw());
}

#[test]
fn test_fifty_move_rule_reset_on_pawn_move() {
    let mut pos = game("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60");

    let pawn_move = pos
        .annotated_moves()
        .into_iter()
        .find(|m| m.piece == Piece::Pawn)
        .expect("Should have a pawn move available");
    pos.apply(pawn_move.mv).unwrap();

    assert!(!pos.is_fifty_move_draw(), "Pawn move should reset halfmove clock");
    assert_eq!(pos.board().halfmove_clock(), 0);

    pos.undo();
    assert_eq!(pos.board().halfmove_clock(), 99, "Undo should restore the clock");
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_king_vs_king() {
    let pos = game("8/8/8/4k3/8/4K3/8/8 w - - 0 1");
    assert!(pos.is_insufficient_material());
    assert_eq!(pos.draw_reason(), Some(DrawReason::InsufficientMaterial));
}

#[test]
fn test_insufficient_material_king_bishop_vs_king() {
    let pos = game("8/8/8/4k3/8/4KB2/8/8 w - - 0 1");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_insufficient_material_king_knight_vs_king() {
    let pos = game("8/8/8/4k3/8/4KN2/8/8 w - - 0 1");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_insufficient_material_king_vs_king_knight() {
    let pos = game("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_insufficient_material_same_color_bishops() {
    // Bishops on f8 and c1, both dark squares
    let pos = game("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_opposite_color_bishops() {
    // c1 is dark, c8 is light: mate is possible
    let pos = game("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1");
    assert!(!pos.is_insufficient_material());
    assert!(!pos.is_draw());
}

#[test]
fn test_sufficient_material_with_pawn() {
    let pos = game("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1");
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_with_rook() {
    let pos = game("8/8/8/4k3/8/4K3/8/4R3 w - - 0 1");
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_two_knights() {
    let pos = game("8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1");
    assert!(!pos.is_insufficient_material());
}

// =============================================================================
// Threefold Repetition Tests
// =============================================================================

#[test]
fn test_threefold_repetition_detection() {
    let mut pos = Game::startpos();
    let shuffle = ["g1f3", "b8c6", "f3g1", "c6b8"];

    play(&mut pos, &shuffle);
    assert!(!pos.is_threefold_repetition(), "Two occurrences are not a draw");

    play(&mut pos, &shuffle);
    assert!(pos.is_threefold_repetition());
    assert_eq!(pos.draw_reason(), Some(DrawReason::ThreefoldRepetition));
    assert!(pos.is_game_over());
}

#[test]
fn test_repetition_ignores_move_counters() {
    // Same placement reached with different clocks still repeats
    let mut pos = game("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    play(&mut pos, &["f3g1", "c6b8", "g1f3", "b8c6"]);
    play(&mut pos, &["f3g1", "c6b8", "g1f3", "b8c6"]);

    assert_eq!(pos.move_number(), 7);
    assert!(pos.is_threefold_repetition());
}

// =============================================================================
// Integration Tests - Not Checkmate Scenarios
// =============================================================================

#[test]
fn test_checkmate_is_not_stalemate() {
    // Scholar's mate
    let pos = game("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");

    assert!(pos.legal_moves().is_empty());
    assert!(pos.is_check(), "Checkmate means king IS in check");
    assert!(pos.is_checkmate());
    assert!(!pos.is_draw());
    assert_eq!(pos.outcome().unwrap().message(), "Checkmate! White wins!");
}

#[test]
fn test_check_is_not_checkmate() {
    let pos = game("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");

    assert!(!pos.legal_moves().is_empty());
    assert!(pos.is_check());
    assert!(!pos.is_checkmate());
    assert!(!pos.is_game_over());
}
