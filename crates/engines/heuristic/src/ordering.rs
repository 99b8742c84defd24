//! Move ordering for alpha-beta pruning
//!
//! Captures are tried first, most valuable victim before least valuable
//! attacker, followed by promotions. Quiet moves keep their generation
//! order, so the result is deterministic for a given position.

use cozy_chess::{Move, Piece};
use std::cmp::Reverse;
use trainer_core::Game;

/// Promotion bonus sits below any capture of a minor piece.
const PROMOTION_BONUS: i32 = 25;

fn ordering_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 1,
        Piece::Knight | Piece::Bishop => 3,
        Piece::Rook => 5,
        Piece::Queen => 9,
        Piece::King => 10,
    }
}

fn move_score(game: &Game, mv: Move) -> i32 {
    let mut score = 0;
    if let Some(victim) = game.captured_piece(mv) {
        let attacker = game
            .board()
            .piece_on(mv.from)
            .map(ordering_value)
            .unwrap_or(0);
        // MVV-LVA
        score += ordering_value(victim) * 10 - attacker + 10;
    }
    if let Some(promotion) = mv.promotion {
        score += PROMOTION_BONUS + ordering_value(promotion);
    }
    score
}

/// Sorts `moves` best-first for the side to move in `game`.
pub fn order_moves(game: &Game, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| Reverse(move_score(game, mv)));
}
