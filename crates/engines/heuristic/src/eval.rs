//! Heuristic position evaluation
//!
//! Scores are in pawns from White's point of view. The total is built from
//! four terms, added in this order:
//!
//! 1. Material, each piece scaled by a positional modifier
//! 2. Mobility, the difference in reachable squares
//! 3. Pawn structure (doubled and isolated pawns)
//! 4. King safety (pawn shield in front of each king)
//!
//! Decided positions skip all of this: checkmate scores [`MATE_SCORE`] for
//! the winner and any draw scores exactly [`DRAW_SCORE`].

use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_pawn_quiets,
    get_rook_moves, BitBoard, Board, Color, File, Piece, Rank, Square,
};
use trainer_core::{Game, Outcome, DRAW_SCORE, MATE_SCORE};

pub const MOBILITY_WEIGHT: f64 = 0.1;
pub const PAWN_STRUCTURE_WEIGHT: f64 = 0.2;
pub const KING_SAFETY_WEIGHT: f64 = 0.3;

const CENTER_BONUS: f64 = 1.1;
const PAWN_ADVANCE_STEP: f64 = 0.05;
const CENTRAL_KNIGHT_BONUS: f64 = 1.15;
const BISHOP_DIAGONAL_BONUS: f64 = 1.1;
const OPEN_FILE_ROOK_BONUS: f64 = 1.15;
const EARLY_QUEEN_PENALTY: f64 = 0.9;
const ACTIVE_KING_BONUS: f64 = 1.2;

const DOUBLED_PAWN_PENALTY: f64 = 0.2;
const ISOLATED_PAWN_PENALTY: f64 = 0.3;
const PAWN_SHIELD_STEP: f64 = 0.2;

/// Queens still on the board before this move number are penalised.
const EARLY_QUEEN_MOVES: u16 = 10;

/// Returns the material value of a piece in pawns.
#[inline]
pub fn piece_value(piece: Piece) -> f64 {
    match piece {
        Piece::Pawn => 1.0,
        Piece::Knight => 3.2,
        Piece::Bishop => 3.33,
        Piece::Rook => 5.1,
        Piece::Queen => 8.8,
        Piece::King => 0.0,
    }
}

/// Stage of the game, recomputed for every position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl GamePhase {
    /// Opening through move 10; after that, endgame once at most four
    /// queens and rooks remain.
    pub fn of(game: &Game) -> Self {
        if game.move_number() <= 10 {
            return GamePhase::Opening;
        }
        let board = game.board();
        let majors = board.pieces(Piece::Queen).len() + board.pieces(Piece::Rook).len();
        if majors <= 4 {
            GamePhase::Endgame
        } else {
            GamePhase::Middlegame
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            GamePhase::Opening => "Focus on piece development and center control.",
            GamePhase::Middlegame => "Look for tactical opportunities and strategic piece placement.",
            GamePhase::Endgame => "Activate your king and push passed pawns.",
        }
    }
}

/// The evaluation terms before they are weighted and summed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvalBreakdown {
    /// Material with positional modifiers applied
    pub material: f64,
    /// Squares White's pieces can move to minus Black's
    pub mobility: f64,
    pub pawn_structure: f64,
    pub king_safety: f64,
}

impl EvalBreakdown {
    pub fn total(&self) -> f64 {
        self.material
            + self.mobility * MOBILITY_WEIGHT
            + self.pawn_structure * PAWN_STRUCTURE_WEIGHT
            + self.king_safety * KING_SAFETY_WEIGHT
    }
}

/// Static evaluator. Its weights are the same at every difficulty level;
/// only the search is weakened for lower levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Scores the position from White's perspective.
    pub fn evaluate(&self, game: &Game) -> f64 {
        if let Some(outcome) = game.outcome() {
            return terminal_score(outcome);
        }
        self.breakdown(game).total()
    }

    /// The individual terms of [`Evaluator::evaluate`] for a live position.
    pub fn breakdown(&self, game: &Game) -> EvalBreakdown {
        let board = game.board();
        let phase = GamePhase::of(game);
        EvalBreakdown {
            material: material(board, game.move_number(), phase),
            mobility: mobility(board),
            pawn_structure: pawn_structure(board),
            king_safety: king_safety(board),
        }
    }
}

/// Score of a finished game.
pub fn terminal_score(outcome: Outcome) -> f64 {
    match outcome {
        Outcome::Checkmate {
            winner: Color::White,
        } => MATE_SCORE,
        Outcome::Checkmate {
            winner: Color::Black,
        } => -MATE_SCORE,
        Outcome::Draw(_) => DRAW_SCORE,
    }
}

fn material(board: &Board, move_number: u16, phase: GamePhase) -> f64 {
    let mut score = 0.0;
    for sq in board.occupied() {
        let (Some(piece), Some(color)) = (board.piece_on(sq), board.color_on(sq)) else {
            continue;
        };
        let value = piece_value(piece) * position_modifier(board, piece, color, sq, move_number, phase);
        score += if color == Color::White { value } else { -value };
    }
    score
}

/// Multiplier applied to a piece's material value for where it stands.
pub(crate) fn position_modifier(
    board: &Board,
    piece: Piece,
    color: Color,
    sq: Square,
    move_number: u16,
    phase: GamePhase,
) -> f64 {
    let file = sq.file() as usize;
    let rank = sq.rank() as usize;

    let mut modifier = 1.0;
    if (3..=4).contains(&file) && (3..=4).contains(&rank) {
        modifier *= CENTER_BONUS;
    }

    match piece {
        Piece::Pawn => {
            let advanced = match color {
                Color::White => rank,
                Color::Black => 7 - rank,
            };
            modifier += advanced as f64 * PAWN_ADVANCE_STEP;
        }
        Piece::Knight => {
            if (3..=4).contains(&rank) && (2..=5).contains(&file) {
                modifier *= CENTRAL_KNIGHT_BONUS;
            }
        }
        // Every bishop is treated as standing on an open diagonal.
        Piece::Bishop => modifier *= BISHOP_DIAGONAL_BONUS,
        Piece::Rook => {
            if is_open_file(board, sq.file()) {
                modifier *= OPEN_FILE_ROOK_BONUS;
            }
        }
        Piece::Queen => {
            if move_number < EARLY_QUEEN_MOVES {
                modifier *= EARLY_QUEEN_PENALTY;
            }
        }
        Piece::King => {
            if phase == GamePhase::Endgame {
                modifier *= ACTIVE_KING_BONUS;
            }
        }
    }
    modifier
}

/// No pawn of either colour on the file.
fn is_open_file(board: &Board, file: File) -> bool {
    (board.pieces(Piece::Pawn) & file.bitboard()).is_empty()
}

/// Reachable-square difference, White positive. Independent of the side
/// to move and of check.
pub(crate) fn mobility(board: &Board) -> f64 {
    reachable_squares(board, Color::White) as f64 - reachable_squares(board, Color::Black) as f64
}

/// Pseudo-legal destinations of every piece of `color`: empty squares and
/// enemy pieces, pins and checks ignored.
fn reachable_squares(board: &Board, color: Color) -> u32 {
    let occupied = board.occupied();
    let own = board.colors(color);
    let enemy = board.colors(!color);

    let mut count = 0;
    for sq in own {
        let targets = match board.piece_on(sq) {
            Some(Piece::Pawn) => {
                get_pawn_quiets(sq, color, occupied) | (get_pawn_attacks(sq, color) & enemy)
            }
            Some(Piece::Knight) => get_knight_moves(sq),
            Some(Piece::Bishop) => get_bishop_moves(sq, occupied),
            Some(Piece::Rook) => get_rook_moves(sq, occupied),
            Some(Piece::Queen) => get_bishop_moves(sq, occupied) | get_rook_moves(sq, occupied),
            Some(Piece::King) => get_king_moves(sq),
            None => BitBoard::EMPTY,
        };
        count += (targets & !own).len();
    }
    count
}

/// Doubled pawns count against their owner. A file holding a pawn with no
/// pawn of either colour on a neighbouring file counts against the score
/// whoever owns it.
pub(crate) fn pawn_structure(board: &Board) -> f64 {
    let pawns = board.pieces(Piece::Pawn);
    let white = pawns & board.colors(Color::White);
    let black = pawns & board.colors(Color::Black);

    let mut score = 0.0;
    for file in File::ALL {
        let mask = file.bitboard();
        if (white & mask).len() > 1 {
            score -= DOUBLED_PAWN_PENALTY;
        }
        if (black & mask).len() > 1 {
            score += DOUBLED_PAWN_PENALTY;
        }
    }

    for file in File::ALL {
        if (pawns & file.bitboard()).is_empty() {
            continue;
        }
        let idx = file as usize;
        let has_neighbour = (idx > 0 && !(pawns & File::index(idx - 1).bitboard()).is_empty())
            || (idx < 7 && !(pawns & File::index(idx + 1).bitboard()).is_empty());
        if !has_neighbour {
            score -= ISOLATED_PAWN_PENALTY;
        }
    }
    score
}

/// Own pawns on the three squares directly in front of each king.
pub(crate) fn king_safety(board: &Board) -> f64 {
    let mut score = 0.0;
    for color in Color::ALL {
        let king = board.king(color);
        let shield_rank = match color {
            Color::White => king.rank() as i32 + 1,
            Color::Black => king.rank() as i32 - 1,
        };
        if !(0..8).contains(&shield_rank) {
            continue;
        }

        let own_pawns = board.colored_pieces(color, Piece::Pawn);
        let king_file = king.file() as i32;
        let shield = (king_file - 1..=king_file + 1)
            .filter(|f| (0..8).contains(f))
            .map(|f| Square::new(File::index(f as usize), Rank::index(shield_rank as usize)))
            .filter(|&sq| own_pawns.has(sq))
            .count();

        let sign = if color == Color::White { 1.0 } else { -1.0 };
        score += sign * shield as f64 * PAWN_SHIELD_STEP;
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
