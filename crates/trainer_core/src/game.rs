//! Game state on top of the `cozy-chess` rules engine.
//!
//! The engines never generate or validate moves themselves. Everything that
//! is a question of chess rules (legality, check, draws, notation) goes
//! through [`Game`], which owns a working board plus the stack of prior
//! boards needed to undo moves.

use cozy_chess::{Board, Color, File, Move, Piece, Square};

use crate::error::{Result, TrainerError};

/// A piece together with its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColoredPiece {
    pub color: Color,
    pub piece: Piece,
}

/// A legal move annotated with what it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalMove {
    pub mv: Move,
    /// The piece being moved
    pub piece: Piece,
    /// The piece taken by this move, including en passant
    pub captured: Option<Piece>,
    pub gives_check: bool,
}

impl LegalMove {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Why a position is drawn by rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    ThreefoldRepetition,
    InsufficientMaterial,
    FiftyMoveRule,
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Draw(DrawReason),
}

impl Outcome {
    /// Game-end text shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Checkmate {
                winner: Color::White,
            } => "Checkmate! White wins!",
            Outcome::Checkmate {
                winner: Color::Black,
            } => "Checkmate! Black wins!",
            Outcome::Draw(DrawReason::Stalemate) => "Draw by stalemate",
            Outcome::Draw(DrawReason::ThreefoldRepetition) => "Draw by threefold repetition",
            Outcome::Draw(DrawReason::InsufficientMaterial) => "Draw by insufficient material",
            Outcome::Draw(DrawReason::FiftyMoveRule) => "Draw by fifty-move rule",
        }
    }
}

#[derive(Clone, Debug)]
struct Snapshot {
    board: Board,
    mv: Move,
}

/// A chess game: the current board, the boards that led to it, and the
/// position keys used for repetition detection.
///
/// Moves are applied copy-make style. `undo` restores the exact prior board,
/// castling rights, en passant square and clocks included.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    undo_stack: Vec<Snapshot>,
    /// Hash of every position reached, current position last
    keys: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Game {
    /// The standard starting position.
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_board(board: Board) -> Self {
        let key = board.hash();
        Self {
            board,
            undo_stack: Vec::new(),
            keys: vec![key],
        }
    }

    /// Parses a FEN string. The half-move and full-move counters may be
    /// omitted and default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        match fields.len() {
            4 => fields.extend(["0", "1"]),
            5 => fields.push("1"),
            _ => {}
        }
        let normalized = fields.join(" ");

        Board::from_fen(&normalized, false)
            .map(Self::from_board)
            .map_err(|err| TrainerError::InvalidPosition {
                fen: fen.to_string(),
                reason: err.to_string(),
            })
    }

    pub fn to_fen(&self) -> String {
        self.board.to_string()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Full-move number, starting at 1 and incremented after Black moves.
    pub fn move_number(&self) -> u16 {
        self.board.fullmove_number()
    }

    // =========================================================================
    // Move enumeration
    // =========================================================================

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    /// Legal moves of the piece standing on `from`.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        self.board.generate_moves_for(from.bitboard(), |piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    /// Number of legal moves, without collecting them.
    pub fn move_count(&self) -> usize {
        let mut count = 0;
        self.board.generate_moves(|piece_moves| {
            count += piece_moves.len();
            false
        });
        count
    }

    /// Legal moves with capture and check flags.
    pub fn annotated_moves(&self) -> Vec<LegalMove> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            let piece = piece_moves.piece;
            for mv in piece_moves {
                let mut child = self.board.clone();
                child.play_unchecked(mv);
                moves.push(LegalMove {
                    mv,
                    piece,
                    captured: self.captured_piece(mv),
                    gives_check: !child.checkers().is_empty(),
                });
            }
            false
        });
        moves
    }

    /// The piece `mv` would capture, if any. En passant captures a pawn on a
    /// square other than the destination; castling (king onto its own rook)
    /// captures nothing.
    pub fn captured_piece(&self, mv: Move) -> Option<Piece> {
        let them = self.board.colors(!self.board.side_to_move());
        if them.has(mv.to) {
            return self.board.piece_on(mv.to);
        }
        let is_pawn = self.board.piece_on(mv.from) == Some(Piece::Pawn);
        if is_pawn && mv.from.file() != mv.to.file() {
            return Some(Piece::Pawn);
        }
        None
    }

    fn has_legal_moves(&self) -> bool {
        self.board
            .generate_moves(|piece_moves| !piece_moves.is_empty())
    }

    // =========================================================================
    // Apply / undo
    // =========================================================================

    /// Plays `mv`. A move the board refuses leaves the game untouched and
    /// reports [`TrainerError::IllegalMove`].
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        let mut next = self.board.clone();
        if next.try_play(mv).is_err() {
            return Err(TrainerError::IllegalMove {
                mv,
                fen: self.to_fen(),
            });
        }

        let prev = std::mem::replace(&mut self.board, next);
        self.keys.push(self.board.hash());
        self.undo_stack.push(Snapshot { board: prev, mv });
        Ok(())
    }

    /// Takes back the last applied move. Returns `None` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let snapshot = self.undo_stack.pop()?;
        self.keys.pop();
        self.board = snapshot.board;
        Some(snapshot.mv)
    }

    /// Applies `mv`, runs `f` on the resulting position and undoes the move
    /// again, whether or not `f` succeeded.
    pub fn with_move<T>(&mut self, mv: Move, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.apply(mv)?;
        let result = f(self);
        self.undo();
        result
    }

    // =========================================================================
    // Position predicates
    // =========================================================================

    pub fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_legal_moves()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// The current position has occurred at least three times in this game.
    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.board.hash();
        self.keys.iter().filter(|&&key| key == current).count() >= 3
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// bishops only with every bishop on the same square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let board = &self.board;
        let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = board.pieces(Piece::Knight);
        let bishops = board.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }

        let light = bishops.into_iter().filter(|&sq| is_light_square(sq)).count();
        light == 0 || light == bishops.len() as usize
    }

    /// The game result if the position is terminal.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome_with_move_count(self.move_count())
    }

    /// Same as [`Game::outcome`] for callers that already counted the legal
    /// moves of this position.
    pub fn outcome_with_move_count(&self, legal_moves: usize) -> Option<Outcome> {
        if legal_moves == 0 {
            return Some(if self.is_check() {
                Outcome::Checkmate {
                    winner: !self.side_to_move(),
                }
            } else {
                Outcome::Draw(DrawReason::Stalemate)
            });
        }
        if self.is_insufficient_material() {
            return Some(Outcome::Draw(DrawReason::InsufficientMaterial));
        }
        if self.is_fifty_move_draw() {
            return Some(Outcome::Draw(DrawReason::FiftyMoveRule));
        }
        if self.is_threefold_repetition() {
            return Some(Outcome::Draw(DrawReason::ThreefoldRepetition));
        }
        None
    }

    pub fn draw_reason(&self) -> Option<DrawReason> {
        match self.outcome() {
            Some(Outcome::Draw(reason)) => Some(reason),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    // =========================================================================
    // Board introspection
    // =========================================================================

    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some(ColoredPiece { color, piece })
    }

    /// The full board indexed `[rank][file]`, rank 0 being White's back rank.
    pub fn snapshot(&self) -> [[Option<ColoredPiece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for sq in Square::ALL {
            grid[sq.rank() as usize][sq.file() as usize] = self.piece_at(sq);
        }
        grid
    }

    // =========================================================================
    // UCI move text
    // =========================================================================

    /// Formats `mv` in UCI long algebraic notation. Castling is written as
    /// the king's two-square step (`e1g1`), not as king-takes-rook.
    pub fn move_to_uci(&self, mv: Move) -> String {
        let mut to = mv.to;
        if self.is_castle(mv) {
            let file = if (mv.to.file() as usize) > (mv.from.file() as usize) {
                File::G
            } else {
                File::C
            };
            to = Square::new(file, mv.from.rank());
        }

        let mut text = format!("{}{}", mv.from, to);
        if let Some(promo) = mv.promotion {
            text.push(piece_char(promo));
        }
        text
    }

    /// Resolves UCI move text against the legal moves of this position.
    pub fn parse_uci_move(&self, text: &str) -> Result<Move> {
        let text = text.trim().to_ascii_lowercase();
        let legal = self.legal_moves();

        if let Some(&mv) = legal.iter().find(|&&mv| self.move_to_uci(mv) == text) {
            return Ok(mv);
        }
        // Also accept the rules engine's own king-takes-rook castling form
        if let Ok(mv) = text.parse::<Move>() {
            if legal.contains(&mv) {
                return Ok(mv);
            }
        }

        Err(TrainerError::InvalidMoveText {
            text,
            fen: self.to_fen(),
        })
    }

    fn is_castle(&self, mv: Move) -> bool {
        self.board.piece_on(mv.from) == Some(Piece::King)
            && self.board.colors(self.board.side_to_move()).has(mv.to)
    }
}

fn is_light_square(sq: Square) -> bool {
    (sq.file() as usize + sq.rank() as usize) % 2 == 1
}

fn piece_char(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
