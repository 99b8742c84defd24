pub mod config;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod score;
pub mod uci;

pub use config::*;
pub use difficulty::*;
pub use error::{Result, TrainerError};
pub use game::*;
pub use score::*;
pub use uci::*;

// Rules-engine types the engines and front-ends share
pub use cozy_chess::{Color, Move, Piece, Square};

// =============================================================================
// Engine trait, implemented by the move-selecting engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The move the engine chose
    pub best_move: Move,
    /// Score of the chosen move before any random jitter, in pawns from
    /// White's perspective
    pub score: f64,
    /// Plies searched below the root move (0 for a random pick)
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
    /// Number of root moves that were actually scored
    pub candidates: usize,
    /// True when the move was drawn at random without searching
    pub random_pick: bool,
}

/// Trait implemented by the chess engines behind the trainer.
///
/// An engine is an explicitly constructed value owned by its caller. There is
/// no process-wide engine state or initialisation step.
pub trait Engine: Send {
    /// Chooses a move for the side to move at the engine's current
    /// difficulty. Fails with [`TrainerError::GameOver`] when the game is
    /// already decided.
    fn search(&mut self, game: &Game) -> Result<SearchResult>;

    /// Static score of the position, White positive, without tree search.
    fn evaluate(&self, game: &Game) -> f64;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// UCI `option` lines advertised after `uci`.
    fn options(&self) -> Vec<String> {
        Vec::new()
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
