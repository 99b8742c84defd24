//! Minimax search with alpha-beta pruning
//!
//! White maximises and Black minimises; scores are never negated between
//! plies. Difficulty only affects the root (see [`crate::policy`]): the
//! tree below each root move is searched the same way at every level.

use cozy_chess::{Color, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};
use trainer_core::{
    is_mate_score, DifficultyLevel, EngineConfig, Game, Result, SearchResult, TrainerError,
    DEFAULT_DEPTH_CAP, MATE_SCORE,
};

use crate::eval::{terminal_score, Evaluator};
use crate::ordering::order_moves;
use crate::policy::{candidate_count, jitter, SelectionPolicy};

/// Mate scores shrink by this much per ply so the quickest mate wins.
const MATE_PLY_STEP: f64 = 0.01;

/// Searched scores beyond this magnitude announce a forced mate.
const MATE_BOUND: f64 = MATE_SCORE - 1.0;

/// Picks moves for a difficulty level.
///
/// Owns its random number generator; give each thread its own searcher.
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluator: Evaluator,
    depth_cap: u8,
    rng: StdRng,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            evaluator: Evaluator::new(),
            depth_cap: DEFAULT_DEPTH_CAP,
            rng: StdRng::from_entropy(),
        }
    }

    /// Searcher whose weakened play is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let searcher = match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
        searcher.with_depth_cap(config.depth_cap)
    }

    /// Replaces the depth ceiling. A cap of zero is raised to one.
    pub fn with_depth_cap(mut self, depth_cap: u8) -> Self {
        self.depth_cap = depth_cap.max(1);
        self
    }

    pub fn set_depth_cap(&mut self, depth_cap: u8) {
        self.depth_cap = depth_cap.max(1);
    }

    pub fn depth_cap(&self) -> u8 {
        self.depth_cap
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Plies searched below each root move for `level`.
    pub fn search_depth(&self, level: &DifficultyLevel) -> u8 {
        level.search_depth.min(self.depth_cap)
    }

    /// Static score of the position with no tree search.
    pub fn position_score(&self, game: &Game) -> f64 {
        self.evaluator.evaluate(game)
    }

    /// Chooses a move for the side to move in `game`.
    ///
    /// The caller's game is never modified; the search runs on a clone.
    /// Fails with [`TrainerError::GameOver`] when the game is already
    /// decided, and with [`TrainerError::IllegalMove`] if the rules engine
    /// refuses one of its own legal moves.
    pub fn best_move(&mut self, game: &Game, level: &DifficultyLevel) -> Result<SearchResult> {
        let mut work = game.clone();
        let legal = work.legal_moves();
        if work.outcome_with_move_count(legal.len()).is_some() {
            return Err(TrainerError::GameOver);
        }

        let skill = level.skill_level;
        let policy = SelectionPolicy::for_skill(skill);

        if policy.rolls_random_move(&mut self.rng) {
            let mv = *legal.choose(&mut self.rng).ok_or(TrainerError::GameOver)?;
            let score = work.with_move(mv, |child| Ok(self.evaluator.evaluate(child)))?;
            info!(mv = %work.move_to_uci(mv), score, skill, "played random move");
            return Ok(SearchResult {
                best_move: mv,
                score,
                depth: 0,
                nodes: 1,
                candidates: 1,
                random_pick: true,
            });
        }

        let candidates = self.root_candidates(&work, skill);
        let depth = self.search_depth(level);
        let maximizing = work.side_to_move() == Color::White;
        let mut nodes = 0u64;
        // (move, raw score, jittered score)
        let mut best: Option<(Move, f64, f64)> = None;

        for &mv in &candidates {
            nodes += 1;
            let raw = work.with_move(mv, |child| {
                self.minimax(child, depth, f64::NEG_INFINITY, f64::INFINITY, 0, &mut nodes)
            })?;
            let noisy = raw + jitter(skill, &mut self.rng);
            debug!(mv = %work.move_to_uci(mv), raw, noisy, "root move");

            let better = match best {
                None => true,
                Some((_, _, current)) if maximizing => noisy > current,
                Some((_, _, current)) => noisy < current,
            };
            if better {
                best = Some((mv, raw, noisy));
            }
        }

        let (best_move, score, _) = best.ok_or(TrainerError::GameOver)?;
        info!(
            mv = %work.move_to_uci(best_move),
            score,
            depth,
            nodes,
            candidates = candidates.len(),
            level = level.name,
            "selected move"
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes,
            candidates: candidates.len(),
            random_pick: false,
        })
    }

    /// The root moves that will be scored at `skill`, in scoring order.
    /// Always a prefix of the legal moves in enumeration order, or of a
    /// shuffle of them below [`crate::policy::SHUFFLE_BELOW_SKILL`]. The
    /// root is never sorted; ordering is for interior nodes only.
    pub fn root_candidates(&mut self, game: &Game, skill: u8) -> Vec<Move> {
        let mut moves = game.legal_moves();
        if SelectionPolicy::for_skill(skill).shuffles_root() {
            moves.shuffle(&mut self.rng);
        }
        moves.truncate(candidate_count(skill, moves.len()));
        moves
    }

    /// Minimax value of `game` searched `depth` plies deep. `ply` counts
    /// plies below the root move and only shapes mate scores.
    pub(crate) fn minimax(
        &self,
        game: &mut Game,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        ply: u32,
        nodes: &mut u64,
    ) -> Result<f64> {
        if depth == 0 {
            return Ok(mate_adjusted(self.evaluator.evaluate(game), ply));
        }

        let mut moves = game.legal_moves();
        if let Some(outcome) = game.outcome_with_move_count(moves.len()) {
            return Ok(mate_adjusted(terminal_score(outcome), ply));
        }

        order_moves(game, &mut moves);
        let maximizing = game.side_to_move() == Color::White;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in moves {
            *nodes += 1;
            let score = game.with_move(mv, |child| {
                self.minimax(child, depth - 1, alpha, beta, ply + 1, nodes)
            })?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        Ok(best)
    }
}

/// Pulls a mate score `ply` steps towards zero. Other scores pass through.
pub(crate) fn mate_adjusted(score: f64, ply: u32) -> f64 {
    if is_mate_score(score) {
        score - score.signum() * ply as f64 * MATE_PLY_STEP
    } else {
        score
    }
}

/// Plies from the searched position to the mate announced by a root
/// score, counting the root move itself. `None` for ordinary scores.
pub fn mate_plies(score: f64) -> Option<u32> {
    if score.abs() <= MATE_BOUND {
        return None;
    }
    let below_root = ((MATE_SCORE - score.abs()) / MATE_PLY_STEP).round() as u32;
    Some(below_root + 1)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
