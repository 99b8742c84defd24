//! Heuristic Chess Engine
//!
//! Minimax with alpha-beta pruning over a hand-tuned evaluation, weakened
//! on purpose for the lower difficulty levels so a learner has a fair
//! opponent.

pub mod analysis;
pub mod eval;
pub mod ordering;
pub mod policy;
pub mod search;

use tracing::debug;
use trainer_core::{DifficultyLevel, Engine, EngineConfig, Game, Result, SearchResult};

pub use analysis::{assess, Assessment, Threat};
pub use eval::{EvalBreakdown, Evaluator, GamePhase};
pub use policy::SelectionPolicy;
pub use search::{mate_plies, Searcher};

/// Deepest depth cap a UCI client may ask for.
const MAX_DEPTH_CAP: u8 = 10;

/// Trainer opponent playing at one difficulty level at a time.
#[derive(Debug, Clone)]
pub struct HeuristicEngine {
    searcher: Searcher,
    level: DifficultyLevel,
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicEngine {
    pub fn new() -> Self {
        Self::with_searcher(Searcher::new(), DifficultyLevel::default())
    }

    pub fn with_searcher(searcher: Searcher, level: DifficultyLevel) -> Self {
        Self { searcher, level }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let level = *config.difficulty()?;
        Ok(Self::with_searcher(Searcher::from_config(config), level))
    }

    pub fn level(&self) -> &DifficultyLevel {
        &self.level
    }

    pub fn set_level(&mut self, level: DifficultyLevel) {
        debug!(level = level.name, skill = level.skill_level, "difficulty changed");
        self.level = level;
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Assessment of the position for the learner.
    pub fn assess(&self, game: &Game) -> Assessment {
        assess(game, self.searcher.evaluator())
    }
}

impl Engine for HeuristicEngine {
    fn search(&mut self, game: &Game) -> Result<SearchResult> {
        self.searcher.best_move(game, &self.level)
    }

    fn evaluate(&self, game: &Game) -> f64 {
        self.searcher.position_score(game)
    }

    fn name(&self) -> &str {
        "Heuristic Trainer v0.1"
    }

    fn options(&self) -> Vec<String> {
        vec![
            "option name Difficulty type spin default 2 min 1 max 8".to_string(),
            format!(
                "option name Skill Level type spin default {} min 0 max {}",
                self.level.skill_level,
                trainer_core::MAX_SKILL_LEVEL
            ),
            format!(
                "option name Depth Cap type spin default {} min 1 max {MAX_DEPTH_CAP}",
                self.searcher.depth_cap()
            ),
        ]
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        let Ok(value) = value.trim().parse::<u8>() else {
            return false;
        };
        if name.eq_ignore_ascii_case("Difficulty") {
            match DifficultyLevel::get(value) {
                Ok(level) => {
                    self.set_level(*level);
                    true
                }
                Err(_) => false,
            }
        } else if name.eq_ignore_ascii_case("Skill Level") {
            self.set_level(self.level.with_skill(value));
            true
        } else if name.eq_ignore_ascii_case("Depth Cap") {
            self.searcher.set_depth_cap(value.min(MAX_DEPTH_CAP));
            true
        } else {
            false
        }
    }
}
