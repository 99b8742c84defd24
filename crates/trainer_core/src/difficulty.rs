//! Difficulty levels offered to the player.
//!
//! Eight levels, ordered from weakest to strongest. The table is static and
//! read-only, so it can be shared between threads without synchronisation.

use crate::error::{Result, TrainerError};

/// One row of the difficulty table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyLevel {
    pub name: &'static str,
    /// Approximate playing strength this level is meant to resemble
    pub elo: u32,
    /// Declared search depth in plies. The searcher caps this (3 by default).
    pub search_depth: u8,
    /// Skill on a 0..=20 scale; drives how much the move choice is weakened
    pub skill_level: u8,
    pub description: &'static str,
}

/// Highest skill value a level may declare.
pub const MAX_SKILL_LEVEL: u8 = 20;

pub const DIFFICULTY_LEVELS: [DifficultyLevel; 8] = [
    DifficultyLevel {
        name: "Complete Beginner",
        elo: 500,
        search_depth: 2,
        skill_level: 0,
        description: "Makes many mistakes",
    },
    DifficultyLevel {
        name: "Casual Player",
        elo: 800,
        search_depth: 3,
        skill_level: 3,
        description: "Basic moves",
    },
    DifficultyLevel {
        name: "Regular Player",
        elo: 1200,
        search_depth: 5,
        skill_level: 6,
        description: "Understands basics",
    },
    DifficultyLevel {
        name: "Club Player",
        elo: 1500,
        search_depth: 8,
        skill_level: 10,
        description: "Solid amateur",
    },
    DifficultyLevel {
        name: "Strong Club Player",
        elo: 1800,
        search_depth: 12,
        skill_level: 14,
        description: "Advanced amateur",
    },
    DifficultyLevel {
        name: "Expert",
        elo: 2000,
        search_depth: 15,
        skill_level: 16,
        description: "Tournament level",
    },
    DifficultyLevel {
        name: "Master",
        elo: 2200,
        search_depth: 18,
        skill_level: 18,
        description: "Professional strength",
    },
    DifficultyLevel {
        name: "Grandmaster",
        elo: 2500,
        search_depth: 20,
        skill_level: 20,
        description: "Elite level",
    },
];

impl DifficultyLevel {
    /// Looks up a level by its 1-based index.
    pub fn get(index: u8) -> Result<&'static DifficultyLevel> {
        index
            .checked_sub(1)
            .and_then(|i| DIFFICULTY_LEVELS.get(i as usize))
            .ok_or(TrainerError::UnknownDifficulty(index))
    }

    /// All levels, weakest first.
    pub fn all() -> &'static [DifficultyLevel] {
        &DIFFICULTY_LEVELS
    }

    /// An off-table level, e.g. when a UCI client sets the skill directly.
    /// Skill is clamped to `0..=MAX_SKILL_LEVEL`.
    pub fn custom(skill_level: u8, search_depth: u8) -> DifficultyLevel {
        DifficultyLevel {
            name: "Custom",
            elo: 0,
            search_depth,
            skill_level: skill_level.min(MAX_SKILL_LEVEL),
            description: "User-defined skill",
        }
    }

    /// Copy of this level with a different skill value.
    pub fn with_skill(self, skill_level: u8) -> DifficultyLevel {
        DifficultyLevel {
            skill_level: skill_level.min(MAX_SKILL_LEVEL),
            ..self
        }
    }
}

impl Default for DifficultyLevel {
    /// "Casual Player", the level a new game starts on.
    fn default() -> Self {
        DIFFICULTY_LEVELS[1]
    }
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
