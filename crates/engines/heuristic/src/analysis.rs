//! Human-readable position assessment
//!
//! A depth-0 reading of the position: the evaluator's score, a sentence for
//! its band, short remarks on the terms that stand out and advice for the
//! current phase of the game.

use std::fmt;

use cozy_chess::Color;
use trainer_core::{favoured_side, Game, Outcome, ScoreBand};

use crate::eval::{terminal_score, EvalBreakdown, Evaluator, GamePhase};

/// Raw pawn-structure term above which it is worth a remark.
const PAWN_STRUCTURE_REMARK: f64 = 0.5;
/// Raw mobility (move-count difference) above which it is worth a remark.
const MOBILITY_REMARK: f64 = 5.0;
/// Raw king-safety term above which it is worth a remark.
const KING_SAFETY_REMARK: f64 = 0.5;

/// Immediate tactical possibilities for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threat {
    Check,
    Capture,
}

impl fmt::Display for Threat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threat::Check => write!(f, "Check threats available"),
            Threat::Capture => write!(f, "Piece captures possible"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub score: f64,
    pub band: ScoreBand,
    pub phase: GamePhase,
    /// Set when the game is already over
    pub outcome: Option<Outcome>,
    pub summary: String,
    pub threats: Vec<Threat>,
}

/// Assesses `game` without searching.
pub fn assess(game: &Game, evaluator: &Evaluator) -> Assessment {
    let phase = GamePhase::of(game);

    if let Some(outcome) = game.outcome() {
        let score = terminal_score(outcome);
        return Assessment {
            score,
            band: ScoreBand::of(score),
            phase,
            outcome: Some(outcome),
            summary: outcome.message().to_string(),
            threats: Vec::new(),
        };
    }

    let parts = evaluator.breakdown(game);
    let score = parts.total();

    let mut summary = band_sentence(score);
    summary.push_str(&remarks(&parts));
    summary.push('\n');
    summary.push_str(phase.advice());

    Assessment {
        score,
        band: ScoreBand::of(score),
        phase,
        outcome: None,
        summary,
        threats: threats(game),
    }
}

fn band_sentence(score: f64) -> String {
    let side = match favoured_side(score) {
        Some(Color::White) => "White",
        Some(Color::Black) => "Black",
        None => return "The position is approximately equal. ".to_string(),
    };
    let shown = if score > 0.0 {
        format!("+{score:.1}")
    } else {
        format!("{:.1}", -score)
    };
    let verdict = match ScoreBand::of(score) {
        ScoreBand::Decisive => "has a winning advantage",
        ScoreBand::Clear => "is clearly better",
        _ => "is slightly better",
    };
    format!("{side} {verdict} ({shown}). ")
}

fn remarks(parts: &EvalBreakdown) -> String {
    let leader = |term: f64| if term > 0.0 { "White" } else { "Black" };
    let mut text = String::new();

    if parts.pawn_structure.abs() > PAWN_STRUCTURE_REMARK {
        text.push_str(&format!(
            "{} has a better pawn structure. ",
            leader(parts.pawn_structure)
        ));
    }
    if parts.mobility.abs() > MOBILITY_REMARK {
        text.push_str(&format!("{} has more active pieces. ", leader(parts.mobility)));
    }
    if parts.king_safety.abs() > KING_SAFETY_REMARK {
        text.push_str(&format!(
            "{}'s king is better protected. ",
            leader(parts.king_safety)
        ));
    }
    text
}

fn threats(game: &Game) -> Vec<Threat> {
    let moves = game.annotated_moves();
    let mut found = Vec::new();
    if moves.iter().any(|m| m.gives_check) {
        found.push(Threat::Check);
    }
    if moves.iter().any(|m| m.is_capture()) {
        found.push(Threat::Capture);
    }
    found
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod analysis_tests;
