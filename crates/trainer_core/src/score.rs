//! Evaluation scores, in pawns, from White's point of view.

use cozy_chess::Color;

/// Score of a checkmate. Positive when Black is mated.
pub const MATE_SCORE: f64 = 999.0;

/// Score of any drawn position.
pub const DRAW_SCORE: f64 = 0.0;

/// Coarse reading of a score's magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// |score| > 5
    Decisive,
    /// 2 < |score| <= 5
    Clear,
    /// 0.5 < |score| <= 2
    Slight,
    Equal,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        let magnitude = score.abs();
        if magnitude > 5.0 {
            ScoreBand::Decisive
        } else if magnitude > 2.0 {
            ScoreBand::Clear
        } else if magnitude > 0.5 {
            ScoreBand::Slight
        } else {
            ScoreBand::Equal
        }
    }
}

/// The side a score favours, or `None` inside the equal band.
pub fn favoured_side(score: f64) -> Option<Color> {
    match ScoreBand::of(score) {
        ScoreBand::Equal => None,
        _ if score > 0.0 => Some(Color::White),
        _ => Some(Color::Black),
    }
}

pub fn is_mate_score(score: f64) -> bool {
    score.abs() >= MATE_SCORE
}
