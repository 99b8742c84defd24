//! Root move-selection policy
//!
//! Weaker levels are not only searched shallower: they may play a random
//! move outright, look at the root moves in shuffled order, examine fewer
//! of them and add noise to each score. All of that is decided here so the
//! searcher itself stays a plain minimax.

use rand::Rng;

/// Chance that a novice plays a uniformly random move without searching.
pub const RANDOM_MOVE_PROBABILITY: f64 = 0.3;
/// Highest skill that may play a random move.
pub const NOVICE_MAX_SKILL: u8 = 2;
/// Root moves are shuffled below this skill.
pub const SHUFFLE_BELOW_SKILL: u8 = 5;
/// Fewest root moves ever analysed (when that many exist).
pub const MIN_CANDIDATES: usize = 3;
/// Skill at which root scores stop receiving random jitter.
pub const JITTER_CEILING: u8 = 8;

/// How the root moves are chosen, keyed by skill tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// May skip the search and play a random move; otherwise as `Casual`.
    Novice,
    /// Searches a shuffled root list.
    Casual,
    /// Searches the root in move-ordering order.
    Full,
}

impl SelectionPolicy {
    pub fn for_skill(skill: u8) -> Self {
        if skill <= NOVICE_MAX_SKILL {
            SelectionPolicy::Novice
        } else if skill < SHUFFLE_BELOW_SKILL {
            SelectionPolicy::Casual
        } else {
            SelectionPolicy::Full
        }
    }

    /// Rolls for a random move. Always false outside the novice tier.
    pub fn rolls_random_move<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        self == SelectionPolicy::Novice && rng.gen_bool(RANDOM_MOVE_PROBABILITY)
    }

    pub fn shuffles_root(self) -> bool {
        self != SelectionPolicy::Full
    }
}

/// Number of root moves analysed out of `total` legal moves.
pub fn candidate_count(skill: u8, total: usize) -> usize {
    (skill as usize * 2).min(total).max(MIN_CANDIDATES).min(total)
}

/// Width of the uniform noise added to a root score. Zero from
/// [`JITTER_CEILING`] upwards.
pub fn jitter_amplitude(skill: u8) -> f64 {
    JITTER_CEILING.saturating_sub(skill) as f64
}

/// Draws a jitter term in `[-amplitude / 2, amplitude / 2)`.
pub fn jitter<R: Rng + ?Sized>(skill: u8, rng: &mut R) -> f64 {
    let amplitude = jitter_amplitude(skill);
    if amplitude == 0.0 {
        return 0.0;
    }
    amplitude * (rng.gen::<f64>() - 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tiers() {
        assert_eq!(SelectionPolicy::for_skill(0), SelectionPolicy::Novice);
        assert_eq!(SelectionPolicy::for_skill(2), SelectionPolicy::Novice);
        assert_eq!(SelectionPolicy::for_skill(3), SelectionPolicy::Casual);
        assert_eq!(SelectionPolicy::for_skill(4), SelectionPolicy::Casual);
        assert_eq!(SelectionPolicy::for_skill(5), SelectionPolicy::Full);
        assert_eq!(SelectionPolicy::for_skill(20), SelectionPolicy::Full);

        assert!(SelectionPolicy::Novice.shuffles_root());
        assert!(SelectionPolicy::Casual.shuffles_root());
        assert!(!SelectionPolicy::Full.shuffles_root());
    }

    #[test]
    fn test_candidate_count() {
        assert_eq!(candidate_count(0, 20), 3);
        assert_eq!(candidate_count(1, 20), 3);
        assert_eq!(candidate_count(3, 20), 6);
        assert_eq!(candidate_count(6, 20), 12);
        assert_eq!(candidate_count(20, 20), 20);
        assert_eq!(candidate_count(20, 35), 35);
        // Never more than exist
        assert_eq!(candidate_count(0, 2), 2);
        assert_eq!(candidate_count(10, 1), 1);
    }

    #[test]
    fn test_jitter_vanishes_at_ceiling() {
        assert_eq!(jitter_amplitude(0), 8.0);
        assert_eq!(jitter_amplitude(6), 2.0);
        assert_eq!(jitter_amplitude(8), 0.0);
        assert_eq!(jitter_amplitude(20), 0.0);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(jitter(8, &mut rng), 0.0);
            assert_eq!(jitter(20, &mut rng), 0.0);
            let j = jitter(0, &mut rng);
            assert!((-4.0..4.0).contains(&j));
        }
    }

    #[test]
    fn test_random_move_roll() {
        let mut rng = StdRng::seed_from_u64(42);
        let hits = (0..1000)
            .filter(|_| SelectionPolicy::Novice.rolls_random_move(&mut rng))
            .count();
        assert!((200..400).contains(&hits), "{hits} random rolls out of 1000");

        assert!((0..100).all(|_| !SelectionPolicy::Casual.rolls_random_move(&mut rng)));
        assert!((0..100).all(|_| !SelectionPolicy::Full.rolls_random_move(&mut rng)));
    }
}
