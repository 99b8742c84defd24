use super::*;

#[test]
fn test_table_is_ordered_weakest_first() {
    let levels = DifficultyLevel::all();
    assert_eq!(levels.len(), 8);
    for pair in levels.windows(2) {
        assert!(pair[0].elo < pair[1].elo);
        assert!(pair[0].search_depth < pair[1].search_depth);
        assert!(pair[0].skill_level < pair[1].skill_level);
    }
}

#[test]
fn test_lookup_is_one_based() {
    assert_eq!(DifficultyLevel::get(1).unwrap().name, "Complete Beginner");
    let top = DifficultyLevel::get(8).unwrap();
    assert_eq!(top.name, "Grandmaster");
    assert_eq!(top.elo, 2500);
    assert_eq!(top.skill_level, 20);
}

#[test]
fn test_lookup_rejects_out_of_range() {
    assert!(matches!(
        DifficultyLevel::get(0),
        Err(TrainerError::UnknownDifficulty(0))
    ));
    assert!(matches!(
        DifficultyLevel::get(9),
        Err(TrainerError::UnknownDifficulty(9))
    ));
}

#[test]
fn test_custom_skill_is_clamped() {
    let level = DifficultyLevel::custom(99, 3);
    assert_eq!(level.skill_level, MAX_SKILL_LEVEL);
    assert_eq!(level.search_depth, 3);

    let tuned = DifficultyLevel::get(4).unwrap().with_skill(8);
    assert_eq!(tuned.skill_level, 8);
    assert_eq!(tuned.name, "Club Player");
}

#[test]
fn test_default_is_casual() {
    assert_eq!(DifficultyLevel::default().skill_level, 3);
}
