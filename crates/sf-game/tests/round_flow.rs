//! End-to-end round flow: load config, generate a matrix, score it

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sf_game::{GameConfig, GameError, MatrixGenerator, RoundEvaluator, presets};

const DEMO_CONFIG: &str = include_str!("../../../demos/config.json");

#[test]
fn demo_config_matches_classic_preset() {
    let loaded = GameConfig::from_json(DEMO_CONFIG).unwrap();
    assert_eq!(loaded, presets::classic());
}

#[test]
fn demo_config_rejects_truncated_document() {
    let truncated = &DEMO_CONFIG[..DEMO_CONFIG.len() / 2];
    assert!(matches!(
        GameConfig::from_json(truncated),
        Err(GameError::Parse(_))
    ));
}

#[test]
fn generated_matrices_respect_grid_invariants() {
    let config = presets::classic();
    let mut with_bonus = 0usize;
    let mut without_bonus = 0usize;

    for seed in 0..200 {
        let mut generator = MatrixGenerator::with_rng(ChaCha8Rng::seed_from_u64(seed));
        let matrix = generator.generate(&config).unwrap();

        assert_eq!(matrix.len(), 3);
        for row in &matrix {
            assert_eq!(row.len(), 3);
            for symbol in row {
                assert!(config.symbols.contains_key(symbol));
            }
        }

        let bonus_cells = matrix
            .iter()
            .flatten()
            .filter(|symbol| config.is_bonus(symbol))
            .count();
        assert!(bonus_cells <= 1);
        if bonus_cells == 1 {
            with_bonus += 1;
        } else {
            without_bonus += 1;
        }
    }

    // 1-in-10 injection per cell: both outcomes show up over 200 rounds
    assert!(with_bonus > 0);
    assert!(without_bonus > 0);
}

#[test]
fn generated_round_evaluates_identically_twice() {
    let config = GameConfig::from_json(DEMO_CONFIG).unwrap();
    let mut generator = MatrixGenerator::with_rng(ChaCha8Rng::seed_from_u64(99));
    let matrix = generator.generate(&config).unwrap();

    let evaluator = RoundEvaluator::new(&config);
    let first = evaluator.evaluate(&matrix, 25.0).unwrap();
    let second = evaluator.evaluate(&matrix, 25.0).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.matrix, matrix);
}

#[test]
fn threshold_selection_tracks_occurrence_count() {
    let config = presets::classic();
    let evaluator = RoundEvaluator::new(&config);
    let fillers = ["B", "C", "D", "E", "F", "B"];

    for count in 3..=9usize {
        let cells: Vec<String> = (0..9)
            .map(|i| {
                if i < count {
                    "A".to_string()
                } else {
                    fillers[i - count].to_string()
                }
            })
            .collect();
        let matrix: Vec<Vec<String>> = cells.chunks(3).map(<[String]>::to_vec).collect();

        let result = evaluator.evaluate(&matrix, 1.0).unwrap();
        let applied = &result.applied_winning_combinations["A"];
        assert!(
            applied.contains(&format!("same_symbol_{count}_times")),
            "count {count} selected {applied:?}"
        );
    }
}

#[test]
fn full_grid_of_one_symbol_hits_every_family() {
    let config = presets::classic();
    let evaluator = RoundEvaluator::new(&config);
    let matrix = vec![vec!["A".to_string(); 3]; 3];

    // Count score: 20 * 50 = 1000. Patterns: three rows (2^3), three
    // columns (2^3), both diagonals (5^2) = 1600.
    let result = evaluator.evaluate(&matrix, 1.0).unwrap();
    assert_eq!(result.reward, 1_600_000.0);

    let applied = &result.applied_winning_combinations["A"];
    assert_eq!(applied[0], "same_symbol_9_times");
    assert_eq!(
        applied.iter().filter(|n| *n == "same_symbols_horizontally").count(),
        3
    );
    assert_eq!(
        applied.iter().filter(|n| *n == "same_symbols_vertically").count(),
        3
    );
    assert!(applied.contains(&"same_symbols_diagonally_left_to_right".to_string()));
    assert!(applied.contains(&"same_symbols_diagonally_right_to_left".to_string()));
}

#[test]
fn pattern_only_symbols_anchor_no_reward() {
    // Drop the count rules so the horizontal match has nothing to anchor to
    let mut config = presets::classic();
    config
        .win_combinations
        .retain(|_, combination| combination.count.is_none());

    let evaluator = RoundEvaluator::new(&config);
    let matrix = vec![
        vec!["A".to_string(), "A".to_string(), "A".to_string()],
        vec!["B".to_string(), "C".to_string(), "D".to_string()],
        vec!["D".to_string(), "E".to_string(), "F".to_string()],
    ];

    let result = evaluator.evaluate(&matrix, 10.0).unwrap();
    assert_eq!(result.reward, 0.0);
    // The match itself is still recorded
    assert_eq!(
        result.applied_winning_combinations["A"],
        vec!["same_symbols_horizontally".to_string()]
    );
}

#[test]
fn seeded_generator_reproduces_rounds() {
    let config = presets::classic();
    let first = MatrixGenerator::seeded(7).generate(&config).unwrap();
    let second = MatrixGenerator::seeded(7).generate(&config).unwrap();
    assert_eq!(first, second);
}
