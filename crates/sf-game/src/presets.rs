//! Built-in demo configuration

use std::collections::BTreeMap;

use crate::config::{
    BonusProbability, CellProbability, GameConfig, PatternGroup, Probabilities, WeightTable,
    WhenRule, WinCombination,
};
use crate::symbols::Symbol;

/// The classic 3×3 configuration: six standard symbols A–F, five bonus
/// symbols, count thresholds 3..9 and all four linear families.
///
/// Mirrored by `demos/config.json` and used throughout the test suites.
pub fn classic() -> GameConfig {
    let mut symbols = BTreeMap::new();
    symbols.insert("A".to_string(), Symbol::standard(50.0));
    symbols.insert("B".to_string(), Symbol::standard(25.0));
    symbols.insert("C".to_string(), Symbol::standard(10.0));
    symbols.insert("D".to_string(), Symbol::standard(5.0));
    symbols.insert("E".to_string(), Symbol::standard(3.0));
    symbols.insert("F".to_string(), Symbol::standard(1.5));
    symbols.insert("10x".to_string(), Symbol::multiply_bonus(10.0));
    symbols.insert("5x".to_string(), Symbol::multiply_bonus(5.0));
    symbols.insert("+1000".to_string(), Symbol::extra_bonus(1000.0));
    symbols.insert("+500".to_string(), Symbol::extra_bonus(500.0));
    symbols.insert("MISS".to_string(), Symbol::miss());

    let standard_symbols = (0..3)
        .flat_map(|row| (0..3).map(move |column| (row, column)))
        .map(|(row, column)| CellProbability {
            row,
            column,
            symbols: weights(&[("A", 1), ("B", 2), ("C", 3), ("D", 4), ("E", 5), ("F", 6)]),
        })
        .collect();

    let bonus_symbols = BonusProbability {
        symbols: weights(&[("10x", 1), ("5x", 2), ("+1000", 3), ("+500", 4), ("MISS", 5)]),
    };

    let mut win_combinations = BTreeMap::new();
    for (count, multiplier) in [
        (3, 1.0),
        (4, 1.5),
        (5, 2.0),
        (6, 3.0),
        (7, 5.0),
        (8, 10.0),
        (9, 20.0),
    ] {
        win_combinations.insert(
            format!("same_symbol_{count}_times"),
            same_symbols(count, multiplier),
        );
    }
    win_combinations.insert(
        "same_symbols_horizontally".to_string(),
        linear(
            PatternGroup::Horizontal,
            2.0,
            &[
                &["0:0", "0:1", "0:2"],
                &["1:0", "1:1", "1:2"],
                &["2:0", "2:1", "2:2"],
            ],
        ),
    );
    win_combinations.insert(
        "same_symbols_vertically".to_string(),
        linear(
            PatternGroup::Vertical,
            2.0,
            &[
                &["0:0", "1:0", "2:0"],
                &["0:1", "1:1", "2:1"],
                &["0:2", "1:2", "2:2"],
            ],
        ),
    );
    win_combinations.insert(
        "same_symbols_diagonally_left_to_right".to_string(),
        linear(PatternGroup::LtrDiagonal, 5.0, &[&["0:0", "1:1", "2:2"]]),
    );
    win_combinations.insert(
        "same_symbols_diagonally_right_to_left".to_string(),
        linear(PatternGroup::RtlDiagonal, 5.0, &[&["0:2", "1:1", "2:0"]]),
    );

    GameConfig {
        rows: 3,
        columns: 3,
        symbols,
        probabilities: Probabilities {
            standard_symbols,
            bonus_symbols,
        },
        win_combinations,
    }
}

fn weights(entries: &[(&str, u32)]) -> WeightTable {
    entries
        .iter()
        .map(|(name, weight)| (name.to_string(), *weight))
        .collect()
}

fn same_symbols(count: u32, reward_multiplier: f64) -> WinCombination {
    WinCombination {
        when: WhenRule::SameSymbols,
        count: Some(count),
        reward_multiplier,
        group: None,
        covered_areas: None,
    }
}

fn linear(group: PatternGroup, reward_multiplier: f64, areas: &[&[&str]]) -> WinCombination {
    WinCombination {
        when: WhenRule::LinearSymbols,
        count: None,
        reward_multiplier,
        group: Some(group),
        covered_areas: Some(
            areas
                .iter()
                .map(|area| area.iter().map(|c| c.to_string()).collect())
                .collect(),
        ),
    }
}
