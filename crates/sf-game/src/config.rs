//! Game configuration model and loading

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::symbols::Symbol;

/// Weighted symbol table: symbol id → positive integer weight
pub type WeightTable = BTreeMap<String, u32>;

/// Standard symbol probabilities for a single grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellProbability {
    pub row: i32,
    pub column: i32,
    /// Weighted symbol table for this cell
    pub symbols: WeightTable,
}

/// Global bonus symbol probabilities
///
/// Applies to whichever cell is chosen to host the bonus symbol,
/// independent of that cell's standard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusProbability {
    pub symbols: WeightTable,
}

/// Generation probability rules: one standard entry per cell plus one
/// global bonus table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    pub standard_symbols: Vec<CellProbability>,
    pub bonus_symbols: BonusProbability,
}

/// Win rule discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhenRule {
    /// Count-based: rewards a symbol once its occurrence count meets a threshold
    SameSymbols,
    /// Pattern-based: rewards a symbol filling a declared set of coordinates
    LinearSymbols,
}

/// Linear pattern family
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PatternGroup {
    #[serde(rename = "horizontally_linear_symbols")]
    Horizontal,
    #[serde(rename = "vertically_linear_symbols")]
    Vertical,
    #[serde(rename = "ltr_diagonally_linear_symbols")]
    LtrDiagonal,
    #[serde(rename = "rtl_diagonally_linear_symbols")]
    RtlDiagonal,
}

impl PatternGroup {
    /// Combination name recorded in the result document for this family
    pub fn combination_name(&self) -> &'static str {
        match self {
            PatternGroup::Horizontal => "same_symbols_horizontally",
            PatternGroup::Vertical => "same_symbols_vertically",
            PatternGroup::LtrDiagonal => "same_symbols_diagonally_left_to_right",
            PatternGroup::RtlDiagonal => "same_symbols_diagonally_right_to_left",
        }
    }
}

/// A winning combination rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinCombination {
    pub when: WhenRule,
    /// Minimum occurrence threshold, `same_symbols` rules only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    pub reward_multiplier: f64,
    /// Pattern family, `linear_symbols` rules only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<PatternGroup>,
    /// Alternative patterns, each an ordered list of "row:column" coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub covered_areas: Option<Vec<Vec<String>>>,
}

/// Complete game configuration
///
/// Loaded once and shared read-only across generation and evaluation.
/// Symbol maps and weight tables are `BTreeMap`s so weighted draws and
/// result documents iterate in a consistent order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: i32,
    pub columns: i32,
    pub symbols: BTreeMap<String, Symbol>,
    pub probabilities: Probabilities,
    #[serde(default)]
    pub win_combinations: BTreeMap<String, WinCombination>,
}

impl GameConfig {
    /// Parse and validate a configuration document
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_path(path: impl AsRef<Path>) -> GameResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Look up a symbol descriptor, failing on missing entries
    pub fn symbol(&self, name: &str) -> GameResult<&Symbol> {
        self.symbols.get(name).ok_or_else(|| GameError::UnknownSymbol {
            name: name.to_string(),
        })
    }

    /// Check whether a symbol id names a configured bonus symbol
    pub fn is_bonus(&self, name: &str) -> bool {
        self.symbols.get(name).is_some_and(Symbol::is_bonus)
    }

    /// Check the structural invariants the type system cannot express:
    /// positive grid dimensions, in-range cell coordinates covering the
    /// whole grid, weight tables with known symbols and positive total
    /// weight, and win-combination field consistency.
    pub fn validate(&self) -> GameResult<()> {
        if self.rows <= 0 || self.columns <= 0 {
            return Err(GameError::InvalidGridSize {
                rows: self.rows,
                columns: self.columns,
            });
        }

        let mut covered = BTreeSet::new();
        for cell in &self.probabilities.standard_symbols {
            if cell.row < 0 || cell.row >= self.rows || cell.column < 0 || cell.column >= self.columns
            {
                return Err(GameError::CellOutOfRange {
                    row: cell.row,
                    column: cell.column,
                });
            }
            covered.insert((cell.row, cell.column));
            self.validate_weight_table(&cell.symbols)?;
        }
        for row in 0..self.rows {
            for column in 0..self.columns {
                if !covered.contains(&(row, column)) {
                    return Err(GameError::UncoveredCell { row, column });
                }
            }
        }

        self.validate_weight_table(&self.probabilities.bonus_symbols.symbols)?;

        for (name, combination) in &self.win_combinations {
            match combination.when {
                WhenRule::SameSymbols => {
                    if combination.count.is_none() {
                        return Err(GameError::MissingField {
                            combination: name.clone(),
                            field: "count",
                        });
                    }
                }
                WhenRule::LinearSymbols => {
                    if combination.group.is_none() {
                        return Err(GameError::MissingField {
                            combination: name.clone(),
                            field: "group",
                        });
                    }
                    if combination.covered_areas.is_none() {
                        return Err(GameError::MissingField {
                            combination: name.clone(),
                            field: "covered_areas",
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn validate_weight_table(&self, table: &WeightTable) -> GameResult<()> {
        if table.values().sum::<u32>() == 0 {
            return Err(GameError::NoSymbolSelected);
        }
        for name in table.keys() {
            if !self.symbols.contains_key(name) {
                return Err(GameError::UnknownSymbol { name: name.clone() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn test_parse_minimal_config() {
        let json = r#"{
            "rows": 1,
            "columns": 1,
            "symbols": {
                "A": {"reward_multiplier": 5, "type": "standard"},
                "+500": {"type": "bonus", "impact": "extra_bonus", "extra": 500}
            },
            "probabilities": {
                "standard_symbols": [
                    {"row": 0, "column": 0, "symbols": {"A": 1}}
                ],
                "bonus_symbols": {"symbols": {"+500": 1}}
            }
        }"#;

        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.rows, 1);
        assert_eq!(config.columns, 1);
        assert_eq!(config.symbols.len(), 2);
        assert!(config.win_combinations.is_empty());
        assert!(config.is_bonus("+500"));
        assert!(!config.is_bonus("A"));
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(matches!(
            GameConfig::from_json("{not json"),
            Err(GameError::Parse(_))
        ));
    }

    #[test]
    fn test_unrecognized_pattern_group_rejected_at_parse() {
        let mut config = presets::classic();
        let mut json = serde_json::to_value(&config).unwrap();
        json["win_combinations"]["same_symbols_horizontally"]["group"] =
            "spiral_linear_symbols".into();
        let result = GameConfig::from_json(&json.to_string());
        assert!(matches!(result, Err(GameError::Parse(_))));

        // Closed enum round-trips untouched
        config.win_combinations.clear();
        let round_trip =
            GameConfig::from_json(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(round_trip.rows, config.rows);
    }

    #[test]
    fn test_validate_rejects_uncovered_cell() {
        let mut config = presets::classic();
        config.probabilities.standard_symbols.pop();
        assert!(matches!(
            config.validate(),
            Err(GameError::UncoveredCell { row: 2, column: 2 })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_cell() {
        let mut config = presets::classic();
        config.probabilities.standard_symbols[0].row = -1;
        assert!(matches!(
            config.validate(),
            Err(GameError::CellOutOfRange { row: -1, column: 0 })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_weight_table() {
        let mut config = presets::classic();
        for weight in config.probabilities.bonus_symbols.symbols.values_mut() {
            *weight = 0;
        }
        assert!(matches!(config.validate(), Err(GameError::NoSymbolSelected)));
    }

    #[test]
    fn test_validate_rejects_missing_count() {
        let mut config = presets::classic();
        config
            .win_combinations
            .get_mut("same_symbol_3_times")
            .unwrap()
            .count = None;
        assert!(matches!(
            config.validate(),
            Err(GameError::MissingField { field: "count", .. })
        ));
    }

    #[test]
    fn test_combination_names() {
        assert_eq!(
            PatternGroup::Horizontal.combination_name(),
            "same_symbols_horizontally"
        );
        assert_eq!(
            PatternGroup::Vertical.combination_name(),
            "same_symbols_vertically"
        );
        assert_eq!(
            PatternGroup::LtrDiagonal.combination_name(),
            "same_symbols_diagonally_left_to_right"
        );
        assert_eq!(
            PatternGroup::RtlDiagonal.combination_name(),
            "same_symbols_diagonally_right_to_left"
        );
    }
}
