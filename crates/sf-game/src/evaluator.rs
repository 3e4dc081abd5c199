//! Round evaluation: count rules, linear patterns, bonus effects

use std::collections::BTreeMap;

use crate::config::{GameConfig, PatternGroup, WhenRule};
use crate::error::{GameError, GameResult};
use crate::round::{Matrix, RoundResult};

/// Applied-combination names, by symbol
type AppliedCombinations = BTreeMap<String, Vec<String>>;

/// Pattern-based rules partitioned by family: multiplier plus the
/// alternative coordinate patterns that alternative can match
type PatternRules<'a> = BTreeMap<PatternGroup, Vec<(f64, &'a [Vec<String>])>>;

/// Evaluates one matrix against the configured win combinations.
///
/// Pure function of the matrix, betting amount and configuration; every
/// call builds fresh local tallies, so results are reproducible and the
/// evaluator is safe to share across rounds.
pub struct RoundEvaluator<'a> {
    config: &'a GameConfig,
}

impl<'a> RoundEvaluator<'a> {
    /// Create an evaluator over a loaded configuration
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Score a matrix for a betting amount
    pub fn evaluate(&self, matrix: &Matrix, betting_amount: f64) -> GameResult<RoundResult> {
        let count_rules = self.count_rules()?;
        let pattern_rules = self.pattern_rules()?;

        let symbol_counts = count_symbols(matrix);
        let bonus_counts = self.count_bonus_symbols(&symbol_counts)?;

        let mut applied = AppliedCombinations::new();
        let count_scores = self.score_count_rules(&symbol_counts, &count_rules, &mut applied)?;
        let pattern_scores = self.score_pattern_rules(matrix, &pattern_rules, &mut applied)?;

        let mut reward = 0.0;
        if !count_scores.is_empty() || !pattern_scores.is_empty() {
            reward = count_scores
                .iter()
                .map(|(symbol, score)| {
                    score * pattern_scores.get(symbol).copied().unwrap_or(1.0) * betting_amount
                })
                .sum();
            reward = self.apply_bonus_effects(reward, &bonus_counts)?;
        }

        log::debug!(
            "evaluated round: reward {reward}, {} winning symbol(s)",
            applied.len()
        );

        Ok(RoundResult {
            matrix: matrix.clone(),
            reward,
            applied_winning_combinations: applied,
            applied_bonus_symbol: bonus_counts.keys().next().cloned(),
        })
    }

    /// Count-based rules: occurrence threshold → reward multiplier
    fn count_rules(&self) -> GameResult<BTreeMap<u32, f64>> {
        let mut rules = BTreeMap::new();
        for (name, combination) in &self.config.win_combinations {
            if combination.when != WhenRule::SameSymbols {
                continue;
            }
            let count = combination.count.ok_or_else(|| GameError::MissingField {
                combination: name.clone(),
                field: "count",
            })?;
            rules.insert(count, combination.reward_multiplier);
        }
        Ok(rules)
    }

    /// Pattern-based rules grouped by family
    fn pattern_rules(&self) -> GameResult<PatternRules<'a>> {
        let mut rules = PatternRules::new();
        for (name, combination) in &self.config.win_combinations {
            if combination.when != WhenRule::LinearSymbols {
                continue;
            }
            let group = combination.group.ok_or_else(|| GameError::MissingField {
                combination: name.clone(),
                field: "group",
            })?;
            let areas = combination
                .covered_areas
                .as_deref()
                .ok_or_else(|| GameError::MissingField {
                    combination: name.clone(),
                    field: "covered_areas",
                })?;
            rules
                .entry(group)
                .or_default()
                .push((combination.reward_multiplier, areas));
        }
        Ok(rules)
    }

    /// Occurrences of configured bonus symbols, failing on symbols the
    /// configuration does not know
    fn count_bonus_symbols(
        &self,
        symbol_counts: &BTreeMap<String, u32>,
    ) -> GameResult<BTreeMap<String, u32>> {
        let mut bonus_counts = BTreeMap::new();
        for (name, &count) in symbol_counts {
            if self.config.symbol(name)?.is_bonus() {
                bonus_counts.insert(name.clone(), count);
            }
        }
        Ok(bonus_counts)
    }

    /// Per symbol, the largest configured threshold its occurrence count
    /// reaches wins; no extrapolation above the highest threshold
    fn score_count_rules(
        &self,
        symbol_counts: &BTreeMap<String, u32>,
        count_rules: &BTreeMap<u32, f64>,
        applied: &mut AppliedCombinations,
    ) -> GameResult<BTreeMap<String, f64>> {
        let mut scores = BTreeMap::new();
        for (symbol, &count) in symbol_counts {
            let Some((&threshold, &multiplier)) = count_rules.range(..=count).next_back() else {
                continue;
            };
            let descriptor = self.config.symbol(symbol)?;
            scores.insert(symbol.clone(), multiplier * descriptor.reward_multiplier);
            applied
                .entry(symbol.clone())
                .or_default()
                .push(format!("same_symbol_{threshold}_times"));
        }
        Ok(scores)
    }

    /// Multiplicative pattern scores per symbol across all matching
    /// patterns and families
    fn score_pattern_rules(
        &self,
        matrix: &Matrix,
        pattern_rules: &PatternRules<'a>,
        applied: &mut AppliedCombinations,
    ) -> GameResult<BTreeMap<String, f64>> {
        let mut scores: BTreeMap<String, f64> = BTreeMap::new();
        for (group, buckets) in pattern_rules {
            for (multiplier, areas) in buckets {
                for pattern in *areas {
                    let Some(symbol) = self.match_pattern(matrix, pattern)? else {
                        continue;
                    };
                    scores
                        .entry(symbol.clone())
                        .and_modify(|score| *score *= multiplier)
                        .or_insert(*multiplier);
                    applied
                        .entry(symbol)
                        .or_default()
                        .push(group.combination_name().to_string());
                }
            }
        }
        Ok(scores)
    }

    /// A pattern matches when every coordinate holds the identical symbol
    /// and that symbol is not bonus-type
    fn match_pattern(&self, matrix: &Matrix, pattern: &[String]) -> GameResult<Option<String>> {
        let mut first: Option<&str> = None;
        for coordinate in pattern {
            let (row, column) = parse_coordinate(coordinate)?;
            let symbol = matrix
                .get(row)
                .and_then(|cells| cells.get(column))
                .ok_or_else(|| GameError::InvalidCoordinate {
                    coordinate: coordinate.clone(),
                })?;
            if self.config.is_bonus(symbol) {
                return Ok(None);
            }
            match first {
                None => first = Some(symbol),
                Some(expected) if expected != symbol.as_str() => return Ok(None),
                Some(_) => {}
            }
        }
        Ok(first.map(str::to_string))
    }

    /// Every bonus occurrence applies its effect once, in additive
    /// accumulation across occurrences and symbols
    fn apply_bonus_effects(
        &self,
        mut reward: f64,
        bonus_counts: &BTreeMap<String, u32>,
    ) -> GameResult<f64> {
        for (symbol, &count) in bonus_counts {
            let descriptor = self.config.symbol(symbol)?;
            for _ in 0..count {
                reward = descriptor.apply_bonus(reward);
            }
        }
        Ok(reward)
    }
}

/// Tally how many times each symbol appears anywhere in the matrix
fn count_symbols(matrix: &Matrix) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for symbol in matrix.iter().flatten() {
        *counts.entry(symbol.clone()).or_default() += 1;
    }
    counts
}

/// Parse a "row:column" coordinate
fn parse_coordinate(coordinate: &str) -> GameResult<(usize, usize)> {
    let invalid = || GameError::InvalidCoordinate {
        coordinate: coordinate.to_string(),
    };
    let (row, column) = coordinate.split_once(':').ok_or_else(invalid)?;
    Ok((
        row.trim().parse().map_err(|_| invalid())?,
        column.trim().parse().map_err(|_| invalid())?,
    ))
}
