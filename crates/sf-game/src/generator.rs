//! Weighted matrix generation

use std::collections::BTreeMap;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, WeightTable};
use crate::error::{GameError, GameResult};
use crate::round::Matrix;

/// One draw in ten hosts the bonus symbol
const BONUS_DRAW_BOUND: u32 = 10;

/// Occurrence tallies recorded while filling a matrix
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationTally {
    /// Standard symbol draws, by symbol id
    pub standard: BTreeMap<String, u32>,
    /// Bonus symbol draws, by symbol id (at most one total)
    pub bonus: BTreeMap<String, u32>,
}

/// Matrix generator
///
/// Fills a grid cell by cell from the configured per-cell weight tables,
/// with a rare bonus-symbol injection capped at one bonus per matrix.
/// Owns its random source; every generator draws independently, so
/// parallel rounds never share mutable RNG state.
pub struct MatrixGenerator<R: Rng = StdRng> {
    rng: R,
}

impl MatrixGenerator<StdRng> {
    /// Create a generator with an OS-seeded random source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator with a fixed seed for reproducible rounds
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MatrixGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MatrixGenerator<R> {
    /// Create a generator drawing from an externally provided random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one matrix from the configured probability rules
    pub fn generate(&mut self, config: &GameConfig) -> GameResult<Matrix> {
        self.generate_with_tally(config).map(|(matrix, _)| matrix)
    }

    /// Generate one matrix along with its occurrence tallies
    pub fn generate_with_tally(
        &mut self,
        config: &GameConfig,
    ) -> GameResult<(Matrix, GenerationTally)> {
        validate(config)?;

        let mut matrix =
            vec![vec![String::new(); config.columns as usize]; config.rows as usize];
        let mut tally = GenerationTally::default();
        let mut bonus_placed = false;

        // Cells fill in the order the probability entries are declared
        for cell in &config.probabilities.standard_symbols {
            let symbol = if !bonus_placed && self.rng.random_range(0..BONUS_DRAW_BOUND) == 0 {
                let symbol =
                    draw_weighted(&mut self.rng, &config.probabilities.bonus_symbols.symbols)?;
                bonus_placed = true;
                *tally.bonus.entry(symbol.clone()).or_default() += 1;
                log::debug!("bonus symbol {symbol} placed at {}:{}", cell.row, cell.column);
                symbol
            } else {
                let symbol = draw_weighted(&mut self.rng, &cell.symbols)?;
                *tally.standard.entry(symbol.clone()).or_default() += 1;
                symbol
            };
            matrix[cell.row as usize][cell.column as usize] = symbol;
        }

        Ok((matrix, tally))
    }
}

fn validate(config: &GameConfig) -> GameResult<()> {
    if config.rows <= 0 || config.columns <= 0 {
        return Err(GameError::InvalidGridSize {
            rows: config.rows,
            columns: config.columns,
        });
    }
    for cell in &config.probabilities.standard_symbols {
        if cell.row < 0 || cell.row >= config.rows || cell.column < 0 || cell.column >= config.columns
        {
            return Err(GameError::CellOutOfRange {
                row: cell.row,
                column: cell.column,
            });
        }
    }
    Ok(())
}

/// Draw one symbol from a weight table, proportionally to its weight.
///
/// Walks the table in its iteration order accumulating weights and returns
/// the first symbol whose cumulative weight reaches a uniform draw in
/// `[1, total]`.
fn draw_weighted<R: Rng>(rng: &mut R, table: &WeightTable) -> GameResult<String> {
    let total: u32 = table.values().sum();
    if total == 0 {
        return Err(GameError::NoSymbolSelected);
    }

    let draw = rng.random_range(1..=total);
    let mut cumulative = 0u32;
    for (symbol, weight) in table {
        cumulative += weight;
        if cumulative >= draw {
            return Ok(symbol.clone());
        }
    }
    Err(GameError::NoSymbolSelected)
}
