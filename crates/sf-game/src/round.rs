//! Round result document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A generated grid of symbol identifiers, rows × columns
pub type Matrix = Vec<Vec<String>>;

/// Complete result of one evaluated round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The scored matrix, echoed for the caller
    pub matrix: Matrix,
    /// Total reward for the round
    pub reward: f64,
    /// Combination names that contributed to each symbol's score
    pub applied_winning_combinations: BTreeMap<String, Vec<String>>,
    /// First bonus symbol found in the matrix, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_bonus_symbol: Option<String>,
}

impl RoundResult {
    /// Check if this round won anything
    pub fn is_win(&self) -> bool {
        self.reward > 0.0
    }

    /// Reward rounded up to the printed 2-decimal precision
    pub fn rounded_reward(&self) -> f64 {
        (self.reward * 100.0).ceil() / 100.0
    }

    /// Result with the reward at printed precision, ready for output
    pub fn into_document(mut self) -> Self {
        self.reward = self.rounded_reward();
        self
    }
}
