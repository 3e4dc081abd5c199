//! Symbol descriptors and bonus impact semantics

use serde::{Deserialize, Serialize};

/// Symbol type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// Regular paying symbol, participates in count and pattern scoring
    Standard,
    /// Reward-modifying symbol, applied after scoring
    Bonus,
}

/// Effect a bonus symbol has on the round reward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusImpact {
    /// Multiply the running reward by the symbol's reward multiplier
    MultiplyReward,
    /// Add the symbol's `extra` amount to the running reward
    ExtraBonus,
    /// No effect on the reward
    Miss,
}

/// A symbol definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    /// Multiplier applied in count-based scoring; for `multiply_reward`
    /// bonus symbols, the factor applied to the round reward
    #[serde(default)]
    pub reward_multiplier: f64,
    /// Symbol kind
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    /// Bonus effect, bonus symbols only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<BonusImpact>,
    /// Additive amount for `extra_bonus` impacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<f64>,
}

impl Symbol {
    /// Create a standard symbol
    pub fn standard(reward_multiplier: f64) -> Self {
        Self {
            reward_multiplier,
            kind: SymbolKind::Standard,
            impact: None,
            extra: None,
        }
    }

    /// Create a bonus symbol multiplying the reward
    pub fn multiply_bonus(factor: f64) -> Self {
        Self {
            reward_multiplier: factor,
            kind: SymbolKind::Bonus,
            impact: Some(BonusImpact::MultiplyReward),
            extra: None,
        }
    }

    /// Create a bonus symbol adding a flat amount
    pub fn extra_bonus(extra: f64) -> Self {
        Self {
            reward_multiplier: 0.0,
            kind: SymbolKind::Bonus,
            impact: Some(BonusImpact::ExtraBonus),
            extra: Some(extra),
        }
    }

    /// Create a bonus symbol with no effect
    pub fn miss() -> Self {
        Self {
            reward_multiplier: 0.0,
            kind: SymbolKind::Bonus,
            impact: Some(BonusImpact::Miss),
            extra: None,
        }
    }

    /// Check if this is a bonus symbol
    pub fn is_bonus(&self) -> bool {
        self.kind == SymbolKind::Bonus
    }

    /// Apply this symbol's bonus effect to a running reward.
    ///
    /// Standard symbols and `miss` impacts leave the reward unchanged; an
    /// `impact` carried by a non-bonus symbol is ignored.
    pub fn apply_bonus(&self, reward: f64) -> f64 {
        if self.kind != SymbolKind::Bonus {
            return reward;
        }
        match self.impact {
            Some(BonusImpact::MultiplyReward) => reward * self.reward_multiplier,
            Some(BonusImpact::ExtraBonus) => reward + self.extra.unwrap_or(0.0),
            Some(BonusImpact::Miss) | None => reward,
        }
    }
}
