//! Tier weight table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::Tier;

/// Relative draw weight per tier.
///
/// Weights are validated against the prizes that reference them when a
/// [`PrizeCatalog`](super::PrizeCatalog) is built, not on insert.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    weights: FxHashMap<Tier, u32>,
}

impl WeightTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a tier's weight (builder pattern).
    #[must_use]
    pub fn with_weight(mut self, tier: Tier, weight: u32) -> Self {
        self.set(tier, weight);
        self
    }

    /// Set a tier's weight, replacing any previous value.
    pub fn set(&mut self, tier: Tier, weight: u32) {
        self.weights.insert(tier, weight);
    }

    /// Get a tier's weight, if configured.
    #[must_use]
    pub fn get(&self, tier: Tier) -> Option<u32> {
        self.weights.get(&tier).copied()
    }

    /// Number of configured tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if no tier is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(Tier, u32)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (Tier, u32)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
