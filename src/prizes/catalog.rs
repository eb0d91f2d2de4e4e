//! Prize catalog and weighted draws.
//!
//! ## Draw semantics
//!
//! Conceptually every entry is replicated `w` times into a virtual pool,
//! where `w` is its tier's weight (1 for untiered entries), and a draw picks
//! pool slot `floor(u * pool_len)` for a unit float `u`. The catalog keeps a
//! cumulative weight table instead of the pool itself and binary-searches
//! it, which selects exactly the same entry for every `u`.

use rustc_hash::{FxHashMap, FxHashSet};

use super::definition::{Prize, PrizeId, PrizeKind};
use super::weights::WeightTable;
use crate::core::{ConfigError, GameError, RandomSource};

/// Immutable, validated prize list with its weight table.
///
/// ## Example
///
/// ```
/// use pick_a_box::core::FixedSource;
/// use pick_a_box::prizes::{Prize, PrizeCatalog, PrizeId, PrizeKind, Tier, WeightTable};
///
/// let catalog = PrizeCatalog::new(
///     vec![
///         Prize::new(PrizeId::new(1), PrizeKind::Prize, "Coupon").with_tier(Tier::Low),
///         Prize::new(PrizeId::new(2), PrizeKind::TryAgain, "Try again").with_tier(Tier::Medium),
///     ],
///     WeightTable::new().with_weight(Tier::Low, 1).with_weight(Tier::Medium, 1),
/// )
/// .unwrap();
///
/// assert_eq!(catalog.draw_one(&mut FixedSource(0.6)).id, PrizeId::new(2));
/// ```
#[derive(Clone, Debug)]
pub struct PrizeCatalog {
    prizes: Vec<Prize>,
    weights: WeightTable,
    /// `cumulative[i]` is the pool length covered by entries `0..=i`.
    cumulative: Vec<u64>,
    by_id: FxHashMap<PrizeId, usize>,
}

impl PrizeCatalog {
    /// Validate and build a catalog.
    ///
    /// Fails if the catalog is empty, has no winning entry, repeats an id,
    /// or if the weight table is empty or lacks a positive weight for a tier
    /// some entry references.
    pub fn new(prizes: Vec<Prize>, weights: WeightTable) -> Result<Self, GameError> {
        if prizes.is_empty() {
            return Err(ConfigError::EmptyCatalog.into());
        }
        if weights.is_empty() {
            return Err(ConfigError::EmptyWeightTable.into());
        }

        let mut seen = FxHashSet::default();
        for prize in &prizes {
            if !seen.insert(prize.id) {
                return Err(ConfigError::DuplicatePrizeId(prize.id).into());
            }
        }

        let mut cumulative = Vec::with_capacity(prizes.len());
        let mut total = 0u64;
        for prize in &prizes {
            total += u64::from(Self::resolve_weight(&weights, prize)?);
            cumulative.push(total);
        }

        if !prizes.iter().any(|p| p.kind == PrizeKind::Prize) {
            return Err(ConfigError::NoWinningPrize.into());
        }

        let by_id = prizes.iter().enumerate().map(|(i, p)| (p.id, i)).collect();

        tracing::debug!(entries = prizes.len(), pool_len = total, "built prize catalog");

        Ok(Self {
            prizes,
            weights,
            cumulative,
            by_id,
        })
    }

    fn resolve_weight(weights: &WeightTable, prize: &Prize) -> Result<u32, ConfigError> {
        let Some(tier) = prize.tier else {
            return Ok(1);
        };
        match weights.get(tier) {
            None => Err(ConfigError::MissingWeight {
                prize: prize.id,
                tier,
            }),
            Some(0) => Err(ConfigError::ZeroWeight {
                prize: prize.id,
                tier,
            }),
            Some(w) => Ok(w),
        }
    }

    /// Draw one entry, weighted by tier, with replacement.
    ///
    /// Consumes exactly one value from `source`. Values outside `[0, 1)`
    /// are clamped onto the first or last pool slot.
    pub fn draw_one<R>(&self, source: &mut R) -> &Prize
    where
        R: RandomSource + ?Sized,
    {
        let slot = self.pool_slot(source.next_unit());
        let index = self.cumulative.partition_point(|&end| end <= slot);
        &self.prizes[index]
    }

    fn pool_slot(&self, unit: f64) -> u64 {
        let len = self.pool_len();
        let scaled = (unit * len as f64).floor();
        if scaled.is_nan() || scaled < 0.0 {
            0
        } else {
            (scaled as u64).min(len - 1)
        }
    }

    /// Length of the virtual replicated pool (sum of all entry weights).
    #[must_use]
    pub fn pool_len(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Materialize the virtual pool, in catalog order.
    ///
    /// Only meant for inspection; draws never build it.
    #[must_use]
    pub fn expanded_pool(&self) -> Vec<&Prize> {
        self.prizes
            .iter()
            .flat_map(|p| std::iter::repeat(p).take(self.weight_of(p) as usize))
            .collect()
    }

    /// Weight of a catalog entry. Entries not in this catalog weigh 0.
    #[must_use]
    pub fn weight_of(&self, prize: &Prize) -> u32 {
        match self.by_id.get(&prize.id) {
            Some(&i) => {
                let start = if i == 0 { 0 } else { self.cumulative[i - 1] };
                (self.cumulative[i] - start) as u32
            }
            None => 0,
        }
    }

    /// Probability that a single draw returns the given entry.
    #[must_use]
    pub fn probability(&self, id: PrizeId) -> Option<f64> {
        let prize = self.get(id)?;
        Some(f64::from(self.weight_of(prize)) / self.pool_len() as f64)
    }

    /// Probability that a single draw is a win.
    #[must_use]
    pub fn win_probability(&self) -> f64 {
        let wins: u64 = self
            .prizes
            .iter()
            .filter(|p| p.is_win())
            .map(|p| u64::from(self.weight_of(p)))
            .sum();
        wins as f64 / self.pool_len() as f64
    }

    /// Get an entry by ID.
    #[must_use]
    pub fn get(&self, id: PrizeId) -> Option<&Prize> {
        self.by_id.get(&id).map(|&i| &self.prizes[i])
    }

    /// The weight table this catalog was built with.
    #[must_use]
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    /// Iterate over entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Prize> {
        self.prizes.iter()
    }
}
