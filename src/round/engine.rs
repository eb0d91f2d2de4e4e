//! Round engine: the game's only state machine.
//!
//! ```text
//! Idle     --start(n)---> Playing
//! Playing  --select(i)--> Resolved   (0 <= i < n, first pick only)
//! Resolved --start(n)---> Playing    (old round discarded)
//! Idle | Playing --resize(n)--> Playing
//! any      --reset()----> Idle
//! ```
//!
//! All operations are synchronous. A failed operation leaves the engine
//! exactly as it was.

use serde::Serialize;

use super::state::{GameState, Round};
use crate::core::{BoxLayout, BrandConfig, ConfigError, DeviceClass, GameError, GameRng, RandomSource};
use crate::prizes::{Prize, PrizeCatalog};

/// Owns the catalog, the random source and the current round.
///
/// ## Example
///
/// ```
/// use pick_a_box::brands;
/// use pick_a_box::round::{GameState, RoundEngine};
///
/// let mut engine = RoundEngine::seeded(brands::default_brand().catalog().unwrap(), 7);
/// assert_eq!(engine.state(), GameState::Idle);
///
/// engine.start(6).unwrap();
/// let prize = engine.select(2).unwrap().cloned();
/// assert!(prize.is_some());
/// assert_eq!(engine.state(), GameState::Resolved);
///
/// // Later picks are ignored until a new round starts.
/// assert!(engine.select(3).unwrap().is_none());
/// assert_eq!(engine.current_outcome().cloned(), prize);
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine<R = GameRng> {
    catalog: PrizeCatalog,
    layout: BoxLayout,
    source: R,
    round: Option<Round>,
    rounds_started: u64,
}

impl RoundEngine<GameRng> {
    /// Engine backed by a seeded [`GameRng`].
    #[must_use]
    pub fn seeded(catalog: PrizeCatalog, seed: u64) -> Self {
        Self::new(catalog, GameRng::new(seed))
    }
}

impl<R: RandomSource> RoundEngine<R> {
    /// Create an idle engine with the default box layout.
    #[must_use]
    pub fn new(catalog: PrizeCatalog, source: R) -> Self {
        Self {
            catalog,
            layout: BoxLayout::default(),
            source,
            round: None,
            rounds_started: 0,
        }
    }

    /// Create an idle engine from a brand's catalog and box layout.
    pub fn from_brand(brand: &BrandConfig, source: R) -> Result<Self, GameError> {
        Ok(Self::new(brand.catalog()?, source).with_layout(brand.box_count))
    }

    /// Set the per-device box layout.
    #[must_use]
    pub fn with_layout(mut self, layout: BoxLayout) -> Self {
        self.layout = layout;
        self
    }

    // === State ===

    /// Current logical state, derived from the round.
    #[must_use]
    pub fn state(&self) -> GameState {
        match &self.round {
            None => GameState::Idle,
            Some(round) if round.is_resolved() => GameState::Resolved,
            Some(_) => GameState::Playing,
        }
    }

    /// Current round, if any.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The resolved prize, or `None` unless `Resolved`.
    #[must_use]
    pub fn current_outcome(&self) -> Option<&Prize> {
        self.round.as_ref().and_then(Round::selected_prize)
    }

    /// Owned copy of the state and round for the view layer.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            state: self.state(),
            round: self.round.clone(),
        }
    }

    /// Catalog every round draws from.
    #[must_use]
    pub fn catalog(&self) -> &PrizeCatalog {
        &self.catalog
    }

    /// Box counts used by the device-sized operations.
    #[must_use]
    pub fn layout(&self) -> BoxLayout {
        self.layout
    }

    /// Number of rounds started since construction.
    #[must_use]
    pub fn rounds_started(&self) -> u64 {
        self.rounds_started
    }

    // === Transitions ===

    /// Start a fresh round of `box_count` boxes, discarding any current one.
    pub fn start(&mut self, box_count: usize) -> Result<&Round, GameError> {
        if box_count == 0 {
            return Err(ConfigError::ZeroBoxCount.into());
        }
        Ok(self.begin_round(box_count))
    }

    /// Start a fresh round sized for a device class.
    pub fn start_for_device(&mut self, device: DeviceClass) -> Result<&Round, GameError> {
        self.start(self.layout.box_count(device))
    }

    /// Pick a box.
    ///
    /// Returns the revealed prize on the first valid pick. Once a box has
    /// been picked every later call returns `Ok(None)` and changes nothing,
    /// whatever the index. Negative or too-large indices fail with
    /// [`GameError::InvalidSelection`].
    pub fn select<I>(&mut self, index: I) -> Result<Option<&Prize>, GameError>
    where
        I: TryInto<usize>,
    {
        let state = self.state();
        let Some(round) = self.round.as_mut() else {
            return Err(GameError::InvalidState {
                operation: "select",
                state,
            });
        };

        if let Some(previous) = round.selected_index() {
            tracing::debug!(round = round.number(), previous, "box already picked, ignoring selection");
            return Ok(None);
        }

        let box_count = round.box_count();
        let requested = index.try_into().ok();
        let Some(index) = requested.filter(|&i| i < box_count) else {
            return Err(GameError::InvalidSelection {
                requested,
                box_count,
            });
        };

        let number = round.number();
        let prize = round.record_selection(index);
        tracing::debug!(
            round = number,
            index,
            prize = %prize.id,
            win = prize.is_win(),
            "round resolved"
        );
        Ok(Some(prize))
    }

    /// Redraw for a new box count, e.g. after the display changed size.
    ///
    /// Allowed while `Idle` or `Playing`. While `Playing` with an unchanged
    /// box count the current round is kept.
    pub fn resize(&mut self, box_count: usize) -> Result<&Round, GameError> {
        if box_count == 0 {
            return Err(ConfigError::ZeroBoxCount.into());
        }

        match self.round.take() {
            Some(round) if round.is_resolved() => {
                self.round = Some(round);
                Err(GameError::InvalidState {
                    operation: "resize",
                    state: GameState::Resolved,
                })
            }
            Some(round) if round.box_count() == box_count => Ok(&*self.round.insert(round)),
            _ => Ok(self.begin_round(box_count)),
        }
    }

    /// Resize for a device class.
    pub fn resize_for_device(&mut self, device: DeviceClass) -> Result<&Round, GameError> {
        self.resize(self.layout.box_count(device))
    }

    /// Discard any round and return to `Idle`.
    pub fn reset(&mut self) {
        if let Some(round) = self.round.take() {
            tracing::debug!(round = round.number(), "round discarded");
        }
    }

    fn begin_round(&mut self, box_count: usize) -> &Round {
        self.rounds_started += 1;
        let round = Round::draw(self.rounds_started, box_count, &self.catalog, &mut self.source);
        tracing::debug!(round = round.number(), box_count, "round started");
        self.round.insert(round)
    }
}

/// Serializable view of the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EngineSnapshot {
    pub state: GameState,
    pub round: Option<Round>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedSource, SequenceSource};
    use crate::prizes::{PrizeId, PrizeKind, Tier, WeightTable};

    fn scenario_catalog() -> PrizeCatalog {
        PrizeCatalog::new(
            vec![
                Prize::new(PrizeId::new(1), PrizeKind::Prize, "Coupon").with_tier(Tier::Low),
                Prize::new(PrizeId::new(2), PrizeKind::TryAgain, "Try again").with_tier(Tier::Medium),
            ],
            WeightTable::new()
                .with_weight(Tier::Low, 1)
                .with_weight(Tier::Medium, 1),
        )
        .unwrap()
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = RoundEngine::new(scenario_catalog(), FixedSource(0.0));
        assert_eq!(engine.state(), GameState::Idle);
        assert!(engine.round().is_none());
        assert!(engine.current_outcome().is_none());
        assert_eq!(engine.rounds_started(), 0);
        assert_eq!(engine.catalog().pool_len(), 2);
        assert_eq!(engine.layout(), BoxLayout::default());
    }

    #[test]
    fn test_scenario() {
        let mut engine = RoundEngine::new(scenario_catalog(), FixedSource(0.6));

        let round = engine.start(2).unwrap();
        let ids: Vec<_> = round.assignments().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PrizeId::new(2), PrizeId::new(2)]);
        assert_eq!(engine.state(), GameState::Playing);

        let prize = engine.select(0).unwrap().unwrap();
        assert_eq!(prize.id, PrizeId::new(2));
        assert_eq!(engine.state(), GameState::Resolved);
        assert_eq!(engine.current_outcome().map(|p| p.id), Some(PrizeId::new(2)));
    }

    #[test]
    fn test_start_zero_boxes_rejected() {
        let mut engine = RoundEngine::new(scenario_catalog(), FixedSource(0.0));
        let err = engine.start(0).unwrap_err();
        assert!(matches!(err, GameError::Configuration(ConfigError::ZeroBoxCount)));
        assert_eq!(engine.state(), GameState::Idle);
        assert_eq!(engine.rounds_started(), 0);
    }

    #[test]
    fn test_select_while_idle() {
        let mut engine = RoundEngine::new(scenario_catalog(), FixedSource(0.0));
        let err = engine.select(0).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidState {
                operation: "select",
                state: GameState::Idle
            }
        ));
        assert_eq!(engine.state(), GameState::Idle);
    }

    #[test]
    fn test_select_out_of_bounds() {
        let mut engine = RoundEngine::new(scenario_catalog(), FixedSource(0.0));
        engine.start(4).unwrap();

        let err = engine.select(-1).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidSelection {
                requested: None,
                box_count: 4
            }
        ));

        let err = engine.select(4usize).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidSelection {
                requested: Some(4),
                box_count: 4
            }
        ));

        assert_eq!(engine.state(), GameState::Playing);
        assert_eq!(engine.round().unwrap().selected_index(), None);
    }

    #[test]
    fn test_second_selection_ignored() {
        let mut engine = RoundEngine::new(scenario_catalog(), SequenceSource::new([0.0, 0.9]));
        engine.start(2).unwrap();

        assert_eq!(engine.select(0).unwrap().map(|p| p.id), Some(PrizeId::new(1)));
        assert!(engine.select(1).unwrap().is_none());
        assert!(engine.select(99).unwrap().is_none());

        assert_eq!(engine.round().unwrap().selected_index(), Some(0));
        assert_eq!(engine.current_outcome().map(|p| p.id), Some(PrizeId::new(1)));
    }

    #[test]
    fn test_restart_replaces_round() {
        let mut engine = RoundEngine::seeded(scenario_catalog(), 1);
        engine.start(4).unwrap();
        engine.select(1).unwrap();

        let round = engine.start(6).unwrap();
        assert_eq!(round.box_count(), 6);
        assert_eq!(round.number(), 2);
        assert_eq!(round.selected_index(), None);
        assert_eq!(engine.state(), GameState::Playing);
        assert!(engine.current_outcome().is_none());
    }

    #[test]
    fn test_resize_transitions() {
        let mut engine = RoundEngine::seeded(scenario_catalog(), 3);

        // Idle -> Playing
        assert_eq!(engine.resize(4).unwrap().box_count(), 4);
        assert_eq!(engine.state(), GameState::Playing);
        assert_eq!(engine.rounds_started(), 1);

        // Same count while playing keeps the round
        assert_eq!(engine.resize(4).unwrap().number(), 1);
        assert_eq!(engine.rounds_started(), 1);

        // New count redraws
        let round = engine.resize(6).unwrap();
        assert_eq!(round.box_count(), 6);
        assert_eq!(round.number(), 2);
    }

    #[test]
    fn test_resize_rejected_when_resolved() {
        let mut engine = RoundEngine::seeded(scenario_catalog(), 3);
        engine.start(4).unwrap();
        engine.select(2).unwrap();
        let before = engine.snapshot();

        let err = engine.resize(6).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidState {
                operation: "resize",
                state: GameState::Resolved
            }
        ));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_reset() {
        let mut engine = RoundEngine::seeded(scenario_catalog(), 5);
        engine.start(3).unwrap();
        engine.select(0).unwrap();

        engine.reset();
        assert_eq!(engine.state(), GameState::Idle);
        assert!(engine.current_outcome().is_none());

        // Reset while idle is harmless
        engine.reset();
        assert_eq!(engine.state(), GameState::Idle);
    }

    #[test]
    fn test_device_layout() {
        let layout = BoxLayout::new(5, 3).unwrap();
        let mut engine = RoundEngine::seeded(scenario_catalog(), 5).with_layout(layout);

        assert_eq!(engine.start_for_device(DeviceClass::Desktop).unwrap().box_count(), 5);
        assert_eq!(engine.resize_for_device(DeviceClass::Mobile).unwrap().box_count(), 3);
        assert_eq!(engine.layout(), layout);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut engine = RoundEngine::new(scenario_catalog(), FixedSource(0.0));
        engine.start(2).unwrap();
        engine.select(1).unwrap();

        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["state"], "resolved");
        assert_eq!(json["round"]["selected_index"], 1);
        assert_eq!(json["round"]["assignments"][1]["id"], 1);
    }
}
