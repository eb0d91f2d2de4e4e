//! Round data and the logical game state.
//!
//! A `Round` is created whole by the engine and never edited afterwards,
//! except for recording the single selection.

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::RandomSource;
use crate::prizes::{Prize, PrizeCatalog};

/// Logical game state. Animation sub-states belong to the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// No round exists.
    Idle,
    /// A round exists and no box has been picked.
    Playing,
    /// A box has been picked; its prize is the outcome.
    Resolved,
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Idle => write!(f, "idle"),
            GameState::Playing => write!(f, "playing"),
            GameState::Resolved => write!(f, "resolved"),
        }
    }
}

/// One round: the prize behind every box plus the player's pick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Round {
    number: u64,
    assignments: SmallVec<[Prize; 8]>,
    selected_index: Option<usize>,
}

impl Round {
    /// Draw `box_count` independent prizes.
    pub(crate) fn draw<R>(number: u64, box_count: usize, catalog: &PrizeCatalog, source: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let assignments = (0..box_count)
            .map(|_| catalog.draw_one(&mut *source).clone())
            .collect();
        Self {
            number,
            assignments,
            selected_index: None,
        }
    }

    /// Sequence number of this round (first round is 1).
    #[must_use]
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Number of boxes.
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.assignments.len()
    }

    /// Prize behind each box, in box order.
    #[must_use]
    pub fn assignments(&self) -> &[Prize] {
        &self.assignments
    }

    /// Picked box, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Prize behind the picked box, if any.
    #[must_use]
    pub fn selected_prize(&self) -> Option<&Prize> {
        self.selected_index.and_then(|i| self.assignments.get(i))
    }

    /// True once a box has been picked.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.selected_index.is_some()
    }

    /// Caller guarantees `index < box_count` and no prior selection.
    pub(crate) fn record_selection(&mut self, index: usize) -> &Prize {
        debug_assert!(self.selected_index.is_none(), "round already resolved");
        self.selected_index = Some(index);
        &self.assignments[index]
    }
}
