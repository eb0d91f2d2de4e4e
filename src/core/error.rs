//! Error types for catalog construction and round play.
//!
//! Every fallible operation returns `Result<_, GameError>`. A failed call
//! leaves engine state exactly as it was before the call.

use std::path::PathBuf;

use thiserror::Error;

use crate::prizes::{PrizeId, Tier};
use crate::round::GameState;

/// Invalid catalog, weight table or brand configuration.
///
/// Fatal to construction: fix the configuration before building an engine.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("prize catalog is empty")]
    EmptyCatalog,

    #[error("prize catalog has no entry of kind `prize`")]
    NoWinningPrize,

    #[error("prize id {0} appears more than once")]
    DuplicatePrizeId(PrizeId),

    #[error("weight table is empty")]
    EmptyWeightTable,

    #[error("prize {prize} references tier {tier} which has no weight")]
    MissingWeight { prize: PrizeId, tier: Tier },

    #[error("prize {prize} references tier {tier} whose weight is zero")]
    ZeroWeight { prize: PrizeId, tier: Tier },

    #[error("box count must be at least 1")]
    ZeroBoxCount,

    #[error("no brand named `{0}`")]
    UnknownBrand(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors raised by the prize catalog and round engine.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// `requested` is `None` when the index was not representable as a
    /// box position at all (e.g. negative).
    #[error("box selection {requested:?} is outside 0..{box_count}")]
    InvalidSelection {
        requested: Option<usize>,
        box_count: usize,
    },

    #[error("cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: GameState,
    },
}

impl GameError {
    /// True for errors the caller can recover from by ignoring the input.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::from(ConfigError::MissingWeight {
            prize: PrizeId::new(4),
            tier: Tier::High,
        });
        assert_eq!(
            err.to_string(),
            "configuration error: prize Prize(4) references tier HIGH which has no weight"
        );

        let err = GameError::InvalidSelection {
            requested: Some(6),
            box_count: 6,
        };
        assert_eq!(err.to_string(), "box selection Some(6) is outside 0..6");

        let err = GameError::InvalidState {
            operation: "select",
            state: GameState::Idle,
        };
        assert_eq!(err.to_string(), "cannot select while idle");
    }

    #[test]
    fn test_recoverable() {
        assert!(!GameError::from(ConfigError::EmptyCatalog).is_recoverable());
        assert!(GameError::InvalidSelection {
            requested: None,
            box_count: 4
        }
        .is_recoverable());
        assert!(GameError::InvalidState {
            operation: "resize",
            state: GameState::Resolved
        }
        .is_recoverable());
    }
}
