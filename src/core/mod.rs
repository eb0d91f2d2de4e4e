//! Core engine types: errors, random sources, brand configuration.
//!
//! Nothing here knows about round flow; the `round` module builds on it.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BoxLayout, BrandConfig, DeviceClass, ProbabilityWeights, MOBILE_BREAKPOINT_PX};
pub use error::{ConfigError, GameError};
pub use rng::{FixedSource, GameRng, RandomSource, SequenceSource};
