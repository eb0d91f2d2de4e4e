//! # pick-a-box
//!
//! Prize-assignment and round-state engine for a "pick-a-box" promotional
//! game: the player sees N closed boxes, picks one, and gets either a prize
//! or a try-again outcome.
//!
//! ## Design Principles
//!
//! 1. **Logic only**: No timers, rendering or audio. A view layer reads the
//!    engine's state and round and drives its own animations.
//!
//! 2. **Configuration Over Convention**: Brands define their prizes, tier
//!    weights and box counts via `BrandConfig` (Rust or TOML).
//!
//! 3. **Deterministic on demand**: Every draw consumes one unit float from an
//!    injectable `RandomSource`; seed a `GameRng` or pin values in tests.
//!
//! ## Modules
//!
//! - `core`: Errors, random sources, brand configuration
//! - `prizes`: Prize definitions, weight table, weighted catalog
//! - `round`: Rounds and the `RoundEngine` state machine
//! - `brands`: Built-in brand presets

pub mod core;
pub mod prizes;
pub mod round;
pub mod brands;

// Re-export commonly used types
pub use crate::core::{
    BoxLayout, BrandConfig, ConfigError, DeviceClass, FixedSource, GameError, GameRng,
    ProbabilityWeights, RandomSource, SequenceSource,
};

pub use crate::prizes::{Prize, PrizeCatalog, PrizeId, PrizeKind, Tier, WeightTable};

pub use crate::round::{EngineSnapshot, GameState, Round, RoundEngine};
