//! Round flow: the per-round prize assignments and the engine that owns
//! the game state machine.

pub mod engine;
pub mod state;

pub use engine::{EngineSnapshot, RoundEngine};
pub use state::{GameState, Round};
