//! Prize system: definitions, tier weights, and the catalog.
//!
//! ## Key Types
//!
//! - `PrizeId`: Identifier for catalog entries
//! - `Prize`: One entry (win or try-again) with an optional tier
//! - `WeightTable`: Relative draw weight per tier
//! - `PrizeCatalog`: Validated entries plus weighted draws

pub mod catalog;
pub mod definition;
pub mod weights;

pub use catalog::PrizeCatalog;
pub use definition::{Prize, PrizeId, PrizeKind, Tier};
pub use weights::WeightTable;
