//! Built-in brand presets.
//!
//! Clients normally ship their own TOML brand file; these presets cover
//! demos and tests.

pub mod wiply;

use crate::core::{BrandConfig, ConfigError, GameError};

/// Keys of all built-in brands.
pub const KEYS: &[&str] = &[wiply::KEY];

/// The brand used when no other is configured.
#[must_use]
pub fn default_brand() -> BrandConfig {
    wiply::brand()
}

/// Look up a built-in brand by key.
pub fn by_key(key: &str) -> Result<BrandConfig, GameError> {
    match key {
        wiply::KEY => Ok(wiply::brand()),
        other => Err(ConfigError::UnknownBrand(other.to_string()).into()),
    }
}
