//! Brand configuration.
//!
//! A client brand supplies:
//! - the prize list and per-tier probability weights
//! - how many boxes to show per device class
//!
//! Brands are loaded from TOML or taken from the built-in presets in
//! [`crate::brands`]. Colors, copy text and asset paths beyond a prize's
//! image are presentation concerns and are not modelled here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, GameError};
use crate::prizes::{Prize, PrizeCatalog, Tier, WeightTable};

/// Viewport width (px) below which a display counts as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Coarse display class used to pick a box count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport by width.
    #[must_use]
    pub fn from_viewport_width(width_px: u32) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceClass::Mobile => write!(f, "mobile"),
            DeviceClass::Desktop => write!(f, "desktop"),
        }
    }
}

/// Number of boxes per device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxLayout {
    pub desktop: usize,
    pub mobile: usize,
}

impl BoxLayout {
    /// Create a layout. Both counts must be at least 1.
    pub fn new(desktop: usize, mobile: usize) -> Result<Self, GameError> {
        let layout = Self { desktop, mobile };
        layout.validate()?;
        Ok(layout)
    }

    /// Box count for a device class.
    #[must_use]
    pub fn box_count(&self, device: DeviceClass) -> usize {
        match device {
            DeviceClass::Mobile => self.mobile,
            DeviceClass::Desktop => self.desktop,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.desktop == 0 || self.mobile == 0 {
            return Err(ConfigError::ZeroBoxCount);
        }
        Ok(())
    }
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self {
            desktop: 6,
            mobile: 4,
        }
    }
}

/// Relative chance of each tier, as written in a brand file.
///
/// Absent tiers are allowed as long as no prize references them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ProbabilityWeights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<u32>,
}

impl ProbabilityWeights {
    /// Weights for all three tiers.
    #[must_use]
    pub fn new(high: u32, medium: u32, low: u32) -> Self {
        Self {
            high: Some(high),
            medium: Some(medium),
            low: Some(low),
        }
    }

    /// Convert into the catalog's weight table.
    #[must_use]
    pub fn to_table(&self) -> WeightTable {
        [
            (Tier::High, self.high),
            (Tier::Medium, self.medium),
            (Tier::Low, self.low),
        ]
        .into_iter()
        .filter_map(|(tier, weight)| weight.map(|w| (tier, w)))
        .fold(WeightTable::new(), |table, (tier, w)| table.with_weight(tier, w))
    }
}

/// Complete brand configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BrandConfig {
    /// Brand display name.
    pub name: String,

    #[serde(default, alias = "boxCount")]
    pub box_count: BoxLayout,

    #[serde(alias = "probabilityWeights")]
    pub probability_weights: ProbabilityWeights,

    pub prizes: Vec<Prize>,
}

impl BrandConfig {
    /// Create a brand with the default box layout and no prizes.
    pub fn new(name: impl Into<String>, weights: ProbabilityWeights) -> Self {
        Self {
            name: name.into(),
            box_count: BoxLayout::default(),
            probability_weights: weights,
            prizes: Vec::new(),
        }
    }

    /// Add a prize.
    #[must_use]
    pub fn with_prize(mut self, prize: Prize) -> Self {
        self.prizes.push(prize);
        self
    }

    /// Set the box layout.
    #[must_use]
    pub fn with_box_count(mut self, layout: BoxLayout) -> Self {
        self.box_count = layout;
        self
    }

    /// Parse a brand from TOML text.
    ///
    /// `origin` only labels errors.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, GameError> {
        let config: BrandConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.box_count.validate()?;
        Ok(config)
    }

    /// Load a brand from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        tracing::info!(
            path = %path.display(),
            brand = %config.name,
            prizes = config.prizes.len(),
            "loaded brand config"
        );
        Ok(config)
    }

    /// Build the validated prize catalog for this brand.
    pub fn catalog(&self) -> Result<PrizeCatalog, GameError> {
        PrizeCatalog::new(self.prizes.clone(), self.probability_weights.to_table())
    }
}
