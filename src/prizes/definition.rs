//! Prize definitions - static prize data.
//!
//! A `Prize` is one entry of a brand's catalog. The same entry may end up
//! behind several boxes in one round; there is no per-box instance type.

use serde::{Deserialize, Serialize};

/// Unique identifier for a prize entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PrizeId(pub u32);

impl PrizeId {
    /// Create a new prize ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PrizeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prize({})", self.0)
    }
}

/// Whether picking an entry is a win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrizeKind {
    Prize,
    TryAgain,
}

/// Value tier. Only affects draw probability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::High, Tier::Medium, Tier::Low];
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::High => write!(f, "HIGH"),
            Tier::Medium => write!(f, "MEDIUM"),
            Tier::Low => write!(f, "LOW"),
        }
    }
}

/// A catalog entry.
///
/// `title` and `image` are opaque to the engine and passed through to the
/// view layer untouched.
///
/// ## Example
///
/// ```
/// use pick_a_box::prizes::{Prize, PrizeId, PrizeKind, Tier};
///
/// let coupon = Prize::new(PrizeId::new(1), PrizeKind::Prize, "20% Off Coupon Code")
///     .with_tier(Tier::Low)
///     .with_image("/prizes/shoppingCart.png");
///
/// assert!(coupon.is_win());
/// assert_eq!(coupon.tier, Some(Tier::Low));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub id: PrizeId,

    #[serde(rename = "type")]
    pub kind: PrizeKind,

    pub title: String,

    /// `None` draws with weight 1.
    #[serde(default, alias = "value", skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,

    #[serde(default)]
    pub image: String,
}

impl Prize {
    /// Create an untiered prize with no image.
    #[must_use]
    pub fn new(id: PrizeId, kind: PrizeKind, title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            tier: None,
            image: String::new(),
        }
    }

    /// Set the tier.
    #[must_use]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// True if picking this entry is a win.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.kind == PrizeKind::Prize
    }
}
