//! The demo brand shipped with the engine.

use crate::core::{BoxLayout, BrandConfig, ProbabilityWeights};
use crate::prizes::{Prize, PrizeId, PrizeKind, Tier};

/// Lookup key for this brand.
pub const KEY: &str = "wiply";

/// Six prizes, weights `HIGH:1, MEDIUM:3, LOW:6`, 6 boxes on desktop and 4 on mobile.
#[must_use]
pub fn brand() -> BrandConfig {
    let entry = |id: u32, kind: PrizeKind, title: &str, tier: Tier, image: &str| {
        Prize::new(PrizeId::new(id), kind, title)
            .with_tier(tier)
            .with_image(image)
    };

    BrandConfig::new("Wiply Demo", ProbabilityWeights::new(1, 3, 6))
        .with_box_count(BoxLayout {
            desktop: 6,
            mobile: 4,
        })
        .with_prize(entry(
            1,
            PrizeKind::Prize,
            "20% Off Coupon Code",
            Tier::Low,
            "/prizes/shoppingCart.png",
        ))
        .with_prize(entry(
            2,
            PrizeKind::Prize,
            "Buy one Get two Free pairs of earrings",
            Tier::Medium,
            "/prizes/jewl.png",
        ))
        .with_prize(entry(
            3,
            PrizeKind::Prize,
            "Buy one get one 50% off any pair of Jeans",
            Tier::Medium,
            "/prizes/jeanss.png",
        ))
        .with_prize(entry(
            4,
            PrizeKind::Prize,
            "25% off any fragrance",
            Tier::High,
            "/prizes/perfumeee.png",
        ))
        .with_prize(entry(
            5,
            PrizeKind::TryAgain,
            "Try Again Tomorrow!",
            Tier::Medium,
            "/prizes/TRY.png",
        ))
        .with_prize(entry(
            6,
            PrizeKind::TryAgain,
            "Sorry unlucky pick! Try Again!",
            Tier::Low,
            "/prizes/RedX.png",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedSource;

    #[test]
    fn test_brand_validates() {
        let brand = brand();
        assert_eq!(brand.name, "Wiply Demo");
        assert_eq!(brand.prizes.len(), 6);

        let catalog = brand.catalog().unwrap();
        // 6 + 3 + 3 + 1 + 3 + 6
        assert_eq!(catalog.pool_len(), 22);
    }

    #[test]
    fn test_first_pool_slot_is_first_prize() {
        let catalog = brand().catalog().unwrap();
        let prize = catalog.draw_one(&mut FixedSource(0.0));
        assert_eq!(prize.id, PrizeId::new(1));
        assert_eq!(prize.title, "20% Off Coupon Code");
    }

    #[test]
    fn test_win_probability() {
        let catalog = brand().catalog().unwrap();
        // Wins: 6 + 3 + 3 + 1 = 13 of 22
        assert!((catalog.win_probability() - 13.0 / 22.0).abs() < 1e-12);
    }
}
