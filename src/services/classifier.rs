use crate::models::{Badge, BadgeKind, Business, BusinessInsight, TrustTier};

use super::trust::trust_score;

pub const HIDDEN_GEM_MIN_RATING: f64 = 4.5;
pub const HIDDEN_GEM_MAX_VIEWS: u64 = 500;
pub const TRENDING_MIN_ENGAGEMENT: f64 = 0.15;
pub const TRENDING_MIN_VIEWS: u64 = 1000;
pub const STUDENT_FAVORITE_MIN_DISCOUNT: u32 = 20;
/// Listings established in or after this year get the "new" badge
pub const NEW_LISTING_CUTOFF_YEAR: i32 = 2022;

/// High rating with little visibility so far
pub fn is_hidden_gem(business: &Business) -> bool {
    business.rating >= HIDDEN_GEM_MIN_RATING && business.views < HIDDEN_GEM_MAX_VIEWS
}

/// Meaningful traffic with a high click-through rate
pub fn is_trending(business: &Business) -> bool {
    match business.signals().engagement {
        Some(rate) => rate >= TRENDING_MIN_ENGAGEMENT && business.views >= TRENDING_MIN_VIEWS,
        None => false,
    }
}

/// Thresholds used when awarding badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRules {
    /// Absolute year, not a sliding window
    pub new_listing_cutoff_year: i32,
}

impl Default for BadgeRules {
    fn default() -> Self {
        Self {
            new_listing_cutoff_year: NEW_LISTING_CUTOFF_YEAR,
        }
    }
}

impl BadgeRules {
    pub fn new(new_listing_cutoff_year: i32) -> Self {
        Self {
            new_listing_cutoff_year,
        }
    }

    /// Badges earned by a listing, in display priority order:
    /// verified, hidden gem, trending, student favorite, new
    pub fn badges(&self, business: &Business) -> Vec<Badge> {
        self.badges_with_score(business, trust_score(business))
    }

    fn badges_with_score(&self, business: &Business, score: u8) -> Vec<Badge> {
        let signals = business.signals();

        let earned = [
            (
                BadgeKind::Verified,
                signals.verified && score >= TrustTier::VERIFIED_MIN,
            ),
            (BadgeKind::HiddenGem, is_hidden_gem(business)),
            (BadgeKind::Trending, is_trending(business)),
            (
                BadgeKind::StudentFavorite,
                signals.student_discount >= STUDENT_FAVORITE_MIN_DISCOUNT,
            ),
            (
                BadgeKind::New,
                signals.established >= self.new_listing_cutoff_year,
            ),
        ];

        earned
            .into_iter()
            .filter(|(_, applies)| *applies)
            .map(|(kind, _)| Badge::from(kind))
            .collect()
    }

    /// Bundles a listing with its score, tier, badges and classifications
    pub fn insight(&self, business: Business) -> BusinessInsight {
        let score = trust_score(&business);
        let tier = TrustTier::from_score(score);

        BusinessInsight {
            trust_score: score,
            trust_tier: tier,
            trust_label: tier.label(),
            price_symbol: business.price_range.symbol(),
            badges: self.badges_with_score(&business, score),
            hidden_gem: is_hidden_gem(&business),
            trending: is_trending(&business),
            business,
        }
    }
}

/// Badges earned under the default rules
pub fn badges(business: &Business) -> Vec<Badge> {
    BadgeRules::default().badges(business)
}
