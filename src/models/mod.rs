use serde::Serialize;

pub mod badge;
pub mod business;
pub mod user_preferences;

pub use badge::{Badge, BadgeKind, TrustTier};
pub use business::{Business, BusinessSignals, BusinessUpdate, NewBusiness, PriceRange};
pub use user_preferences::{DiscoverQuery, QuickFilter, RecommendationPreferences};

// ============================================================================
// Derived views
// ============================================================================

/// A listing together with every signal derived from it
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BusinessInsight {
    #[serde(flatten)]
    pub business: Business,
    pub trust_score: u8,
    pub trust_tier: TrustTier,
    /// Display label of `trust_tier`
    pub trust_label: &'static str,
    /// Price range as shown on cards
    pub price_symbol: &'static str,
    pub badges: Vec<Badge>,
    pub hidden_gem: bool,
    pub trending: bool,
}

/// Platform-wide counters over the whole catalogue
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct PlatformStats {
    pub total_businesses: usize,
    pub total_views: u64,
    pub total_clicks: u64,
    pub verified_count: usize,
    pub hidden_gems: usize,
    pub categories_count: usize,
}

impl PlatformStats {
    /// Overall click-through rate as a percentage, 0 when nothing was viewed
    pub fn engagement_percent(&self) -> f64 {
        engagement_percent(self.total_clicks, self.total_views)
    }
}

/// Dashboard totals for the listings of one owner
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OwnerSummary {
    pub owner_id: String,
    pub listings: usize,
    pub total_views: u64,
    pub total_clicks: u64,
    /// Mean rating across the owner's listings, `None` without listings
    pub average_rating: Option<f64>,
    pub engagement_percent: f64,
}

/// Number of listings in one category
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// One row of the trust leaderboard
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrustRanking {
    pub id: String,
    pub name: String,
    pub trust_score: u8,
}

pub(crate) fn engagement_percent(clicks: u64, views: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    clicks as f64 / views as f64 * 100.0
}
