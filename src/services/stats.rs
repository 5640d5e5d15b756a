use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

use crate::models::{
    engagement_percent, Business, CategoryCount, OwnerSummary, PlatformStats, TrustRanking,
};

use super::classifier::is_hidden_gem;
use super::trust::trust_score;

/// Reduces the catalogue into platform-wide counters
///
/// An empty catalogue yields all-zero counts.
pub fn aggregate(businesses: &[Business]) -> PlatformStats {
    let categories: HashSet<&str> = businesses.iter().map(|b| b.category.as_str()).collect();

    PlatformStats {
        total_businesses: businesses.len(),
        total_views: businesses.iter().map(|b| b.views).sum(),
        total_clicks: businesses.iter().map(|b| b.clicks).sum(),
        verified_count: businesses.iter().filter(|b| b.signals().verified).count(),
        hidden_gems: businesses.iter().filter(|b| is_hidden_gem(b)).count(),
        categories_count: categories.len(),
    }
}

/// Totals over the listings registered by one owner
pub fn owner_summary(businesses: &[Business], owner_id: &str) -> OwnerSummary {
    let owned: Vec<&Business> = businesses
        .iter()
        .filter(|b| b.owner_id.as_deref() == Some(owner_id))
        .collect();

    let total_views = owned.iter().map(|b| b.views).sum();
    let total_clicks = owned.iter().map(|b| b.clicks).sum();
    let average_rating = (!owned.is_empty())
        .then(|| owned.iter().map(|b| b.rating).sum::<f64>() / owned.len() as f64);

    OwnerSummary {
        owner_id: owner_id.to_string(),
        listings: owned.len(),
        total_views,
        total_clicks,
        average_rating,
        engagement_percent: engagement_percent(total_clicks, total_views),
    }
}

/// Listing count per category, largest first, ties by name
pub fn category_breakdown(businesses: &[Business]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for business in businesses {
        *counts.entry(business.category.as_str()).or_default() += 1;
    }

    let mut breakdown: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    breakdown.sort_by_key(|entry| Reverse(entry.count));
    breakdown
}

/// The `limit` most viewed listings
pub fn most_viewed(businesses: &[Business], limit: usize) -> Vec<Business> {
    let mut sorted: Vec<&Business> = businesses.iter().collect();
    sorted.sort_by_key(|b| Reverse(b.views));
    sorted.into_iter().take(limit).cloned().collect()
}

/// The `limit` listings with the highest trust scores
pub fn trust_leaderboard(businesses: &[Business], limit: usize) -> Vec<TrustRanking> {
    let mut rankings: Vec<TrustRanking> = businesses
        .iter()
        .map(|b| TrustRanking {
            id: b.id.clone(),
            name: b.name.clone(),
            trust_score: trust_score(b),
        })
        .collect();
    rankings.sort_by_key(|ranking| Reverse(ranking.trust_score));
    rankings.truncate(limit);
    rankings
}
