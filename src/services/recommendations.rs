use std::cmp::Reverse;

use crate::models::{Business, RecommendationPreferences};

use super::classifier::{is_hidden_gem, is_trending};

/// Average cost at or below which a listing counts as student-budget
pub const STUDENT_BUDGET_COST: u32 = 150;

const RATING_WEIGHT: f64 = 20.0;
const HIDDEN_GEM_BOOST: f64 = 20.0;
const TRENDING_BOOST: f64 = 15.0;
const VERIFIED_BOOST: f64 = 10.0;

const NEAR_CAMPUS_BOOST: u32 = 10;
const STUDENT_BUDGET_BOOST: u32 = 5;

/// Generates personalized recommendations
///
/// Keeps the listings that satisfy every supplied preference, then orders them
/// by `rank_score`, highest first. Listings with equal scores keep their
/// relative input order. The input is never modified.
pub fn recommend(
    businesses: &[Business],
    preferences: &RecommendationPreferences,
) -> Vec<Business> {
    let mut ranked: Vec<(f64, &Business)> = businesses
        .iter()
        .filter(|business| matches_preferences(business, preferences))
        .map(|business| (rank_score(business), business))
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    ranked.into_iter().map(|(_, business)| business.clone()).collect()
}

/// Whether a listing passes every supplied preference
pub fn matches_preferences(business: &Business, preferences: &RecommendationPreferences) -> bool {
    if let Some(max_budget) = preferences.max_budget {
        if business.avg_cost > max_budget {
            return false;
        }
    }
    if let Some(category) = preferences.category_filter() {
        if business.category != category {
            return false;
        }
    }
    if let Some(min_rating) = preferences.min_rating {
        if business.rating < min_rating {
            return false;
        }
    }
    if preferences.student_mode && !is_student_friendly(business) {
        return false;
    }
    true
}

/// Has a student discount, is near campus, or fits a student budget
pub fn is_student_friendly(business: &Business) -> bool {
    business.signals().has_student_discount()
        || business.near_campus
        || business.avg_cost <= STUDENT_BUDGET_COST
}

/// Composite score used to order recommendations
pub fn rank_score(business: &Business) -> f64 {
    let signals = business.signals();

    let mut score = business.rating * RATING_WEIGHT + f64::from(signals.student_discount);
    if is_hidden_gem(business) {
        score += HIDDEN_GEM_BOOST;
    }
    if is_trending(business) {
        score += TRENDING_BOOST;
    }
    if signals.verified {
        score += VERIFIED_BOOST;
    }
    score
}

/// Student-mode list ordering, separate from the recommendation score
pub fn student_rank_score(business: &Business) -> u32 {
    let mut score = business.signals().student_discount;
    if business.near_campus {
        score += NEAR_CAMPUS_BOOST;
    }
    if business.avg_cost <= STUDENT_BUDGET_COST {
        score += STUDENT_BUDGET_BOOST;
    }
    score
}

/// Stable descending sort by `student_rank_score`
pub fn sort_for_students(businesses: &mut [Business]) {
    businesses.sort_by_key(|business| Reverse(student_rank_score(business)));
}
