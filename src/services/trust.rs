use crate::models::Business;

/// Points awarded for a perfect 5-star rating
const RATING_POINTS: f64 = 40.0;
/// Points awarded once a listing reaches `REVIEW_SATURATION` reviews
const REVIEW_POINTS: f64 = 30.0;
const REVIEW_SATURATION: f64 = 100.0;
/// Listings with fewer reviews than this lose `LOW_REVIEW_PENALTY` points
const LOW_REVIEW_THRESHOLD: u32 = 10;
const LOW_REVIEW_PENALTY: f64 = 10.0;
/// Ceiling on the click-through contribution
const ENGAGEMENT_POINTS_CAP: f64 = 15.0;
const OFFERS_BONUS: f64 = 5.0;
const STUDENT_DISCOUNT_BONUS: f64 = 5.0;
const VERIFIED_BONUS: f64 = 5.0;

/// Computes the 0-100 trust score of a listing
///
/// The score is an additive point budget:
/// - rating scaled to 40 points
/// - review volume scaled to 30 points, saturating at 100 reviews
/// - a flat 10 point penalty below 10 reviews
/// - click-through rate as a percentage, capped at 15 points
/// - 5 points each for active offers, a student discount and verification
///
/// The sum is clamped to [0, 100] and rounded. Out-of-range inputs still
/// produce a score inside that range.
pub fn trust_score(business: &Business) -> u8 {
    let signals = business.signals();

    let mut score = business.rating / 5.0 * RATING_POINTS;
    score += (business.review_count as f64 / REVIEW_SATURATION).min(1.0) * REVIEW_POINTS;

    if business.review_count < LOW_REVIEW_THRESHOLD {
        score -= LOW_REVIEW_PENALTY;
    }

    if let Some(engagement) = signals.engagement {
        score += (engagement * 100.0).min(ENGAGEMENT_POINTS_CAP);
    }

    if !business.offers.is_empty() {
        score += OFFERS_BONUS;
    }
    if signals.has_student_discount() {
        score += STUDENT_DISCOUNT_BONUS;
    }
    if signals.verified {
        score += VERIFIED_BONUS;
    }

    // NaN (e.g. from a NaN rating) casts to 0
    score.clamp(0.0, 100.0).round() as u8
}
