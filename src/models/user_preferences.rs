use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Spend ceiling applied by the "Under ₹200" quick filter and student picks
pub const BUDGET_CEILING: u32 = 200;

/// Rating floor of the "Top Rated" quick filter
pub const TOP_RATED_MIN_RATING: f64 = 4.5;

/// Minimum rating used for the discover page picks
pub const PICKS_MIN_RATING: f64 = 4.3;

/// User-selected constraints for personalized recommendations
///
/// Every field is optional; an absent field imposes no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationPreferences {
    /// Exclude listings whose average cost exceeds this amount
    #[serde(default)]
    pub max_budget: Option<u32>,
    /// Only keep listings in this category ("All" keeps everything)
    #[serde(default)]
    pub category: Option<String>,
    /// Exclude listings rated below this value
    #[serde(default)]
    pub min_rating: Option<f64>,
    /// Only keep student-friendly listings
    #[serde(default)]
    pub student_mode: bool,
}

impl RecommendationPreferences {
    /// Creates preferences with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Preferences behind the discover page picks
    pub fn discover_picks(student_mode: bool) -> Self {
        Self {
            max_budget: student_mode.then_some(BUDGET_CEILING),
            category: None,
            min_rating: Some(PICKS_MIN_RATING),
            student_mode,
        }
    }

    /// The category constraint, if one is in effect
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| *category != ALL_CATEGORIES)
    }
}

/// Quick filter toggles on the discover page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuickFilter {
    /// Average cost at most ₹200
    Budget,
    /// Offers any student discount
    StudentDiscount,
    /// Rated 4.5 or higher
    TopRated,
    /// Currently open
    OpenNow,
}

impl FromStr for QuickFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "budget" => Ok(QuickFilter::Budget),
            "student_discount" => Ok(QuickFilter::StudentDiscount),
            "top_rated" => Ok(QuickFilter::TopRated),
            "open_now" => Ok(QuickFilter::OpenNow),
            other => Err(format!("unknown filter '{}'", other)),
        }
    }
}

impl QuickFilter {
    /// Parses a comma-separated filter list, ignoring empty entries
    pub fn parse_list(list: &str) -> Result<Vec<QuickFilter>, String> {
        list.split(',')
            .filter(|key| !key.trim().is_empty())
            .map(str::parse)
            .collect()
    }
}

/// Search and filter state of the discover page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverQuery {
    /// Free-text search over name, category, address and tags
    pub q: Option<String>,
    pub category: Option<String>,
    pub filters: Vec<QuickFilter>,
    /// Re-rank results by student friendliness
    pub student_mode: bool,
}

impl DiscoverQuery {
    /// Lowercased search text, if any was entered
    ///
    /// Whitespace is significant: `" biryani"` only matches text containing
    /// the leading space.
    pub fn search_text(&self) -> Option<String> {
        self.q
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| *category != ALL_CATEGORIES)
    }
}
