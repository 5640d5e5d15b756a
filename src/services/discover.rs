use crate::models::user_preferences::{BUDGET_CEILING, TOP_RATED_MIN_RATING};
use crate::models::{Business, DiscoverQuery, QuickFilter, RecommendationPreferences};

use super::classifier::is_hidden_gem;
use super::recommendations::{recommend, sort_for_students};

/// Number of picks shown above the discover results
pub const PICKS_LIMIT: usize = 4;

/// Applies the discover page search, category and quick filters
///
/// Results keep catalogue order unless student mode is on, in which case they
/// are re-ranked by student friendliness.
pub fn discover(businesses: &[Business], query: &DiscoverQuery) -> Vec<Business> {
    let search = query.search_text();
    let category = query.category_filter();

    let mut results: Vec<Business> = businesses
        .iter()
        .filter(|b| search.as_deref().map_or(true, |q| matches_search(b, q)))
        .filter(|b| category.map_or(true, |c| b.category == c))
        .filter(|b| query.filters.iter().all(|filter| passes(b, *filter)))
        .cloned()
        .collect();

    if query.student_mode {
        sort_for_students(&mut results);
    }

    results
}

/// Case-insensitive match on name, category, address or any tag
///
/// `needle` must already be lowercase.
pub fn matches_search(business: &Business, needle: &str) -> bool {
    business.name.to_lowercase().contains(needle)
        || business.category.to_lowercase().contains(needle)
        || business.address.to_lowercase().contains(needle)
        || business.tags.iter().any(|tag| tag.contains(needle))
}

fn passes(business: &Business, filter: QuickFilter) -> bool {
    match filter {
        QuickFilter::Budget => business.avg_cost <= BUDGET_CEILING,
        QuickFilter::StudentDiscount => business.signals().has_student_discount(),
        QuickFilter::TopRated => business.rating >= TOP_RATED_MIN_RATING,
        QuickFilter::OpenNow => business.is_open,
    }
}

/// Top recommendations shown on the discover page
pub fn picks(businesses: &[Business], student_mode: bool) -> Vec<Business> {
    let mut picks = recommend(
        businesses,
        &RecommendationPreferences::discover_picks(student_mode),
    );
    picks.truncate(PICKS_LIMIT);
    picks
}

/// Every hidden gem, in catalogue order
pub fn hidden_gems(businesses: &[Business]) -> Vec<Business> {
    businesses.iter().filter(|b| is_hidden_gem(b)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::seed_catalogue;
    use crate::models::business::fixtures::business;

    fn ids(businesses: &[Business]) -> Vec<&str> {
        businesses.iter().map(|b| b.id.as_str()).collect()
    }

    fn query(q: &str) -> DiscoverQuery {
        DiscoverQuery {
            q: Some(q.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_query_returns_catalogue_order() {
        let seed = seed_catalogue().unwrap();
        let results = discover(&seed, &DiscoverQuery::default());
        assert_eq!(results, seed);
    }

    #[test]
    fn test_search_matches_tags() {
        let seed = seed_catalogue().unwrap();
        assert_eq!(ids(&discover(&seed, &query("Biryani"))), vec!["1"]);
        assert_eq!(ids(&discover(&seed, &query("breakfast"))), vec!["1", "2"]);
    }

    #[test]
    fn test_search_whitespace_is_significant() {
        let seed = seed_catalogue().unwrap();
        assert!(discover(&seed, &query(" biryani")).is_empty());
        assert_eq!(ids(&discover(&seed, &query("vishnu sri"))), vec!["1"]);
        // Every name or address holds a space
        assert_eq!(discover(&seed, &query(" ")).len(), 15);
    }

    #[test]
    fn test_search_matches_address_and_category() {
        let seed = seed_catalogue().unwrap();
        assert_eq!(ids(&discover(&seed, &query("clock tower"))), vec!["2", "10"]);
        assert_eq!(ids(&discover(&seed, &query("fitness"))), vec!["15"]);
    }

    #[test]
    fn test_category_and_quick_filters() {
        let seed = seed_catalogue().unwrap();
        let q = DiscoverQuery {
            category: Some("Restaurant".to_string()),
            filters: vec![QuickFilter::Budget, QuickFilter::StudentDiscount],
            ..Default::default()
        };
        assert_eq!(ids(&discover(&seed, &q)), vec!["1", "2", "3", "5"]);

        let top_rated = DiscoverQuery {
            filters: vec![QuickFilter::TopRated],
            ..Default::default()
        };
        assert_eq!(
            ids(&discover(&seed, &top_rated)),
            vec!["1", "4", "6", "7", "12", "14"]
        );
    }

    #[test]
    fn test_open_now_filter() {
        let mut closed = business("closed");
        closed.is_open = false;
        let listings = vec![closed, business("open")];
        let q = DiscoverQuery {
            filters: vec![QuickFilter::OpenNow],
            ..Default::default()
        };
        assert_eq!(ids(&discover(&listings, &q)), vec!["open"]);
    }

    #[test]
    fn test_student_mode_reorders_results() {
        let seed = seed_catalogue().unwrap();
        let q = DiscoverQuery {
            category: Some("Services".to_string()),
            student_mode: true,
            ..Default::default()
        };
        // 9: 20 + 10 + 5, 11: 20 + 10 + 5, 10: 15
        assert_eq!(ids(&discover(&seed, &q)), vec!["9", "11", "10"]);
    }

    #[test]
    fn test_picks() {
        let seed = seed_catalogue().unwrap();
        assert_eq!(ids(&picks(&seed, true)), vec!["14", "2", "1", "7"]);
        assert_eq!(ids(&picks(&seed, false)), vec!["14", "2", "1", "7"]);
        assert!(picks(&[], true).is_empty());
    }

    #[test]
    fn test_hidden_gems() {
        let mut gem = business("gem");
        gem.rating = 4.6;
        gem.views = 120;
        let listings = vec![business("plain"), gem];
        assert_eq!(ids(&hidden_gems(&listings)), vec!["gem"]);
        assert!(hidden_gems(&seed_catalogue().unwrap()).is_empty());
    }
}
