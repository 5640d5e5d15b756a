use crate::models::Business;

const SEED_JSON: &str = include_str!("../../data/seed_businesses.json");

/// Loads the bundled starter catalogue
///
/// Seed listings are platform-owned and carry no `owner_id`.
pub fn seed_catalogue() -> serde_json::Result<Vec<Business>> {
    serde_json::from_str(SEED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_catalogue_parses() {
        let seed = seed_catalogue().unwrap();
        assert_eq!(seed.len(), 15);
        assert_eq!(seed[0].id, "1");
        assert_eq!(seed[0].name, "Hotel Vishnu Sri");
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let seed = seed_catalogue().unwrap();
        let ids: HashSet<&str> = seed.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), seed.len());
    }

    #[test]
    fn test_seed_respects_record_invariants() {
        for biz in seed_catalogue().unwrap() {
            assert!((0.0..=5.0).contains(&biz.rating), "{} rating", biz.id);
            assert!(biz.owner_id.is_none());
            if let Some(discount) = biz.student_discount {
                assert!(discount > 0 && discount <= 100, "{} discount", biz.id);
            }
        }
    }
}
