use serde::{Deserialize, Serialize};

/// The closed set of badge kinds a listing can carry
///
/// Variant order matches the order badges are awarded in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeKind {
    Verified,
    HiddenGem,
    Trending,
    StudentFavorite,
    New,
}

impl BadgeKind {
    pub fn label(&self) -> &'static str {
        match self {
            BadgeKind::Verified => "Verified",
            BadgeKind::HiddenGem => "Hidden Gem",
            BadgeKind::Trending => "Trending",
            BadgeKind::StudentFavorite => "Student Fav",
            BadgeKind::New => "New",
        }
    }
}

/// A labeled badge attached to a listing for display
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Badge {
    #[serde(rename = "type")]
    pub kind: BadgeKind,
    pub label: &'static str,
}

impl From<BadgeKind> for Badge {
    fn from(kind: BadgeKind) -> Self {
        Self {
            kind,
            label: kind.label(),
        }
    }
}

/// Display tier derived from a trust score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrustTier {
    /// Score of 70 or more
    Verified,
    /// Score from 45 up to 69
    Trusted,
    /// Score below 45
    New,
}

impl TrustTier {
    pub const VERIFIED_MIN: u8 = 70;
    pub const TRUSTED_MIN: u8 = 45;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::VERIFIED_MIN {
            TrustTier::Verified
        } else if score >= Self::TRUSTED_MIN {
            TrustTier::Trusted
        } else {
            TrustTier::New
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrustTier::Verified => "Verified",
            TrustTier::Trusted => "Trusted",
            TrustTier::New => "New",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_serialization() {
        let badge = Badge::from(BadgeKind::StudentFavorite);
        let json = serde_json::to_value(&badge).unwrap();
        assert_eq!(json["type"], "student-favorite");
        assert_eq!(json["label"], "Student Fav");

        let json = serde_json::to_value(Badge::from(BadgeKind::HiddenGem)).unwrap();
        assert_eq!(json["type"], "hidden-gem");
    }

    #[test]
    fn test_trust_tier_boundaries() {
        assert_eq!(TrustTier::from_score(100), TrustTier::Verified);
        assert_eq!(TrustTier::from_score(70), TrustTier::Verified);
        assert_eq!(TrustTier::from_score(69), TrustTier::Trusted);
        assert_eq!(TrustTier::from_score(45), TrustTier::Trusted);
        assert_eq!(TrustTier::from_score(44), TrustTier::New);
        assert_eq!(TrustTier::from_score(0), TrustTier::New);
    }

    #[test]
    fn test_trust_tier_labels() {
        assert_eq!(TrustTier::from_score(80).label(), "Verified");
        assert_eq!(TrustTier::from_score(50).label(), "Trusted");
        assert_eq!(TrustTier::from_score(10).label(), "New");
        assert_eq!(serde_json::to_string(&TrustTier::Trusted).unwrap(), "\"trusted\"");
    }
}
