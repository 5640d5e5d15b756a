use serde::{Deserialize, Deserializer, Serialize};

/// Fallback listing image used when a new business is created without one
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400&h=300&fit=crop";

/// Coordinates new listings are placed at when none are supplied
pub const DEFAULT_LAT: f64 = 16.5787;
pub const DEFAULT_LNG: f64 = 82.0061;

const DEFAULT_ADDRESS: &str = "Amalapuram, AP 533201";
const DEFAULT_DESCRIPTION: &str = "A great local business in Amalapuram.";
const DEFAULT_AVG_COST: u32 = 200;
const DEFAULT_RATING: f64 = 4.0;

/// Price tier of a listing, ordered from cheapest to most expensive
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Low,
    #[default]
    Mid,
    High,
}

impl PriceRange {
    /// Currency symbol shown on cards (e.g., "₹₹")
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceRange::Low => "₹",
            PriceRange::Mid => "₹₹",
            PriceRange::High => "₹₹₹",
        }
    }
}

/// A listed local business
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Business {
    /// Unique identifier, assigned at creation
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    /// Average review rating in [0, 5]
    pub rating: f64,
    pub review_count: u32,
    pub price_range: PriceRange,
    /// Typical spend per visit in local currency units
    pub avg_cost: u32,
    /// Student discount percentage, if the business offers one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_discount: Option<u8>,
    pub is_open: bool,
    pub open_hours: String,
    pub phone: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    pub clicks: u64,
    pub views: u64,
    #[serde(default)]
    pub offers: Vec<String>,
    pub near_campus: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Year the business was established
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<i32>,
    /// Owning account; absent for platform-owned listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

/// Optional record fields resolved to concrete values
///
/// Scoring code reads these instead of the raw `Option`s so that every rule
/// sees the same defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessSignals {
    /// Discount percentage, 0 when none is offered
    pub student_discount: u32,
    pub verified: bool,
    /// Established year, 0 when unknown
    pub established: i32,
    /// Click-through rate in [0, 1]; `None` when the listing has no views
    pub engagement: Option<f64>,
}

impl BusinessSignals {
    pub fn has_student_discount(&self) -> bool {
        self.student_discount > 0
    }
}

impl Business {
    /// Normalizes the optional fields used by the scoring engine
    pub fn signals(&self) -> BusinessSignals {
        let engagement = (self.views > 0)
            .then(|| (self.clicks as f64 / self.views as f64).clamp(0.0, 1.0));

        BusinessSignals {
            student_discount: self.student_discount.map_or(0, u32::from),
            verified: self.verified.unwrap_or(false),
            established: self.established.unwrap_or(0),
            engagement,
        }
    }

    /// Applies a partial update, leaving absent fields untouched
    pub fn apply(&mut self, update: BusinessUpdate) {
        let BusinessUpdate {
            name,
            category,
            description,
            address,
            lat,
            lng,
            rating,
            review_count,
            price_range,
            avg_cost,
            student_discount,
            is_open,
            open_hours,
            phone,
            tags,
            image,
            offers,
            near_campus,
            verified,
            established,
        } = update;

        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = category {
            self.category = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = address {
            self.address = value;
        }
        if let Some(value) = lat {
            self.lat = value;
        }
        if let Some(value) = lng {
            self.lng = value;
        }
        if let Some(value) = rating {
            self.rating = value;
        }
        if let Some(value) = review_count {
            self.review_count = value;
        }
        if let Some(value) = price_range {
            self.price_range = value;
        }
        if let Some(value) = avg_cost {
            self.avg_cost = value;
        }
        if let Some(value) = student_discount {
            self.student_discount = value;
        }
        if let Some(value) = is_open {
            self.is_open = value;
        }
        if let Some(value) = open_hours {
            self.open_hours = value;
        }
        if let Some(value) = phone {
            self.phone = value;
        }
        if let Some(value) = tags {
            self.tags = value;
        }
        if let Some(value) = image {
            self.image = value;
        }
        if let Some(value) = offers {
            self.offers = value;
        }
        if let Some(value) = near_campus {
            self.near_campus = value;
        }
        if let Some(value) = verified {
            self.verified = value;
        }
        if let Some(value) = established {
            self.established = value;
        }
    }
}

/// Payload for creating a listing
///
/// Counters, rating and review count are not accepted here; new listings
/// always start at zero views/clicks with a 4.0 rating and no reviews.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct NewBusiness {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default)]
    pub price_range: PriceRange,
    pub avg_cost: Option<u32>,
    pub student_discount: Option<u8>,
    #[serde(default = "default_true")]
    pub is_open: bool,
    #[serde(default)]
    pub open_hours: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub offers: Vec<String>,
    #[serde(default)]
    pub near_campus: bool,
    pub verified: Option<bool>,
    pub established: Option<i32>,
}

fn default_true() -> bool {
    true
}

impl NewBusiness {
    /// Builds the stored record with fresh counters and the platform defaults
    pub fn into_business(self, id: String, owner_id: Option<String>) -> Business {
        let tags = if self.tags.is_empty() {
            vec![self.category.to_lowercase()]
        } else {
            self.tags
        };

        Business {
            id,
            description: non_empty_or(self.description, DEFAULT_DESCRIPTION),
            address: non_empty_or(self.address, DEFAULT_ADDRESS),
            name: self.name,
            category: self.category,
            lat: self.lat.unwrap_or(DEFAULT_LAT),
            lng: self.lng.unwrap_or(DEFAULT_LNG),
            rating: DEFAULT_RATING,
            review_count: 0,
            price_range: self.price_range,
            avg_cost: self.avg_cost.unwrap_or(DEFAULT_AVG_COST),
            student_discount: self.student_discount,
            is_open: self.is_open,
            open_hours: self.open_hours,
            phone: self.phone,
            tags,
            image: self.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            clicks: 0,
            views: 0,
            offers: self.offers,
            near_campus: self.near_campus,
            verified: self.verified,
            established: self.established,
            owner_id,
        }
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Partial replacement of a listing's editable fields
///
/// Optional record fields use a nested `Option`: an absent key leaves the
/// field alone, an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct BusinessUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub price_range: Option<PriceRange>,
    pub avg_cost: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub student_discount: Option<Option<u8>>,
    pub is_open: Option<bool>,
    pub open_hours: Option<String>,
    pub phone: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub offers: Option<Vec<String>>,
    pub near_campus: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub verified: Option<Option<bool>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub established: Option<Option<i32>>,
}

/// Distinguishes a present `null` from a missing key
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
