use crate::{
    error::AppResult,
    models::{Business, BusinessUpdate, NewBusiness},
};

/// Storage for the business catalogue
///
/// The scoring engine never talks to this trait; handlers read a snapshot
/// with `list` and hand it to the pure functions in `services`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BusinessRepository: Send + Sync {
    /// All listings, platform seed first, then user-added (newest first)
    async fn list(&self) -> AppResult<Vec<Business>>;

    async fn get(&self, id: &str) -> AppResult<Option<Business>>;

    /// Listings registered by one owner account
    async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<Business>>;

    /// Creates a listing with a fresh id and zeroed counters
    async fn add(&self, business: NewBusiness, owner_id: Option<String>) -> AppResult<Business>;

    /// Replaces the fields present in `update`
    ///
    /// Returns `AppError::NotFound` for unknown ids.
    async fn update(&self, id: &str, update: BusinessUpdate) -> AppResult<Business>;

    /// Hard-deletes a listing
    ///
    /// Returns `AppError::NotFound` for unknown ids.
    async fn remove(&self, id: &str) -> AppResult<()>;

    async fn record_view(&self, id: &str) -> AppResult<Business>;

    async fn record_click(&self, id: &str) -> AppResult<Business>;
}
