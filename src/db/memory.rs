use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Business, BusinessUpdate, NewBusiness},
};

use super::repository::BusinessRepository;

/// Listings held in memory, split by origin
#[derive(Debug, Default)]
struct Catalogue {
    seed: Vec<Business>,
    /// Newest first
    user_added: Vec<Business>,
}

impl Catalogue {
    fn iter(&self) -> impl Iterator<Item = &Business> {
        self.seed.iter().chain(self.user_added.iter())
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Business> {
        self.seed
            .iter_mut()
            .chain(self.user_added.iter_mut())
            .find(|business| business.id == id)
    }

    fn remove(&mut self, id: &str) -> Option<Business> {
        if let Some(index) = self.seed.iter().position(|b| b.id == id) {
            return Some(self.seed.remove(index));
        }
        let index = self.user_added.iter().position(|b| b.id == id)?;
        Some(self.user_added.remove(index))
    }
}

/// In-process repository seeded with the starter catalogue
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    catalogue: RwLock<Catalogue>,
}

impl InMemoryRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose platform listings are `seed`
    pub fn with_seed(seed: Vec<Business>) -> Self {
        tracing::info!(count = seed.len(), "Catalogue seeded");
        Self {
            catalogue: RwLock::new(Catalogue {
                seed,
                user_added: Vec::new(),
            }),
        }
    }

    async fn modify<F>(&self, id: &str, change: F) -> AppResult<Business>
    where
        F: FnOnce(&mut Business) + Send,
    {
        let mut catalogue = self.catalogue.write().await;
        let business = catalogue
            .find_mut(id)
            .ok_or_else(|| AppError::business_not_found(id))?;
        change(business);
        Ok(business.clone())
    }
}

#[async_trait::async_trait]
impl BusinessRepository for InMemoryRepository {
    async fn list(&self) -> AppResult<Vec<Business>> {
        let catalogue = self.catalogue.read().await;
        Ok(catalogue.iter().cloned().collect())
    }

    async fn get(&self, id: &str) -> AppResult<Option<Business>> {
        let catalogue = self.catalogue.read().await;
        let found = catalogue.iter().find(|b| b.id == id).cloned();
        Ok(found)
    }

    async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<Business>> {
        let catalogue = self.catalogue.read().await;
        Ok(catalogue
            .iter()
            .filter(|b| b.owner_id.as_deref() == Some(owner_id))
            .cloned()
            .collect())
    }

    async fn add(&self, business: NewBusiness, owner_id: Option<String>) -> AppResult<Business> {
        let id = format!("user-{}", Uuid::new_v4());
        let business = business.into_business(id, owner_id);

        let mut catalogue = self.catalogue.write().await;
        catalogue.user_added.insert(0, business.clone());

        tracing::info!(
            id = %business.id,
            owner_id = ?business.owner_id,
            category = %business.category,
            "Business created"
        );
        Ok(business)
    }

    async fn update(&self, id: &str, update: BusinessUpdate) -> AppResult<Business> {
        let updated = self.modify(id, |business| business.apply(update)).await?;
        tracing::info!(id = %id, "Business updated");
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> AppResult<()> {
        let mut catalogue = self.catalogue.write().await;
        match catalogue.remove(id) {
            Some(_) => {
                tracing::info!(id = %id, "Business removed");
                Ok(())
            }
            None => Err(AppError::business_not_found(id)),
        }
    }

    async fn record_view(&self, id: &str) -> AppResult<Business> {
        self.modify(id, |business| {
            business.views = business.views.saturating_add(1);
        })
        .await
    }

    async fn record_click(&self, id: &str) -> AppResult<Business> {
        self.modify(id, |business| {
            business.clicks = business.clicks.saturating_add(1);
        })
        .await
    }
}
