use std::sync::Arc;

use crate::config::Config;
use crate::db::{seed_catalogue, BusinessRepository, InMemoryRepository};
use crate::services::BadgeRules;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn BusinessRepository>,
    pub badge_rules: BadgeRules,
}

impl AppState {
    pub fn new(repository: Arc<dyn BusinessRepository>, badge_rules: BadgeRules) -> Self {
        Self {
            repository,
            badge_rules,
        }
    }

    /// Builds an in-memory state, seeded when the config asks for it
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repository = if config.seed_catalogue {
            InMemoryRepository::with_seed(seed_catalogue()?)
        } else {
            InMemoryRepository::new()
        };

        Ok(Self::new(
            Arc::new(repository),
            BadgeRules::new(config.new_listing_cutoff_year),
        ))
    }

    /// In-memory state over the starter catalogue with default badge rules
    pub fn seeded() -> anyhow::Result<Self> {
        Ok(Self::new(
            Arc::new(InMemoryRepository::with_seed(seed_catalogue()?)),
            BadgeRules::default(),
        ))
    }
}

impl Default for AppState {
    /// Empty in-memory catalogue
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()), BadgeRules::default())
    }
}
