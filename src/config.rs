use serde::Deserialize;

use crate::services::classifier::NEW_LISTING_CUTOFF_YEAR;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Load the starter catalogue on boot
    #[serde(default = "default_seed_catalogue")]
    pub seed_catalogue: bool,

    /// Listings established in or after this year get the "new" badge
    #[serde(default = "default_new_listing_cutoff_year")]
    pub new_listing_cutoff_year: i32,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_seed_catalogue() -> bool {
    true
}

fn default_new_listing_cutoff_year() -> i32 {
    NEW_LISTING_CUTOFF_YEAR
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, envy::Error> {
        envy::from_iter::<_, Config>(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(config.seed_catalogue);
        assert_eq!(config.new_listing_cutoff_year, 2022);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("SEED_CATALOGUE", "false"),
            ("NEW_LISTING_CUTOFF_YEAR", "2024"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(!config.seed_catalogue);
        assert_eq!(config.new_listing_cutoff_year, 2024);
    }

    #[test]
    fn test_invalid_port() {
        assert!(from_pairs(&[("PORT", "not-a-port")]).is_err());
    }
}
