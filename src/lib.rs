//! LocalLift trust and recommendation service
//!
//! The engine in [`services`] scores, classifies, ranks and summarises
//! business listings. [`api`] exposes it over HTTP on top of a
//! [`db::BusinessRepository`].

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

pub use error::{AppError, AppResult};
pub use models::{Business, BusinessInsight, PlatformStats, RecommendationPreferences};
