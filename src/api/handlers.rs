use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{
    Business, BusinessInsight, BusinessUpdate, CategoryCount, DiscoverQuery, NewBusiness,
    OwnerSummary, PlatformStats, QuickFilter, RecommendationPreferences, TrustRanking,
};
use crate::services::{discover, recommend, stats};

use super::AppState;

pub const DEFAULT_MOST_VIEWED_LIMIT: usize = 8;
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

// Request/Response types

#[derive(Debug, Default, Deserialize)]
pub struct OwnerParams {
    pub owner_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StudentModeParams {
    #[serde(default)]
    pub student_mode: bool,
}

/// Discover page query string; `filters` is a comma-separated list
#[derive(Debug, Default, Deserialize)]
pub struct DiscoverParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub filters: Option<String>,
    #[serde(default)]
    pub student_mode: bool,
}

impl TryFrom<DiscoverParams> for DiscoverQuery {
    type Error = AppError;

    fn try_from(params: DiscoverParams) -> Result<Self, Self::Error> {
        let filters = match params.filters.as_deref() {
            Some(list) => QuickFilter::parse_list(list).map_err(AppError::InvalidInput)?,
            None => Vec::new(),
        };

        Ok(DiscoverQuery {
            q: params.q,
            category: params.category,
            filters,
            student_mode: params.student_mode,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBusinessRequest {
    #[serde(flatten)]
    pub business: NewBusiness,
    pub owner_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(flatten)]
    pub preferences: RecommendationPreferences,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CountersResponse {
    pub id: String,
    pub views: u64,
    pub clicks: u64,
}

impl From<Business> for CountersResponse {
    fn from(business: Business) -> Self {
        Self {
            id: business.id,
            views: business.views,
            clicks: business.clicks,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: PlatformStats,
    pub engagement_percent: f64,
}

impl From<PlatformStats> for StatsResponse {
    fn from(stats: PlatformStats) -> Self {
        Self {
            engagement_percent: stats.engagement_percent(),
            stats,
        }
    }
}

impl AppState {
    fn insights(&self, businesses: Vec<Business>) -> Vec<BusinessInsight> {
        businesses
            .into_iter()
            .map(|business| self.badge_rules.insight(business))
            .collect()
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// List every listing, or only one owner's listings
pub async fn list_businesses(
    State(state): State<AppState>,
    Query(params): Query<OwnerParams>,
) -> AppResult<Json<Vec<BusinessInsight>>> {
    let businesses = match params.owner_id.as_deref() {
        Some(owner_id) => state.repository.list_by_owner(owner_id).await?,
        None => state.repository.list().await?,
    };

    Ok(Json(state.insights(businesses)))
}

/// Register a new listing
pub async fn create_business(
    State(state): State<AppState>,
    Json(request): Json<CreateBusinessRequest>,
) -> AppResult<(StatusCode, Json<Business>)> {
    let mut business = request.business;
    if business.established.is_none() {
        business.established = Some(chrono::Utc::now().year());
    }

    let created = state.repository.add(business, request.owner_id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BusinessInsight>> {
    let business = state
        .repository
        .get(&id)
        .await?
        .ok_or_else(|| AppError::business_not_found(&id))?;

    Ok(Json(state.badge_rules.insight(business)))
}

pub async fn update_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<BusinessUpdate>,
) -> AppResult<Json<Business>> {
    let updated = state.repository.update(&id, update).await?;
    Ok(Json(updated))
}

pub async fn delete_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.repository.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CountersResponse>> {
    let business = state.repository.record_view(&id).await?;
    Ok(Json(business.into()))
}

pub async fn record_click(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CountersResponse>> {
    let business = state.repository.record_click(&id).await?;
    Ok(Json(business.into()))
}

/// Search, category and quick filters of the discover page
pub async fn discover_businesses(
    State(state): State<AppState>,
    Query(params): Query<DiscoverParams>,
) -> AppResult<Json<Vec<BusinessInsight>>> {
    let query = DiscoverQuery::try_from(params)?;
    let businesses = state.repository.list().await?;

    let results = discover::discover(&businesses, &query);
    tracing::debug!(results = results.len(), student_mode = query.student_mode, "Discover query");

    Ok(Json(state.insights(results)))
}

pub async fn discover_picks(
    State(state): State<AppState>,
    Query(params): Query<StudentModeParams>,
) -> AppResult<Json<Vec<BusinessInsight>>> {
    let businesses = state.repository.list().await?;
    let picks = discover::picks(&businesses, params.student_mode);
    Ok(Json(state.insights(picks)))
}

pub async fn hidden_gems(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BusinessInsight>>> {
    let businesses = state.repository.list().await?;
    Ok(Json(state.insights(discover::hidden_gems(&businesses))))
}

/// Ranked recommendations for the supplied preferences
pub async fn recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<BusinessInsight>>> {
    let businesses = state.repository.list().await?;

    let mut ranked = recommend(&businesses, &request.preferences);
    if let Some(limit) = request.limit {
        ranked.truncate(limit);
    }

    tracing::info!(
        candidates = businesses.len(),
        recommended = ranked.len(),
        student_mode = request.preferences.student_mode,
        "Recommendations generated"
    );

    Ok(Json(state.insights(ranked)))
}

pub async fn platform_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let businesses = state.repository.list().await?;
    Ok(Json(stats::aggregate(&businesses).into()))
}

pub async fn category_stats(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoryCount>>> {
    let businesses = state.repository.list().await?;
    Ok(Json(stats::category_breakdown(&businesses)))
}

pub async fn most_viewed(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<Business>>> {
    let businesses = state.repository.list().await?;
    let limit = params.limit.unwrap_or(DEFAULT_MOST_VIEWED_LIMIT);
    Ok(Json(stats::most_viewed(&businesses, limit)))
}

pub async fn trust_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<TrustRanking>>> {
    let businesses = state.repository.list().await?;
    let limit = params.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
    Ok(Json(stats::trust_leaderboard(&businesses, limit)))
}

/// Dashboard totals for one owner
pub async fn owner_summary(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> AppResult<Json<OwnerSummary>> {
    let owned = state.repository.list_by_owner(&owner_id).await?;
    Ok(Json(stats::owner_summary(&owned, &owner_id)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::db::repository::MockBusinessRepository;
    use crate::models::business::fixtures::business;
    use crate::models::{BadgeKind, TrustTier};
    use crate::services::BadgeRules;

    fn state_with(mock: MockBusinessRepository) -> AppState {
        AppState::new(Arc::new(mock), BadgeRules::default())
    }

    #[tokio::test]
    async fn test_get_business_returns_insight() {
        let mut mock = MockBusinessRepository::new();
        mock.expect_get().times(1).returning(|id| {
            let mut found = business(id);
            found.verified = Some(true);
            found.rating = 4.8;
            found.review_count = 200;
            Ok(Some(found))
        });

        let Json(insight) = get_business(State(state_with(mock)), Path("7".to_string()))
            .await
            .unwrap();

        assert_eq!(insight.business.id, "7");
        assert_eq!(insight.trust_tier, TrustTier::Verified);
        assert_eq!(insight.badges[0].kind, BadgeKind::Verified);
    }

    #[tokio::test]
    async fn test_get_business_not_found() {
        let mut mock = MockBusinessRepository::new();
        mock.expect_get().returning(|_| Ok(None));

        let result = get_business(State(state_with(mock)), Path("missing".to_string())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_by_owner_uses_owner_query() {
        let mut mock = MockBusinessRepository::new();
        mock.expect_list().never();
        mock.expect_list_by_owner().times(1).returning(|owner| {
            let mut owned = business("user-1");
            owned.owner_id = Some(owner.to_string());
            Ok(vec![owned])
        });

        let params = OwnerParams {
            owner_id: Some("owner-1".to_string()),
        };
        let Json(listings) = list_businesses(State(state_with(mock)), Query(params))
            .await
            .unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].business.owner_id.as_deref(), Some("owner-1"));
    }

    #[tokio::test]
    async fn test_create_fills_established_year() {
        let mut mock = MockBusinessRepository::new();
        mock.expect_add()
            .times(1)
            .withf(|new, owner| new.established.is_some() && owner.is_none())
            .returning(|new, owner| Ok(new.into_business("user-x".to_string(), owner)));

        let request = CreateBusinessRequest {
            business: NewBusiness {
                name: "Chai Point".to_string(),
                category: "Cafe".to_string(),
                ..Default::default()
            },
            owner_id: None,
        };

        let (status, Json(created)) = create_business(State(state_with(mock)), Json(request))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.established, Some(chrono::Utc::now().year()));
    }

    #[tokio::test]
    async fn test_delete_unknown_business() {
        let mut mock = MockBusinessRepository::new();
        mock.expect_remove()
            .returning(|id| Err(AppError::business_not_found(id)));

        let result = delete_business(State(state_with(mock)), Path("nope".to_string())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_discover_rejects_unknown_filter() {
        let mut mock = MockBusinessRepository::new();
        mock.expect_list().never();

        let params = DiscoverParams {
            filters: Some("budget,cheapest".to_string()),
            ..Default::default()
        };
        let result = discover_businesses(State(state_with(mock)), Query(params)).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_recommendations_respect_limit() {
        let mut mock = MockBusinessRepository::new();
        mock.expect_list()
            .returning(|| Ok(vec![business("1"), business("2"), business("3")]));

        let request = RecommendationRequest {
            limit: Some(2),
            ..Default::default()
        };
        let Json(ranked) = recommendations(State(state_with(mock)), Json(request))
            .await
            .unwrap();

        assert_eq!(ranked.len(), 2);
    }

    #[tokio::test]
    async fn test_stats_include_engagement() {
        let mut mock = MockBusinessRepository::new();
        mock.expect_list().returning(|| {
            let mut a = business("1");
            a.views = 300;
            a.clicks = 50;
            let mut b = business("2");
            b.views = 100;
            b.clicks = 50;
            Ok(vec![a, b])
        });

        let Json(response) = platform_stats(State(state_with(mock))).await.unwrap();

        assert_eq!(response.stats.total_views, 400);
        assert_eq!(response.stats.total_clicks, 100);
        assert_eq!(response.engagement_percent, 25.0);
    }

    #[tokio::test]
    async fn test_leaderboard_default_limit() {
        let mut mock = MockBusinessRepository::new();
        mock.expect_list().returning(|| {
            Ok((1..=12).map(|i| business(&i.to_string())).collect())
        });

        let Json(rankings) = trust_leaderboard(State(state_with(mock)), Query(LimitParams::default()))
            .await
            .unwrap();

        assert_eq!(rankings.len(), DEFAULT_LEADERBOARD_LIMIT);
    }

    #[test]
    fn test_discover_params_conversion() {
        let params = DiscoverParams {
            q: Some("biryani".to_string()),
            category: Some("All".to_string()),
            filters: Some("top_rated, open_now".to_string()),
            student_mode: true,
        };

        let query = DiscoverQuery::try_from(params).unwrap();
        assert_eq!(query.filters, vec![QuickFilter::TopRated, QuickFilter::OpenNow]);
        assert_eq!(query.category_filter(), None);
        assert!(query.student_mode);
    }
}
