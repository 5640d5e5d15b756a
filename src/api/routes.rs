use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Listings
        .route(
            "/businesses",
            get(handlers::list_businesses).post(handlers::create_business),
        )
        .route(
            "/businesses/:id",
            get(handlers::get_business)
                .patch(handlers::update_business)
                .delete(handlers::delete_business),
        )
        .route("/businesses/:id/views", post(handlers::record_view))
        .route("/businesses/:id/clicks", post(handlers::record_click))
        // Discovery
        .route("/discover", get(handlers::discover_businesses))
        .route("/discover/picks", get(handlers::discover_picks))
        .route("/hidden-gems", get(handlers::hidden_gems))
        .route("/recommendations", post(handlers::recommendations))
        // Dashboard
        .route("/stats", get(handlers::platform_stats))
        .route("/stats/categories", get(handlers::category_stats))
        .route("/stats/most-viewed", get(handlers::most_viewed))
        .route("/stats/trust-leaderboard", get(handlers::trust_leaderboard))
        .route("/owners/:owner_id/summary", get(handlers::owner_summary))
        .with_state(state)
        // Outermost first: the request id must exist before the trace span is made
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}
