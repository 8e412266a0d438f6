//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for budget previews and event drafts
//! - Error to response mapping
//! - The in-memory draft store

pub mod error;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use fete_shared::PlannerConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use store::EventDraftStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Planner settings (currency, default categories, display precision).
    pub planner: Arc<PlannerConfig>,
    /// Submitted event drafts.
    pub drafts: EventDraftStore,
}

impl AppState {
    /// Creates state with an empty draft store sized from the planner config.
    #[must_use]
    pub fn new(planner: PlannerConfig) -> Self {
        Self {
            drafts: EventDraftStore::new(planner.max_drafts),
            planner: Arc::new(planner),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_is_nested_under_api_prefix() {
        let app = create_router(AppState::new(PlannerConfig::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = create_router(AppState::new(PlannerConfig::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/vendors")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
