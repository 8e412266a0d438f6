//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod budget;
pub mod categories;
pub mod events;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(categories::routes())
        .merge(budget::routes())
        .merge(events::routes())
}
