//! Default service category endpoints.

use axum::{Json, Router, extract::State, routing::get};
use fete_core::budget::Category;
use fete_core::catalog::CategoryCatalog;
use fete_shared::types::Currency;
use serde::Serialize;

use crate::AppState;

/// Categories offered on a new event form.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    /// Currency budgets are expressed in.
    pub currency: Currency,
    /// Categories in display order.
    pub categories: Vec<Category>,
}

/// Builds the catalog a new form starts with.
pub(crate) fn default_catalog(state: &AppState) -> CategoryCatalog {
    CategoryCatalog::from_names(state.planner.default_categories.as_slice())
}

async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        currency: state.planner.currency,
        categories: default_catalog(&state).as_slice().to_vec(),
    })
}

/// Creates category routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories))
}
