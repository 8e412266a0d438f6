//! Budget allocation preview routes.
//!
//! The preview runs the same form pipeline as event submission, so the
//! numbers a client shows before submitting match what gets stored.

use std::collections::BTreeMap;
use std::str::FromStr;

use axum::{Json, Router, extract::State, routing::post};
use fete_core::budget::{BudgetMode, CategoryId};
use fete_core::catalog::CategoryCatalog;
use fete_core::event::EventForm;
use fete_shared::AppError;
use fete_shared::types::{Currency, Money};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::categories::default_catalog;
use crate::{ApiError, AppState};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/budget/allocate", post(allocate_budget))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Budget inputs of the event form.
#[derive(Debug, Default, Deserialize)]
pub struct BudgetRequest {
    /// Total budget as typed (e.g. "600000" or "₹6,00,000").
    #[serde(default)]
    pub total_budget: String,
    /// Budget mode: flexible or fixed.
    #[serde(default)]
    pub mode: BudgetMode,
    /// Category names replacing the configured defaults.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    /// Extra user-defined categories.
    #[serde(default)]
    pub custom_categories: Vec<String>,
    /// Keys of categories the user picked.
    #[serde(default)]
    pub selected: Vec<String>,
    /// Pinned amounts by category key (decimal strings).
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

/// One category line of an allocation preview.
#[derive(Debug, Serialize)]
pub struct AllocationLine {
    /// Category key.
    pub category_id: CategoryId,
    /// Display name.
    pub name: String,
    /// Whether the user picked this category.
    pub is_selected: bool,
    /// Whether the amount was pinned by the user.
    pub is_manual: bool,
    /// Allocated amount.
    pub amount: String,
    /// Share in percent.
    pub percentage: String,
}

/// Allocation preview response.
#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    /// Currency of all amounts.
    pub currency: Currency,
    /// Budget mode used.
    pub mode: BudgetMode,
    /// Parsed budget as typed, absent when unusable.
    pub entered_total: Option<String>,
    /// Budget to show next to the allocation.
    pub displayed_total: Option<String>,
    /// `displayed_total` with currency symbol.
    pub displayed_total_label: Option<String>,
    /// Lines in catalog order. Empty when no budget was entered.
    pub allocations: Vec<AllocationLine>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Replays the budget inputs onto a fresh event form.
pub(crate) fn build_form(state: &AppState, request: BudgetRequest) -> Result<EventForm, ApiError> {
    let catalog = match &request.categories {
        Some(names) => CategoryCatalog::from_names(names.as_slice()),
        None => default_catalog(state),
    };

    let mut form = EventForm::new(catalog);
    form.set_mode(request.mode);
    form.set_total_budget(request.total_budget);

    for name in &request.custom_categories {
        form.add_custom_category(name)?;
    }
    for key in &request.selected {
        form.set_category_selected(&CategoryId::new(key.as_str()), true)?;
    }
    for (key, raw) in &request.overrides {
        let amount = Decimal::from_str(raw.trim()).map_err(|_| {
            AppError::Validation(format!("Invalid override amount for {key}: {raw}"))
        })?;
        form.set_override(&CategoryId::new(key.as_str()), amount)?;
    }

    Ok(form)
}

/// Formats a Decimal with a fixed number of decimal places.
pub(crate) fn format_decimal(value: Decimal, decimal_places: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
    let width = decimal_places as usize;
    format!("{rounded:.width$}")
}

/// Builds the preview response for the current form state.
pub(crate) fn allocation_response(state: &AppState, form: &EventForm) -> AllocationResponse {
    let dp = state.planner.display_decimal_places;
    let currency = state.planner.currency;
    let allocation = form.allocation();

    let allocations = form
        .catalog()
        .iter()
        .filter_map(|category| {
            let entry = allocation.get(&category.id)?;
            Some(AllocationLine {
                category_id: category.id.clone(),
                name: category.name.clone(),
                is_selected: category.is_selected,
                is_manual: form.overrides().contains(&category.id),
                amount: format_decimal(entry.amount, dp),
                percentage: format_decimal(entry.percentage, dp),
            })
        })
        .collect();

    let displayed = form.displayed_total();

    AllocationResponse {
        currency,
        mode: form.budget_mode(),
        entered_total: form.total_budget().map(|t| format_decimal(t, dp)),
        displayed_total: displayed.map(|t| format_decimal(t, dp)),
        displayed_total_label: displayed.map(|t| Money::new(t, currency).display(dp)),
        allocations,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Computes an allocation preview.
async fn allocate_budget(
    State(state): State<AppState>,
    Json(request): Json<BudgetRequest>,
) -> Result<Json<AllocationResponse>, ApiError> {
    let form = build_form(&state, request)?;
    let response = allocation_response(&state, &form);

    debug!(
        mode = %response.mode,
        lines = response.allocations.len(),
        "Computed allocation preview"
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use fete_shared::PlannerConfig;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn post_allocate(body: Value) -> (StatusCode, Value) {
        let app = routes().with_state(AppState::new(PlannerConfig::default()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/budget/allocate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn line<'a>(json: &'a Value, id: &str) -> &'a Value {
        json["allocations"]
            .as_array()
            .unwrap()
            .iter()
            .find(|l| l["category_id"] == id)
            .unwrap()
    }

    #[tokio::test]
    async fn test_flexible_equal_split() {
        let (status, json) = post_allocate(json!({ "total_budget": "600000" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["mode"], "flexible");
        assert_eq!(json["allocations"].as_array().unwrap().len(), 6);
        assert_eq!(line(&json, "venue")["amount"], "100000.00");
        assert_eq!(line(&json, "venue")["percentage"], "16.67");
        assert_eq!(json["displayed_total"], "600000.00");
        assert_eq!(json["displayed_total_label"], "₹600000.00");
    }

    #[tokio::test]
    async fn test_fixed_with_override() {
        let (status, json) = post_allocate(json!({
            "total_budget": "600000",
            "mode": "fixed",
            "overrides": { "venue": "400000" }
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(line(&json, "venue")["percentage"], "66.67");
        assert_eq!(line(&json, "venue")["is_manual"], true);
        assert_eq!(line(&json, "catering")["amount"], "40000.00");
        assert_eq!(line(&json, "catering")["percentage"], "6.67");
        assert_eq!(line(&json, "catering")["is_manual"], false);
    }

    #[tokio::test]
    async fn test_flexible_override_raises_displayed_total() {
        let (_, json) = post_allocate(json!({
            "total_budget": "600000",
            "overrides": { "venue": "400000" }
        }))
        .await;

        assert_eq!(json["entered_total"], "600000.00");
        assert_eq!(json["displayed_total"], "900000.00");
        assert_eq!(line(&json, "venue")["percentage"], "44.44");
    }

    #[tokio::test]
    async fn test_missing_budget_returns_empty_allocation() {
        let (status, json) = post_allocate(json!({ "total_budget": "" })).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["allocations"].as_array().unwrap().is_empty());
        assert!(json["displayed_total"].is_null());
    }

    #[tokio::test]
    async fn test_custom_categories_and_selection() {
        let (_, json) = post_allocate(json!({
            "total_budget": "300",
            "categories": ["Venue", "Catering"],
            "custom_categories": ["DJ"],
            "selected": ["venue"]
        }))
        .await;

        let lines = json["allocations"].as_array().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2]["category_id"], "dj");
        assert_eq!(lines[2]["is_selected"], true);
        assert_eq!(line(&json, "venue")["is_selected"], true);
        assert_eq!(line(&json, "catering")["is_selected"], false);
        assert_eq!(line(&json, "catering")["amount"], "100.00");
    }

    #[rstest]
    #[case::not_a_number("venue", "lots")]
    #[case::negative("venue", "-5")]
    #[case::zero("venue", "0")]
    #[case::unknown_category("yacht", "50")]
    #[tokio::test]
    async fn test_invalid_override_is_rejected(#[case] category: &str, #[case] amount: &str) {
        let (status, json) = post_allocate(json!({
            "total_budget": "1000",
            "overrides": { category: amount }
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_duplicate_custom_category_conflicts() {
        let (status, json) = post_allocate(json!({
            "total_budget": "1000",
            "custom_categories": ["Venue"]
        }))
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"], "CONFLICT");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(dec!(16.666666), 2), "16.67");
        assert_eq!(format_decimal(dec!(100000), 2), "100000.00");
        assert_eq!(format_decimal(dec!(0.125), 2), "0.12");
    }
}
