//! Event draft routes.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use chrono::{NaiveDate, Utc};
use fete_core::event::{EventDraft, EventType};
use fete_shared::AppError;
use fete_shared::types::{EventId, PageRequest, PageResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::budget::{AllocationResponse, BudgetRequest, allocation_response, build_form};
use crate::{ApiError, AppState};

/// Creates the event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{event_id}", get(get_event))
}

/// Request body for submitting an event form.
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    /// Event name.
    #[serde(default)]
    pub name: String,
    /// Event type.
    #[serde(default)]
    pub event_type: EventType,
    /// Event date (YYYY-MM-DD).
    pub date: Option<NaiveDate>,
    /// Venue city or address.
    #[serde(default)]
    pub location: String,
    /// Expected number of guests.
    #[serde(default)]
    pub guest_count: u32,
    /// Budget inputs.
    #[serde(flatten)]
    pub budget: BudgetRequest,
}

/// Response for a created event.
#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    /// Stored draft.
    pub event: EventDraft,
    /// Display-ready allocation.
    pub summary: AllocationResponse,
}

/// Submits an event form and stores the resulting draft.
async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreateEventResponse>), ApiError> {
    let mut form = build_form(&state, request.budget)?;
    form.set_name(request.name);
    form.set_event_type(request.event_type);
    if let Some(date) = request.date {
        form.set_date(date);
    }
    form.set_location(request.location);
    form.set_guest_count(request.guest_count);

    let draft = form.submit(Utc::now().date_naive())?;
    let summary = allocation_response(&state, &form);

    info!(
        event_id = %draft.id,
        event_type = ?draft.event_type,
        mode = %draft.budget_mode,
        categories = draft.categories.len(),
        "Event draft submitted"
    );

    state.drafts.insert(draft.clone());
    Ok((
        StatusCode::CREATED,
        Json(CreateEventResponse {
            event: draft,
            summary,
        }),
    ))
}

/// Lists submitted drafts, newest first.
async fn list_events(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Json<PageResponse<EventDraft>> {
    Json(state.drafts.list(&page))
}

/// Fetches one draft.
async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<EventDraft>, ApiError> {
    let id = EventId::from_str(&event_id)
        .map_err(|_| AppError::Validation(format!("Invalid event id: {event_id}")))?;

    state
        .drafts
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Event {id}")).into())
}
