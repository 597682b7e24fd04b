use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use waitlist_types::{InsertWaitlistEntry, WaitlistEntry, routes};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
};

pub fn router() -> Router<AppState> {
    Router::new().route(routes::WAITLIST, post(create_waitlist_entry))
}

/// POST /api/waitlist
/// Adds an email to the waitlist.
/// 201 with the new entry, 400 on a bad payload, 409 if already present.
async fn create_waitlist_entry(
    State(app_state): State<AppState>,
    payload: Result<Json<InsertWaitlistEntry>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // Missing fields and malformed JSON are validation failures, not 422s
    let Json(payload) =
        payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

    let entry = app_state
        .waitlist_use_cases
        .join_waitlist(&payload.email)
        .await?;

    Ok((StatusCode::CREATED, Json(WaitlistEntry::from(entry))))
}
