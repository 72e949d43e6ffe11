use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use trasa_core::booking::{CreateBookingRequest, UpdateBookingRequest};

use crate::error::AppError;
use crate::response::success;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/bookings", post(create_booking).get(list_bookings))
        .route(
            "/api/v1/bookings/{id}",
            get(get_booking).put(update_booking).delete(cancel_booking),
        )
}

// The id segment is parsed by hand so a garbage id comes back as an
// enveloped 400 instead of axum's bare rejection.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request("Invalid booking id"))
}

/// POST /api/v1/bookings
async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload.map_err(|_| AppError::bad_request("Invalid request body"))?;

    let booking = state.bookings.create(req).await?;
    Ok(success(StatusCode::CREATED, booking))
}

/// GET /api/v1/bookings/{id}
async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;

    let booking = state.bookings.get(id).await?;
    Ok(success(StatusCode::OK, booking))
}

/// PUT /api/v1/bookings/{id}
async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBookingRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|_| AppError::bad_request("Invalid request body"))?;

    let booking = state.bookings.update(id, req).await?;
    Ok(success(StatusCode::OK, booking))
}

/// DELETE /api/v1/bookings/{id}
///
/// Cancels in place: the booking is expired, never deleted.
async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;

    state.bookings.cancel(id).await?;
    Ok(success(
        StatusCode::OK,
        json!({ "message": "booking cancelled successfully" }),
    ))
}

/// GET /api/v1/bookings?limit=&offset=
async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    // Unparsable paging values fall back to the defaults instead of failing.
    let limit = params
        .get("limit")
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(10);
    let offset = params
        .get("offset")
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(0);

    let bookings = state.bookings.list(limit, offset).await?;
    Ok(success(StatusCode::OK, bookings))
}
