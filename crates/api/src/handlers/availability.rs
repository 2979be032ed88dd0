//! Handlers for the `/availability` resource.

use arena_core::schedule::TimeSlot;
use arena_core::types::DbId;
use arena_db::models::availability::{AvailabilitySlot, CreateAvailabilitySlot};
use arena_db::repositories::AvailabilityRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/availability
///
/// List the caller's weekly availability slots.
pub async fn list_my_availability(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AvailabilitySlot>>> {
    let slots = AvailabilityRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(slots))
}

/// POST /api/v1/availability
///
/// Add a weekly availability slot for the caller.
pub async fn add_availability(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateAvailabilitySlot>,
) -> AppResult<(StatusCode, Json<AvailabilitySlot>)> {
    // Parsing doubles as validation: day range, HH:MM format, start < end.
    TimeSlot::new(input.day_of_week, &input.start_time, &input.end_time)?;

    let slot = AvailabilityRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        day_of_week = slot.day_of_week,
        "Availability slot added"
    );

    Ok((StatusCode::CREATED, Json(slot)))
}

/// DELETE /api/v1/availability/{id}
///
/// Delete one of the caller's slots. Deleting a slot that does not exist
/// or belongs to someone else yields 404 either way.
pub async fn delete_availability(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slot_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AvailabilityRepo::delete_owned(&state.pool, slot_id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(arena_core::error::CoreError::NotFound {
            entity: "AvailabilitySlot",
            id: slot_id,
        }));
    }

    tracing::info!(user_id = auth.user_id, slot_id, "Availability slot deleted");

    Ok(StatusCode::NO_CONTENT)
}
