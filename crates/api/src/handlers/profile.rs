//! Handlers for the `/profiles` resource.
//!
//! Profiles are keyed by the owning user: each user has at most one, and
//! updates are merge-patches (only provided fields overwrite).

use arena_core::error::CoreError;
use arena_core::profile as rules;
use arena_core::types::DbId;
use arena_db::models::profile::{CreateProfile, Profile, UpdateProfile};
use arena_db::repositories::ProfileRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/profiles
///
/// Create the caller's profile. Fails with 409 if one already exists.
pub async fn create_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProfile>,
) -> AppResult<(StatusCode, Json<Profile>)> {
    validate_create(&input)?;

    if ProfileRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Profile already exists. Use PATCH to update.".into(),
        )));
    }

    let profile = ProfileRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        sport = %profile.sport,
        "Profile created"
    );

    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/profiles/me
pub async fn get_my_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Profile",
            id: auth.user_id,
        })?;
    Ok(Json(profile))
}

/// PATCH /api/v1/profiles/me
///
/// Merge-patch the caller's profile. Absent fields keep their prior values;
/// each provided field is validated, so the merged result stays valid.
pub async fn update_my_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<Profile>> {
    validate_patch(&input)?;

    let profile = ProfileRepo::update_by_user_id(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Profile",
            id: auth.user_id,
        })?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(Json(profile))
}

/// GET /api/v1/profiles/{user_id}
///
/// Look up another user's profile by their user id.
pub async fn get_profile(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Profile",
            id: user_id,
        })?;
    Ok(Json(profile))
}

fn validate_create(input: &CreateProfile) -> Result<(), CoreError> {
    rules::validate_name(&input.name)?;
    rules::validate_sport(&input.sport)?;
    rules::validate_skill_level(input.skill_level)?;
    if let Some(intensity) = input.training_intensity.as_deref() {
        rules::validate_training_intensity(intensity)?;
    }
    Ok(())
}

fn validate_patch(input: &UpdateProfile) -> Result<(), CoreError> {
    if let Some(name) = input.name.as_deref() {
        rules::validate_name(name)?;
    }
    if let Some(sport) = input.sport.as_deref() {
        rules::validate_sport(sport)?;
    }
    if let Some(skill_level) = input.skill_level {
        rules::validate_skill_level(skill_level)?;
    }
    if let Some(intensity) = input.training_intensity.as_deref() {
        rules::validate_training_intensity(intensity)?;
    }
    Ok(())
}
