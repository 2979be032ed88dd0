//! Handlers for the `/match` resource.
//!
//! Responses are the raw match records (no envelope): the browser client
//! dereferences `compatibility_score`, `ai_reasoning`, `strengths`,
//! `risks`, and `status` directly off each object.

use arena_core::types::DbId;
use arena_db::models::matches::{Match, MatchActionRequest};
use arena_db::repositories::MatchRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::engine::{generator, lifecycle};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/match/find
///
/// Run match discovery for the caller. Returns only the matches created by
/// this call; an empty array means the pool held nothing new.
pub async fn find_matches(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Match>>> {
    let created = generator::find_matches(&state.pool, auth.user_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        created = created.len(),
        "Match discovery finished"
    );

    Ok(Json(created))
}

/// GET /api/v1/match/recommended
///
/// The caller's current matches: pending sorted by score descending, then
/// accepted in creation order. Rejected matches are excluded.
pub async fn get_recommended(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Match>>> {
    let matches = MatchRepo::list_recommended(&state.pool, auth.user_id).await?;
    Ok(Json(matches))
}

/// PATCH /api/v1/match/{id}
///
/// Accept or reject a pending match. Only participants may respond, and
/// only while the match is pending.
pub async fn respond_to_match(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(match_id): Path<DbId>,
    Json(input): Json<MatchActionRequest>,
) -> AppResult<Json<Match>> {
    let updated = lifecycle::respond(&state.pool, match_id, auth.user_id, &input.status).await?;
    Ok(Json(updated))
}
