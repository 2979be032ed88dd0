//! Match lifecycle responses: pending -> accepted | rejected.

use arena_core::error::CoreError;
use arena_core::types::DbId;
use arena_db::models::matches::Match;
use arena_db::repositories::MatchRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Apply a participant's response to a pending match.
///
/// The transition itself is a status-guarded UPDATE, so when both
/// participants respond at once exactly one wins; the loser observes the
/// invalid-transition error with the status the winner wrote.
pub async fn respond(
    pool: &PgPool,
    match_id: DbId,
    acting_user_id: DbId,
    target_status: &str,
) -> AppResult<Match> {
    arena_core::match_state::validate_response_target(target_status)?;

    let existing = MatchRepo::find_by_id(pool, match_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Match",
            id: match_id,
        })?;

    if existing.user_a_id != acting_user_id && existing.user_b_id != acting_user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only match participants may respond".into(),
        )));
    }

    match MatchRepo::transition_from_pending(pool, match_id, target_status).await? {
        Some(updated) => {
            tracing::info!(
                match_id,
                user_id = acting_user_id,
                status = target_status,
                "Match response recorded"
            );
            Ok(updated)
        }
        None => {
            // The match exists but is no longer pending: either it was
            // already decided, or a concurrent response just won.
            let current = MatchRepo::find_by_id(pool, match_id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Match",
                    id: match_id,
                })?;
            Err(AppError::Core(CoreError::InvalidTransition {
                from: current.status,
                to: target_status.to_string(),
            }))
        }
    }
}
