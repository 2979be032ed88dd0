//! Repository for the `matches` table.
//!
//! The `uq_matches_active_pair` partial unique index is the authority on
//! pair uniqueness: at most one non-rejected match may exist per unordered
//! user pair, so two discovery runs racing on the same pair cannot both
//! insert. Lifecycle transitions are status-guarded UPDATEs so concurrent
//! responses resolve to exactly one winner.

use arena_core::match_state::{STATUS_ACCEPTED, STATUS_PENDING};
use arena_core::types::DbId;
use sqlx::PgPool;

use crate::models::matches::{Match, NewMatch};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_a_id, user_b_id, compatibility_score, ai_reasoning, \
    strengths, risks, status, created_at";

/// Name of the partial unique index enforcing one active match per pair.
pub const ACTIVE_PAIR_CONSTRAINT: &str = "uq_matches_active_pair";

/// Provides CRUD and lifecycle operations for matches.
pub struct MatchRepo;

impl MatchRepo {
    /// Insert a new pending match, returning the created row.
    ///
    /// Fails with a unique violation on [`ACTIVE_PAIR_CONSTRAINT`] when a
    /// pending or accepted match already exists for the unordered pair.
    pub async fn create(pool: &PgPool, input: &NewMatch) -> Result<Match, sqlx::Error> {
        let query = format!(
            "INSERT INTO matches
                (user_a_id, user_b_id, compatibility_score, ai_reasoning, strengths, risks)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Match>(&query)
            .bind(input.user_a_id)
            .bind(input.user_b_id)
            .bind(input.compatibility_score)
            .bind(&input.ai_reasoning)
            .bind(&input.strengths)
            .bind(&input.risks)
            .fetch_one(pool)
            .await
    }

    /// Find a match by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Match>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matches WHERE id = $1");
        sqlx::query_as::<_, Match>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a pending or accepted match exists for the unordered pair.
    pub async fn has_active_for_pair(
        pool: &PgPool,
        user_a: DbId,
        user_b: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM matches
                WHERE LEAST(user_a_id, user_b_id) = LEAST($1, $2)
                  AND GREATEST(user_a_id, user_b_id) = GREATEST($1, $2)
                  AND status <> 'rejected'
             )",
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_one(pool)
        .await
    }

    /// A user's current matches for display: pending first, sorted by score
    /// descending (ties by creation order), then accepted in creation order.
    /// Rejected matches are excluded.
    pub async fn list_recommended(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Match>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM matches
             WHERE (user_a_id = $1 OR user_b_id = $1)
               AND status IN ($2, $3)
             ORDER BY
                CASE status WHEN $2 THEN 0 ELSE 1 END ASC,
                CASE WHEN status = $2 THEN compatibility_score END DESC NULLS LAST,
                id ASC"
        );
        sqlx::query_as::<_, Match>(&query)
            .bind(user_id)
            .bind(STATUS_PENDING)
            .bind(STATUS_ACCEPTED)
            .fetch_all(pool)
            .await
    }

    /// Atomically move a match out of `pending` into `new_status`.
    ///
    /// Returns `None` when the match does not exist or is no longer
    /// pending, so of two concurrent conflicting responses exactly one
    /// observes the updated row.
    pub async fn transition_from_pending(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Match>, sqlx::Error> {
        let query = format!(
            "UPDATE matches SET status = $2
             WHERE id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Match>(&query)
            .bind(id)
            .bind(new_status)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }
}
