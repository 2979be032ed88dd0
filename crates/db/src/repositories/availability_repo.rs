//! Repository for the `availability_slots` table.

use arena_core::types::DbId;
use sqlx::PgPool;

use crate::models::availability::{AvailabilitySlot, CreateAvailabilitySlot};

/// Column list shared across queries.
const COLUMNS: &str = "id, user_id, day_of_week, start_time, end_time, created_at";

/// Provides CRUD operations for availability slots.
pub struct AvailabilityRepo;

impl AvailabilityRepo {
    /// Insert a new slot for the given user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateAvailabilitySlot,
    ) -> Result<AvailabilitySlot, sqlx::Error> {
        let query = format!(
            "INSERT INTO availability_slots (user_id, day_of_week, start_time, end_time)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AvailabilitySlot>(&query)
            .bind(user_id)
            .bind(input.day_of_week)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .fetch_one(pool)
            .await
    }

    /// List a user's slots ordered by day then start time.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<AvailabilitySlot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM availability_slots
             WHERE user_id = $1
             ORDER BY day_of_week ASC, start_time ASC"
        );
        sqlx::query_as::<_, AvailabilitySlot>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a slot owned by the given user. Returns `true` if a row was
    /// removed; `false` when the slot does not exist or belongs to someone
    /// else.
    pub async fn delete_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM availability_slots WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
