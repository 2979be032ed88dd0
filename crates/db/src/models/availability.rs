//! Weekly availability slot model and DTOs.

use arena_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `availability_slots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AvailabilitySlot {
    pub id: DbId,
    pub user_id: DbId,
    /// 0 = Monday .. 6 = Sunday.
    pub day_of_week: i16,
    /// "HH:MM" wall clock.
    pub start_time: String,
    pub end_time: String,
    pub created_at: Timestamp,
}

/// DTO for creating an availability slot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAvailabilitySlot {
    pub day_of_week: i16,
    pub start_time: String,
    pub end_time: String,
}
