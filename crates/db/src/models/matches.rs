//! Match entity model and DTOs.

use arena_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `matches` table.
///
/// Serialized as-is in API responses; the client dereferences these field
/// names directly, so renames here are breaking changes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Match {
    pub id: DbId,
    /// The user whose discovery run created the match.
    pub user_a_id: DbId,
    /// The candidate the initiator was matched with.
    pub user_b_id: DbId,
    pub compatibility_score: Option<i32>,
    pub ai_reasoning: Option<String>,
    pub strengths: Option<String>,
    pub risks: Option<String>,
    /// One of `pending`, `accepted`, `rejected`.
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new match. Status always starts as `pending`.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub user_a_id: DbId,
    pub user_b_id: DbId,
    pub compatibility_score: Option<i32>,
    pub ai_reasoning: Option<String>,
    pub strengths: Option<String>,
    pub risks: Option<String>,
}

/// Request body for `PATCH /match/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchActionRequest {
    pub status: String,
}
