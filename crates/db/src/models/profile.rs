//! Matching profile entity model and DTOs.

use arena_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A profile row from the `profiles` table. Exactly one per user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub age: Option<i32>,
    /// Kilograms.
    pub weight: Option<f64>,
    /// Centimetres.
    pub height: Option<f64>,
    pub sport: String,
    /// 1 (beginner) .. 10 (elite).
    pub skill_level: i32,
    pub experience_years: Option<i32>,
    pub goals: Option<String>,
    /// One of `light`, `medium`, `hard`.
    pub training_intensity: Option<String>,
    pub city: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub name: String,
    pub age: Option<i32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub sport: String,
    pub skill_level: i32,
    pub experience_years: Option<i32>,
    pub goals: Option<String>,
    pub training_intensity: Option<String>,
    pub city: Option<String>,
}

/// DTO for merge-patching a profile. Only provided fields overwrite;
/// absent fields leave prior values untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub sport: Option<String>,
    pub skill_level: Option<i32>,
    pub experience_years: Option<i32>,
    pub goals: Option<String>,
    pub training_intensity: Option<String>,
    pub city: Option<String>,
}
