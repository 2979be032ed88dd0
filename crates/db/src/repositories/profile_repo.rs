//! Repository for the `profiles` table.

use arena_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile, UpdateProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, age, weight, height, sport, skill_level, \
    experience_years, goals, training_intensity, city, created_at, updated_at";

/// Provides CRUD operations for matching profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile for the given user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles
                (user_id, name, age, weight, height, sport, skill_level,
                 experience_years, goals, training_intensity, city)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.age)
            .bind(input.weight)
            .bind(input.height)
            .bind(&input.sport)
            .bind(input.skill_level)
            .bind(input.experience_years)
            .bind(&input.goals)
            .bind(&input.training_intensity)
            .bind(&input.city)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by its owning user's ID.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Merge-patch a user's profile. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the user has no profile.
    pub async fn update_by_user_id(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                weight = COALESCE($4, weight),
                height = COALESCE($5, height),
                sport = COALESCE($6, sport),
                skill_level = COALESCE($7, skill_level),
                experience_years = COALESCE($8, experience_years),
                goals = COALESCE($9, goals),
                training_intensity = COALESCE($10, training_intensity),
                city = COALESCE($11, city),
                updated_at = NOW()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.age)
            .bind(input.weight)
            .bind(input.height)
            .bind(&input.sport)
            .bind(input.skill_level)
            .bind(input.experience_years)
            .bind(&input.goals)
            .bind(&input.training_intensity)
            .bind(&input.city)
            .fetch_optional(pool)
            .await
    }

    /// Candidate pool for match generation: every other user's profile in
    /// the same sport, in creation order.
    pub async fn list_candidates(
        pool: &PgPool,
        sport: &str,
        exclude_user_id: DbId,
    ) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profiles
             WHERE user_id <> $1 AND LOWER(sport) = LOWER($2)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(exclude_user_id)
            .bind(sport)
            .fetch_all(pool)
            .await
    }
}
