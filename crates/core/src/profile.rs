//! Profile field constants and validation functions.
//!
//! Used by the API layer to validate create and merge-patch payloads before
//! they reach the database. The database carries matching CHECK constraints
//! as a second line of defence.

use crate::error::CoreError;

/// Lowest allowed skill level.
pub const SKILL_LEVEL_MIN: i32 = 1;

/// Highest allowed skill level.
pub const SKILL_LEVEL_MAX: i32 = 10;

/// Training intensity values, ordered from lightest to hardest.
pub const INTENSITY_LIGHT: &str = "light";
pub const INTENSITY_MEDIUM: &str = "medium";
pub const INTENSITY_HARD: &str = "hard";

/// All valid training intensity values.
pub const VALID_TRAINING_INTENSITIES: &[&str] =
    &[INTENSITY_LIGHT, INTENSITY_MEDIUM, INTENSITY_HARD];

/// Position of an intensity value on the light..hard scale, if valid.
pub fn intensity_rank(intensity: &str) -> Option<u8> {
    match intensity {
        INTENSITY_LIGHT => Some(0),
        INTENSITY_MEDIUM => Some(1),
        INTENSITY_HARD => Some(2),
        _ => None,
    }
}

/// Validate that a profile name is non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        Err(CoreError::Validation("Name must not be empty".into()))
    } else {
        Ok(())
    }
}

/// Validate that a sport is non-empty after trimming.
pub fn validate_sport(sport: &str) -> Result<(), CoreError> {
    if sport.trim().is_empty() {
        Err(CoreError::Validation("Sport must not be empty".into()))
    } else {
        Ok(())
    }
}

/// Validate that a skill level is within the allowed range.
pub fn validate_skill_level(skill_level: i32) -> Result<(), CoreError> {
    if (SKILL_LEVEL_MIN..=SKILL_LEVEL_MAX).contains(&skill_level) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Skill level must be between {SKILL_LEVEL_MIN} and {SKILL_LEVEL_MAX}, got {skill_level}"
        )))
    }
}

/// Validate a training intensity value.
pub fn validate_training_intensity(intensity: &str) -> Result<(), CoreError> {
    if VALID_TRAINING_INTENSITIES.contains(&intensity) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid training intensity '{intensity}'. Must be one of: {}",
            VALID_TRAINING_INTENSITIES.join(", ")
        )))
    }
}

/// Validate that a day-of-week index is in 0 (Monday) .. 6 (Sunday).
pub fn validate_day_of_week(day: i16) -> Result<(), CoreError> {
    if (0..=6).contains(&day) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Day of week must be between 0 (Monday) and 6 (Sunday), got {day}"
        )))
    }
}
