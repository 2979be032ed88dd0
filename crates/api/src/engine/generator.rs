//! Match discovery for one user against the candidate pool.

use arena_core::rationale;
use arena_core::schedule::TimeSlot;
use arena_core::scoring::{score_pair, ScoringProfile};
use arena_core::types::DbId;
use arena_db::models::availability::AvailabilitySlot;
use arena_db::models::matches::{Match, NewMatch};
use arena_db::models::profile::Profile;
use arena_db::repositories::{AvailabilityRepo, MatchRepo, ProfileRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Run match discovery for `user_id` and persist new pending matches.
///
/// Returns only the matches created by this call. Candidates that already
/// have a pending or accepted match with the user are skipped, so a repeat
/// call with an unchanged pool creates nothing. A user without a profile
/// gets an empty result rather than an error.
///
/// Ranking and truncation are deliberately not done here; display order is
/// the recommendation query's concern.
pub async fn find_matches(pool: &PgPool, user_id: DbId) -> AppResult<Vec<Match>> {
    let Some(my_profile) = ProfileRepo::find_by_user_id(pool, user_id).await? else {
        tracing::debug!(user_id, "Match discovery skipped: no profile");
        return Ok(Vec::new());
    };

    let my_slots = AvailabilityRepo::list_for_user(pool, user_id).await?;
    let my_times = to_time_slots(&my_slots)?;

    // Candidate pool is pre-filtered by sport; a cross-sport pair would
    // score near the floor anyway.
    let candidates = ProfileRepo::list_candidates(pool, &my_profile.sport, user_id).await?;

    let mut created = Vec::new();
    for candidate in candidates {
        if MatchRepo::has_active_for_pair(pool, user_id, candidate.user_id).await? {
            continue;
        }

        let their_slots = AvailabilityRepo::list_for_user(pool, candidate.user_id).await?;
        let their_times = to_time_slots(&their_slots)?;

        let breakdown = score_pair(
            &scoring_profile(&my_profile),
            &scoring_profile(&candidate),
            &my_times,
            &their_times,
        );
        let texts = rationale::compose(&breakdown);

        let input = NewMatch {
            user_a_id: user_id,
            user_b_id: candidate.user_id,
            compatibility_score: Some(breakdown.total),
            ai_reasoning: Some(texts.reasoning),
            strengths: Some(texts.strengths),
            risks: Some(texts.risks),
        };

        match MatchRepo::create(pool, &input).await {
            Ok(m) => {
                tracing::info!(
                    user_a_id = m.user_a_id,
                    user_b_id = m.user_b_id,
                    score = breakdown.total,
                    "Match created"
                );
                created.push(m);
            }
            // A concurrent discovery run for the other user won the insert
            // race on this pair. Expected steady state, not a fault.
            Err(e) if is_active_pair_conflict(&e) => {
                tracing::debug!(
                    user_id,
                    candidate_user_id = candidate.user_id,
                    "Lost pair-insert race, skipping"
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(created)
}

fn scoring_profile(profile: &Profile) -> ScoringProfile<'_> {
    ScoringProfile {
        sport: &profile.sport,
        skill_level: profile.skill_level,
        training_intensity: profile.training_intensity.as_deref(),
        city: profile.city.as_deref(),
    }
}

/// Stored slots are validated on creation, so a parse failure here means
/// corrupted data and surfaces as a 500 rather than a client error.
fn to_time_slots(slots: &[AvailabilitySlot]) -> AppResult<Vec<TimeSlot>> {
    slots
        .iter()
        .map(|s| {
            TimeSlot::new(s.day_of_week, &s.start_time, &s.end_time).map_err(|e| {
                AppError::InternalError(format!("Stored availability slot {} is invalid: {e}", s.id))
            })
        })
        .collect()
}

fn is_active_pair_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(arena_db::repositories::match_repo::ACTIVE_PAIR_CONSTRAINT)
        }
        _ => false,
    }
}
