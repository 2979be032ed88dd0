//! Pairwise compatibility scoring.
//!
//! Computes a 0-100 composite over five weighted factors: sport match,
//! skill proximity, schedule overlap, training intensity, and city. The
//! function is pure and symmetric in its two profile arguments, so a pair
//! scores the same regardless of which side initiated matching.
//!
//! Sparring requires the same discipline, so a sport mismatch does more
//! than zero out its own factor: the whole composite is damped to keep
//! cross-sport pairs near the floor no matter how well everything else
//! lines up.

use crate::profile::intensity_rank;
use crate::schedule::{weekly_overlap_fraction, TimeSlot};

/// Factor weights. Must sum to 1.0.
pub const WEIGHT_SPORT: f64 = 0.30;
pub const WEIGHT_SKILL: f64 = 0.25;
pub const WEIGHT_SCHEDULE: f64 = 0.25;
pub const WEIGHT_INTENSITY: f64 = 0.12;
pub const WEIGHT_CITY: f64 = 0.08;

/// Multiplier applied to the composite when the sports differ.
pub const SPORT_MISMATCH_DAMPING: f64 = 0.15;

/// Skill gap at which the skill factor reaches zero.
const SKILL_GAP_FLOOR: f64 = 4.0;

/// Factor value used when an optional attribute is missing on either side.
const NEUTRAL_FACTOR: f64 = 50.0;

/// The matching-relevant attributes of one profile.
#[derive(Debug, Clone, Copy)]
pub struct ScoringProfile<'a> {
    pub sport: &'a str,
    pub skill_level: i32,
    pub training_intensity: Option<&'a str>,
    pub city: Option<&'a str>,
}

/// Per-factor scores (each 0-100) and the weighted composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub sport: f64,
    pub skill: f64,
    pub schedule: f64,
    pub intensity: f64,
    pub city: f64,
    /// Weighted composite rounded to the nearest integer, in [0, 100].
    pub total: i32,
}

/// Score a pair of profiles with their weekly availability.
pub fn score_pair(
    a: &ScoringProfile<'_>,
    b: &ScoringProfile<'_>,
    slots_a: &[TimeSlot],
    slots_b: &[TimeSlot],
) -> ScoreBreakdown {
    let sport_matches = sports_match(a.sport, b.sport);
    let sport = if sport_matches { 100.0 } else { 0.0 };
    let skill = skill_factor(a.skill_level, b.skill_level);
    let schedule = weekly_overlap_fraction(slots_a, slots_b) * 100.0;
    let intensity = intensity_factor(a.training_intensity, b.training_intensity);
    let city = city_factor(a.city, b.city);

    let mut composite = WEIGHT_SPORT * sport
        + WEIGHT_SKILL * skill
        + WEIGHT_SCHEDULE * schedule
        + WEIGHT_INTENSITY * intensity
        + WEIGHT_CITY * city;

    if !sport_matches {
        composite *= SPORT_MISMATCH_DAMPING;
    }

    ScoreBreakdown {
        sport,
        skill,
        schedule,
        intensity,
        city,
        total: (composite.round() as i32).clamp(0, 100),
    }
}

fn sports_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Linear decay with the skill gap: 0 apart -> 100, 4 or more apart -> 0.
fn skill_factor(a: i32, b: i32) -> f64 {
    let gap = f64::from((a - b).abs());
    (1.0 - gap / SKILL_GAP_FLOOR).max(0.0) * 100.0
}

/// Exact intensity match scores 100, adjacent 50, opposite ends 0.
/// Missing on either side is neutral rather than penalized.
fn intensity_factor(a: Option<&str>, b: Option<&str>) -> f64 {
    let (Some(rank_a), Some(rank_b)) = (
        a.and_then(intensity_rank_of),
        b.and_then(intensity_rank_of),
    ) else {
        return NEUTRAL_FACTOR;
    };
    match rank_a.abs_diff(rank_b) {
        0 => 100.0,
        1 => 50.0,
        _ => 0.0,
    }
}

fn intensity_rank_of(value: &str) -> Option<u8> {
    intensity_rank(value.trim())
}

/// Same city scores 100, different cities 25, missing on either side neutral.
fn city_factor(a: Option<&str>, b: Option<&str>) -> f64 {
    let (Some(city_a), Some(city_b)) = (non_blank(a), non_blank(b)) else {
        return NEUTRAL_FACTOR;
    };
    if city_a.eq_ignore_ascii_case(city_b) {
        100.0
    } else {
        25.0
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
