//! Deterministic rationale text for a scored pair.
//!
//! The client displays `ai_reasoning`, `strengths`, and `risks` verbatim.
//! These are templated from the score breakdown rather than produced by a
//! language model, which keeps scoring reproducible and testable; an
//! external refiner could replace this composer without touching the
//! scorer itself.

use crate::scoring::ScoreBreakdown;

/// Factor value at or above which a factor is called out as a strength.
const STRENGTH_THRESHOLD: f64 = 75.0;

/// Factor value at or below which a factor is called out as a risk.
const RISK_THRESHOLD: f64 = 40.0;

/// Generated rationale texts for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rationale {
    pub reasoning: String,
    pub strengths: String,
    pub risks: String,
}

/// Factor labels in a fixed order so tie-breaks are deterministic.
const FACTOR_LABELS: [&str; 5] = ["sport", "skill level", "schedule", "intensity", "location"];

const STRENGTH_PHRASES: [&str; 5] = [
    "both train the same discipline",
    "closely matched skill levels",
    "strong weekly schedule overlap",
    "compatible training intensity",
    "based in the same city",
];

const RISK_PHRASES: [&str; 5] = [
    "different disciplines",
    "a large skill gap, which raises safety concerns",
    "little or no shared training time",
    "mismatched training intensity",
    "based in different cities",
];

/// Compose reasoning, strengths, and risks texts from a score breakdown.
pub fn compose(breakdown: &ScoreBreakdown) -> Rationale {
    let factors = [
        breakdown.sport,
        breakdown.skill,
        breakdown.schedule,
        breakdown.intensity,
        breakdown.city,
    ];

    let strengths: Vec<&str> = factors
        .iter()
        .zip(STRENGTH_PHRASES)
        .filter(|(value, _)| **value >= STRENGTH_THRESHOLD)
        .map(|(_, phrase)| phrase)
        .collect();

    let risks: Vec<&str> = factors
        .iter()
        .zip(RISK_PHRASES)
        .filter(|(value, _)| **value <= RISK_THRESHOLD)
        .map(|(_, phrase)| phrase)
        .collect();

    // First occurrence wins on ties, keeping the text stable.
    let strongest = strongest_index(&factors);
    let weakest = weakest_index(&factors);

    let reasoning = format!(
        "Estimated compatibility {}/100 - {}. Strongest factor: {}; weakest factor: {}.",
        breakdown.total,
        verdict(breakdown.total),
        FACTOR_LABELS[strongest],
        FACTOR_LABELS[weakest],
    );

    Rationale {
        reasoning,
        strengths: join_or(&strengths, "No standout strengths."),
        risks: join_or(&risks, "No significant risks identified."),
    }
}

fn verdict(total: i32) -> &'static str {
    match total {
        75..=100 => "a strong pairing",
        50..=74 => "a workable pairing",
        25..=49 => "a weak pairing",
        _ => "a poor pairing",
    }
}

fn strongest_index(factors: &[f64; 5]) -> usize {
    let mut best = 0;
    for (i, value) in factors.iter().enumerate() {
        if *value > factors[best] {
            best = i;
        }
    }
    best
}

fn weakest_index(factors: &[f64; 5]) -> usize {
    let mut worst = 0;
    for (i, value) in factors.iter().enumerate() {
        if *value < factors[worst] {
            worst = i;
        }
    }
    worst
}

fn join_or(phrases: &[&str], fallback: &str) -> String {
    if phrases.is_empty() {
        fallback.to_string()
    } else {
        let mut text = phrases.join("; ");
        text.push('.');
        // Sentence case for the first phrase.
        if let Some(first) = text.get(..1) {
            let upper = first.to_uppercase();
            text.replace_range(..1, &upper);
        }
        text
    }
}
