//! Weekly schedule interval math.
//!
//! Availability is a set of recurring weekly windows ("Monday 09:00-11:00").
//! The scorer needs the fraction of weekly time two users can both train,
//! computed by per-day interval intersection. A single user's windows may
//! overlap each other (the client does not reject that), so each side is
//! merged before intersecting.

use crate::error::CoreError;
use crate::profile::validate_day_of_week;

/// A weekly recurring time window, with times in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    /// 0 = Monday .. 6 = Sunday.
    pub day_of_week: i16,
    pub start_minutes: u16,
    pub end_minutes: u16,
}

impl TimeSlot {
    /// Build a slot from a day index and "HH:MM" wall-clock strings.
    pub fn new(day_of_week: i16, start_time: &str, end_time: &str) -> Result<Self, CoreError> {
        validate_day_of_week(day_of_week)?;
        let start_minutes = parse_time(start_time)?;
        let end_minutes = parse_time(end_time)?;
        if start_minutes >= end_minutes {
            return Err(CoreError::Validation(format!(
                "Start time {start_time} must be before end time {end_time}"
            )));
        }
        Ok(Self {
            day_of_week,
            start_minutes,
            end_minutes,
        })
    }
}

/// Parse an "HH:MM" time string into minutes since midnight.
pub fn parse_time(time: &str) -> Result<u16, CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid time '{time}'. Expected HH:MM"));

    let (hours, minutes) = time.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: u16 = hours.parse().map_err(|_| invalid())?;
    let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Fraction of weekly availability the two sides share, in [0, 1].
///
/// Computed as intersection minutes / union minutes over the whole week,
/// so identical schedules yield 1.0 and disjoint ones 0.0. Either side
/// being empty yields 0.0.
pub fn weekly_overlap_fraction(a: &[TimeSlot], b: &[TimeSlot]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut intersection: u32 = 0;
    let mut union: u32 = 0;

    for day in 0..7i16 {
        let merged_a = merge_intervals(day_intervals(a, day));
        let merged_b = merge_intervals(day_intervals(b, day));

        intersection += intersection_minutes(&merged_a, &merged_b);

        let mut combined = merged_a;
        combined.extend_from_slice(&merged_b);
        union += total_minutes(&merge_intervals(combined));
    }

    if union == 0 {
        return 0.0;
    }
    f64::from(intersection) / f64::from(union)
}

/// Intervals for one day, as (start, end) minute pairs.
fn day_intervals(slots: &[TimeSlot], day: i16) -> Vec<(u16, u16)> {
    slots
        .iter()
        .filter(|s| s.day_of_week == day)
        .map(|s| (s.start_minutes, s.end_minutes))
        .collect()
}

/// Merge overlapping or touching intervals into a sorted disjoint set.
fn merge_intervals(mut intervals: Vec<(u16, u16)>) -> Vec<(u16, u16)> {
    intervals.sort_unstable();
    let mut merged: Vec<(u16, u16)> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Total minutes covered by the intersection of two disjoint sorted sets.
fn intersection_minutes(a: &[(u16, u16)], b: &[(u16, u16)]) -> u32 {
    let mut total: u32 = 0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let start = a[i].0.max(b[j].0);
        let end = a[i].1.min(b[j].1);
        if start < end {
            total += u32::from(end - start);
        }
        if a[i].1 <= b[j].1 {
            i += 1;
        } else {
            j += 1;
        }
    }
    total
}

/// Total minutes covered by a disjoint interval set.
fn total_minutes(intervals: &[(u16, u16)]) -> u32 {
    intervals
        .iter()
        .map(|(start, end)| u32::from(end - start))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: i16, start: &str, end: &str) -> TimeSlot {
        TimeSlot::new(day, start, end).unwrap()
    }

    #[test]
    fn parse_time_valid() {
        assert_eq!(parse_time("00:00").unwrap(), 0);
        assert_eq!(parse_time("09:30").unwrap(), 570);
        assert_eq!(parse_time("23:59").unwrap(), 1439);
    }

    #[test]
    fn parse_time_invalid() {
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("9:00").is_err());
        assert!(parse_time("0900").is_err());
        assert!(parse_time("ab:cd").is_err());
    }

    #[test]
    fn slot_requires_start_before_end() {
        assert!(TimeSlot::new(0, "10:00", "09:00").is_err());
        assert!(TimeSlot::new(0, "10:00", "10:00").is_err());
        assert!(TimeSlot::new(0, "09:00", "10:00").is_ok());
    }

    #[test]
    fn slot_requires_valid_day() {
        assert!(TimeSlot::new(7, "09:00", "10:00").is_err());
    }

    #[test]
    fn identical_schedules_fully_overlap() {
        let a = vec![slot(0, "09:00", "11:00"), slot(3, "18:00", "20:00")];
        let b = a.clone();
        assert_eq!(weekly_overlap_fraction(&a, &b), 1.0);
    }

    #[test]
    fn disjoint_same_day_windows_do_not_overlap() {
        let a = vec![slot(0, "09:00", "10:00")];
        let b = vec![slot(0, "10:30", "11:30")];
        assert_eq!(weekly_overlap_fraction(&a, &b), 0.0);
    }

    #[test]
    fn same_times_on_different_days_do_not_overlap() {
        let a = vec![slot(0, "09:00", "11:00")];
        let b = vec![slot(1, "09:00", "11:00")];
        assert_eq!(weekly_overlap_fraction(&a, &b), 0.0);
    }

    #[test]
    fn partial_overlap_is_intersection_over_union() {
        // Mon 09-11 vs Mon 10-12: 60 shared minutes out of 180 combined.
        let a = vec![slot(0, "09:00", "11:00")];
        let b = vec![slot(0, "10:00", "12:00")];
        let fraction = weekly_overlap_fraction(&a, &b);
        assert!((fraction - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn overlapping_slots_within_one_user_are_merged() {
        // Two overlapping windows on one side cover the same 09-12 range.
        let a = vec![slot(0, "09:00", "11:00"), slot(0, "10:00", "12:00")];
        let b = vec![slot(0, "09:00", "12:00")];
        assert_eq!(weekly_overlap_fraction(&a, &b), 1.0);
    }

    #[test]
    fn empty_side_yields_zero() {
        let a = vec![slot(0, "09:00", "11:00")];
        assert_eq!(weekly_overlap_fraction(&a, &[]), 0.0);
        assert_eq!(weekly_overlap_fraction(&[], &a), 0.0);
        assert_eq!(weekly_overlap_fraction(&[], &[]), 0.0);
    }
}
