//! Match status constants and the match lifecycle state machine.
//!
//! A match starts as `pending` and moves exactly once to `accepted` or
//! `rejected` when a participant responds. Both outcomes are terminal.

use crate::error::CoreError;

/// Match has been proposed and awaits a participant's response.
pub const STATUS_PENDING: &str = "pending";

/// A participant accepted the match. Terminal.
pub const STATUS_ACCEPTED: &str = "accepted";

/// A participant rejected the match. Terminal; kept as history.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid match status values.
pub const VALID_MATCH_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_ACCEPTED, STATUS_REJECTED];

/// Statuses a participant may move a pending match into.
pub const RESPONSE_STATUSES: &[&str] = &[STATUS_ACCEPTED, STATUS_REJECTED];

/// Check whether a status is terminal (no further transitions allowed).
pub fn is_terminal(status: &str) -> bool {
    status == STATUS_ACCEPTED || status == STATUS_REJECTED
}

/// Check whether a transition from `from` to `to` is valid.
pub fn can_transition(from: &str, to: &str) -> bool {
    from == STATUS_PENDING && RESPONSE_STATUSES.contains(&to)
}

/// Validate that a response target status is one of the accepted values.
///
/// This guards the request body, not the current state of the match; a
/// well-formed target can still fail later with an invalid-transition error
/// when the match is no longer pending.
pub fn validate_response_target(status: &str) -> Result<(), CoreError> {
    if RESPONSE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid match status '{status}'. Must be one of: {}",
            RESPONSE_STATUSES.join(", ")
        )))
    }
}
