//! Route definitions for the `/availability` resource.
//!
//! All endpoints require authentication and operate on the caller's own
//! slots.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::availability;
use crate::state::AppState;

/// Routes mounted at `/availability`.
///
/// ```text
/// GET    /      -> list_my_availability
/// POST   /      -> add_availability
/// DELETE /{id}  -> delete_availability
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(availability::list_my_availability).post(availability::add_availability),
        )
        .route("/{id}", delete(availability::delete_availability))
}
