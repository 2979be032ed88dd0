//! Route definitions for the `/match` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::matching;
use crate::state::AppState;

/// Routes mounted at `/match`.
///
/// ```text
/// POST  /find         -> find_matches
/// GET   /recommended  -> get_recommended
/// PATCH /{id}         -> respond_to_match
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/find", post(matching::find_matches))
        .route("/recommended", get(matching::get_recommended))
        .route("/{id}", patch(matching::respond_to_match))
}
