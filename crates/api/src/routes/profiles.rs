//! Route definitions for the `/profiles` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// POST  /           -> create_profile
/// GET   /me         -> get_my_profile
/// PATCH /me         -> update_my_profile
/// GET   /{user_id}  -> get_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(profile::create_profile))
        .route(
            "/me",
            get(profile::get_my_profile).patch(profile::update_my_profile),
        )
        .route("/{user_id}", get(profile::get_profile))
}
