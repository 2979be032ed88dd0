pub mod auth;
pub mod availability;
pub mod health;
pub mod matching;
pub mod profiles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register            register (public)
/// /auth/login               login (public)
/// /auth/refresh             refresh (public)
///
/// /profiles                 create (POST)
/// /profiles/me              get, patch (caller's profile)
/// /profiles/{user_id}       get (any authenticated user)
///
/// /availability             list, create
/// /availability/{id}        delete
///
/// /match/find               run discovery (POST)
/// /match/recommended        current matches (GET)
/// /match/{id}               respond (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profiles", profiles::router())
        .nest("/availability", availability::router())
        .nest("/match", matching::router())
}
