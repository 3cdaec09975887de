mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

use crate::{auth::extractors::require_auth, state::AppState};
use axum::{middleware, Router};

/// Post routes, all behind bearer authentication.
pub fn router(state: AppState) -> Router<AppState> {
    handlers::post_routes().route_layer(middleware::from_fn_with_state(state, require_auth))
}
