use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    auth::{
        dto::{CredentialsRequest, TokenResponse},
        services,
    },
    error::ApiError,
    extract::ApiJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = services::signup(
        state.users.as_ref(),
        &state.jwt,
        payload.email,
        payload.password,
    )
    .await?;
    Ok(Json(TokenResponse { token }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = services::login(
        state.users.as_ref(),
        &state.jwt,
        payload.email,
        payload.password,
    )
    .await?;
    Ok(Json(TokenResponse { token }))
}
