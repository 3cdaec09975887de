use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{DeletedAllResponse, DeletedPostResponse, PostBodyRequest},
    repo_types::Post,
};
use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    extract::{ApiJson, ApiPath},
    state::AppState,
};

pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(list_posts).post(create_post).delete(delete_all_posts),
        )
        .route(
            "/posts/:id",
            get(get_post).put(update_post).delete(delete_post),
        )
}

fn post_not_found() -> ApiError {
    ApiError::not_found("post not found")
}

fn body_required() -> ApiError {
    ApiError::validation("body is required")
}

#[instrument(skip(state))]
pub async fn list_posts(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.posts.list().await?;
    Ok(Json(posts))
}

#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Post>, ApiError> {
    let post = state.posts.get(id).await?.ok_or_else(post_not_found)?;
    Ok(Json(post))
}

#[instrument(skip(state, payload))]
pub async fn create_post(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    ApiJson(payload): ApiJson<PostBodyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let body = payload.required_body().ok_or_else(body_required)?;
    let post = state.posts.create(&body).await?;
    info!(post_id = post.id, "post created");
    let location = format!("/posts/{}", post.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(post)))
}

#[instrument(skip(state, payload))]
pub async fn update_post(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<PostBodyRequest>,
) -> Result<Json<Post>, ApiError> {
    let body = payload.required_body().ok_or_else(body_required)?;
    let post = state
        .posts
        .update(id, &body)
        .await?
        .ok_or_else(post_not_found)?;
    info!(post_id = post.id, "post updated");
    Ok(Json(post))
}

#[instrument(skip(state))]
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeletedPostResponse>, ApiError> {
    let post = state.posts.delete(id).await?.ok_or_else(post_not_found)?;
    info!(post_id = post.id, "post deleted");
    Ok(Json(DeletedPostResponse {
        message: "Post deleted",
        post,
    }))
}

#[instrument(skip(state))]
pub async fn delete_all_posts(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<DeletedAllResponse>, ApiError> {
    let deleted = state.posts.delete_all().await?;
    info!(deleted, "all posts deleted");
    Ok(Json(DeletedAllResponse {
        message: "All posts deleted",
        deleted,
    }))
}
