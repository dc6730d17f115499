use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use service::errors::PostError;
use service::posts::{NewPost, Post, PostPatch};
use tracing::info;

use common::types::MessageBody;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Sort field: `title` or `content`
    pub sort: Option<String>,
    /// `asc` (default) or `desc`, case-insensitive
    pub direction: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive title substring
    pub title: Option<String>,
    /// Case-insensitive content substring
    pub content: Option<String>,
}

// Bodies are taken as `Option<Json<Value>>`: a missing, non-JSON or
// unparsable body arrives as `None` and is reported as an empty body instead
// of axum's own rejection. Path and query rejections go through `ApiError` so
// every failure keeps the `{"error"}` envelope.

/// Ids are taken as text; a segment that is not a number is an unknown post.
fn post_id(path: Result<Path<String>, PathRejection>) -> Result<u64, ApiError> {
    let Path(raw) = path?;
    raw.parse::<u64>().map_err(|_| ApiError::UnknownId(raw))
}

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(ListQuery),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::PostDoc]),
        (status = 400, description = "Invalid sort field or direction", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_posts(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let Query(q) = query?;
    let posts = state.posts.list(q.sort.as_deref(), q.direction.as_deref()).await?;
    Ok(Json(posts))
}

#[utoipa::path(
    get,
    path = "/api/posts/search",
    tag = "posts",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching posts, possibly none", body = [crate::openapi::PostDoc]),
        (status = 400, description = "Malformed query string", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn search_posts(
    State(state): State<ServerState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let Query(q) = query?;
    let hits = state.posts.search(q.title.as_deref(), q.content.as_deref()).await;
    info!(count = hits.len(), "search posts");
    Ok(Json(hits))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = crate::openapi::CreatePostDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PostDoc),
        (status = 400, description = "Empty body or missing fields", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_post(
    State(state): State<ServerState>,
    payload: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let input = NewPost::from_payload(payload.as_ref().map(|Json(v)| v))?;
    let post = state.posts.create(input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PostDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_post(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Post>, ApiError> {
    let id = post_id(path)?;
    state
        .posts
        .get(id)
        .await
        .map(Json)
        .ok_or(ApiError::Post(PostError::NotFound(id)))
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    request_body = crate::openapi::UpdatePostDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PostDoc),
        (status = 400, description = "No data or blank fields", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_post(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
    payload: Option<Json<Value>>,
) -> Result<Json<Post>, ApiError> {
    let id = post_id(path)?;
    let patch = PostPatch::from_payload(payload.as_ref().map(|Json(v)| v));
    let post = state.posts.update(id, patch).await?;
    Ok(Json(post))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_post(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = state.posts.delete(post_id(path)?).await?;
    Ok(Json(MessageBody::new(format!(
        "Post with id {id} has been deleted successfully."
    ))))
}
