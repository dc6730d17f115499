use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::PostError;
use thiserror::Error;
use tracing::warn;

/// Request failure rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Post(PostError),
    /// An id segment that is not a number; no post can have it.
    UnknownId(String),
    /// Extractor rejection (query string or path segment).
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Post(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::UnknownId(_) => StatusCode::NOT_FOUND,
            Self::Post(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Post(e) => e.to_string(),
            Self::UnknownId(raw) => format!("Post with id {raw} was not found."),
            Self::BadRequest(msg) => msg.clone(),
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        Self::Post(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.message();
        warn!(status = status.as_u16(), error = %msg, "request rejected");
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_everything_else_to_400() {
        assert_eq!(ApiError::from(PostError::NotFound(1)).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(PostError::EmptyBody).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(PostError::MissingFields(vec!["title"])).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(PostError::InvalidDirection("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::BadRequest("dup".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn non_numeric_id_reads_like_unknown_post() {
        let err = ApiError::UnknownId("abc".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Post with id abc was not found.");
    }

    #[test]
    fn response_carries_status() {
        let res = ApiError::from(PostError::NotFound(5)).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
