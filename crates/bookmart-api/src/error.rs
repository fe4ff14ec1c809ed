use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with. The message is what the client sees.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required body field was absent, null or empty.
    #[error("{0}")]
    MissingFields(&'static str),
    /// The body could not be read or parsed at all.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Route {method} {path} not found")]
    RouteNotFound { method: Method, path: String },
    #[error("{0}")]
    Conflict(&'static str),
    /// The store call failed; carries the store's message unchanged.
    #[error("{0}")]
    Store(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Conflict(msg) => json!({ "msg": msg }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

/// Error on the login/signup routes. Same status codes as [`ApiError`], but
/// rendered in the `{ "Status": "error", "message": ... }` shape the auth
/// clients branch on.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct AuthError(#[from] pub ApiError);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let body = json!({ "Status": "error", "message": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError(rejection.into())
    }
}
