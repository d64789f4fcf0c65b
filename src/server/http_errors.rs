use super::http_types::ErrorResponse;
use crate::application::{AuthError, API_KEY_SCHEME};
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

pub(super) fn map_auth_error(err: &AuthError) -> (StatusCode, serde_json::Value) {
    let (status, body) = match err {
        AuthError::NoAuthHeader => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse {
                error: "Authorization header required".to_string(),
                expected: None,
            },
        ),
        AuthError::MalformedAuthHeader => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse {
                error: "Malformed authorization header".to_string(),
                expected: Some(format!("{} <key>", API_KEY_SCHEME)),
            },
        ),
    };
    (status, serde_json::json!(body))
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, body) = map_auth_error(&self);
        (status, [(header::WWW_AUTHENTICATE, API_KEY_SCHEME)], Json(body)).into_response()
    }
}
