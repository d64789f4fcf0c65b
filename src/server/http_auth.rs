use crate::application::{extract_api_key, AuthError};
use crate::domain::HeaderSet;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request},
    http::{header::HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

impl HeaderSet for HeaderMap {
    fn header(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(|v| v.as_bytes())
    }
}

const HINT_MIN_KEY_CHARS: usize = 8;

/// Key presented with the `ApiKey` scheme.
///
/// Usable directly as a handler argument, or read from request extensions
/// behind [`require_api_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl ApiKey {
    /// Hint safe for logs and responses. Keys of 8 characters or fewer are
    /// fully masked; longer keys show their first 4 characters.
    pub fn hint(&self) -> String {
        if self.0.chars().count() <= HINT_MIN_KEY_CHARS {
            return "****".to_string();
        }
        let prefix: String = self.0.chars().take(4).collect();
        format!("{prefix}...")
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(key.clone());
        }
        extract_api_key(&parts.headers).map(ApiKey)
    }
}

/// Reject requests without a well-formed `ApiKey` credential.
pub async fn require_api_key(mut request: Request, next: Next) -> Result<Response, AuthError> {
    let key = match extract_api_key(request.headers()) {
        Ok(key) => ApiKey(key),
        Err(e) => {
            warn!(
                error = %e,
                method = %request.method(),
                path = %request.uri().path(),
                "Rejected request"
            );
            return Err(e);
        }
    };

    debug!(key_hint = %key.hint(), "API key extracted");
    request.extensions_mut().insert(key);
    Ok(next.run(request).await)
}
