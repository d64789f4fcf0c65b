//! ApiKey Auth
//!
//! Extracts an API key from an `Authorization: ApiKey <key>` header.
//!
//! ## Core
//!
//! ```rust
//! use apikey_auth::{extract_api_key, AuthError};
//! use std::collections::HashMap;
//!
//! let headers = HashMap::from([(
//!     "authorization".to_string(),
//!     "ApiKey my-secret-key".to_string(),
//! )]);
//! assert_eq!(extract_api_key(&headers).as_deref(), Ok("my-secret-key"));
//!
//! let empty: HashMap<String, String> = HashMap::new();
//! assert_eq!(extract_api_key(&empty), Err(AuthError::NoAuthHeader));
//! ```
//!
//! ## Embedded (Axum)
//!
//! With the `server` feature, protect routes in a larger Axum app:
//! ```rust,ignore
//! use axum::{middleware, routing::get, Router};
//! use apikey_auth::server::{require_api_key, ApiKey};
//!
//! async fn handler(key: ApiKey) -> String {
//!     key.hint()
//! }
//!
//! let app = Router::new()
//!     .route("/private", get(handler))
//!     .layer(middleware::from_fn(require_api_key));
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Enabled behind the `server` feature so the core library can be used without Axum.
#[cfg(feature = "server")]
pub mod server;

pub use application::*;
pub use domain::*;
pub use infrastructure::*;
