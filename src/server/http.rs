use super::http_auth::{require_api_key, ApiKey};
use super::http_types::{ErrorResponse, HealthResponse, WhoAmIResponse};
use crate::application::API_KEY_SCHEME;
use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{ApiKey as OpenApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

pub fn router() -> Router {
    let protected = Router::new()
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn(require_api_key));

    Router::new()
        .route("/health", get(health_check))
        .nest("/v1", protected)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(health_check, whoami),
    components(schemas(HealthResponse, WhoAmIResponse, ErrorResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "ApiKey credential endpoints"),
    ),
    info(
        title = "ApiKey Auth API",
        version = "0.1.0",
        description = "Extracts ApiKey credentials from the Authorization header",
        license(name = "MIT")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(OpenApiKey::Header(ApiKeyValue::with_description(
                    "Authorization".to_string(),
                    format!("{} <key>", API_KEY_SCHEME),
                ))),
            );
        }
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

/// Echo a hint of the presented key
///
/// Only checks that the credential is well formed; it is not validated
/// against any key store.
#[utoipa::path(
    get,
    path = "/v1/whoami",
    tag = "Auth",
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Credential is well formed", body = WhoAmIResponse),
        (status = 401, description = "Missing or malformed Authorization header", body = ErrorResponse)
    )
)]
async fn whoami(key: ApiKey) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(WhoAmIResponse {
            status: "authenticated".to_string(),
            key_hint: key.hint(),
        }),
    )
}
