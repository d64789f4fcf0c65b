use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub(super) struct HealthResponse {
    pub(super) status: String,
}

#[derive(Serialize, ToSchema)]
pub(super) struct WhoAmIResponse {
    pub(super) status: String,
    /// Leading characters of the presented key.
    #[schema(example = "my-s...")]
    pub(super) key_hint: String,
}

#[derive(Serialize, ToSchema)]
pub(super) struct ErrorResponse {
    pub(super) error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) expected: Option<String>,
}
