use serde::Serialize;
use utoipa::ToSchema;

/// Greeting returned by `GET /` so clients can confirm the server is reachable.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl RootResponse {
    /// The fixed "server is hot" greeting.
    pub fn greeting() -> Self {
        Self {
            message: "server is hot".to_string(),
        }
    }
}
