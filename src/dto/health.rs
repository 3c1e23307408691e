use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether the store answered the last health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The store answered.
    Ok,
    /// The store did not answer; requests touching it will fail.
    Degraded,
}

/// Body of the `/healthcheck` route.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: HealthStatus,
}

impl HealthResponse {
    /// Create a health response indicating the store is reachable.
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
        }
    }

    /// The process is serving but the store did not respond.
    pub fn degraded() -> Self {
        Self {
            status: HealthStatus::Degraded,
        }
    }
}
