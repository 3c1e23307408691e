use axum::{Router, http::Uri};

use crate::{error::AppError, state::SharedState};

/// Swagger UI and OpenAPI document.
pub mod docs;
/// `/api/games` endpoints.
pub mod games;
/// `/healthcheck` endpoint.
pub mod health;
/// `/` greeting endpoint.
pub mod root;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    root::router()
        .merge(health::router())
        .merge(games::router())
        .merge(docs::router())
        .fallback(not_found)
        .with_state(state)
}

/// Catch-all for paths no route claims.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}
