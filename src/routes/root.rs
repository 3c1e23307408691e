use axum::{Json, Router, routing::get};

use crate::{dto::root::RootResponse, state::SharedState};

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Server is up", body = RootResponse))
)]
/// Greet the caller; answers as long as the process is serving requests.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::greeting())
}

/// Configure the root route.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/", get(root))
}
