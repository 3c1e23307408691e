use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::game::{CreateGameRequest, GameResponse},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes exposing the game catalogue.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/games", get(list_games).post(create_game))
}

/// List every stored game.
#[utoipa::path(
    get,
    path = "/api/games",
    tag = "games",
    responses((status = 200, description = "All stored games", body = [GameResponse]))
)]
pub async fn list_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    Ok(Json(game_service::list_games(&state).await?))
}

/// Validate and persist a new game.
#[utoipa::path(
    post,
    path = "/api/games",
    tag = "games",
    request_body = CreateGameRequest,
    responses(
        (status = 201, description = "Game created", body = GameResponse),
        (status = 409, description = "A game with the requested id already exists"),
        (status = 422, description = "A required field is missing or invalid")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GameResponse>), AppError> {
    let Json(payload) = payload?;
    let game = game_service::create_game(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(game)))
}
