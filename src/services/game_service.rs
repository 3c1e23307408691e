use tracing::{debug, info};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    dao::models::NewGameEntity,
    dto::game::{CreateGameRequest, GameResponse},
    error::ServiceError,
    state::SharedState,
};

/// Fetch every stored game.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameResponse>, ServiceError> {
    let games = state.game_store().list_games().await?;
    debug!(count = games.len(), "listed games");
    Ok(games.into_iter().map(Into::into).collect())
}

/// Validate the payload and persist a new game.
///
/// Nothing reaches the store unless every required field is present.
pub async fn create_game(
    state: &SharedState,
    request: CreateGameRequest,
) -> Result<GameResponse, ServiceError> {
    let game = build_new_game(request)?;

    let stored = state.game_store().insert_game(game).await?;
    info!(id = stored.id, title = %stored.title, "game created");
    Ok(stored.into())
}

fn build_new_game(request: CreateGameRequest) -> Result<NewGameEntity, ServiceError> {
    request.validate()?;
    let CreateGameRequest {
        id,
        title,
        genre,
        release_year,
    } = request;

    // `validate` already rejects missing fields; this only unpacks them.
    let (Some(title), Some(genre), Some(release_year)) = (title, genre, release_year) else {
        let mut errors = ValidationErrors::new();
        errors.add("payload", ValidationError::new("required"));
        return Err(errors.into());
    };

    Ok(NewGameEntity {
        id,
        title,
        genre,
        release_year,
    })
}
