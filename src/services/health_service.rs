use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Ping the store and report whether it answered.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.game_store().health_check().await {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthResponse::degraded()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::future::BoxFuture;

    use super::*;
    use crate::{
        dao::{
            game_store::{GameStore, memory::MemoryGameStore},
            models::{GameEntity, NewGameEntity},
            storage::{StorageError, StorageResult},
        },
        dto::health::HealthStatus,
        state::AppState,
    };

    struct UnreachableStore;

    fn down() -> StorageError {
        StorageError::unavailable(
            "connection refused".into(),
            std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
        )
    }

    impl GameStore for UnreachableStore {
        fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
            Box::pin(async { Err(down()) })
        }

        fn insert_game(
            &self,
            _game: NewGameEntity,
        ) -> BoxFuture<'static, StorageResult<GameEntity>> {
            Box::pin(async { Err(down()) })
        }

        fn truncate(&self) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(async { Err(down()) })
        }

        fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(async { Err(down()) })
        }
    }

    #[tokio::test]
    async fn reachable_store_is_ok() {
        let state = AppState::new(Arc::new(MemoryGameStore::new()));
        assert_eq!(health_status(&state).await.status, HealthStatus::Ok);
    }

    #[tokio::test]
    async fn failing_store_is_degraded() {
        let state = AppState::new(Arc::new(UnreachableStore));
        assert_eq!(health_status(&state).await.status, HealthStatus::Degraded);
    }
}
