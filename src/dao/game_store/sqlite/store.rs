use std::time::Duration;

use futures::future::BoxFuture;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use super::{
    config::SqliteConfig,
    error::{SqliteDaoError, SqliteResult},
    models::SqliteGameRow,
};
use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, NewGameEntity},
    storage::StorageResult,
};

const GAME_TABLE_NAME: &str = "games";

// No AUTOINCREMENT: rowids restart at max(id) + 1, so an emptied table hands out 1 again.
const CREATE_GAME_TABLE: &str = "CREATE TABLE IF NOT EXISTS games (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    genre TEXT NOT NULL,
    release_year INTEGER NOT NULL
)";

/// Game store backed by a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteGameStore {
    pool: SqlitePool,
}

impl SqliteGameStore {
    /// Open the pool and make sure the `games` table exists.
    pub async fn connect(config: SqliteConfig) -> SqliteResult<Self> {
        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
        if config.in_memory {
            // Dropping the last connection would drop the whole database.
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(Option::<Duration>::None)
                .max_lifetime(Option::<Duration>::None);
        }

        let pool = pool_options
            .connect_with(config.options)
            .await
            .map_err(|source| SqliteDaoError::Connect { source })?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> SqliteResult<()> {
        sqlx::query(CREATE_GAME_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::EnsureSchema {
                table: GAME_TABLE_NAME,
                source,
            })?;
        Ok(())
    }

    async fn list_games(&self) -> SqliteResult<Vec<GameEntity>> {
        let rows: Vec<SqliteGameRow> =
            sqlx::query_as("SELECT id, title, genre, release_year FROM games ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|source| SqliteDaoError::ListGames { source })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_game(&self, game: NewGameEntity) -> SqliteResult<GameEntity> {
        let requested_id = game.id;
        let row: SqliteGameRow = sqlx::query_as(
            "INSERT INTO games (id, title, genre, release_year) VALUES (?1, ?2, ?3, ?4) \
             RETURNING id, title, genre, release_year",
        )
        .bind(game.id)
        .bind(game.title)
        .bind(game.genre)
        .bind(game.release_year)
        .fetch_one(&self.pool)
        .await
        .map_err(|source| {
            let duplicate = matches!(
                &source,
                sqlx::Error::Database(db_err) if db_err.is_unique_violation()
            );
            match requested_id {
                Some(id) if duplicate => SqliteDaoError::DuplicateId { id },
                _ => SqliteDaoError::InsertGame { source },
            }
        })?;

        Ok(row.into())
    }

    async fn truncate(&self) -> SqliteResult<()> {
        sqlx::query("DELETE FROM games")
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::Truncate {
                table: GAME_TABLE_NAME,
                source,
            })?;
        Ok(())
    }

    async fn ping(&self) -> SqliteResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::HealthPing { source })?;
        Ok(())
    }
}

impl GameStore for SqliteGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games().await.map_err(Into::into) })
    }

    fn insert_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_game(game).await.map_err(Into::into) })
    }

    fn truncate(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.truncate().await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(Into::into) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::storage::StorageError;

    async fn open() -> SqliteGameStore {
        SqliteGameStore::connect(SqliteConfig::in_memory().unwrap())
            .await
            .unwrap()
    }

    fn game(id: Option<i64>, title: &str) -> NewGameEntity {
        NewGameEntity {
            id,
            title: title.into(),
            genre: "Arcade".into(),
            release_year: 1998,
        }
    }

    #[tokio::test]
    async fn insert_returns_stored_row() {
        let store = open().await;
        let stored = GameStore::insert_game(&store, game(None, "Mario"))
            .await
            .unwrap();

        assert_eq!(
            stored,
            GameEntity {
                id: 1,
                title: "Mario".into(),
                genre: "Arcade".into(),
                release_year: 1998,
            }
        );
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = open().await;
        GameStore::insert_game(&store, game(Some(3), "Metroid"))
            .await
            .unwrap();
        GameStore::insert_game(&store, game(Some(1), "Mario"))
            .await
            .unwrap();
        GameStore::insert_game(&store, game(None, "Zelda"))
            .await
            .unwrap();

        let ids: Vec<i64> = GameStore::list_games(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|game| game.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn duplicate_id_is_a_conflict() {
        let store = open().await;
        GameStore::insert_game(&store, game(Some(1), "Mario"))
            .await
            .unwrap();

        let err = GameStore::insert_game(&store, game(Some(1), "Zelda"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict { .. }));
    }

    #[tokio::test]
    async fn max_id_still_leaves_room_for_assigned_ids() {
        let store = open().await;
        GameStore::insert_game(&store, game(Some(i64::MAX), "Metroid"))
            .await
            .unwrap();

        // SQLite falls back to an unused rowid once the maximum is taken.
        let next = GameStore::insert_game(&store, game(None, "Mario"))
            .await
            .unwrap();
        assert_ne!(next.id, i64::MAX);
        assert!(next.id > 0);

        let games = GameStore::list_games(&store).await.unwrap();
        assert_eq!(games.len(), 2);
    }

    #[tokio::test]
    async fn truncate_empties_table_and_restarts_ids() {
        let store = open().await;
        GameStore::insert_game(&store, game(None, "Mario"))
            .await
            .unwrap();
        GameStore::insert_game(&store, game(None, "Zelda"))
            .await
            .unwrap();

        GameStore::truncate(&store).await.unwrap();
        assert!(GameStore::list_games(&store).await.unwrap().is_empty());

        let fresh = GameStore::insert_game(&store, game(None, "Halo"))
            .await
            .unwrap();
        assert_eq!(fresh.id, 1);
        GameStore::health_check(&store).await.unwrap();
    }
}
