//! In-process game store, used when no database is configured and throughout the tests.

use std::{collections::BTreeMap, sync::Arc};

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, NewGameEntity},
    storage::{StorageError, StorageResult},
};

/// Game store keeping rows in a shared ordered map.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    rows: Arc<RwLock<BTreeMap<i64, GameEntity>>>,
}

impl MemoryGameStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    async fn list_games(&self) -> Vec<GameEntity> {
        let guard = self.rows.read().await;
        guard.values().cloned().collect()
    }

    async fn insert_game(&self, game: NewGameEntity) -> StorageResult<GameEntity> {
        let mut guard = self.rows.write().await;
        let id = match game.id {
            Some(id) if guard.contains_key(&id) => {
                return Err(StorageError::conflict(format!("game `{id}` already exists")));
            }
            Some(id) => id,
            None => next_free_id(&guard)?,
        };

        let entity = game.with_id(id);
        guard.insert(id, entity.clone());
        Ok(entity)
    }

    async fn truncate(&self) {
        self.rows.write().await.clear();
    }
}

/// One past the largest key, like an `INTEGER PRIMARY KEY` rowid.
///
/// Once `i64::MAX` is taken the lowest unused positive key is handed out instead.
fn next_free_id(rows: &BTreeMap<i64, GameEntity>) -> StorageResult<i64> {
    let Some(&last) = rows.keys().next_back() else {
        return Ok(1);
    };
    if let Some(next) = last.checked_add(1) {
        return Ok(next.max(1));
    }

    let mut candidate: i64 = 1;
    for &taken in rows.range(1..).map(|(id, _)| id) {
        if taken != candidate {
            return Ok(candidate);
        }
        match candidate.checked_add(1) {
            Some(next) => candidate = next,
            None => break,
        }
    }

    Err(StorageError::conflict("no free game id left"))
}

impl GameStore for MemoryGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.list_games().await) })
    }

    fn insert_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_game(game).await })
    }

    fn truncate(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store.truncate().await;
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
