//! Game store trait and its backends.

/// Store kept in process memory.
pub mod memory;
/// Store backed by SQLite.
#[cfg(feature = "sqlite-store")]
pub mod sqlite;

use crate::dao::models::{GameEntity, NewGameEntity};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer holding the `games` table.
pub trait GameStore: Send + Sync {
    /// Every stored game, ordered by ascending id.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Persist a single game and return the row as stored.
    fn insert_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<GameEntity>>;
    /// Remove every row and reset id assignment.
    fn truncate(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Cheap round trip proving the backend still answers.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
