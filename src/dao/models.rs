use serde::{Deserialize, Serialize};

/// A game row as persisted in the `games` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Row identifier, unique within the store.
    pub id: i64,
    /// Display title (e.g. "Halo").
    pub title: String,
    /// Free-form genre label (e.g. "Shooter").
    pub genre: String,
    /// Year the game was released.
    pub release_year: i32,
}

/// Insert payload for a game row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameEntity {
    /// Explicit row key. When `None` the store assigns the next free id.
    pub id: Option<i64>,
    /// See [`GameEntity::title`].
    pub title: String,
    /// See [`GameEntity::genre`].
    pub genre: String,
    /// See [`GameEntity::release_year`].
    pub release_year: i32,
}

impl NewGameEntity {
    /// Materialise the entity once the store has settled on an identifier.
    pub fn with_id(self, id: i64) -> GameEntity {
        GameEntity {
            id,
            title: self.title,
            genre: self.genre,
            release_year: self.release_year,
        }
    }
}
