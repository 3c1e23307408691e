use sqlx::FromRow;

use crate::dao::models::GameEntity;

/// Row shape of the `games` table.
#[derive(Debug, FromRow)]
pub(super) struct SqliteGameRow {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
}

impl From<SqliteGameRow> for GameEntity {
    fn from(row: SqliteGameRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            genre: row.genre,
            release_year: row.release_year,
        }
    }
}
