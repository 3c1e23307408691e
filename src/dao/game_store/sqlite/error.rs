//! Error types shared by the SQLite storage implementation.

use thiserror::Error;

/// Convenient result alias returning [`SqliteDaoError`] failures.
pub type SqliteResult<T> = Result<T, SqliteDaoError>;

/// Failures that can occur while interacting with SQLite.
#[derive(Debug, Error)]
pub enum SqliteDaoError {
    /// The connection URL could not be parsed.
    #[error("invalid SQLite connection URL `{url}`")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Parser error.
        #[source]
        source: sqlx::Error,
    },
    /// Opening the connection pool failed.
    #[error("failed to open SQLite database")]
    Connect {
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// Creating the `games` table failed.
    #[error("failed to prepare SQLite schema for table `{table}`")]
    EnsureSchema {
        /// Table being created.
        table: &'static str,
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// Selecting the rows failed.
    #[error("failed to list games")]
    ListGames {
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// Inserting a row failed for a reason other than a duplicate id.
    #[error("failed to insert game")]
    InsertGame {
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// An explicit id collided with an existing row.
    #[error("game `{id}` already exists")]
    DuplicateId {
        /// The id already in use.
        id: i64,
    },
    /// Emptying the table failed.
    #[error("failed to truncate table `{table}`")]
    Truncate {
        /// Table being emptied.
        table: &'static str,
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// The `SELECT 1` probe failed.
    #[error("SQLite health check failed")]
    HealthPing {
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
}
