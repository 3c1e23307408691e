use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;

use super::error::{SqliteDaoError, SqliteResult};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration describing how to open the SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Parsed connection options.
    pub options: SqliteConnectOptions,
    /// Pool size, forced to 1 for in-memory databases.
    pub max_connections: u32,
    /// True for `:memory:` databases, which only live as long as their connection.
    pub in_memory: bool,
}

impl SqliteConfig {
    /// Parse a `sqlite:` connection URL, creating the database file on first use.
    pub fn from_url(url: &str, max_connections: Option<u32>) -> SqliteResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|source| SqliteDaoError::InvalidUrl {
                url: url.to_owned(),
                source,
            })?
            .create_if_missing(true);

        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let max_connections = if in_memory {
            1
        } else {
            max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS).max(1)
        };

        Ok(Self {
            options,
            max_connections,
            in_memory,
        })
    }

    /// Private in-memory database, handy for tests.
    pub fn in_memory() -> SqliteResult<Self> {
        Self::from_url("sqlite::memory:", None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_urls_are_pinned_to_one_connection() {
        let config = SqliteConfig::from_url("sqlite::memory:", Some(8)).unwrap();
        assert!(config.in_memory);
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn file_urls_keep_requested_pool_size() {
        let config = SqliteConfig::from_url("sqlite://games.db3", Some(8)).unwrap();
        assert!(!config.in_memory);
        assert_eq!(config.max_connections, 8);

        let config = SqliteConfig::from_url("sqlite://games.db3", None).unwrap();
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }
}
