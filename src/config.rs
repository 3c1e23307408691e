//! Application-level configuration loading: listening port and persistence backend.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GAMES_API_CONFIG_PATH";
/// Environment variable selecting the store kind (`sqlite` or `memory`).
const STORE_KIND_ENV: &str = "GAMES_API_STORE";
const DATABASE_URL_ENV: &str = "DATABASE_URL";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite://games.db3";

/// Persistence backend selected at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Rows kept in process memory; lost on restart.
    Memory,
    /// SQLite database reached through `url`.
    Sqlite {
        /// `sqlite:` connection URL.
        url: String,
        /// Pool size; ignored for in-memory databases.
        max_connections: Option<u32>,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Sqlite {
            url: DEFAULT_DATABASE_URL.to_owned(),
            max_connections: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// TCP port the HTTP server binds on all interfaces.
    pub port: u16,
    /// Store backing the `/api/games` endpoints.
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load the configuration from disk and apply environment overrides.
    ///
    /// A missing or unreadable file falls back to the built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let config = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded configuration file");
                    raw.into()
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        config.with_overrides(|key| env::var(key).ok())
    }

    /// Apply `PORT`/`SERVER_PORT`, `DATABASE_URL` and `GAMES_API_STORE` on top of `self`.
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(port) = lookup("PORT")
            .or_else(|| lookup("SERVER_PORT"))
            .and_then(|value| value.parse::<u16>().ok())
        {
            self.port = port;
        }

        if let Some(url) = lookup(DATABASE_URL_ENV).filter(|url| !url.is_empty()) {
            let max_connections = match self.store {
                StoreConfig::Sqlite {
                    max_connections, ..
                } => max_connections,
                StoreConfig::Memory => None,
            };
            self.store = StoreConfig::Sqlite {
                url,
                max_connections,
            };
        }

        match lookup(STORE_KIND_ENV).as_deref() {
            Some("memory") => self.store = StoreConfig::Memory,
            Some("sqlite") if self.store == StoreConfig::Memory => {
                self.store = StoreConfig::default();
            }
            Some("sqlite") | None => {}
            Some(other) => warn!(kind = other, "unknown store kind; keeping configured store"),
        }

        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            store: StoreConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    port: Option<u16>,
    #[serde(default)]
    store: Option<RawStore>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum RawStore {
    Memory,
    Sqlite {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        max_connections: Option<u32>,
    },
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let store = match value.store {
            Some(RawStore::Memory) => StoreConfig::Memory,
            Some(RawStore::Sqlite {
                url,
                max_connections,
            }) => StoreConfig::Sqlite {
                url: url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
                max_connections,
            },
            None => StoreConfig::default(),
        };

        Self {
            port: value.port.unwrap_or(DEFAULT_PORT),
            store,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
