//! Games API binary entrypoint wiring configuration, storage and the REST router.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use games_api::{
    config::{AppConfig, StoreConfig},
    dao::game_store::{GameStore, memory::MemoryGameStore},
    routes,
    state::{AppState, SharedState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let game_store = open_game_store(&config.store).await?;
    let app_state = AppState::new(game_store);

    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    let service = app.into_make_service();
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Open the store selected by the configuration.
async fn open_game_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn GameStore>> {
    match config {
        StoreConfig::Memory => {
            info!("using in-memory game store; data is lost on restart");
            Ok(Arc::new(MemoryGameStore::new()))
        }
        #[cfg(feature = "sqlite-store")]
        StoreConfig::Sqlite {
            url,
            max_connections,
        } => {
            use games_api::dao::game_store::sqlite::{SqliteConfig, SqliteGameStore};

            let sqlite_config =
                SqliteConfig::from_url(url, *max_connections).context("parsing SQLite URL")?;
            let store = SqliteGameStore::connect(sqlite_config)
                .await
                .context("opening SQLite game store")?;
            info!(%url, "connected to SQLite game store");
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "sqlite-store"))]
        StoreConfig::Sqlite { .. } => {
            anyhow::bail!("SQLite store configured but the `sqlite-store` feature is disabled")
        }
    }
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
