//! Library crate for games-api, exposing modules for binaries and integration tests.

pub mod config;
/// Persistence: store trait, backends and row models.
pub mod dao;
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// HTTP route trees.
pub mod routes;
/// Business logic between routes and the store.
pub mod services;
/// Shared application state.
pub mod state;
