//! Wire types exchanged over HTTP.

/// Game payloads for `/api/games`.
pub mod game;
/// Health check payloads.
pub mod health;
/// Root greeting payload.
pub mod root;
/// Custom validators shared by request DTOs.
pub mod validation;
