/// OpenAPI documentation generation.
pub mod documentation;
/// Listing and creation of games.
pub mod game_service;
/// Health check service.
pub mod health_service;
