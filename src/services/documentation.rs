use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the games API.
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::health::healthcheck,
        crate::routes::games::list_games,
        crate::routes::games::create_game,
    ),
    components(
        schemas(
            crate::dto::root::RootResponse,
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::game::CreateGameRequest,
            crate::dto::game::GameResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "games", description = "Game catalogue"),
    )
)]
pub struct ApiDoc;
