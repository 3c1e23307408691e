use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{dao::models::GameEntity, dto::validation::validate_not_blank};

/// Payload accepted by `POST /api/games`.
///
/// Fields are optional at the serde level so a missing field surfaces as a
/// validation failure (422) rather than a generic decoding error. Unknown
/// fields are ignored.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    /// Requested row id. Assigned by the store when omitted.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display title; required and not blank.
    #[validate(required, custom(function = "validate_not_blank"))]
    pub title: Option<String>,
    /// Genre label; required and not blank.
    #[validate(required, custom(function = "validate_not_blank"))]
    pub genre: Option<String>,
    /// Release year; required.
    #[validate(required)]
    pub release_year: Option<i32>,
}

/// A stored game as exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Identifier of the stored row.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Genre label.
    pub genre: String,
    /// Release year, serialized as `releaseYear`.
    pub release_year: i32,
}

impl From<GameEntity> for GameResponse {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            genre: entity.genre,
            release_year: entity.release_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> CreateGameRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn complete_payload_is_valid() {
        let request = parse(json!({
            "id": 1,
            "title": "Halo",
            "genre": "Shooter",
            "releaseYear": 2001
        }));

        assert!(request.validate().is_ok());
        assert_eq!(request.id, Some(1));
        assert_eq!(request.release_year, Some(2001));
    }

    #[test]
    fn id_is_optional() {
        let request = parse(json!({"title": "Halo", "genre": "Shooter", "releaseYear": 2001}));
        assert!(request.validate().is_ok());
        assert_eq!(request.id, None);
    }

    #[test]
    fn misnamed_title_is_reported_as_missing() {
        let request = parse(json!({
            "id": 1,
            "faketitle": "Halo",
            "genre": "Shooter",
            "releaseYear": 2001
        }));

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn blank_genre_and_missing_year_are_rejected() {
        let request = parse(json!({"title": "Halo", "genre": "  "}));

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("genre"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn response_uses_camel_case() {
        let response = GameResponse {
            id: 1,
            title: "Halo".into(),
            genre: "Shooter".into(),
            release_year: 2001,
        };

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"id": 1, "title": "Halo", "genre": "Shooter", "releaseYear": 2001})
        );
    }
}
