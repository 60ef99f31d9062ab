use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::error::ApiError;
use crate::models::{NewPlayer, Player};
use crate::roster;

// GET /club-championship/players - List all registered players
pub async fn get_players(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = roster::list_players(&pool).await?;
    Ok(Json(players))
}

// POST /club-championship/add-player - Register a new player
pub async fn add_player(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewPlayer>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(new_player) = payload.map_err(|_| ApiError::InvalidPayload)?;

    roster::register_player(&pool, &new_player.name, new_player.rating).await?;

    Ok((StatusCode::CREATED, "Player added successfully"))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
    use tower::ServiceExt;

    use crate::models::Player;

    async fn test_app() -> (axum::Router, SqlitePool) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        crate::db::ensure_schema(&pool).await.expect("failed to create schema");
        (crate::app(pool.clone()), pool)
    }

    fn post_player(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/club-championship/add-player")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_players() -> Request<Body> {
        Request::builder()
            .uri("/club-championship/players")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn root_greeting() {
        let (app, _pool) = test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn list_empty_roster_returns_empty_array() {
        let (app, _pool) = test_app().await;

        let response = app.oneshot(get_players()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "[]");
    }

    #[tokio::test]
    async fn register_and_list_flow() {
        let (app, _pool) = test_app().await;

        let response = app
            .clone()
            .oneshot(post_player(r#"{"name":"Alice","rating":1500}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_text(response).await, "Player added successfully");

        let response = app.oneshot(get_players()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let players: Vec<Player> = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(
            players,
            vec![Player {
                name: "Alice".to_string(),
                rating: 1500,
                points: 0,
            }]
        );
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let (app, _pool) = test_app().await;

        let response = app
            .clone()
            .oneshot(post_player(r#"{"name":"Alice","rating":1500}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(post_player(r#"{"name":"Alice","rating":1800}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_text(response).await, "Player already exists");
    }

    #[tokio::test]
    async fn out_of_range_rating_is_bad_request() {
        let (app, _pool) = test_app().await;

        let response = app
            .oneshot(post_player(r#"{"name":"Bob","rating":3500}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid player data");
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let (app, _pool) = test_app().await;

        let response = app.oneshot(post_player("not-json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid request payload");
    }
}
