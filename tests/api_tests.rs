use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

use cinecircle_api::{
    models::CandidateRow,
    routes::{create_router, AppState},
    services::{
        catalog::InMemoryCatalog, watch_rooms::InMemoryWatchRooms, OnboardingService,
        WatchRoomService,
    },
};

fn user_id() -> HeaderName {
    HeaderName::from_static("x-user-id")
}

fn movie(id: i64, genres: Value, score: f64) -> CandidateRow {
    CandidateRow {
        id: Some(id),
        title: format!("Movie {}", id),
        poster_path: Some(format!("/posters/{}.jpg", id)),
        release_year: Some(1990 + id as i32),
        genres: Some(genres),
        score,
    }
}

fn create_test_server(catalog: Vec<CandidateRow>) -> TestServer {
    let state = Arc::new(AppState {
        onboarding: OnboardingService::new(Arc::new(InMemoryCatalog::new(catalog)), 50),
        watch_rooms: WatchRoomService::new(Arc::new(InMemoryWatchRooms::new())),
    });
    TestServer::new(create_router(state)).unwrap()
}

fn user_header(user: Uuid) -> HeaderValue {
    HeaderValue::from_str(&user.to_string()).unwrap()
}

fn ids(movies: &[Value]) -> Vec<i64> {
    movies.iter().map(|m| m["id"].as_i64().unwrap()).collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(vec![]);
    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server(vec![]);
    let request_id = Uuid::new_v4().to_string();

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_str(&request_id).unwrap(),
        )
        .await;

    assert_eq!(response.header("x-request-id"), request_id.as_str());
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let server = create_test_server(vec![]);
    let response = server.get("/health").await;

    let header = response.header("x-request-id");
    assert!(Uuid::parse_str(header.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_onboarding_with_empty_catalog() {
    let server = create_test_server(vec![]);
    let response = server.get("/api/v1/onboarding/movies").await;

    response.assert_status_ok();
    let movies: Vec<Value> = response.json();
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_onboarding_prefers_genre_diversity() {
    // Inserted out of score order; the catalog sorts before selection
    let server = create_test_server(vec![
        movie(3, json!(["Sci-Fi"]), 70.0),
        movie(1, json!(["Drama"]), 90.0),
        movie(2, json!([{"id": 18, "name": "Drama"}]), 80.0),
    ]);

    let response = server.get("/api/v1/onboarding/movies").await;
    response.assert_status_ok();

    let movies: Vec<Value> = response.json();
    assert_eq!(ids(&movies), vec![1, 3, 2]);
    assert_eq!(movies[0]["title"], "Movie 1");
    assert_eq!(movies[0]["poster_path"], "/posters/1.jpg");
    assert_eq!(movies[2]["genres"], json!(["Drama"]));
    assert!(movies[0].get("score").is_none());
}

#[tokio::test]
async fn test_onboarding_returns_ten_from_twelve() {
    let mut catalog: Vec<CandidateRow> = (1..=5)
        .map(|i| movie(i, json!([format!("G{}", i)]), 101.0 - i as f64))
        .collect();
    catalog.extend((6..=12).map(|i| movie(i, json!(["G1"]), 101.0 - i as f64)));

    let server = create_test_server(catalog);
    let response = server.get("/api/v1/onboarding/movies").await;

    let movies: Vec<Value> = response.json();
    assert_eq!(ids(&movies), (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_onboarding_malformed_catalog_row_fails() {
    let mut broken = movie(2, json!(["Drama"]), 50.0);
    broken.id = None;
    let server = create_test_server(vec![movie(1, json!(["Drama"]), 90.0), broken]);

    let response = server.get("/api/v1/onboarding/movies").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Malformed candidate"));
}

#[tokio::test]
async fn test_create_room_requires_identity() {
    let server = create_test_server(vec![]);

    let response = server
        .post("/api/v1/rooms")
        .json(&json!({ "name": "Movie night" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_room_rejects_blank_name() {
    let server = create_test_server(vec![]);

    let response = server
        .post("/api/v1/rooms")
        .add_header(user_id(), user_header(Uuid::new_v4()))
        .json(&json!({ "name": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_watch_room_sync_flow() {
    let server = create_test_server(vec![]);
    let host = Uuid::new_v4();
    let guest = Uuid::new_v4();

    // Host opens a room
    let response = server
        .post("/api/v1/rooms")
        .add_header(user_id(), user_header(host))
        .json(&json!({ "name": "Movie night" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let room: Value = response.json();
    assert_eq!(room["name"], "Movie night");
    assert_eq!(room["host_id"], host.to_string());
    let room_id = room["id"].as_str().unwrap().to_string();
    let playback_path = format!("/api/v1/rooms/{}/playback", room_id);

    // Nothing synced yet
    let response = server
        .get(&playback_path)
        .add_header(user_id(), user_header(guest))
        .await;
    response.assert_status_ok();
    let state: Value = response.json();
    assert_eq!(state["current_time"], 0.0);
    assert_eq!(state["is_playing"], false);
    assert!(state["updated_at"].is_null());

    // Host pushes a position
    let response = server
        .put(&playback_path)
        .add_header(user_id(), user_header(host))
        .json(&json!({ "current_time": 754.25, "is_playing": true }))
        .await;
    response.assert_status_ok();

    // Guest cannot move playback
    let response = server
        .put(&playback_path)
        .add_header(user_id(), user_header(guest))
        .json(&json!({ "current_time": 0.0, "is_playing": false }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    // Guest sees the host's state
    let response = server
        .get(&playback_path)
        .add_header(user_id(), user_header(guest))
        .await;
    let state: Value = response.json();
    assert_eq!(state["room_id"], room_id);
    assert_eq!(state["current_time"], 754.25);
    assert_eq!(state["is_playing"], true);
    assert!(state["updated_at"].is_string());
}

#[tokio::test]
async fn test_sync_rejects_negative_position() {
    let server = create_test_server(vec![]);
    let host = Uuid::new_v4();

    let room: Value = server
        .post("/api/v1/rooms")
        .add_header(user_id(), user_header(host))
        .json(&json!({ "name": "Late show" }))
        .await
        .json();

    let response = server
        .put(&format!("/api/v1/rooms/{}/playback", room["id"].as_str().unwrap()))
        .add_header(user_id(), user_header(host))
        .json(&json!({ "current_time": -5.0, "is_playing": true }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_playback_of_unknown_room_is_not_found() {
    let server = create_test_server(vec![]);

    let response = server
        .get(&format!("/api/v1/rooms/{}/playback", Uuid::new_v4()))
        .add_header(user_id(), user_header(Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
