mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use star_catalog::domain::repositories::StarRepository;

fn star_names(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect()
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_star_success() {
    let (state, repo) = common::create_test_state();
    let id = common::create_test_star(&repo, "Sirius", 9).await;
    let server = common::make_server(state);

    let response = server.get(&format!("/api/stars/{id}")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Sirius");
    assert_eq!(body["distance"], 9);
}

#[tokio::test]
async fn test_get_star_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/api/stars/999").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "Star not found with id: 999");
}

#[tokio::test]
async fn test_get_star_invalid_id() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/api/stars/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_star_success() {
    let (state, repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars")
        .json(&json!({ "name": "Proxima Centauri", "distance": 4 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Proxima Centauri");
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_create_star_ignores_body_id() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars")
        .json(&json!({ "id": 77, "name": "Proxima Centauri", "distance": 4 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"], 1);
}

#[tokio::test]
async fn test_create_star_short_name() {
    let (state, repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars")
        .json(&json!({ "name": "Xi", "distance": 4 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Star name must be at least 3 characters long"
    );
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_star_blank_name() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars")
        .json(&json!({ "name": "    ", "distance": 4 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_star_negative_distance() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars")
        .json(&json!({ "name": "Sirius", "distance": -9 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_star_missing_distance() {
    let (state, repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars")
        .json(&json!({ "name": "Sirius" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Invalid JSON body");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_star_malformed_json() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars")
        .text("{\"name\": ")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_star_success() {
    let (state, repo) = common::create_test_state();
    let id = common::create_test_star(&repo, "Old Name", 100).await;
    let server = common::make_server(state);

    let response = server
        .put(&format!("/api/stars/{id}"))
        .json(&json!({ "name": "New Name", "distance": 42 }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "New Name");
    assert_eq!(body["distance"], 42);

    let stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "New Name");
    assert_eq!(stored.distance, 42);
}

#[tokio::test]
async fn test_update_star_not_found() {
    let (state, repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .put("/api/stars/999")
        .json(&json!({ "name": "Ghost", "distance": 1 }))
        .await;

    response.assert_status_not_found();
    assert!(repo.is_empty().await);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_star_success() {
    let (state, repo) = common::create_test_state();
    let id = common::create_test_star(&repo, "Betelgeuse", 548).await;
    let server = common::make_server(state);

    let response = server.delete(&format!("/api/stars/{id}")).await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_star_missing_is_no_content() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.delete("/api/stars/999").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

// ─── ANALYTICS ───────────────────────────────────────────────────────────────

fn sample_list() -> Value {
    json!([
        { "name": "Sirius", "distance": 9 },
        { "name": "Alpha Centauri", "distance": 4 },
        { "name": "Wolf 359", "distance": 8 },
        { "name": "Barnard's Star", "distance": 6 }
    ])
}

#[tokio::test]
async fn test_closest_stars() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars/closest")
        .add_query_param("size", 2)
        .json(&sample_list())
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(star_names(&body), vec!["Alpha Centauri", "Barnard's Star"]);
    assert!(body[0].get("id").is_none());
}

#[tokio::test]
async fn test_closest_stars_empty_list() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars/closest")
        .add_query_param("size", 2)
        .json(&json!([]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Star list cannot be null or empty"
    );
}

#[tokio::test]
async fn test_closest_stars_missing_size() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.post("/api/stars/closest").json(&sample_list()).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Invalid query parameters");
}

#[tokio::test]
async fn test_closest_stars_negative_size() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars/closest")
        .add_query_param("size", -1)
        .json(&sample_list())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_distances() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars/distances")
        .json(&json!([
            { "name": "Alpha Centauri", "distance": 4 },
            { "name": "Barnard's Star", "distance": 6 },
            { "name": "Wolf 359", "distance": 8 },
            { "name": "Sirius", "distance": 8 }
        ]))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "4": 1, "6": 1, "8": 2 }));
}

#[tokio::test]
async fn test_distances_empty_list() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.post("/api/stars/distances").json(&json!([])).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unique_stars() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars/unique")
        .json(&json!([
            { "name": "Alpha Centauri", "distance": 4 },
            { "name": "Barnard's Star", "distance": 6 },
            { "name": "Wolf 359", "distance": 8 },
            { "name": "Alpha Centauri", "distance": 9 }
        ]))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(
        star_names(&body),
        vec!["Alpha Centauri", "Barnard's Star", "Wolf 359"]
    );
    assert_eq!(body[0]["distance"], 4);
}

#[tokio::test]
async fn test_unique_stars_empty_list() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.post("/api/stars/unique").json(&json!([])).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Star collection cannot be null or empty"
    );
}

#[tokio::test]
async fn test_unique_stars_non_integer_distance() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/stars/unique")
        .json(&json!([{ "name": "Sirius", "distance": "far" }]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Invalid JSON body");
}

#[tokio::test]
async fn test_analytics_do_not_touch_store() {
    let (state, repo) = common::create_test_state();
    let server = common::make_server(state);

    server
        .post("/api/stars/unique")
        .json(&sample_list())
        .await
        .assert_status_ok();

    assert!(repo.is_empty().await);
}
