#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use std::sync::Arc;
use star_catalog::api::handlers::health_handler;
use star_catalog::api::routes::star_routes;
use star_catalog::domain::entities::Star;
use star_catalog::domain::repositories::StarRepository;
use star_catalog::infrastructure::persistence::InMemoryStarRepository;
use star_catalog::state::AppState;

pub fn create_test_state() -> (AppState, Arc<InMemoryStarRepository>) {
    let repo = Arc::new(InMemoryStarRepository::new());
    let state = AppState::new(repo.clone());
    (state, repo)
}

pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", star_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn create_test_star(repo: &InMemoryStarRepository, name: &str, distance: i64) -> i64 {
    repo.save(Star::new(name, distance))
        .await
        .unwrap()
        .id
        .unwrap()
}
