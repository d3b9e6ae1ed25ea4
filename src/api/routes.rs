//! API route configuration.

use crate::api::handlers::{
    closest_stars_handler, create_star_handler, delete_star_handler, distances_handler,
    get_star_handler, unique_stars_handler, update_star_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Star routes, nested under `/api` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `POST   /stars`            - Store a new star
/// - `GET    /stars/{id}`       - Fetch a stored star
/// - `PUT    /stars/{id}`       - Replace name and distance of a stored star
/// - `DELETE /stars/{id}`       - Delete a stored star
/// - `POST   /stars/closest`    - Closest `size` stars of the posted list
/// - `POST   /stars/distances`  - Star counts per distance of the posted list
/// - `POST   /stars/unique`     - Posted list de-duplicated by name
pub fn star_routes() -> Router<AppState> {
    Router::new()
        .route("/stars", post(create_star_handler))
        .route(
            "/stars/{id}",
            get(get_star_handler)
                .put(update_star_handler)
                .delete(delete_star_handler),
        )
        .route("/stars/closest", post(closest_stars_handler))
        .route("/stars/distances", post(distances_handler))
        .route("/stars/unique", post(unique_stars_handler))
}
