//! Handlers for star endpoints (CRUD and list analytics).

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::star::{ClosestQuery, StarItem, StarRequest};
use crate::domain::entities::Star;
use crate::error::AppError;
use crate::state::AppState;

// Extractor rejections are taken as `Result` so they reach the client as
// `AppError` bodies instead of axum's plain-text replies.

fn into_stars(items: Vec<StarItem>) -> Vec<Star> {
    items.into_iter().map(Star::from).collect()
}

fn into_items(stars: Vec<Star>) -> Vec<StarItem> {
    stars.into_iter().map(StarItem::from).collect()
}

/// Retrieves a stored star.
///
/// # Endpoint
///
/// `GET /api/stars/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not an integer.
/// Returns 404 if no star has this id.
pub async fn get_star_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<StarItem>, AppError> {
    let Path(id) = id?;
    let star = state.star_service.get_star_by_id(id).await?;
    Ok(Json(star.into()))
}

/// Stores a new star.
///
/// # Endpoint
///
/// `POST /api/stars`
///
/// # Request Body
///
/// ```json
/// { "name": "Sirius", "distance": 9 }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed or missing a field, the name is blank
/// or shorter than 3 characters, or the distance is negative.
pub async fn create_star_handler(
    State(state): State<AppState>,
    payload: Result<Json<StarRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StarItem>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let star = state.star_service.add_star(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(star.into())))
}

/// Replaces the name and distance of a stored star.
///
/// # Endpoint
///
/// `PUT /api/stars/{id}`
///
/// # Errors
///
/// Returns 400 if the body fails validation.
/// Returns 404 if no star has this id.
pub async fn update_star_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<StarRequest>, JsonRejection>,
) -> Result<Json<StarItem>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let star = state.star_service.update_star(id, payload.into()).await?;

    Ok(Json(star.into()))
}

/// Deletes a stored star.
///
/// # Endpoint
///
/// `DELETE /api/stars/{id}`
///
/// Always answers 204, whether or not the star existed.
pub async fn delete_star_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.star_service.delete_star(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the `size` closest stars from the supplied list.
///
/// # Endpoint
///
/// `POST /api/stars/closest?size=N`
///
/// # Errors
///
/// Returns 400 if the list is empty, the body is not a star list, or
/// `size` is missing or negative.
pub async fn closest_stars_handler(
    State(state): State<AppState>,
    query: Result<Query<ClosestQuery>, QueryRejection>,
    payload: Result<Json<Vec<StarItem>>, JsonRejection>,
) -> Result<Json<Vec<StarItem>>, AppError> {
    let Query(query) = query?;
    let Json(payload) = payload?;
    let stars = into_stars(payload);
    let closest = state.star_service.find_closest_stars(&stars, query.size)?;
    Ok(Json(into_items(closest)))
}

/// Counts the supplied stars per distance.
///
/// # Endpoint
///
/// `POST /api/stars/distances`
///
/// # Response
///
/// JSON object keyed by distance in ascending order:
///
/// ```json
/// { "4": 1, "6": 1, "8": 2 }
/// ```
///
/// # Errors
///
/// Returns 400 if the list is empty or the body is not a star list.
pub async fn distances_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<StarItem>>, JsonRejection>,
) -> Result<Json<BTreeMap<i64, usize>>, AppError> {
    let Json(payload) = payload?;
    let stars = into_stars(payload);
    let counts = state.star_service.number_of_stars_by_distances(&stars)?;
    Ok(Json(counts))
}

/// De-duplicates the supplied stars by name.
///
/// # Endpoint
///
/// `POST /api/stars/unique`
///
/// # Errors
///
/// Returns 400 if the list is empty or the body is not a star list.
pub async fn unique_stars_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<StarItem>>, JsonRejection>,
) -> Result<Json<Vec<StarItem>>, AppError> {
    let Json(payload) = payload?;
    let stars = into_stars(payload);
    let unique = state.star_service.unique_stars(&stars)?;
    Ok(Json(into_items(unique)))
}
