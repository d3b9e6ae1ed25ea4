//! DTOs for star endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Star;

/// Request body for `POST /api/stars` and `PUT /api/stars/{id}`.
///
/// Any `id` in the body is ignored: ids are assigned by the store and
/// updates address the star through the path.
#[derive(Debug, Deserialize, Validate)]
pub struct StarRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(range(min = 0, message = "Distance must be non-negative"))]
    pub distance: i64,
}

impl From<StarRequest> for Star {
    fn from(req: StarRequest) -> Self {
        Star::new(req.name, req.distance)
    }
}

/// A star as it appears in API bodies, both as analytics input and as output.
///
/// `id` is omitted for stars that were never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub distance: i64,
}

impl From<Star> for StarItem {
    fn from(star: Star) -> Self {
        Self {
            id: star.id,
            name: star.name,
            distance: star.distance,
        }
    }
}

impl From<StarItem> for Star {
    fn from(item: StarItem) -> Self {
        Star {
            id: item.id,
            name: item.name,
            distance: item.distance,
        }
    }
}

/// Query parameters for `POST /api/stars/closest`.
#[derive(Debug, Deserialize)]
pub struct ClosestQuery {
    pub size: usize,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
