//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod stars;

pub use health::health_handler;
pub use stars::{
    closest_stars_handler, create_star_handler, delete_star_handler, distances_handler,
    get_star_handler, unique_stars_handler, update_star_handler,
};
