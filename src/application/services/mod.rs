//! Business logic services for the application layer.

pub mod star_service;

pub use star_service::StarService;
