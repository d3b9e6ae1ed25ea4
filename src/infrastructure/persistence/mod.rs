//! Star repository implementations.
//!
//! - [`PgStarRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryStarRepository`] - Process-local storage

pub mod memory_star_repository;
pub mod pg_star_repository;

pub use memory_star_repository::InMemoryStarRepository;
pub use pg_star_repository::PgStarRepository;
