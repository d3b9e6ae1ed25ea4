//! Repository trait for star persistence.

use crate::domain::entities::Star;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing stars keyed by a generated id.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStarRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStarRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_star.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StarRepository: Send + Sync {
    /// Finds a star by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Star))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Star>, AppError>;

    /// Inserts or updates a star.
    ///
    /// A star without an id is inserted and returned with its newly assigned id.
    /// A star with an id overwrites the stored record with that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the star has an id that is not stored.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, star: Star) -> Result<Star, AppError>;

    /// Deletes the star with the given id.
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> bool;
}
