//! Star lifecycle and analytics service.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::domain::entities::Star;
use crate::domain::repositories::StarRepository;
use crate::error::AppError;
use serde_json::json;
use tracing::{error, info};

/// Minimum number of characters in the name of a newly added star.
pub const MIN_NAME_LENGTH: usize = 3;

/// Service for managing stored stars and analysing caller-supplied star lists.
///
/// The three analytics operations ([`Self::find_closest_stars`],
/// [`Self::number_of_stars_by_distances`], [`Self::unique_stars`]) are pure and
/// never touch the repository. The lifecycle operations go through `R`.
///
/// # Concurrency
///
/// [`Self::update_star`] reads and then writes the record in two separate
/// repository calls. Two concurrent updates of the same id can interleave and
/// the last write wins. If the star is deleted between the read and the write,
/// the write fails with [`AppError::NotFound`]; the star is never re-created
/// under another id.
pub struct StarService<R: StarRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: StarRepository + ?Sized> StarService<R> {
    /// Creates a new star service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the `size` stars closest to the sun, nearest first.
    ///
    /// Stars at equal distance keep their relative input order. If `size`
    /// exceeds the number of stars, all of them are returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `stars` is empty.
    pub fn find_closest_stars(&self, stars: &[Star], size: usize) -> Result<Vec<Star>, AppError> {
        ensure_not_empty(stars, "Star list cannot be null or empty")?;
        info!(
            "Finding the closest {} stars from a list of {} stars",
            size,
            stars.len()
        );

        let mut sorted = stars.to_vec();
        sorted.sort_by_key(|star| star.distance);
        sorted.truncate(size);

        Ok(sorted)
    }

    /// Counts stars per distance.
    ///
    /// The map iterates in ascending distance order and only contains
    /// distances present in the input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `stars` is empty.
    pub fn number_of_stars_by_distances(
        &self,
        stars: &[Star],
    ) -> Result<BTreeMap<i64, usize>, AppError> {
        ensure_not_empty(stars, "Star list cannot be null or empty")?;
        info!("Calculating the number of stars by their distances");

        let mut counts = BTreeMap::new();
        for star in stars {
            *counts.entry(star.distance).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Removes stars whose name was already seen, keeping the first occurrence.
    ///
    /// Uniqueness follows [`Star`] equality, so duplicates are dropped even when
    /// their ids or distances differ.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `stars` is empty.
    pub fn unique_stars(&self, stars: &[Star]) -> Result<Vec<Star>, AppError> {
        ensure_not_empty(stars, "Star collection cannot be null or empty")?;
        info!(
            "Getting unique stars from a collection of {} stars",
            stars.len()
        );

        let mut seen = HashSet::with_capacity(stars.len());
        let unique = stars
            .iter()
            .filter(|star| seen.insert(*star))
            .cloned()
            .collect();

        Ok(unique)
    }

    /// Retrieves a stored star by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no star has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_star_by_id(&self, id: i64) -> Result<Star, AppError> {
        info!("Fetching star with id: {}", id);

        self.repository.find_by_id(id).await?.ok_or_else(|| {
            error!("Star not found with id: {}", id);
            AppError::not_found(format!("Star not found with id: {}", id), json!({"id": id}))
        })
    }

    /// Stores a new star and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is shorter than
    /// [`MIN_NAME_LENGTH`] characters.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn add_star(&self, star: Star) -> Result<Star, AppError> {
        let name_length = star.name.chars().count();
        if name_length < MIN_NAME_LENGTH {
            return Err(AppError::bad_request(
                "Star name must be at least 3 characters long",
                json!({"name": star.name, "min": MIN_NAME_LENGTH}),
            ));
        }

        info!("Adding a new star with name: {}", star.name);
        self.repository.save(star).await
    }

    /// Overwrites the name and distance of a stored star.
    ///
    /// The stored id is kept; any id on `star` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no star has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_star(&self, id: i64, star: Star) -> Result<Star, AppError> {
        let mut existing = self.get_star_by_id(id).await?;
        existing.name = star.name;
        existing.distance = star.distance;

        info!("Updating star with id: {}", id);
        self.repository.save(existing).await
    }

    /// Deletes a stored star. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_star(&self, id: i64) -> Result<(), AppError> {
        info!("Deleting star with id: {}", id);
        self.repository.delete_by_id(id).await
    }

    /// Reports whether the underlying store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}

fn ensure_not_empty(stars: &[Star], message: &str) -> Result<(), AppError> {
    if stars.is_empty() {
        return Err(AppError::bad_request(message, json!({"size": 0})));
    }
    Ok(())
}
