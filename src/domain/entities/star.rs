//! Star entity.

use std::hash::{Hash, Hasher};

/// A star with its distance from the sun.
///
/// `id` is assigned by the repository on first save and is `None` for stars
/// that only exist as analytics input.
///
/// # Identity
///
/// Two stars are equal when their names are equal. `id` and `distance` take
/// no part in equality or hashing, which is what [`crate::application::services::StarService::unique_stars`]
/// relies on to collapse same-named entries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Star {
    pub id: Option<i64>,
    pub name: String,
    /// Distance in light-years, never negative.
    pub distance: i64,
}

impl Star {
    /// Creates a transient star without an id.
    pub fn new(name: impl Into<String>, distance: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            distance,
        }
    }

    /// Returns a copy of this star carrying the given id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl PartialEq for Star {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Star {}

impl Hash for Star {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
