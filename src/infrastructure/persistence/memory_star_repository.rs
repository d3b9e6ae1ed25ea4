//! Process-local star repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Star;
use crate::domain::repositories::StarRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Star>,
    last_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// A repository that keeps stars in memory.
///
/// Used when no database is configured and by the HTTP integration tests.
/// Ids start at 1 and are never reused, matching a database sequence.
/// Contents are lost when the process exits.
pub struct InMemoryStarRepository {
    inner: RwLock<Inner>,
}

impl InMemoryStarRepository {
    pub fn new() -> Self {
        debug!("Using in-memory star repository");
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Number of stored stars.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryStarRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StarRepository for InMemoryStarRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Star>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut star: Star) -> Result<Star, AppError> {
        let mut inner = self.inner.write().await;

        let id = match star.id {
            Some(id) if inner.rows.contains_key(&id) => id,
            Some(id) => {
                return Err(AppError::not_found(
                    format!("Star not found with id: {}", id),
                    json!({"id": id}),
                ));
            }
            None => inner.next_id(),
        };
        star.id = Some(id);
        inner.rows.insert(id, star.clone());

        Ok(star)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
