use std::sync::Arc;

use crate::application::services::StarService;
use crate::domain::repositories::StarRepository;

/// Shared state injected into every handler.
///
/// The repository behind the service is chosen at startup (PostgreSQL or
/// in-memory), so the service is held over a trait object.
#[derive(Clone)]
pub struct AppState {
    pub star_service: Arc<StarService<dyn StarRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn StarRepository>) -> Self {
        Self {
            star_service: Arc::new(StarService::new(repository)),
        }
    }
}
